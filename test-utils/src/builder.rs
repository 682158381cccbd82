use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Collects the tables a test needs and creates them in a fresh in-memory database.
///
/// Tables are created in the order they are added, so referenced tables go first.
///
/// ```rust,ignore
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Business)
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the `CREATE TABLE` statement derived from `entity`.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        self.tables
            .push(Schema::new(DbBackend::Sqlite).create_table_from_entity(entity));
        self
    }

    /// Queues every table of the booking schema: users, businesses, services, bookings,
    /// payments and business clients.
    pub fn with_booking_tables(self) -> Self {
        self.with_table(User)
            .with_table(Business)
            .with_table(Service)
            .with_table(Booking)
            .with_table(Payment)
            .with_table(BusinessClient)
    }

    /// Opens the database and creates the queued tables.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();
        context.with_tables(self.tables).await?;

        Ok(context)
    }
}

//! Repository for the link between businesses and the clients who booked there.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    error::AppError,
    model::{business_client::BusinessClient, user::User},
};

pub struct BusinessClientRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BusinessClientRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Links a client to a business unless the link already exists.
    ///
    /// # Returns
    /// - `Ok(true)` - A new link was created
    /// - `Ok(false)` - The client was already linked
    /// - `Err(AppError)` - Database error
    pub async fn ensure(&self, business_id: i32, client_id: i32) -> Result<bool, AppError> {
        let existing = entity::prelude::BusinessClient::find_by_id((business_id, client_id))
            .one(self.db)
            .await?;
        if existing.is_some() {
            return Ok(false);
        }

        entity::business_client::ActiveModel {
            business_id: ActiveValue::Set(business_id),
            client_id: ActiveValue::Set(client_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(true)
    }

    /// Gets the clients of a business with the date they first booked there,
    /// oldest first.
    pub async fn get_by_business(&self, business_id: i32) -> Result<Vec<BusinessClient>, AppError> {
        let rows = entity::prelude::BusinessClient::find()
            .filter(entity::business_client::Column::BusinessId.eq(business_id))
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::business_client::Column::CreatedAt)
            .all(self.db)
            .await?;

        rows.into_iter()
            .filter_map(|(link, user)| user.map(|user| (link, user)))
            .map(|(link, user)| {
                Ok(BusinessClient {
                    client: User::from_entity(user)?,
                    client_since: link.created_at,
                })
            })
            .collect()
    }
}

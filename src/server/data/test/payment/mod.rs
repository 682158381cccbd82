use crate::{
    model::payment::PaymentStatus,
    server::{
        data::payment::PaymentRepository,
        error::AppError,
        model::payment::{FeeBreakdown, UpsertPaymentParam},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod find_by_processor_id;
mod get_by_business;
mod update_status;
mod upsert_pending;

async fn booked_shop(
    db: &sea_orm::DatabaseConnection,
) -> Result<(factory::helpers::BusinessWithDependencies, entity::booking::Model), AppError> {
    let shop = factory::helpers::create_business_with_dependencies(db).await?;
    let client = factory::create_user(db).await?;
    let booking = factory::create_booking(db, &shop.service, shop.worker.id, client.id).await?;

    Ok((shop, booking))
}

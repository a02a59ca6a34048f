use super::repository::{self, CreateInvoicePayload, Invoice, UpdateInvoicePayload};
use crate::utils::database::DatabaseConnection;
use async_trait::async_trait;

/// Persistence seam for the write handlers. Services depend on this
/// trait so they can be exercised without a live database.
#[async_trait]
pub trait InvoiceStore: Send + Sync {
    async fn create(&self, payload: CreateInvoicePayload) -> Result<Invoice, repository::Error>;

    async fn update_by_id(
        &self,
        id: String,
        payload: UpdateInvoicePayload,
    ) -> Result<(), repository::Error>;

    async fn delete_by_id(&self, id: String) -> Result<(), repository::Error>;
}

pub struct PgInvoiceStore {
    pub db_conn: DatabaseConnection,
}

#[async_trait]
impl InvoiceStore for PgInvoiceStore {
    async fn create(&self, payload: CreateInvoicePayload) -> Result<Invoice, repository::Error> {
        repository::create(&self.db_conn.pool, payload).await
    }

    async fn update_by_id(
        &self,
        id: String,
        payload: UpdateInvoicePayload,
    ) -> Result<(), repository::Error> {
        repository::update_by_id(&self.db_conn.pool, id, payload).await
    }

    async fn delete_by_id(&self, id: String) -> Result<(), repository::Error> {
        repository::delete_by_id(&self.db_conn.pool, id).await
    }
}

use super::repository::{self, CreateInvoicePayload, Invoice, UpdateInvoicePayload};
use super::store::InvoiceStore;
use crate::utils::views::ViewCache;
use async_trait::async_trait;
use std::sync::Mutex;

/// In-memory [`InvoiceStore`] double that records every statement it
/// receives, or fails them all when constructed with [`StubStore::failing`].
#[derive(Default)]
pub struct StubStore {
    fail: bool,
    pub created: Mutex<Vec<CreateInvoicePayload>>,
    pub updated: Mutex<Vec<(String, UpdateInvoicePayload)>>,
    pub deleted: Mutex<Vec<String>>,
}

impl StubStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn statement_count(&self) -> usize {
        self.created.lock().unwrap().len()
            + self.updated.lock().unwrap().len()
            + self.deleted.lock().unwrap().len()
    }
}

#[async_trait]
impl InvoiceStore for StubStore {
    async fn create(&self, payload: CreateInvoicePayload) -> Result<Invoice, repository::Error> {
        if self.fail {
            return Err(repository::Error::UnexpectedError);
        }

        let invoice = Invoice {
            id: "inv_stub".to_string(),
            customer_id: payload.customer_id.clone(),
            amount: payload.amount,
            status: payload.status,
            date: payload.date,
        };
        self.created.lock().unwrap().push(payload);
        Ok(invoice)
    }

    async fn update_by_id(
        &self,
        id: String,
        payload: UpdateInvoicePayload,
    ) -> Result<(), repository::Error> {
        if self.fail {
            return Err(repository::Error::UnexpectedError);
        }

        self.updated.lock().unwrap().push((id, payload));
        Ok(())
    }

    async fn delete_by_id(&self, id: String) -> Result<(), repository::Error> {
        if self.fail {
            return Err(repository::Error::UnexpectedError);
        }

        self.deleted.lock().unwrap().push(id);
        Ok(())
    }
}

/// [`ViewCache`] double that records which paths were revalidated.
#[derive(Default)]
pub struct RecordingViewCache {
    pub revalidated: Mutex<Vec<String>>,
}

impl RecordingViewCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn revalidated_paths(&self) -> Vec<String> {
        self.revalidated.lock().unwrap().clone()
    }
}

#[async_trait]
impl ViewCache for RecordingViewCache {
    async fn get(&self, _path: &str) -> Option<String> {
        None
    }

    async fn put(&self, _path: &str, _body: String) {}

    async fn revalidate(&self, path: &str) {
        self.revalidated.lock().unwrap().push(path.to_string());
    }
}

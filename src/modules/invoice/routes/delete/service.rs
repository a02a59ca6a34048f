use super::types::{request, response};
use crate::modules::invoice::{store::InvoiceStore, INVOICE_LIST_PATH};
use crate::utils::views::ViewCache;

pub async fn service<S: InvoiceStore, V: ViewCache>(
    store: &S,
    views: &V,
    payload: request::Payload,
) -> response::Response {
    store
        .delete_by_id(payload.id)
        .await
        .map_err(|_| response::Error::InvoiceDeletionFailed)?;

    views.revalidate(INVOICE_LIST_PATH).await;

    Ok(response::Success::InvoiceDeleted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::invoice::testing::{RecordingViewCache, StubStore};

    fn payload(id: &str) -> request::Payload {
        request::Payload { id: id.to_string() }
    }

    #[tokio::test]
    async fn deletes_the_row_and_invalidates_the_list() {
        let store = StubStore::new();
        let views = RecordingViewCache::new();

        let result = service(&store, &views, payload("inv1")).await;

        assert!(matches!(result, Ok(response::Success::InvoiceDeleted)));
        assert_eq!(*store.deleted.lock().unwrap(), vec!["inv1".to_string()]);
        assert_eq!(views.revalidated_paths(), vec![INVOICE_LIST_PATH.to_string()]);
    }

    #[tokio::test]
    async fn deleting_an_unknown_id_still_reports_success() {
        // The statement affects zero rows; the store does not treat
        // that as a failure, so neither does the handler.
        let store = StubStore::new();
        let views = RecordingViewCache::new();

        let result = service(&store, &views, payload("no_such_invoice")).await;

        assert!(matches!(result, Ok(response::Success::InvoiceDeleted)));
    }

    #[tokio::test]
    async fn persistence_failure_skips_invalidation() {
        let store = StubStore::failing();
        let views = RecordingViewCache::new();

        let result = service(&store, &views, payload("inv1")).await;

        assert!(matches!(
            result,
            Err(response::Error::InvoiceDeletionFailed)
        ));
        assert!(views.revalidated_paths().is_empty());
    }
}

use super::types::{request, response};
use crate::modules::invoice::{
    repository,
    schema::{self, FormFieldEcho, Validation},
    store::InvoiceStore,
    INVOICE_LIST_PATH,
};
use crate::utils::views::ViewCache;
use chrono::Utc;

pub async fn service<S: InvoiceStore, V: ViewCache>(
    store: &S,
    views: &V,
    payload: request::Payload,
) -> response::Response {
    let fields = match schema::validate(&payload) {
        Validation::Valid(fields) => fields,
        Validation::Invalid(errors) => {
            tracing::warn!("Invoice creation form failed validation");
            return Err(response::Error::InvalidFormData {
                errors,
                form_fields: FormFieldEcho::for_create(&payload),
            });
        }
    };

    store
        .create(repository::CreateInvoicePayload {
            customer_id: fields.customer_id.clone(),
            amount: fields.amount_in_cents(),
            status: fields.status,
            date: Utc::now().date_naive(),
        })
        .await
        .map_err(|_| response::Error::InvoiceCreationFailed)?;

    views.revalidate(INVOICE_LIST_PATH).await;

    Ok(response::Success::InvoiceCreated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::invoice::schema::{InvoiceStatus, RawInvoiceForm};
    use crate::modules::invoice::testing::{RecordingViewCache, StubStore};

    fn valid_form() -> RawInvoiceForm {
        RawInvoiceForm {
            customer_id: Some("c1".to_string()),
            amount: Some("50".to_string()),
            status: Some("pending".to_string()),
        }
    }

    #[tokio::test]
    async fn inserts_minor_units_and_todays_date_then_invalidates_the_list() {
        let store = StubStore::new();
        let views = RecordingViewCache::new();

        let result = service(&store, &views, valid_form()).await;

        assert!(matches!(result, Ok(response::Success::InvoiceCreated)));

        let created = store.created.lock().unwrap();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].customer_id, "c1");
        assert_eq!(created[0].amount, 5000);
        assert_eq!(created[0].status, InvoiceStatus::Pending);
        assert_eq!(created[0].date, Utc::now().date_naive());

        assert_eq!(views.revalidated_paths(), vec![INVOICE_LIST_PATH.to_string()]);
    }

    #[tokio::test]
    async fn rejected_form_issues_no_statement() {
        let store = StubStore::new();
        let views = RecordingViewCache::new();

        let form = RawInvoiceForm {
            amount: Some("-5".to_string()),
            ..valid_form()
        };
        let result = service(&store, &views, form).await;

        let Err(response::Error::InvalidFormData {
            errors,
            form_fields,
        }) = result
        else {
            panic!("expected a validation error");
        };

        assert_eq!(errors.amount, vec![schema::AMOUNT_ERROR.to_string()]);
        assert_eq!(form_fields.customer_id.as_deref(), Some("c1"));
        assert_eq!(form_fields.amount, None);
        assert_eq!(form_fields.status, Some(InvoiceStatus::Pending));

        assert_eq!(store.statement_count(), 0);
        assert!(views.revalidated_paths().is_empty());
    }

    #[tokio::test]
    async fn persistence_failure_skips_invalidation_and_redirect() {
        let store = StubStore::failing();
        let views = RecordingViewCache::new();

        let result = service(&store, &views, valid_form()).await;

        assert!(matches!(
            result,
            Err(response::Error::InvoiceCreationFailed)
        ));
        assert!(views.revalidated_paths().is_empty());
    }
}

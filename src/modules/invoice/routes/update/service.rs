use super::types::{request, response};
use crate::modules::invoice::{
    repository,
    schema::{self, FormFieldEcho, Validation},
    store::InvoiceStore,
    INVOICE_LIST_PATH,
};
use crate::utils::views::ViewCache;

pub async fn service<S: InvoiceStore, V: ViewCache>(
    store: &S,
    views: &V,
    payload: request::Payload,
) -> response::Response {
    let fields = match schema::validate(&payload.body) {
        Validation::Valid(fields) => fields,
        Validation::Invalid(errors) => {
            tracing::warn!("Invoice update form failed validation for id {}", payload.id);
            return Err(response::Error::InvalidFields {
                errors,
                form_fields: FormFieldEcho::for_update(&payload.body),
            });
        }
    };

    store
        .update_by_id(
            payload.id,
            repository::UpdateInvoicePayload {
                customer_id: fields.customer_id.clone(),
                amount: fields.amount_in_cents(),
                status: fields.status,
            },
        )
        .await
        .map_err(|_| response::Error::InvoiceUpdateFailed)?;

    views.revalidate(INVOICE_LIST_PATH).await;

    Ok(response::Success::InvoiceUpdated)
}

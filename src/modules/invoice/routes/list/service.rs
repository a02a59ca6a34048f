use super::types::{request, response};
use crate::modules::invoice::{repository, INVOICE_LIST_PATH};
use crate::types::Context;
use crate::utils::views::ViewCache;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let cacheable = payload.is_default_view();

    if cacheable {
        if let Some(body) = ctx.views.get(INVOICE_LIST_PATH).await {
            return Ok(response::Success::CachedInvoicePage(body));
        }
    }

    let invoices = repository::find_many(&ctx.db_conn.pool, payload.pagination, payload.filters)
        .await
        .map_err(|_| response::Error::FailedToFetchInvoices)?;

    if cacheable {
        match serde_json::to_string(&invoices) {
            Ok(body) => ctx.views.put(INVOICE_LIST_PATH, body).await,
            Err(err) => tracing::error!("Failed to serialize invoice list for caching: {}", err),
        }
    }

    Ok(response::Success::PaginatedInvoices(invoices))
}

use super::service::service;
use super::types::request;
use crate::modules::invoice::store::PgInvoiceStore;
use crate::types::Context;
use axum::{extract::State, response::IntoResponse, Form};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    Form(payload): Form<request::Payload>,
) -> impl IntoResponse {
    let store = PgInvoiceStore {
        db_conn: ctx.db_conn.clone(),
    };

    service(&store, &ctx.views, payload).await
}

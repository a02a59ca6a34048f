use super::service::service;
use super::types::request;
use crate::modules::invoice::store::PgInvoiceStore;
use crate::types::Context;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Form,
};
use std::sync::Arc;

pub async fn handler(
    Path(id): Path<String>,
    State(ctx): State<Arc<Context>>,
    Form(body): Form<request::Body>,
) -> impl IntoResponse {
    let store = PgInvoiceStore {
        db_conn: ctx.db_conn.clone(),
    };

    service(&store, &ctx.views, request::Payload { id, body }).await
}

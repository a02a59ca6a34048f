pub mod request {
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Payload {
        pub id: String,
    }
}

pub mod response {
    use crate::modules::invoice::repository::Invoice;
    use axum::{http::StatusCode, response::IntoResponse, Json};
    use serde_json::json;

    pub enum Success {
        Invoice(Invoice),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Invoice(invoice) => (StatusCode::OK, Json(json!(invoice))).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchInvoice,
        InvoiceNotFound,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvoiceNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Invoice not found" })),
                )
                    .into_response(),
                Self::FailedToFetchInvoice => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch invoice" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

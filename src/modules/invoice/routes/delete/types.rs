pub mod request {
    pub struct Payload {
        pub id: String,
    }
}

pub mod response {
    use crate::modules::invoice::schema::InvoiceFormState;
    use axum::{http::StatusCode, response::IntoResponse, Json};

    pub enum Success {
        InvoiceDeleted,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvoiceDeleted => (
                    StatusCode::OK,
                    Json(InvoiceFormState::message("Deleted Invoice.")),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        InvoiceDeletionFailed,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvoiceDeletionFailed => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(InvoiceFormState::message(
                        "Database Error: Failed to Delete Invoice.",
                    )),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

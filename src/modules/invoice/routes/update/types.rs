pub mod request {
    use crate::modules::invoice::schema;

    pub type Body = schema::RawInvoiceForm;

    pub struct Payload {
        pub id: String,
        pub body: Body,
    }
}

pub mod response {
    use crate::modules::invoice::schema::{FieldErrors, FormFieldEcho, InvoiceFormState};
    use crate::modules::invoice::INVOICE_LIST_PATH;
    use axum::{
        http::StatusCode,
        response::{IntoResponse, Redirect},
        Json,
    };

    pub enum Success {
        InvoiceUpdated,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvoiceUpdated => Redirect::to(INVOICE_LIST_PATH).into_response(),
            }
        }
    }

    pub enum Error {
        InvalidFields {
            errors: FieldErrors,
            form_fields: FormFieldEcho,
        },
        InvoiceUpdateFailed,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidFields {
                    errors,
                    form_fields,
                } => (
                    StatusCode::BAD_REQUEST,
                    Json(InvoiceFormState {
                        message: Some("Invalid fields".to_string()),
                        errors: Some(errors),
                        form_fields: Some(form_fields),
                    }),
                )
                    .into_response(),
                Self::InvoiceUpdateFailed => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(InvoiceFormState::message(
                        "Database Error: Failed to Update Invoice.",
                    )),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

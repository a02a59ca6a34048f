pub mod request {
    use crate::modules::invoice::schema;

    pub type Payload = schema::RawInvoiceForm;
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
        InvoiceCreated,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                // The redirect supersedes any body on the success path.
                Self::InvoiceCreated => Redirect::to(INVOICE_LIST_PATH).into_response(),
            }
        }
    }

    pub enum Error {
        InvalidFormData {
            errors: FieldErrors,
            form_fields: FormFieldEcho,
        },
        InvoiceCreationFailed,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidFormData {
                    errors,
                    form_fields,
                } => (
                    StatusCode::BAD_REQUEST,
                    Json(InvoiceFormState {
                        message: Some("Invalid Form Data".to_string()),
                        errors: Some(errors),
                        form_fields: Some(form_fields),
                    }),
                )
                    .into_response(),
                Self::InvoiceCreationFailed => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(InvoiceFormState::message(
                        "Database Error: Failed to Create Invoice.",
                    )),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

#[cfg(test)]
mod tests {
    use super::response;
    use crate::modules::invoice::schema::{self, FieldErrors, FormFieldEcho, InvoiceStatus};
    use axum::{body, http::StatusCode, response::IntoResponse};

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn success_redirects_to_the_invoice_list() {
        let response = response::Success::InvoiceCreated.into_response();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get("location").unwrap(),
            "/dashboard/invoices"
        );
    }

    #[tokio::test]
    async fn validation_failure_carries_errors_and_echo() {
        let response = response::Error::InvalidFormData {
            errors: FieldErrors {
                amount: vec![schema::AMOUNT_ERROR.to_string()],
                ..FieldErrors::default()
            },
            form_fields: FormFieldEcho {
                customer_id: Some("c1".to_string()),
                amount: None,
                status: Some(InvoiceStatus::Pending),
            },
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({
                "message": "Invalid Form Data",
                "errors": { "amount": ["Amount must be greater than 0."] },
                "formFields": { "customerId": "c1", "status": "pending" }
            })
        );
    }

    #[tokio::test]
    async fn persistence_failure_reports_the_fixed_message() {
        let response = response::Error::InvoiceCreationFailed.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "message": "Database Error: Failed to Create Invoice." })
        );
    }
}

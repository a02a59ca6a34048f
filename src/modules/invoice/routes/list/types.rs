pub mod request {
    use crate::modules::invoice::repository;
    use crate::utils::pagination::Pagination;

    pub type Filters = repository::Filters;

    pub struct Payload {
        pub pagination: Pagination,
        pub filters: Filters,
    }

    impl Payload {
        /// Only the dashboard's default render is served from the view
        /// cache; filtered, paged-through, or resized requests always
        /// hit the database. The cache is keyed by path alone, so a
        /// request must match every default to share the entry.
        pub fn is_default_view(&self) -> bool {
            let default = Pagination::default();

            self.pagination.page == default.page
                && self.pagination.per_page == default.per_page
                && self.filters.customer_id.is_none()
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn payload(page: u32, per_page: u32, customer_id: Option<&str>) -> Payload {
            Payload {
                pagination: Pagination { page, per_page },
                filters: Filters {
                    customer_id: customer_id.map(String::from),
                },
            }
        }

        #[test]
        fn only_the_default_render_is_cacheable() {
            assert!(payload(1, 10, None).is_default_view());

            assert!(!payload(2, 10, None).is_default_view());
            assert!(!payload(1, 10, Some("c1")).is_default_view());
        }

        #[test]
        fn a_non_default_page_size_does_not_share_the_default_cache_entry() {
            assert!(!payload(1, 100, None).is_default_view());
        }
    }
}

pub mod response {
    use crate::modules::invoice::repository::Invoice;
    use crate::utils::pagination::Paginated;
    use axum::{
        http::{header, StatusCode},
        response::IntoResponse,
        Json,
    };
    use serde_json::json;

    pub enum Success {
        PaginatedInvoices(Paginated<Invoice>),
        CachedInvoicePage(String),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PaginatedInvoices(invoices) => {
                    (StatusCode::OK, Json(json!(invoices))).into_response()
                }
                Self::CachedInvoicePage(body) => (
                    StatusCode::OK,
                    [(header::CONTENT_TYPE, "application/json")],
                    body,
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchInvoices,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchInvoices => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch invoices" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

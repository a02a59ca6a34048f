pub mod repository;
pub mod schema;
pub mod store;

#[cfg(test)]
pub mod testing;

mod routes;
pub use routes::get_router;

/// Path of the invoice list view, used both as the cache key for its
/// rendered body and as the redirect target after a successful write.
pub const INVOICE_LIST_PATH: &str = "/dashboard/invoices";

pub mod invoice;

mod router;
pub use router::get_router;

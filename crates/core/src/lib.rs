//! Domain types shared across the Quill backend.
//!
//! Pure data and pure functions only: the response envelope model, the
//! pagination calculator, the wire-level error taxonomy, and the domain
//! error enum. No I/O and no web-framework dependencies live here.

pub mod envelope;
pub mod error;
pub mod pagination;

pub use envelope::{Envelope, ErrorBody, Meta};
pub use error::CoreError;
pub use pagination::Pagination;

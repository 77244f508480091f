//! Input records, record builders, and the crate error type.
//!
//! The three records mirror what payment-origination systems hand over:
//! every field is optional at the type level, and presence of the mandatory
//! ones is checked when the document builder is constructed.

mod builder;
mod error;
mod types;

pub use builder::*;
pub use error::*;
pub use types::*;

pub(crate) use types::require;

//! SEPA credit transfer initiation XML (pain.001.001.02).
//!
//! Builds a complete ISO 20022 customer credit transfer initiation
//! document from three input records. Each document carries exactly one
//! payment with exactly one transaction.
//!
//! # Example
//!
//! ```no_run
//! use maksu::core::*;
//! use maksu::pain001;
//!
//! let debtor: DebtorInfo = todo!(); // build via DebtorBuilder
//! let payment: PaymentInstruction = todo!();
//! let creditor: CreditorInfo = todo!();
//! let xml = pain001::render(&debtor, &payment, &creditor).unwrap();
//! ```

mod document;
mod sources;
pub(crate) mod xml_utils;

pub use document::{DocumentBuilder, render};
pub use sources::{Clock, MessageIdSource, SystemClock, SystemRandom};

/// Name of the message element directly under the root, equal to the
/// schema variant it announces.
pub const MESSAGE_ELEMENT: &str = "pain.001.001.02";

/// ISO 20022 namespace of the pain.001.001.02 message.
pub const MESSAGE_NS: &str = "urn:iso:std:iso:20022:tech:xsd:pain.001.001.02";

/// W3C XML Schema instance namespace.
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// `xsi:schemaLocation` pair advertised on the root element.
pub const SCHEMA_LOCATION: &str =
    "urn:iso:std:iso:20022:tech:xsd:pain.001.001.02 pain.001.001.02.xsd";

/// Number of random bytes behind a `MsgId`, hex-encoded to 34 characters.
pub const MSG_ID_BYTES: usize = 17;

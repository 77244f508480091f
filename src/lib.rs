//! # maksu
//!
//! SEPA credit transfer initiation for payment origination: builds
//! ISO 20022 pain.001.001.02 XML from plain debtor, payment, and
//! creditor records.
//!
//! Field values pass through as given. Amounts and dates travel as
//! preformatted strings; [`PaymentBuilder::amount_decimal`] formats a
//! [`rust_decimal::Decimal`] on the way in and
//! [`PaymentBuilder::execution_date_from`] does the same for a
//! [`chrono::NaiveDate`].
//!
//! ## Quick Start
//!
//! ```rust
//! use maksu::core::*;
//! use maksu::pain001;
//!
//! let debtor = DebtorBuilder::new("Acme Oy")
//!     .address("Mannerheimintie 12")
//!     .country("FI")
//!     .postcode("00100")
//!     .town("Helsinki")
//!     .customer_id("ACME-001")
//!     .iban("FI2112345600000785")
//!     .bic("NDEAFIHH")
//!     .build();
//!
//! let payment = PaymentBuilder::new("PMT-2024-06-17")
//!     .execution_date("2024-06-17")
//!     .payment_id("INSTR-1")
//!     .end_to_end_id("E2E-1")
//!     .amount("125.00")
//!     .currency("EUR")
//!     .reference("RF18 5390 0754 7034")
//!     .build();
//!
//! let creditor = CreditorBuilder::new("Beta Ab")
//!     .bic("ESSESESS")
//!     .address("Kungsgatan 2")
//!     .country("SE")
//!     .postcode("11135")
//!     .town("Stockholm")
//!     .iban("SE3550000000054910000003")
//!     .build();
//!
//! let xml = pain001::render(&debtor, &payment, &creditor).unwrap();
//! assert!(xml.contains("<NbOfTxs>1</NbOfTxs>"));
//! assert!(xml.contains(r#"<InstdAmt Ccy="EUR">125.00</InstdAmt>"#));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Input records, fluent builders, error type |
//! | `pain001` (default) | pain.001.001.02 document generation |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "pain001")]
pub mod pain001;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;

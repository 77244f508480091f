use thiserror::Error;

/// Errors that can occur while assembling a payment document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SepaError {
    /// A mandatory field was absent from one of the input records.
    ///
    /// Carries the dot-separated path of the field
    /// (e.g. "debtor.iban", "payment.amount").
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// XML generation error.
    #[error("XML error: {0}")]
    Xml(String),
}

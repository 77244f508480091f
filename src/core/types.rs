use serde::{Deserialize, Serialize};

use super::error::SepaError;

/// Originating account holder: the party whose account is debited.
///
/// Every field is optional at the type level so records coming out of
/// deserialized files or databases can be represented as-is. Presence of the
/// mandatory fields (everything except `customer_id` and `business_id`) is
/// checked when the document builder is constructed, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtorInfo {
    /// Account holder name (`Nm` in the initiating-party and debtor blocks).
    pub name: Option<String>,
    /// Street address line (`AdrLine`, `StrtNm`).
    pub address: Option<String>,
    /// Country code, ISO 3166-1 alpha-2 (`Ctry`). Emitted as given.
    pub country: Option<String>,
    /// Postal code. Joined with the country into the synthesized
    /// `COUNTRY-POSTCODE` address lines and `PstCd`.
    pub postcode: Option<String>,
    /// Town name (`TwnNm`).
    pub town: Option<String>,
    /// Bank-assigned customer identifier. Preferred value for the debtor
    /// identity block (`Id/OrgId/BkPtyId`).
    pub customer_id: Option<String>,
    /// Finnish Business ID (Y-tunnus). Fallback identity when `customer_id`
    /// is absent. If both are absent the identity element is emitted empty;
    /// no error is raised.
    pub business_id: Option<String>,
    /// Account to debit (`DbtrAcct/Id/IBAN`). Presence only; no checksum
    /// validation.
    pub iban: Option<String>,
    /// Debtor bank BIC (`DbtrAgt/FinInstnId/BIC`).
    pub bic: Option<String>,
}

/// A single credit transfer instruction.
///
/// Amount and execution date stay strings: values are emitted exactly as
/// given, never parsed or reformatted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentInstruction {
    /// Payment information block identifier (`PmtInfId`).
    pub payment_info_id: Option<String>,
    /// Requested execution date as an ISO date string (`ReqdExctnDt`).
    pub execution_date: Option<String>,
    /// Instruction identifier (`PmtId/InstrId`).
    pub payment_id: Option<String>,
    /// Identifier carried unchanged across the whole payment chain
    /// (`PmtId/EndToEndId`).
    pub end_to_end_id: Option<String>,
    /// Amount as a decimal string (`InstdAmt` text content).
    pub amount: Option<String>,
    /// Currency code, ISO 4217 (`InstdAmt` `Ccy` attribute).
    pub currency: Option<String>,
    /// Structured creditor reference (`Strd/CdtrRefInf/CdtrRef`, type code
    /// `SCOR`). Takes priority over `message` when both are set.
    pub reference: Option<String>,
    /// Unstructured remittance text (`Ustrd`). Used only when `reference` is
    /// absent; may itself be absent, yielding an empty element.
    pub message: Option<String>,
}

/// Beneficiary of the transfer. All fields mandatory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditorInfo {
    /// Creditor bank BIC (`CdtrAgt/FinInstnId/BIC`).
    pub bic: Option<String>,
    /// Beneficiary name (`Cdtr/Nm`).
    pub name: Option<String>,
    /// Street address line (`AdrLine`, `StrtNm`).
    pub address: Option<String>,
    /// Country code, ISO 3166-1 alpha-2 (`Ctry`).
    pub country: Option<String>,
    /// Postal code (`PstCd`, composite address lines).
    pub postcode: Option<String>,
    /// Town name (`TwnNm`).
    pub town: Option<String>,
    /// Account to credit (`CdtrAcct/Id/IBAN`).
    pub iban: Option<String>,
}

/// Strict lookup for mandatory record fields.
///
/// Optional fields are read straight from their `Option`s; mandatory fields
/// go through here so absence aborts with the field's dot-path name.
pub(crate) fn require(field: &'static str, value: &Option<String>) -> Result<String, SepaError> {
    value.clone().ok_or(SepaError::MissingField(field))
}

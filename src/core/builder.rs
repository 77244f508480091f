use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::types::*;

/// Builder for the debtor record.
///
/// ```
/// use maksu::core::*;
///
/// let debtor = DebtorBuilder::new("Acme Oy")
///     .address("Mannerheimintie 12")
///     .country("FI")
///     .postcode("00100")
///     .town("Helsinki")
///     .customer_id("ACME-001")
///     .iban("FI2112345600000785")
///     .bic("NDEAFIHH")
///     .build();
///
/// assert_eq!(debtor.town.as_deref(), Some("Helsinki"));
/// ```
pub struct DebtorBuilder {
    name: String,
    address: Option<String>,
    country: Option<String>,
    postcode: Option<String>,
    town: Option<String>,
    customer_id: Option<String>,
    business_id: Option<String>,
    iban: Option<String>,
    bic: Option<String>,
}

impl DebtorBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: None,
            country: None,
            postcode: None,
            town: None,
            customer_id: None,
            business_id: None,
            iban: None,
            bic: None,
        }
    }

    pub fn address(mut self, line: impl Into<String>) -> Self {
        self.address = Some(line.into());
        self
    }

    pub fn country(mut self, code: impl Into<String>) -> Self {
        self.country = Some(code.into());
        self
    }

    pub fn postcode(mut self, code: impl Into<String>) -> Self {
        self.postcode = Some(code.into());
        self
    }

    pub fn town(mut self, town: impl Into<String>) -> Self {
        self.town = Some(town.into());
        self
    }

    pub fn customer_id(mut self, id: impl Into<String>) -> Self {
        self.customer_id = Some(id.into());
        self
    }

    /// Finnish Business ID (Y-tunnus), the fallback debtor identity.
    pub fn business_id(mut self, id: impl Into<String>) -> Self {
        self.business_id = Some(id.into());
        self
    }

    pub fn iban(mut self, iban: impl Into<String>) -> Self {
        self.iban = Some(iban.into());
        self
    }

    pub fn bic(mut self, bic: impl Into<String>) -> Self {
        self.bic = Some(bic.into());
        self
    }

    pub fn build(self) -> DebtorInfo {
        DebtorInfo {
            name: Some(self.name),
            address: self.address,
            country: self.country,
            postcode: self.postcode,
            town: self.town,
            customer_id: self.customer_id,
            business_id: self.business_id,
            iban: self.iban,
            bic: self.bic,
        }
    }
}

/// Builder for the payment instruction record.
pub struct PaymentBuilder {
    payment_info_id: String,
    execution_date: Option<String>,
    payment_id: Option<String>,
    end_to_end_id: Option<String>,
    amount: Option<String>,
    currency: Option<String>,
    reference: Option<String>,
    message: Option<String>,
}

impl PaymentBuilder {
    pub fn new(payment_info_id: impl Into<String>) -> Self {
        Self {
            payment_info_id: payment_info_id.into(),
            execution_date: None,
            payment_id: None,
            end_to_end_id: None,
            amount: None,
            currency: None,
            reference: None,
            message: None,
        }
    }

    /// Execution date as an ISO date string, passed through unmodified.
    pub fn execution_date(mut self, date: impl Into<String>) -> Self {
        self.execution_date = Some(date.into());
        self
    }

    /// Execution date from a typed date, formatted as `YYYY-MM-DD`.
    pub fn execution_date_from(mut self, date: NaiveDate) -> Self {
        self.execution_date = Some(date.to_string());
        self
    }

    pub fn payment_id(mut self, id: impl Into<String>) -> Self {
        self.payment_id = Some(id.into());
        self
    }

    pub fn end_to_end_id(mut self, id: impl Into<String>) -> Self {
        self.end_to_end_id = Some(id.into());
        self
    }

    /// Amount as a decimal string, emitted exactly as given.
    pub fn amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    /// Amount from a [`Decimal`], formatted with at least two decimal
    /// places ("10" becomes "10.00").
    pub fn amount_decimal(mut self, amount: Decimal) -> Self {
        self.amount = Some(format_amount(amount));
        self
    }

    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.currency = Some(code.into());
        self
    }

    /// Structured creditor reference. Wins over `message` when both are set.
    pub fn reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    /// Unstructured remittance text, used when no reference is set.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn build(self) -> PaymentInstruction {
        PaymentInstruction {
            payment_info_id: Some(self.payment_info_id),
            execution_date: self.execution_date,
            payment_id: self.payment_id,
            end_to_end_id: self.end_to_end_id,
            amount: self.amount,
            currency: self.currency,
            reference: self.reference,
            message: self.message,
        }
    }
}

/// Builder for the creditor record.
pub struct CreditorBuilder {
    name: String,
    bic: Option<String>,
    address: Option<String>,
    country: Option<String>,
    postcode: Option<String>,
    town: Option<String>,
    iban: Option<String>,
}

impl CreditorBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bic: None,
            address: None,
            country: None,
            postcode: None,
            town: None,
            iban: None,
        }
    }

    pub fn bic(mut self, bic: impl Into<String>) -> Self {
        self.bic = Some(bic.into());
        self
    }

    pub fn address(mut self, line: impl Into<String>) -> Self {
        self.address = Some(line.into());
        self
    }

    pub fn country(mut self, code: impl Into<String>) -> Self {
        self.country = Some(code.into());
        self
    }

    pub fn postcode(mut self, code: impl Into<String>) -> Self {
        self.postcode = Some(code.into());
        self
    }

    pub fn town(mut self, town: impl Into<String>) -> Self {
        self.town = Some(town.into());
        self
    }

    pub fn iban(mut self, iban: impl Into<String>) -> Self {
        self.iban = Some(iban.into());
        self
    }

    pub fn build(self) -> CreditorInfo {
        CreditorInfo {
            name: Some(self.name),
            bic: self.bic,
            address: self.address,
            country: self.country,
            postcode: self.postcode,
            town: self.town,
            iban: self.iban,
        }
    }
}

/// Format a Decimal as amount text: always at least 2 decimal places,
/// trailing zeros beyond that stripped.
fn format_amount(d: Decimal) -> String {
    let s = d.normalize().to_string();
    if let Some(dot_pos) = s.find('.') {
        let decimals = s.len() - dot_pos - 1;
        if decimals < 2 {
            format!("{s}{}", "0".repeat(2 - decimals))
        } else {
            s
        }
    } else {
        format!("{s}.00")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn format_amount_cases() {
        assert_eq!(format_amount(dec!(10)), "10.00");
        assert_eq!(format_amount(dec!(125.0)), "125.00");
        assert_eq!(format_amount(dec!(49.90)), "49.90");
        assert_eq!(format_amount(dec!(0.005)), "0.005");
        assert_eq!(format_amount(dec!(1833.48)), "1833.48");
    }

    #[test]
    fn amount_decimal_goes_through_formatter() {
        let payment = PaymentBuilder::new("P1").amount_decimal(dec!(10)).build();
        assert_eq!(payment.amount.as_deref(), Some("10.00"));
    }

    #[test]
    fn execution_date_from_formats_iso() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let payment = PaymentBuilder::new("P1").execution_date_from(date).build();
        assert_eq!(payment.execution_date.as_deref(), Some("2024-01-02"));
    }

    #[test]
    fn unset_fields_stay_absent() {
        let debtor = DebtorBuilder::new("Acme Oy").iban("FI1111").build();
        assert_eq!(debtor.name.as_deref(), Some("Acme Oy"));
        assert_eq!(debtor.iban.as_deref(), Some("FI1111"));
        assert!(debtor.customer_id.is_none());
        assert!(debtor.bic.is_none());
    }
}

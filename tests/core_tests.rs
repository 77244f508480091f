use chrono::NaiveDate;
use maksu::core::*;
use rust_decimal_macros::dec;

fn full_debtor() -> DebtorInfo {
    DebtorBuilder::new("Acme Oy")
        .address("Mannerheimintie 12")
        .country("FI")
        .postcode("00100")
        .town("Helsinki")
        .customer_id("ACME-001")
        .business_id("1234567-8")
        .iban("FI2112345600000785")
        .bic("NDEAFIHH")
        .build()
}

// --- Builders ---

#[test]
fn debtor_builder_sets_all_fields() {
    let d = full_debtor();

    assert_eq!(d.name.as_deref(), Some("Acme Oy"));
    assert_eq!(d.address.as_deref(), Some("Mannerheimintie 12"));
    assert_eq!(d.country.as_deref(), Some("FI"));
    assert_eq!(d.postcode.as_deref(), Some("00100"));
    assert_eq!(d.town.as_deref(), Some("Helsinki"));
    assert_eq!(d.customer_id.as_deref(), Some("ACME-001"));
    assert_eq!(d.business_id.as_deref(), Some("1234567-8"));
    assert_eq!(d.iban.as_deref(), Some("FI2112345600000785"));
    assert_eq!(d.bic.as_deref(), Some("NDEAFIHH"));
}

#[test]
fn builder_leaves_unset_fields_absent() {
    let d = DebtorBuilder::new("Acme Oy").build();

    assert_eq!(d.name.as_deref(), Some("Acme Oy"));
    assert!(d.address.is_none());
    assert!(d.customer_id.is_none());
    assert!(d.business_id.is_none());
    assert!(d.iban.is_none());

    let p = PaymentBuilder::new("P1").build();
    assert_eq!(p.payment_info_id.as_deref(), Some("P1"));
    assert!(p.amount.is_none());
    assert!(p.reference.is_none());
    assert!(p.message.is_none());

    let c = CreditorBuilder::new("Beta Ab").build();
    assert_eq!(c.name.as_deref(), Some("Beta Ab"));
    assert!(c.bic.is_none());
    assert!(c.iban.is_none());
}

#[test]
fn payment_builder_formats_decimal_amount() {
    let p = PaymentBuilder::new("P1").amount_decimal(dec!(12.5)).build();
    assert_eq!(p.amount.as_deref(), Some("12.50"));

    let p = PaymentBuilder::new("P1").amount_decimal(dec!(1230.00)).build();
    assert_eq!(p.amount.as_deref(), Some("1230.00"));

    let p = PaymentBuilder::new("P1").amount_decimal(dec!(0.125)).build();
    assert_eq!(p.amount.as_deref(), Some("0.125"));
}

#[test]
fn payment_builder_formats_naive_date() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
    let p = PaymentBuilder::new("P1").execution_date_from(date).build();
    assert_eq!(p.execution_date.as_deref(), Some("2024-03-09"));
}

// --- Serialization ---

#[test]
fn records_serialize_round_trip() {
    let d = full_debtor();
    let json = serde_json::to_string(&d).unwrap();
    let back: DebtorInfo = serde_json::from_str(&json).unwrap();
    assert_eq!(back, d);

    let p = PaymentBuilder::new("P1")
        .execution_date("2024-01-02")
        .amount("10.00")
        .currency("EUR")
        .build();
    let json = serde_json::to_string(&p).unwrap();
    let back: PaymentInstruction = serde_json::from_str(&json).unwrap();
    assert_eq!(back, p);
}

#[test]
fn absent_fields_deserialize_as_none() {
    let p: PaymentInstruction = serde_json::from_str(r#"{"payment_info_id":"P1"}"#).unwrap();
    assert_eq!(p.payment_info_id.as_deref(), Some("P1"));
    assert!(p.amount.is_none());
    assert!(p.message.is_none());
}

// --- Errors ---

#[test]
fn missing_field_error_display() {
    let err = SepaError::MissingField("payment.amount");
    assert_eq!(err.to_string(), "missing required field: payment.amount");
}

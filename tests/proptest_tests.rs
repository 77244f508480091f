//! Property-based tests and edge case tests for the maksu crate.
//!
//! Run with: `cargo test --test proptest_tests`

#![cfg(feature = "pain001")]

use maksu::core::*;
use maksu::pain001;
use maksu::pain001::{MessageIdSource, SystemRandom};
use proptest::prelude::*;
use quick_xml::Reader;
use quick_xml::events::Event;

fn debtor() -> DebtorInfo {
    DebtorBuilder::new("Acme Oy")
        .address("Main 1")
        .country("FI")
        .postcode("00100")
        .town("Helsinki")
        .customer_id("C1")
        .iban("FI1111")
        .bic("BIC1")
        .build()
}

fn payment() -> PaymentInstruction {
    PaymentBuilder::new("P1")
        .execution_date("2024-01-02")
        .payment_id("I1")
        .end_to_end_id("E1")
        .amount("10.00")
        .currency("EUR")
        .reference("REF1")
        .build()
}

fn creditor() -> CreditorInfo {
    CreditorBuilder::new("Beta Ab")
        .bic("BIC2")
        .address("Side 2")
        .country("SE")
        .postcode("20000")
        .town("Malmo")
        .iban("SE2222")
        .build()
}

/// Count `element` start tags, failing on any parse error.
fn count_elements(xml: &str, element: &[u8]) -> usize {
    let mut reader = Reader::from_str(xml);
    let mut count = 0;
    loop {
        match reader.read_event().expect("well-formed document") {
            Event::Start(e) if e.name().as_ref() == element => count += 1,
            Event::Eof => break,
            _ => {}
        }
    }
    count
}

// ── Property Tests ──────────────────────────────────────────────────────────

proptest! {
    /// Any combination of plain field text renders to well-formed XML with
    /// exactly one block of each kind.
    #[test]
    fn arbitrary_text_renders_one_transaction(
        name in "[A-Za-z0-9 .:-]{1,35}",
        address in "[A-Za-z0-9 .:-]{1,35}",
        town in "[A-Za-z0-9]{1,20}",
        iban in "[A-Z0-9]{5,34}",
    ) {
        let mut d = debtor();
        d.name = Some(name);
        d.address = Some(address);
        d.town = Some(town);
        d.iban = Some(iban);
        let xml = pain001::render(&d, &payment(), &creditor()).unwrap();

        prop_assert_eq!(count_elements(&xml, b"GrpHdr"), 1);
        prop_assert_eq!(count_elements(&xml, b"PmtInf"), 1);
        prop_assert_eq!(count_elements(&xml, b"CdtTrfTxInf"), 1);
    }

    /// Amount and currency are emitted exactly as given, never reformatted.
    #[test]
    fn amount_and_currency_are_verbatim(
        amount in "[0-9]{1,7}\\.[0-9]{2}",
        currency in "[A-Z]{3}",
    ) {
        let mut p = payment();
        p.amount = Some(amount.clone());
        p.currency = Some(currency.clone());
        let xml = pain001::render(&debtor(), &p, &creditor()).unwrap();

        prop_assert!(xml.contains(&format!("<InstdAmt Ccy=\"{currency}\">{amount}</InstdAmt>")));
    }

    /// A structured reference and a free-text message never appear together.
    #[test]
    fn remittance_branches_are_exclusive(
        reference in prop::option::of("[A-Z0-9]{1,25}"),
        message in prop::option::of("[A-Za-z0-9 ]{1,35}"),
    ) {
        let mut p = payment();
        p.reference = reference.clone();
        p.message = message.clone();
        let xml = pain001::render(&debtor(), &p, &creditor()).unwrap();

        match (reference, message) {
            (Some(r), _) => {
                prop_assert!(xml.contains(&format!("<CdtrRef>{r}</CdtrRef>")));
                prop_assert!(!xml.contains("<Ustrd"));
            }
            (None, Some(m)) => {
                prop_assert!(xml.contains(&format!("<Ustrd>{m}</Ustrd>")));
                prop_assert!(!xml.contains("<Strd>"));
            }
            (None, None) => {
                prop_assert!(xml.contains("<Ustrd/>"));
                prop_assert!(!xml.contains("<Strd>"));
            }
        }
    }

    /// Hex ids are always twice the byte length and lowercase.
    #[test]
    fn random_hex_length_tracks_byte_len(byte_len in 0usize..64) {
        let id = SystemRandom.random_hex(byte_len);
        prop_assert_eq!(id.len(), byte_len * 2);
        prop_assert!(id.bytes().all(|b| b.is_ascii_hexdigit() && !b.is_ascii_uppercase()));
    }
}

// ── Edge Case Tests ─────────────────────────────────────────────────────────

// --- Unicode names ---

#[test]
fn unicode_party_names() {
    let scenarios = [
        "日本商事株式会社",        // CJK
        "Ökonomi Åbo Oy",          // Nordic
        "شركة عربية",              // RTL Arabic
        "Société Générale",        // accented Latin
    ];

    for name in scenarios {
        let mut d = debtor();
        d.name = Some(name.into());
        let xml = pain001::render(&d, &payment(), &creditor()).unwrap();
        assert!(
            xml.contains(&format!("<Nm>{name}</Nm>")),
            "name not preserved: {name}"
        );
        assert_eq!(count_elements(&xml, b"CdtTrfTxInf"), 1);
    }
}

// --- Max-length strings ---

#[test]
fn very_long_field_values() {
    let long_name = "N".repeat(500);
    let mut d = debtor();
    d.name = Some(long_name.clone());
    let xml = pain001::render(&d, &payment(), &creditor()).unwrap();

    assert!(xml.contains(&long_name));
    assert_eq!(count_elements(&xml, b"GrpHdr"), 1);
}

// --- Present-but-empty fields ---

#[test]
fn empty_string_fields_are_accepted() {
    // presence is what the mandatory check looks at, not content
    let mut d = debtor();
    d.name = Some(String::new());
    let xml = pain001::render(&d, &payment(), &creditor()).unwrap();

    assert!(xml.contains("<Nm></Nm>"));
}

// --- Whitespace preservation ---

#[test]
fn field_whitespace_is_preserved() {
    let mut p = payment();
    p.reference = None;
    p.message = Some("  padded message  ".into());
    let xml = pain001::render(&debtor(), &p, &creditor()).unwrap();

    assert!(xml.contains("<Ustrd>  padded message  </Ustrd>"));
}

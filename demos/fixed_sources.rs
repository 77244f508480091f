use chrono::{DateTime, FixedOffset, TimeZone};
use maksu::core::*;
use maksu::pain001::{Clock, DocumentBuilder, MessageIdSource};

/// Clock pinned to a fixed instant, for reproducible output.
struct PinnedClock;

impl Clock for PinnedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 6, 17, 9, 0, 0)
            .unwrap()
    }
}

/// Id source pinned to a constant string instead of the OS random generator.
struct PinnedIds;

impl MessageIdSource for PinnedIds {
    fn random_hex(&self, byte_len: usize) -> String {
        "42".repeat(byte_len)
    }
}

fn main() {
    let debtor = DebtorBuilder::new("Acme Oy")
        .address("Mannerheimintie 12")
        .country("FI")
        .postcode("00100")
        .town("Helsinki")
        .business_id("1234567-8")
        .iban("FI2112345600000785")
        .bic("NDEAFIHH")
        .build();

    let payment = PaymentBuilder::new("PMT-2024-06-17")
        .execution_date("2024-06-17")
        .payment_id("INSTR-1")
        .end_to_end_id("E2E-1")
        .amount("125.00")
        .currency("EUR")
        .message("Consulting June 2024")
        .build();

    let creditor = CreditorBuilder::new("Beta Ab")
        .bic("ESSESESS")
        .address("Kungsgatan 2")
        .country("SE")
        .postcode("11135")
        .town("Stockholm")
        .iban("SE3550000000054910000003")
        .build();

    let builder =
        DocumentBuilder::new(&debtor, &payment, &creditor).expect("records should be complete");

    // Same inputs, same sources, same bytes. Useful for golden-file checks
    // in systems that archive submitted payment files.
    let first = builder.render_with(&PinnedClock, &PinnedIds).expect("render");
    let second = builder.render_with(&PinnedClock, &PinnedIds).expect("render");
    assert_eq!(first, second);

    println!("{first}");
}

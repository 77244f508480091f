#![no_main]

use libfuzzer_sys::fuzz_target;
use maksu::core::PaymentBuilder;
use rust_decimal::Decimal;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Amount formatting must not panic and always keeps at least two
        // decimal places.
        if let Ok(d) = s.parse::<Decimal>() {
            let payment = PaymentBuilder::new("P1").amount_decimal(d).build();
            let amount = payment.amount.expect("amount was just set");
            let dot = amount.find('.').expect("formatted amount has a dot");
            assert!(amount.len() - dot - 1 >= 2);
        }
    }
});

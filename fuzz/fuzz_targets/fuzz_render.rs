#![no_main]

use libfuzzer_sys::fuzz_target;
use maksu::core::*;
use maksu::pain001::DocumentBuilder;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let mut lines = s.split('\n');
        let mut next = || lines.next().map(str::to_owned);

        let debtor = DebtorInfo {
            name: next(),
            address: next(),
            country: next(),
            postcode: next(),
            town: next(),
            customer_id: next(),
            business_id: next(),
            iban: next(),
            bic: next(),
        };
        let payment = PaymentInstruction {
            payment_info_id: next(),
            execution_date: next(),
            payment_id: next(),
            end_to_end_id: next(),
            amount: next(),
            currency: next(),
            reference: next(),
            message: next(),
        };
        let creditor = CreditorInfo {
            bic: next(),
            name: next(),
            address: next(),
            country: next(),
            postcode: next(),
            town: next(),
            iban: next(),
        };

        // Construction and rendering must not panic at any step; whenever
        // rendering succeeds the output must read back cleanly.
        if let Ok(builder) = DocumentBuilder::new(&debtor, &payment, &creditor) {
            if let Ok(xml) = builder.render() {
                let mut reader = quick_xml::Reader::from_str(&xml);
                loop {
                    match reader.read_event() {
                        Ok(quick_xml::events::Event::Eof) => break,
                        Ok(_) => {}
                        Err(e) => panic!("unreadable output: {e}"),
                    }
                }
            }
        }
    }
});

use maksu::core::*;
use maksu::pain001;

fn main() {
    // A single Finnish debtor paying a Swedish creditor
    let debtor = DebtorBuilder::new("Acme Oy")
        .address("Mannerheimintie 12")
        .country("FI")
        .postcode("00100")
        .town("Helsinki")
        .customer_id("ACME-001")
        .iban("FI2112345600000785")
        .bic("NDEAFIHH")
        .build();

    let payment = PaymentBuilder::new("PMT-2024-06-17")
        .execution_date("2024-06-17")
        .payment_id("INSTR-1")
        .end_to_end_id("E2E-1")
        .amount("125.00")
        .currency("EUR")
        .reference("RF18539007547034")
        .build();

    let creditor = CreditorBuilder::new("Beta Ab")
        .bic("ESSESESS")
        .address("Kungsgatan 2")
        .country("SE")
        .postcode("11135")
        .town("Stockholm")
        .iban("SE3550000000054910000003")
        .build();

    let xml = pain001::render(&debtor, &payment, &creditor).expect("records should be complete");

    println!("Debtor:   {}", debtor.name.as_deref().unwrap_or("?"));
    println!("Creditor: {}", creditor.name.as_deref().unwrap_or("?"));
    println!(
        "Amount:   {} {}",
        payment.amount.as_deref().unwrap_or("?"),
        payment.currency.as_deref().unwrap_or("?")
    );
    println!("---");
    println!("{xml}");
}

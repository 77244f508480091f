use chrono::SecondsFormat;

use super::sources::{Clock, MessageIdSource, SystemClock, SystemRandom};
use super::xml_utils::{XmlResult, XmlWriter};
use super::{MESSAGE_ELEMENT, MESSAGE_NS, MSG_ID_BYTES, SCHEMA_LOCATION, XSI_NS};
use crate::core::*;

/// Render a complete pain.001.001.02 document in one call, using the system
/// clock and random source.
pub fn render(
    debtor: &DebtorInfo,
    payment: &PaymentInstruction,
    creditor: &CreditorInfo,
) -> XmlResult {
    DocumentBuilder::new(debtor, payment, creditor)?.render()
}

/// Assembles one credit transfer initiation message from a debtor, a single
/// payment instruction, and a creditor.
///
/// Construction checks presence of every mandatory field and fails with
/// [`SepaError::MissingField`] naming the first absent one. One builder
/// holds one full set of inputs; every [`render`](Self::render) call
/// produces a fresh document with a fresh `MsgId` and `CreDtTm`.
///
/// ```
/// use maksu::core::*;
/// use maksu::pain001::DocumentBuilder;
///
/// let debtor = DebtorBuilder::new("Acme Oy")
///     .address("Mannerheimintie 12")
///     .country("FI")
///     .postcode("00100")
///     .town("Helsinki")
///     .iban("FI2112345600000785")
///     .bic("NDEAFIHH")
///     .build();
/// let payment = PaymentBuilder::new("P1")
///     .execution_date("2024-01-02")
///     .payment_id("I1")
///     .end_to_end_id("E1")
///     .amount("10.00")
///     .currency("EUR")
///     .message("Invoice 1234")
///     .build();
/// let creditor = CreditorBuilder::new("Beta Ab")
///     .bic("ESSESESS")
///     .address("Kungsgatan 2")
///     .country("SE")
///     .postcode("11135")
///     .town("Stockholm")
///     .iban("SE3550000000054910000003")
///     .build();
///
/// let builder = DocumentBuilder::new(&debtor, &payment, &creditor).unwrap();
/// let xml = builder.render().unwrap();
/// assert!(xml.contains("<PmtMtd>TRF</PmtMtd>"));
/// ```
pub struct DocumentBuilder {
    debtor: Party,
    customer_id: Option<String>,
    business_id: Option<String>,
    payment: Instruction,
    creditor: Party,
}

/// Post-validation party snapshot, shared by the debtor and creditor blocks.
struct Party {
    name: String,
    address: String,
    country: String,
    postcode: String,
    town: String,
    iban: String,
    bic: String,
}

impl Party {
    /// Synthesized "FI-00100" line: country and postcode joined by a hyphen.
    fn country_postcode(&self) -> String {
        format!("{}-{}", self.country, self.postcode)
    }

    /// Synthesized "FI-00100 Helsinki" free-text address line.
    fn country_postcode_town(&self) -> String {
        format!("{}-{} {}", self.country, self.postcode, self.town)
    }
}

/// Post-validation snapshot of the payment instruction.
struct Instruction {
    payment_info_id: String,
    execution_date: String,
    payment_id: String,
    end_to_end_id: String,
    amount: String,
    currency: String,
    reference: Option<String>,
    message: Option<String>,
}

impl DocumentBuilder {
    /// Validate the three records and snapshot their fields.
    ///
    /// Mandatory fields go through the strict lookup; `customer_id`,
    /// `business_id`, `reference` and `message` are identity attributes
    /// read permissively.
    pub fn new(
        debtor: &DebtorInfo,
        payment: &PaymentInstruction,
        creditor: &CreditorInfo,
    ) -> Result<Self, SepaError> {
        Ok(Self {
            debtor: Party {
                name: require("debtor.name", &debtor.name)?,
                address: require("debtor.address", &debtor.address)?,
                country: require("debtor.country", &debtor.country)?,
                postcode: require("debtor.postcode", &debtor.postcode)?,
                town: require("debtor.town", &debtor.town)?,
                iban: require("debtor.iban", &debtor.iban)?,
                bic: require("debtor.bic", &debtor.bic)?,
            },
            customer_id: debtor.customer_id.clone(),
            business_id: debtor.business_id.clone(),
            payment: Instruction {
                payment_info_id: require("payment.payment_info_id", &payment.payment_info_id)?,
                execution_date: require("payment.execution_date", &payment.execution_date)?,
                payment_id: require("payment.payment_id", &payment.payment_id)?,
                end_to_end_id: require("payment.end_to_end_id", &payment.end_to_end_id)?,
                amount: require("payment.amount", &payment.amount)?,
                currency: require("payment.currency", &payment.currency)?,
                reference: payment.reference.clone(),
                message: payment.message.clone(),
            },
            creditor: Party {
                name: require("creditor.name", &creditor.name)?,
                address: require("creditor.address", &creditor.address)?,
                country: require("creditor.country", &creditor.country)?,
                postcode: require("creditor.postcode", &creditor.postcode)?,
                town: require("creditor.town", &creditor.town)?,
                iban: require("creditor.iban", &creditor.iban)?,
                bic: require("creditor.bic", &creditor.bic)?,
            },
        })
    }

    /// Serialize the document using [`SystemClock`] and [`SystemRandom`].
    pub fn render(&self) -> XmlResult {
        self.render_with(&SystemClock, &SystemRandom)
    }

    /// Serialize the document, reading `clock` and `ids` exactly once each.
    ///
    /// The four assembly steps run in fixed order. Each `open_*` step leaves
    /// its container element open as the insertion point for the step after
    /// it; no step locates its anchor by searching the tree.
    pub fn render_with(&self, clock: &dyn Clock, ids: &dyn MessageIdSource) -> XmlResult {
        let mut w = XmlWriter::new()?;
        open_envelope(&mut w)?;
        self.write_group_header(&mut w, clock, ids)?;
        self.open_payment_info(&mut w)?;
        self.write_credit_transfer(&mut w)?;
        w.end_element("PmtInf")?;
        w.end_element(MESSAGE_ELEMENT)?;
        w.end_element("Document")?;
        w.into_string()
    }

    /// Step 2: `GrpHdr`, first child of the message element. The clock and
    /// the id source are consumed here and nowhere else.
    fn write_group_header(
        &self,
        w: &mut XmlWriter,
        clock: &dyn Clock,
        ids: &dyn MessageIdSource,
    ) -> Result<(), SepaError> {
        w.start_element("GrpHdr")?;
        w.text_element("MsgId", &ids.random_hex(MSG_ID_BYTES))?;
        w.text_element(
            "CreDtTm",
            &clock.now().to_rfc3339_opts(SecondsFormat::Secs, false),
        )?;
        w.text_element("BtchBookg", "true")?;
        // always a single transaction per message
        w.text_element("NbOfTxs", "1")?;
        w.text_element("Grpg", "MIXD")?;

        w.start_element("InitgPty")?;
        w.text_element("Nm", &self.debtor.name)?;
        // the schema family wants the address both free-text and structured
        w.start_element("PstlAdr")?;
        w.text_element("AdrLine", &self.debtor.address)?;
        w.text_element("AdrLine", &self.debtor.country_postcode())?;
        w.text_element("StrtNm", &self.debtor.address)?;
        w.text_element("PstCd", &self.debtor.country_postcode())?;
        w.text_element("TwnNm", &self.debtor.town)?;
        w.text_element("Ctry", &self.debtor.country)?;
        w.end_element("PstlAdr")?;
        w.end_element("InitgPty")?;

        w.end_element("GrpHdr")?;
        Ok(())
    }

    /// Step 3: `PmtInf`, sibling after the group header. Left open: the
    /// transaction block of step 4 nests inside it.
    fn open_payment_info(&self, w: &mut XmlWriter) -> Result<(), SepaError> {
        w.start_element("PmtInf")?;
        w.text_element("PmtInfId", &self.payment.payment_info_id)?;
        w.text_element("PmtMtd", "TRF")?;
        w.start_element("PmtTpInf")?;
        w.start_element("SvcLvl")?;
        w.text_element("Cd", "SEPA")?;
        w.end_element("SvcLvl")?;
        w.end_element("PmtTpInf")?;
        // passed through as given, never parsed
        w.text_element("ReqdExctnDt", &self.payment.execution_date)?;

        w.start_element("Dbtr")?;
        w.text_element("Nm", &self.debtor.name)?;
        w.start_element("PstlAdr")?;
        w.text_element("AdrLine", &self.debtor.address)?;
        w.text_element("AdrLine", &self.debtor.country_postcode_town())?;
        w.text_element("Ctry", &self.debtor.country)?;
        w.end_element("PstlAdr")?;
        w.start_element("Id")?;
        w.start_element("OrgId")?;
        // customer id wins; the fallback may itself be absent, in which
        // case the element stays empty rather than raising an error
        match self.customer_id.as_deref().or(self.business_id.as_deref()) {
            Some(id) => w.text_element("BkPtyId", id)?,
            None => w.empty_element("BkPtyId")?,
        };
        w.end_element("OrgId")?;
        w.end_element("Id")?;
        w.end_element("Dbtr")?;

        w.start_element("DbtrAcct")?;
        w.start_element("Id")?;
        w.text_element("IBAN", &self.debtor.iban)?;
        w.end_element("Id")?;
        w.end_element("DbtrAcct")?;

        w.start_element("DbtrAgt")?;
        w.start_element("FinInstnId")?;
        w.text_element("BIC", &self.debtor.bic)?;
        w.end_element("FinInstnId")?;
        w.end_element("DbtrAgt")?;

        w.text_element("ChrgBr", "SLEV")?;
        Ok(())
    }

    /// Step 4: `CdtTrfTxInf`, inside the open `PmtInf`.
    fn write_credit_transfer(&self, w: &mut XmlWriter) -> Result<(), SepaError> {
        w.start_element("CdtTrfTxInf")?;

        w.start_element("PmtId")?;
        w.text_element("InstrId", &self.payment.payment_id)?;
        w.text_element("EndToEndId", &self.payment.end_to_end_id)?;
        w.end_element("PmtId")?;

        w.start_element("Amt")?;
        // amount and currency are emitted as given, no format checks
        w.text_element_with_attrs(
            "InstdAmt",
            &self.payment.amount,
            &[("Ccy", self.payment.currency.as_str())],
        )?;
        w.end_element("Amt")?;

        w.start_element("CdtrAgt")?;
        w.start_element("FinInstnId")?;
        w.text_element("BIC", &self.creditor.bic)?;
        w.end_element("FinInstnId")?;
        w.end_element("CdtrAgt")?;

        w.start_element("Cdtr")?;
        w.text_element("Nm", &self.creditor.name)?;
        w.start_element("PstlAdr")?;
        w.text_element("AdrLine", &self.creditor.address)?;
        w.text_element("AdrLine", &self.creditor.country_postcode_town())?;
        w.text_element("StrtNm", &self.creditor.address)?;
        w.text_element("PstCd", &self.creditor.country_postcode())?;
        w.text_element("TwnNm", &self.creditor.town)?;
        w.text_element("Ctry", &self.creditor.country)?;
        w.end_element("PstlAdr")?;
        w.end_element("Cdtr")?;

        w.start_element("CdtrAcct")?;
        w.start_element("Id")?;
        w.text_element("IBAN", &self.creditor.iban)?;
        w.end_element("Id")?;
        w.end_element("CdtrAcct")?;

        w.start_element("RmtInf")?;
        match (&self.payment.reference, &self.payment.message) {
            // a structured reference wins over the free-text message
            (Some(reference), _) => {
                w.start_element("Strd")?;
                w.start_element("CdtrRefInf")?;
                w.start_element("CdtrRefTp")?;
                w.text_element("Cd", "SCOR")?;
                w.end_element("CdtrRefTp")?;
                w.text_element("CdtrRef", reference)?;
                w.end_element("CdtrRefInf")?;
                w.end_element("Strd")?;
            }
            (None, Some(message)) => {
                w.text_element("Ustrd", message)?;
            }
            (None, None) => {
                w.empty_element("Ustrd")?;
            }
        }
        w.end_element("RmtInf")?;

        w.end_element("CdtTrfTxInf")?;
        Ok(())
    }
}

/// Step 1: root `Document` envelope. Leaves the inner message element open
/// as the insertion point for the group header and payment info steps.
fn open_envelope(w: &mut XmlWriter) -> Result<(), SepaError> {
    w.start_element_with_attrs(
        "Document",
        &[
            ("xmlns", MESSAGE_NS),
            ("xmlns:xsi", XSI_NS),
            ("xsi:schemaLocation", SCHEMA_LOCATION),
        ],
    )?;
    w.start_element(MESSAGE_ELEMENT)?;
    Ok(())
}

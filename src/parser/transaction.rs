/// Transaction-type code as it appears in the statement export.
/// Codes the extractors know nothing about (BGC among others) collapse
/// into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    DirectDebit,
    BankPayment,
    FasterPaymentOut,
    FasterPaymentIn,
    Other,
}

impl TransactionType {
    pub fn from_code(code: &str) -> Self {
        match code {
            "DD" => TransactionType::DirectDebit,
            "BP" => TransactionType::BankPayment,
            "FPO" => TransactionType::FasterPaymentOut,
            "FPI" => TransactionType::FasterPaymentIn,
            _ => TransactionType::Other,
        }
    }
}

/// Payee name and reference extracted from one description.
/// The reference may be empty but is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTransaction {
    pub name: String,
    pub reference: String,
}

impl ParsedTransaction {
    /// Identity shape: the whole description as the name, no reference.
    pub fn fallback(description: &str) -> Self {
        ParsedTransaction {
            name: description.to_string(),
            reference: String::new(),
        }
    }
}

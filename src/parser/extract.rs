use std::sync::OnceLock;

use regex::Regex;

use super::{ParsedTransaction, TransactionType, normalize};

/// A single extraction heuristic. `None` cascades to the next rule in the
/// list; a rule list with no match resolves to the fallback shape.
type Rule = fn(&str) -> Option<ParsedTransaction>;

const DD_RULES: &[Rule] = &[dd_plyrdata, dd_hosting_invoice];
const BP_RULES: &[Rule] = &[bp_union_su, bp_union_msl_income];
const FP_RULES: &[Rule] = &[fp_meal_voucher, fp_numeric_anchor];

/// Meal-reference codes in tie-break order; the first one found anywhere in
/// the description wins and the rest are never consulted.
const MEAL_CODES: &[&str] = &["M1", "M6S", "7S", "4S"];

/// Extract a payee name and a reference from a raw statement description.
///
/// The description is whitespace-normalized first, then routed by the
/// transaction-type code to the matching rule list. Unknown codes and
/// descriptions no rule claims resolve to the fallback shape (whole
/// description as name, empty reference). Never fails.
pub fn parse_description(description: &str, type_code: &str) -> ParsedTransaction {
    let description = normalize(description);

    let rules: &[Rule] = match TransactionType::from_code(type_code) {
        TransactionType::DirectDebit => DD_RULES,
        TransactionType::BankPayment => BP_RULES,
        TransactionType::FasterPaymentOut | TransactionType::FasterPaymentIn => FP_RULES,
        TransactionType::Other => &[],
    };

    rules
        .iter()
        .find_map(|rule| rule(&description))
        .unwrap_or_else(|| ParsedTransaction::fallback(&description))
}

fn dd_plyrdata(description: &str) -> Option<ParsedTransaction> {
    if !description.starts_with("PLYRDATA") {
        return None;
    }
    // The token is stripped wherever it occurs, not only as the prefix.
    Some(ParsedTransaction {
        name: "PLYRDATA".to_string(),
        reference: description.replace("PLYRDATA", "").trim().to_string(),
    })
}

fn dd_hosting_invoice(description: &str) -> Option<ParsedTransaction> {
    if !description.starts_with("IONOS CLOUD LTD.") && !description.starts_with("1&1 INTERNET LTD.")
    {
        return None;
    }
    // Three-token payee, everything after it is the invoice reference.
    let parts: Vec<&str> = description.splitn(4, ' ').collect();
    Some(ParsedTransaction {
        name: parts[..parts.len().min(3)].join(" "),
        reference: parts.get(3).unwrap_or(&"").to_string(),
    })
}

fn bp_union_su(description: &str) -> Option<ParsedTransaction> {
    if !description.starts_with("EDIN UNIVERSITY SU") {
        return None;
    }
    // Only the token directly after "SU" survives as the reference; any
    // later tokens are dropped.
    let reference = description.split(' ').nth(3)?;
    Some(ParsedTransaction {
        name: "EDIN UNIVERSITY SU".to_string(),
        reference: reference.to_string(),
    })
}

fn bp_union_msl_income(description: &str) -> Option<ParsedTransaction> {
    if !description.contains("EDIN UNIVERSITY EUSU MSL INCOME") {
        return None;
    }
    Some(ParsedTransaction {
        name: "EDIN UNIVERSITY EUSU".to_string(),
        reference: "MSL INCOME".to_string(),
    })
}

// Payee, then a meal keyword ("XMAS MEALS" or a CHRISTMASMEALS-prefixed
// token), then one of the numeric shapes that follow it in the feed: a
// 15-digit transaction id, a 16+ word-character token, or a 6-digit code.
fn meal_voucher_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(.*?)(?:XMAS MEALS|CHRISTMASMEALS\w*)\s*(?:\d{15}|\w{16,}|\d{6}).*$")
            .expect("meal voucher regex")
    })
}

// Payee, an 18-digit transaction id (3-digit prefix + 15 digits), the
// free-text reference, then optionally a 6-digit sort/account code with a
// date/time suffix.
fn numeric_anchor_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(.*?)\s+(\d{3})(\d{15})\s+(.*?)(?:\s+(\d{6})\s+.*)?$")
            .expect("numeric anchor regex")
    })
}

fn fp_meal_voucher(description: &str) -> Option<ParsedTransaction> {
    if !description.contains("XMAS MEALS") && !description.contains("CHRISTMASMEALS") {
        return None;
    }
    let caps = meal_voucher_re().captures(description)?;

    let code = MEAL_CODES
        .iter()
        .find(|&&code| description.contains(code))
        .copied()
        .unwrap_or("");

    Some(ParsedTransaction {
        name: caps[1].trim().to_string(),
        reference: format!("XMAS MEALS {code}").trim_end().to_string(),
    })
}

fn fp_numeric_anchor(description: &str) -> Option<ParsedTransaction> {
    let caps = numeric_anchor_re().captures(description)?;
    Some(ParsedTransaction {
        name: caps[1].trim().to_string(),
        reference: caps[4].trim().to_string(),
    })
}

/// Collapse every run of whitespace to a single space and trim the ends.
/// Total over all inputs and idempotent.
pub fn normalize(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

//! Text helpers shared by the TEI readers

/// Collapse whitespace runs to a single space and trim both ends
pub fn normalize_space(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strip a leading `#` from a pointer value (`#pers1` → `pers1`)
pub fn check_for_hash(value: &str) -> &str {
    value.strip_prefix('#').unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_space() {
        assert_eq!(normalize_space("  Hans \n\t Maier "), "Hans Maier");
        assert_eq!(normalize_space("\n  "), "");
    }

    #[test]
    fn test_check_for_hash() {
        assert_eq!(check_for_hash("#place_12"), "place_12");
        assert_eq!(check_for_hash("place_12"), "place_12");
        assert_eq!(check_for_hash("##x"), "#x");
    }
}

use once_cell::sync::Lazy;
use regex::Regex;

static COMPONENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)([dhms])").unwrap());

/// Parses a free-text duration token like `1h30m`, `2d` or `45m` into a
/// total number of seconds. Matching is case-insensitive and only the
/// first occurrence of each unit counts. A bare number with no unit
/// contributes nothing; a total of zero means there was no valid duration.
pub fn parse(input: &str) -> Option<u64> {
    let input = input.trim().to_lowercase();
    let mut total: u64 = 0;
    let mut seen = [false; 4];

    for cap in COMPONENT.captures_iter(&input) {
        let (slot, multiplier) = match &cap[2] {
            "d" => (0, 86_400),
            "h" => (1, 3_600),
            "m" => (2, 60),
            _ => (3, 1),
        };
        if seen[slot] {
            continue;
        }
        seen[slot] = true;
        // Digit runs too long for u64 saturate instead of vanishing, so
        // the caller's range check still rejects them.
        let value: u64 = cap[1].parse().unwrap_or(u64::MAX);
        total = total.saturating_add(value.saturating_mul(multiplier));
    }

    (total > 0).then_some(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_units() {
        assert_eq!(parse("2d"), Some(172_800));
        assert_eq!(parse("1h"), Some(3_600));
        assert_eq!(parse("45m"), Some(2_700));
        assert_eq!(parse("10s"), Some(10));
    }

    #[test]
    fn test_parse_combined_units() {
        assert_eq!(parse("1h30m"), Some(5_400));
        assert_eq!(parse("1d2h3m4s"), Some(93_784));
    }

    #[test]
    fn test_parse_is_case_insensitive_and_trimmed() {
        assert_eq!(parse("  1H30M  "), Some(5_400));
    }

    #[test]
    fn test_parse_first_match_per_unit_wins() {
        assert_eq!(parse("1h2h"), Some(3_600));
    }

    #[test]
    fn test_parse_rejects_unitless_input() {
        assert_eq!(parse("banana"), None);
        assert_eq!(parse("90"), None);
        assert_eq!(parse(""), None);
    }

    #[test]
    fn test_parse_rejects_zero_total() {
        assert_eq!(parse("0m"), None);
        assert_eq!(parse("0h0s"), None);
    }

    #[test]
    fn test_parse_saturates_on_overflow() {
        assert_eq!(parse("99999999999999999999d"), Some(u64::MAX));
    }
}

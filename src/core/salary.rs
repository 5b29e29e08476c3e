/// Currency spellings that denote roubles. HeadHunter writes "RUR",
/// SuperJob writes "rub"; the comparison ignores case either way.
const ROUBLE_CODES: [&str; 2] = ["RUR", "RUB"];

/// Monthly rouble estimate for one salary range.
///
/// A bound equal to zero counts as missing. With both bounds the estimate
/// is the midpoint; a lone lower bound is scaled by 1.2, a lone upper bound
/// by 0.8; fractions are truncated. Foreign or missing currency, or no
/// usable bound, yields `None`.
pub fn estimate_rub_salary(
    currency: Option<&str>,
    payment_from: Option<u64>,
    payment_to: Option<u64>,
) -> Option<u64> {
    let currency = currency?;
    if !ROUBLE_CODES
        .iter()
        .any(|code| code.eq_ignore_ascii_case(currency))
    {
        return None;
    }

    let from = payment_from.filter(|value| *value != 0);
    let to = payment_to.filter(|value| *value != 0);

    match (from, to) {
        (Some(from), Some(to)) => Some((from + to) / 2),
        (Some(from), None) => Some((from as f64 * 1.2) as u64),
        (None, Some(to)) => Some((to as f64 * 0.8) as u64),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint_when_both_bounds_present() {
        assert_eq!(
            estimate_rub_salary(Some("RUR"), Some(100_000), Some(150_000)),
            Some(125_000)
        );
    }

    #[test]
    fn test_midpoint_truncates() {
        assert_eq!(
            estimate_rub_salary(Some("RUR"), Some(100_000), Some(150_001)),
            Some(125_000)
        );
    }

    #[test]
    fn test_lower_bound_alone_is_scaled_up() {
        assert_eq!(
            estimate_rub_salary(Some("rub"), Some(100_000), None),
            Some(120_000)
        );
        assert_eq!(
            estimate_rub_salary(Some("rub"), Some(33_333), Some(0)),
            Some(39_999)
        );
    }

    #[test]
    fn test_upper_bound_alone_is_scaled_down() {
        assert_eq!(
            estimate_rub_salary(Some("RUR"), None, Some(100_000)),
            Some(80_000)
        );
        assert_eq!(
            estimate_rub_salary(Some("RUR"), Some(0), Some(55_555)),
            Some(44_444)
        );
    }

    #[test]
    fn test_currency_match_ignores_case() {
        for code in ["RUR", "rur", "Rur", "RUB", "rub", "RuB"] {
            assert_eq!(
                estimate_rub_salary(Some(code), Some(90_000), Some(110_000)),
                Some(100_000),
                "code {} should be accepted",
                code
            );
        }
    }

    #[test]
    fn test_foreign_currency_is_unusable() {
        assert_eq!(estimate_rub_salary(Some("USD"), Some(5_000), Some(6_000)), None);
        assert_eq!(estimate_rub_salary(Some("EUR"), Some(5_000), None), None);
    }

    #[test]
    fn test_missing_currency_is_unusable() {
        assert_eq!(estimate_rub_salary(None, Some(100_000), Some(150_000)), None);
    }

    #[test]
    fn test_zero_bounds_count_as_missing() {
        assert_eq!(estimate_rub_salary(Some("RUR"), Some(0), Some(0)), None);
        assert_eq!(estimate_rub_salary(Some("RUR"), None, None), None);
    }
}

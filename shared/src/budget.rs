use serde::{Deserialize, Serialize};

/// Display color for the "remaining this month" figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemainingLevel {
    Green,
    Yellow,
    Red,
}

impl RemainingLevel {
    pub fn css_class(self) -> &'static str {
        match self {
            RemainingLevel::Green => "text-success",
            RemainingLevel::Yellow => "text-warning",
            RemainingLevel::Red => "text-danger",
        }
    }
}

const GREEN_THRESHOLD_PERCENT: i128 = 70;
const YELLOW_THRESHOLD_PERCENT: i128 = 30;

/// Classify what is left of the variable budget.
///
/// Overspending and a non-positive variable budget are always red. Otherwise the
/// share of the budget still available decides: at least 70% is green, at least
/// 30% is yellow, anything less is red. Compared in integer arithmetic so the
/// thresholds are exact.
pub fn classify_remaining(remaining: i64, variable_budget: i64) -> RemainingLevel {
    if remaining < 0 || variable_budget <= 0 {
        return RemainingLevel::Red;
    }

    let scaled = remaining as i128 * 100;
    let budget = variable_budget as i128;

    if scaled >= GREEN_THRESHOLD_PERCENT * budget {
        RemainingLevel::Green
    } else if scaled >= YELLOW_THRESHOLD_PERCENT * budget {
        RemainingLevel::Yellow
    } else {
        RemainingLevel::Red
    }
}

/// Format whole yen with grouped thousands, e.g. `¥1,234,567`. The sign
/// follows the currency mark: `¥-25,000`.
pub fn format_yen(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0 { "-" } else { "" };
    format!("¥{}{}", sign, grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_remaining_is_always_red() {
        for budget in [-1000, 0, 1, 100_000] {
            assert_eq!(classify_remaining(-1, budget), RemainingLevel::Red);
        }
    }

    #[test]
    fn test_non_positive_budget_is_red() {
        assert_eq!(classify_remaining(0, 0), RemainingLevel::Red);
        assert_eq!(classify_remaining(5000, 0), RemainingLevel::Red);
        assert_eq!(classify_remaining(5000, -10), RemainingLevel::Red);
    }

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(classify_remaining(100, 100), RemainingLevel::Green);
        assert_eq!(classify_remaining(70, 100), RemainingLevel::Green);
        assert_eq!(classify_remaining(69, 100), RemainingLevel::Yellow);
        assert_eq!(classify_remaining(30, 100), RemainingLevel::Yellow);
        assert_eq!(classify_remaining(29, 100), RemainingLevel::Red);
        assert_eq!(classify_remaining(0, 100), RemainingLevel::Red);
    }

    #[test]
    fn test_boundaries_are_exact_for_uneven_budgets() {
        // 7/10 of 3 is 2.1, so 2 is below the green line and 3 is above it
        assert_eq!(classify_remaining(2, 3), RemainingLevel::Yellow);
        assert_eq!(classify_remaining(3, 3), RemainingLevel::Green);
        // 0.3 * 170000 = 51000
        assert_eq!(classify_remaining(51_000, 170_000), RemainingLevel::Yellow);
        assert_eq!(classify_remaining(50_999, 170_000), RemainingLevel::Red);
    }

    #[test]
    fn test_classification_matches_ratio_over_range() {
        let budget = 1_000;
        for remaining in 0..=budget {
            let ratio = remaining as f64 / budget as f64;
            let expected = if ratio >= 0.70 {
                RemainingLevel::Green
            } else if ratio >= 0.30 {
                RemainingLevel::Yellow
            } else {
                RemainingLevel::Red
            };
            assert_eq!(classify_remaining(remaining, budget), expected, "remaining={}", remaining);
        }
    }

    #[test]
    fn test_large_amounts_do_not_overflow() {
        assert_eq!(classify_remaining(i64::MAX, i64::MAX), RemainingLevel::Green);
    }

    #[test]
    fn test_css_classes() {
        assert_eq!(RemainingLevel::Green.css_class(), "text-success");
        assert_eq!(RemainingLevel::Yellow.css_class(), "text-warning");
        assert_eq!(RemainingLevel::Red.css_class(), "text-danger");
    }

    #[test]
    fn test_format_yen() {
        assert_eq!(format_yen(0), "¥0");
        assert_eq!(format_yen(999), "¥999");
        assert_eq!(format_yen(1000), "¥1,000");
        assert_eq!(format_yen(1_234_567), "¥1,234,567");
        assert_eq!(format_yen(-25_000), "¥-25,000");
        assert_eq!(format_yen(-999), "¥-999");
        assert_eq!(format_yen(i64::MIN), "¥-9,223,372,036,854,775,808");
    }
}

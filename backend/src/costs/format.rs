//! Display formatting for cost ranges
//!
//! Amounts use Indian digit grouping (last three digits, then pairs),
//! matching how the `en-IN` locale renders rupees: `₹3,71,280`.

const RUPEE: &str = "₹";
const RANGE_SEPARATOR: &str = " – ";
const RANGE_SUFFIX: &str = " (approx.)";

/// Render a cost range for display
///
/// # Example
/// ```
/// use medcost_core::format_cost_range;
///
/// assert_eq!(format_cost_range(371_280, 502_320), "₹3,71,280 – ₹5,02,320 (approx.)");
/// ```
pub fn format_cost_range(low: i64, high: i64) -> String {
    format!(
        "{}{}{}{}",
        format_rupees(low),
        RANGE_SEPARATOR,
        format_rupees(high),
        RANGE_SUFFIX
    )
}

/// Render a single rupee amount with Indian digit grouping
pub fn format_rupees(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    format!("{}{}{}", sign, RUPEE, group_indian(amount.unsigned_abs()))
}

fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_indian() {
        assert_eq!(group_indian(0), "0");
        assert_eq!(group_indian(999), "999");
        assert_eq!(group_indian(1_000), "1,000");
        assert_eq!(group_indian(12_345), "12,345");
        assert_eq!(group_indian(123_456), "1,23,456");
        assert_eq!(group_indian(12_345_678), "1,23,45,678");
    }

    #[test]
    fn test_format_small_range() {
        assert_eq!(format_cost_range(43, 58), "₹43 – ₹58 (approx.)");
    }

    #[test]
    fn test_format_negative_amount() {
        assert_eq!(format_rupees(-1_500), "-₹1,500");
    }
}

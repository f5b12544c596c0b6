//! Rupee amount formatting for tables, cards and statements

/// Groups the digits of a whole number the Indian way: the last three
/// digits, then pairs (`12,34,567`).
pub fn group_indian(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut groups: Vec<&str> = Vec::new();
    let (mut head, tail) = digits.split_at(digits.len().saturating_sub(3));
    while head.len() > 2 {
        let (rest, pair) = head.split_at(head.len() - 2);
        groups.push(pair);
        head = rest;
    }
    if !head.is_empty() {
        groups.push(head);
    }
    groups.reverse();
    groups.push(tail);

    let grouped = groups.join(",");
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Whole rupees with the `₹` sign; the fractional part is dropped.
///
/// `1234567.89` renders as `₹12,34,567`.
pub fn format_currency(value: f64) -> String {
    let whole = if value.is_finite() { value.trunc() as i64 } else { 0 };
    format!("₹{}", group_indian(whole))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_indian() {
        assert_eq!(group_indian(0), "0");
        assert_eq!(group_indian(999), "999");
        assert_eq!(group_indian(1000), "1,000");
        assert_eq!(group_indian(100000), "1,00,000");
        assert_eq!(group_indian(1000000), "10,00,000");
        assert_eq!(group_indian(123456789), "12,34,56,789");
        assert_eq!(group_indian(-18500), "-18,500");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(18500.0), "₹18,500");
        assert_eq!(format_currency(1234567.89), "₹12,34,567");
        assert_eq!(format_currency(-250.5), "₹-250");
        assert_eq!(format_currency(f64::NAN), "₹0");
    }
}

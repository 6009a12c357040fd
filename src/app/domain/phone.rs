/// How a digit string is split into groups and joined back together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupingRule {
    pub group_size: usize,
    pub separator: char,
}

impl Default for GroupingRule {
    fn default() -> Self {
        Self {
            group_size: 2,
            separator: ' ',
        }
    }
}

impl GroupingRule {
    /// Filter `text` down to its digits and regroup them.
    pub fn apply(&self, text: &str) -> String {
        group_digits(&digits_only(text), self)
    }
}

/// Keep only the ASCII digits of `text`, in order.
pub fn digits_only(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Join `digits` in chunks of `rule.group_size`, taken from the left.
///
/// The last chunk may be shorter. No separator is emitted before the first
/// or after the last chunk. A zero group size leaves the input untouched.
pub fn group_digits(digits: &str, rule: &GroupingRule) -> String {
    if rule.group_size == 0 {
        return digits.to_string();
    }

    let mut result = String::with_capacity(digits.len() + digits.len() / rule.group_size);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && i % rule.group_size == 0 {
            result.push(rule.separator);
        }
        result.push(ch);
    }
    result
}

/// Format a phone number with the default rule: pairs of digits separated by spaces.
pub fn format_phone_number(text: &str) -> String {
    GroupingRule::default().apply(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_ten_digits() {
        assert_eq!(format_phone_number("0123456789"), "01 23 45 67 89");
    }

    #[test]
    fn test_format_strips_punctuation() {
        assert_eq!(format_phone_number("01-23 45"), "01 23 45");
        assert_eq!(format_phone_number("+33 (0)6.12.34"), "33 06 12 34");
    }

    #[test]
    fn test_format_odd_length() {
        assert_eq!(format_phone_number("123"), "12 3");
        assert_eq!(format_phone_number("1"), "1");
    }

    #[test]
    fn test_format_empty_and_non_digit() {
        assert_eq!(format_phone_number(""), "");
        assert_eq!(format_phone_number("abc"), "");
    }

    #[test]
    fn test_format_already_grouped() {
        let once = format_phone_number("06 12 34 56 7");
        assert_eq!(once, "06 12 34 56 7");
        assert_eq!(format_phone_number(&once), once);
    }

    #[test]
    fn test_non_ascii_digits_are_dropped() {
        // Arabic-Indic and fullwidth digits are not 0-9
        assert_eq!(digits_only("١٢3４5"), "35");
    }

    #[test]
    fn test_custom_rule() {
        let rule = GroupingRule {
            group_size: 3,
            separator: '.',
        };
        assert_eq!(rule.apply("1234567"), "123.456.7");
        assert_eq!(rule.apply("123"), "123");
    }

    #[test]
    fn test_zero_group_size() {
        let rule = GroupingRule {
            group_size: 0,
            separator: ' ',
        };
        assert_eq!(rule.apply("12-34"), "1234");
    }
}

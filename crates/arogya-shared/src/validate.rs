//! Input sanitization and validation results.

/// Digits in an Aadhaar number.
pub const AADHAAR_LEN: usize = 12;
/// Digits in an Indian mobile number.
pub const MOBILE_LEN: usize = 10;
/// Digits in a one-time password.
pub const OTP_LEN: usize = 6;

/// Outcome of validating a draft before it may advance or commit.
///
/// Invalid carries a human-readable reason; callers treat a failed check
/// as a disabled control or silent no-op, never a panic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Validity {
    Valid,
    Invalid(String),
}

impl Validity {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::Invalid(reason.into())
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Reason string for an invalid result, if any.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid(reason) => Some(reason),
        }
    }
}

/// Strip non-digit characters and truncate to `max_len`.
///
/// Numeric entry fields apply this on every keystroke; malformed input is
/// filtered silently rather than reported.
pub fn digits_only(input: &str, max_len: usize) -> String {
    input
        .chars()
        .filter(char::is_ascii_digit)
        .take(max_len)
        .collect()
}

/// True when `value` is exactly `len` ASCII digits.
pub fn is_exact_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn strips_and_truncates() {
        assert_eq!(digits_only("+91 98765 43210", MOBILE_LEN), "9198765432");
        assert_eq!(digits_only("1234-5678-9012", AADHAAR_LEN), "123456789012");
        assert_eq!(digits_only("abc", OTP_LEN), "");
    }

    #[test]
    fn exact_digit_check() {
        assert!(is_exact_digits("123456789012", AADHAAR_LEN));
        assert!(!is_exact_digits("12345678901", AADHAAR_LEN));
        assert!(!is_exact_digits("12345678901x", AADHAAR_LEN));
    }

    #[test]
    fn validity_reason() {
        assert!(Validity::Valid.is_valid());
        let invalid = Validity::invalid("Aadhaar number must be 12 digits");
        assert_eq!(invalid.reason(), Some("Aadhaar number must be 12 digits"));
    }

    proptest! {
        #[test]
        fn filtered_value_is_input_minus_non_digits(input in ".{0,40}", max_len in 0usize..16) {
            let filtered = digits_only(&input, max_len);
            let expected: String = input
                .chars()
                .filter(|c| c.is_ascii_digit())
                .take(max_len)
                .collect();
            prop_assert_eq!(&filtered, &expected);
            prop_assert!(filtered.len() <= max_len);
            prop_assert!(filtered.chars().all(|c| c.is_ascii_digit()));
        }
    }
}

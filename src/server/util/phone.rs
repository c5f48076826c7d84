//! Phone number normalization.

/// Minimum number of digits a phone number needs to be considered deliverable.
pub const MIN_PHONE_DIGITS: usize = 10;

/// Strips everything but ASCII digits from `phone`.
///
/// # Example
/// ```ignore
/// assert_eq!(normalize_phone("010-1234-5678"), "01012345678");
/// ```
pub fn normalize_phone(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Normalizes `phone` and returns it only if it has at least [`MIN_PHONE_DIGITS`] digits.
pub fn deliverable_phone(phone: Option<&str>) -> Option<String> {
    let digits = normalize_phone(phone?);

    (digits.len() >= MIN_PHONE_DIGITS).then_some(digits)
}

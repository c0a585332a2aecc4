//! Phone number generation and normalization.

use fake::Fake;
use fake::faker::number::raw::NumberWithFormat;
use fake::locales::PT_BR;
use rand::Rng;

/// Country code prepended to some generated numbers.
pub const COUNTRY_CODE_PREFIX: &str = "+55 ";

/// Brazilian landline and mobile formats. `^` is a non-zero digit, `#` any digit.
const PHONE_FORMATS: [&str; 4] = [
    "+55 (^#) 9####-####",
    "(^#) 9####-####",
    "+55 (^#) ^###-####",
    "(^#) ^###-####",
];

/// Removes a leading country code, leaving everything else untouched.
pub fn format_phone(phone: &str) -> String {
    phone
        .strip_prefix(COUNTRY_CODE_PREFIX)
        .unwrap_or(phone)
        .to_string()
}

/// Generates a phone number in a local format, without the country code.
pub fn generate_phone(rng: &mut impl Rng) -> String {
    let format = PHONE_FORMATS[rng.gen_range(0..PHONE_FORMATS.len())];
    let phone: String = NumberWithFormat(PT_BR, format).fake_with_rng(rng);
    format_phone(&phone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_country_code() {
        assert_eq!(format_phone("+55 (11) 91234-5678"), "(11) 91234-5678");
        assert_eq!(format_phone("+55 "), "");
    }

    #[test]
    fn test_leaves_other_numbers_unchanged() {
        assert_eq!(format_phone("(11) 91234-5678"), "(11) 91234-5678");
        assert_eq!(format_phone("+551191234-5678"), "+551191234-5678");
        assert_eq!(format_phone("+1 555-0100"), "+1 555-0100");
        assert_eq!(format_phone(""), "");
    }

    #[test]
    fn test_only_leading_prefix_is_removed() {
        assert_eq!(format_phone("+55 +55 1234"), "+55 1234");
        assert_eq!(format_phone("(11) +55 1234"), "(11) +55 1234");
    }

    #[test]
    fn test_generated_phone_is_local() {
        let mut rng = rand::thread_rng();

        for _ in 0..200 {
            let phone = generate_phone(&mut rng);
            assert!(!phone.starts_with(COUNTRY_CODE_PREFIX), "{phone}");
            assert!(phone.starts_with('('), "{phone}");
            assert!(phone.chars().filter(|c| c.is_ascii_digit()).count() >= 10);
        }
    }
}

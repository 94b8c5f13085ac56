/// Characters dropped by the symbol normalizer. Everything else, letters
/// included, is kept verbatim.
pub const PHONE_SYMBOLS: [char; 5] = ['(', ')', '-', '+', ' '];

/// Brazil's country calling code.
pub const BRAZIL_COUNTRY_CODE: &'static str = "55";
// Matches anywhere in the input, not only at the start.
pub const INTERNATIONAL_DIALING_CODE_PATTERN: &'static str = r"\+?55";

/// Number of digits of a DDD (area code).
pub const DDD_LENGTH: usize = 2;
/// A national number is at most DDD + 9 subscriber digits, so anything longer
/// is assumed to carry the country code.
pub const MAX_LENGTH_FOR_NATIONAL_NUMBER: usize = 11;
/// Subscriber digits placed after the hyphen by `format_phone`.
pub const FORMATTED_SUFFIX_LENGTH: usize = 4;

pub const LANDLINE_SUBSCRIBER_LENGTH: usize = 8;
pub const MOBILE_SUBSCRIBER_LENGTH: usize = 9;
/// Every mobile subscriber number starts with this digit.
pub const MOBILE_LEADING_DIGIT: char = '9';

// DDD digits are 1-9, the first landline subscriber digit is 2-5.
pub const LANDLINE_PATTERN: &'static str = "^[1-9][1-9][2-5][0-9]{7}$";
pub const MOBILE_PATTERN: &'static str = "^[1-9][1-9]9[0-9]{8}$";

use rand::{SeedableRng, rngs::StdRng};
use strum::IntoEnumIterator;

use crate::PhoneType;

use super::get_phone_util;

#[test]
fn is_valid_landline() {
    let phone_util = get_phone_util();
    assert!(phone_util.is_valid_landline("1635014415"));
    assert!(phone_util.is_valid_landline("1123456789"));
    assert!(phone_util.is_valid_landline("9959999999"));

    // subscriber must start with 2-5
    assert!(!phone_util.is_valid_landline("1615014415"));
    assert!(!phone_util.is_valid_landline("1665014415"));
    // no zero in the DDD
    assert!(!phone_util.is_valid_landline("0135014415"));
    assert!(!phone_util.is_valid_landline("1035014415"));
    // length
    assert!(!phone_util.is_valid_landline("163501441"));
    assert!(!phone_util.is_valid_landline("16350144155"));
    // no symbols, no country code
    assert!(!phone_util.is_valid_landline("(16)3501-4415"));
    assert!(!phone_util.is_valid_landline("551635014415"));
    assert!(!phone_util.is_valid_landline(""));
}

#[test]
fn is_valid_mobile() {
    let phone_util = get_phone_util();
    assert!(phone_util.is_valid_mobile("11994029275"));
    assert!(phone_util.is_valid_mobile("88996443006"));

    assert!(!phone_util.is_valid_mobile("11894029275"));
    assert!(!phone_util.is_valid_mobile("01994029275"));
    assert!(!phone_util.is_valid_mobile("1199402927"));
    assert!(!phone_util.is_valid_mobile("119940292755"));
    assert!(!phone_util.is_valid_mobile("11 99402-9275"));
    // only ASCII digits are accepted
    assert!(!phone_util.is_valid_mobile("1199402927٥"));
    assert!(!phone_util.is_valid_mobile("11994029275\n"));
}

#[test]
fn is_valid_by_type() {
    let phone_util = get_phone_util();
    let landline = "1635014415";
    let mobile = "11994029275";

    assert!(phone_util.is_valid(landline, None));
    assert!(phone_util.is_valid(mobile, None));

    assert!(phone_util.is_valid(landline, Some(PhoneType::Landline)));
    assert!(!phone_util.is_valid(landline, Some(PhoneType::Mobile)));
    assert!(phone_util.is_valid(mobile, Some(PhoneType::Mobile)));
    assert!(!phone_util.is_valid(mobile, Some(PhoneType::Landline)));

    assert!(!phone_util.is_valid("333333", None));
    assert!(!phone_util.is_valid("11abc99999", None));
}

#[test]
fn format_phone() {
    let phone_util = get_phone_util();
    assert_eq!(phone_util.format_phone("11994029275").as_deref(), Some("(11)99402-9275"));
    assert_eq!(phone_util.format_phone("1635014415").as_deref(), Some("(16)3501-4415"));
    assert_eq!(phone_util.format_phone("333333"), None);
    assert_eq!(phone_util.format_phone("(11)99402-9275"), None);
    assert_eq!(phone_util.format_phone(""), None);
}

#[test]
fn remove_symbols() {
    let phone_util = get_phone_util();
    assert_eq!(phone_util.remove_symbols("+55 (11) 99402-9275"), "5511994029275");
    assert_eq!(phone_util.remove_symbols("11994029275"), "11994029275");
    assert_eq!(phone_util.remove_symbols("(11) abc-def"), "11abcdef");
}

#[test]
fn remove_international_dialing_code() {
    let phone_util = get_phone_util();
    assert_eq!(phone_util.remove_international_dialing_code("5511994029275"), "11994029275");
    assert_eq!(phone_util.remove_international_dialing_code("551635014415"), "1635014415");
    // the plus sign is kept
    assert_eq!(phone_util.remove_international_dialing_code("+5511994029275"), "+11994029275");
    // short enough to be national
    assert_eq!(phone_util.remove_international_dialing_code("1635014415"), "1635014415");
    assert_eq!(phone_util.remove_international_dialing_code("55994029275"), "55994029275");
    // no country code at all
    assert_eq!(phone_util.remove_international_dialing_code("119940292751"), "119940292751");
    // spaces do not count towards the length
    assert_eq!(phone_util.remove_international_dialing_code("55 16 3501 4415"), " 16 3501 4415");
    assert_eq!(phone_util.remove_international_dialing_code("55 119940 927"), "55 119940 927");
}

#[test]
fn remove_international_dialing_code_removes_first_occurrence_anywhere() {
    let phone_util = get_phone_util();
    // long national-looking numbers containing "55" lose it as well
    assert_eq!(phone_util.remove_international_dialing_code("119555512345"), "1195512345");
}

#[test]
fn generate_is_valid_for_each_type() {
    let phone_util = get_phone_util();
    let mut rng = StdRng::seed_from_u64(2024);
    for phone_type in PhoneType::iter() {
        for _ in 0..100 {
            let number = phone_util.generate_with_rng(Some(phone_type), &mut rng);
            assert!(phone_util.is_valid(&number, Some(phone_type)), "{number} is not a valid {phone_type:?}");
        }
    }
}

#[test]
fn generate_without_type_yields_both_kinds() {
    let phone_util = get_phone_util();
    let mut rng = StdRng::seed_from_u64(1);
    let numbers: Vec<String> = (0..200)
        .map(|_| phone_util.generate_with_rng(None, &mut rng))
        .collect();

    assert!(numbers.iter().all(|n| phone_util.is_valid(n, None)));
    assert!(numbers.iter().any(|n| phone_util.is_valid_landline(n)));
    assert!(numbers.iter().any(|n| phone_util.is_valid_mobile(n)));
}

#[test]
fn generate_with_thread_rng() {
    let phone_util = get_phone_util();
    assert_eq!(phone_util.generate(Some(PhoneType::Mobile)).len(), 11);
    assert_eq!(phone_util.generate(Some(PhoneType::Landline)).len(), 10);
    assert!(phone_util.is_valid(&phone_util.generate(None), None));
}

#[test]
fn generated_numbers_are_formattable() {
    let phone_util = get_phone_util();
    let mut rng = StdRng::seed_from_u64(99);
    let number = phone_util.generate_with_rng(Some(PhoneType::Mobile), &mut rng);
    let formatted = phone_util.format_phone(&number).unwrap();
    assert_eq!(phone_util.remove_symbols(&formatted), number);
}

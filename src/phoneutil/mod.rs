mod helper_constants;
mod helper_functions;
mod helper_types;
mod phone_regexps;
pub mod ddd_info;
pub mod enums;
pub mod errors;
pub mod phoneutil;

use std::sync::LazyLock;

pub use enums::PhoneType;
use crate::phoneutil::phoneutil::PhoneUtil;

pub static PHONE_UTIL: LazyLock<PhoneUtil> = LazyLock::new(|| {
    PhoneUtil::new()
});

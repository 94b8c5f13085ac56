mod generated;
mod phoneutil;
pub mod i18n;
pub(crate) mod string_util;

#[cfg(test)]
mod tests;

pub use i18n::Uf;
pub use phoneutil::{
    PHONE_UTIL, PhoneType,
    ddd_info::{DddInfo, DddLookup},
    errors::DddError,
    phoneutil::PhoneUtil,
};

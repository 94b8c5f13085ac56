mod phoneutil_tests;

use crate::PhoneUtil;

static ONCE: std::sync::Once = std::sync::Once::new();

fn get_phone_util() -> PhoneUtil {
    ONCE.call_once(|| {
        let _ = colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .try_init();
    });
    PhoneUtil::new()
}

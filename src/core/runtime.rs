//! Process-wide state that is initialised exactly once.

use std::sync::{Once, OnceLock};

static INIT: Once = Once::new();
static ACCESS_TOKEN: OnceLock<String> = OnceLock::new();

/// Install the panic hook and announce the engine. Safe to call repeatedly.
pub fn init_once() -> bool {
    let mut first = false;
    INIT.call_once(|| {
        #[cfg(feature = "console_error_panic_hook")]
        crate::set_panic_hook();

        console_log!("🎲 Dice engine {} initialized", env!("CARGO_PKG_VERSION"));
        first = true;
    });
    first
}

/// Store the globe access token. The first non-empty token wins; later calls
/// are ignored and return false.
pub fn set_access_token(token: &str) -> bool {
    let token = token.trim();
    if token.is_empty() {
        return false;
    }
    ACCESS_TOKEN.set(token.to_string()).is_ok()
}

pub fn access_token() -> Option<&'static str> {
    ACCESS_TOKEN.get().map(String::as_str)
}

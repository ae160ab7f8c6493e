//! Console logging
//!
//! `console_log!` / `console_warn!` / `console_error!` go to the browser console on
//! wasm and to stderr natively, so unit tests never call into JS imports.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
}

pub fn write(level: Level, message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let value = wasm_bindgen::JsValue::from_str(message);
        match level {
            Level::Info => web_sys::console::log_1(&value),
            Level::Warn => web_sys::console::warn_1(&value),
            Level::Error => web_sys::console::error_1(&value),
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let tag = match level {
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        };
        eprintln!("[dice-engine {}] {}", tag, message);
    }
}

#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::core::log::write($crate::core::log::Level::Info, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::core::log::write($crate::core::log::Level::Warn, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! console_error {
    ($($arg:tt)*) => {
        $crate::core::log::write($crate::core::log::Level::Error, &format!($($arg)*))
    };
}

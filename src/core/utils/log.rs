//! Console logging
//!
//! In the browser: forwards to `console.log` / `console.warn` via web-sys.
//! Natively (tests, benches): the message is type-checked and discarded,
//! because web-sys imports panic outside of wasm.
//!
//! Usage:
//! ```rust
//! use floaty_engine::console_log;
//!
//! let count = 11;
//! console_log!("scene ready: {} floaties", count);
//! ```

#[cfg(target_arch = "wasm32")]
pub fn log_str(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

#[cfg(target_arch = "wasm32")]
pub fn warn_str(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

/// `console.log` with `format!` syntax
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::core::utils::log::log_str(&format!($($arg)*));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            if false {
                let _ = format!($($arg)*);
            }
        }
    }};
}

/// `console.warn` with `format!` syntax
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::core::utils::log::warn_str(&format!($($arg)*));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            if false {
                let _ = format!($($arg)*);
            }
        }
    }};
}

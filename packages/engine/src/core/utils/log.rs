//! Console logging
//!
//! On wasm32 messages go to the browser console through `web_sys::console`.
//! Native builds (tests, tooling) compile the call down to nothing so the
//! JS bindings are never touched outside a browser.
//!
//! Usage:
//! ```rust
//! use serene_engine::console_log;
//!
//! let count = 300;
//! console_log!("particle field reset: {} particles", count);
//! ```

/// Log a formatted message to the browser console.
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::core::utils::log::log_str(&format!($($arg)*));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

#[cfg(target_arch = "wasm32")]
pub fn log_str(message: &str) {
    web_sys::console::log_1(&message.into());
}

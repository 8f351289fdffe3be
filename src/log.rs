//! Console logging that works both in the browser and in native tests.

#[cfg(target_arch = "wasm32")]
pub fn write(message: &str) {
    web_sys::console::log_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn write(message: &str) {
    eprintln!("{message}");
}

macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::log::write(&format!($($arg)*))
    };
}

pub(crate) use console_log;

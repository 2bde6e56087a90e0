// Console logging helpers; native builds (tests) write to stderr instead.

#[cfg(target_arch = "wasm32")]
pub fn clog(msg: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(msg));
}

#[cfg(target_arch = "wasm32")]
pub fn cwarn(msg: &str) {
    web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str(msg));
}

#[cfg(not(target_arch = "wasm32"))]
pub fn clog(msg: &str) {
    eprintln!("{msg}");
}

#[cfg(not(target_arch = "wasm32"))]
pub fn cwarn(msg: &str) {
    eprintln!("warn: {msg}");
}

/// Forward panics to the browser console.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        #[cfg(target_arch = "wasm32")]
        web_sys::console::error_1(&wasm_bindgen::JsValue::from_str(&info.to_string()));
        #[cfg(not(target_arch = "wasm32"))]
        eprintln!("{info}");
    }));
}

/// CSS pixel length.
pub fn px(v: f64) -> String {
    format!("{v}px")
}

//! Clipboard writes for copy buttons.

/// Copy `text` to the system clipboard. Returns whether the browser accepted
/// the write request.
pub fn copy_text(text: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(window) = web_sys::window() else {
            return false;
        };
        let navigator = window.navigator();
        let Some(clipboard) = js_sys::Reflect::get(&navigator, &"clipboard".into())
            .ok()
            .filter(|c| !c.is_undefined() && !c.is_null())
        else {
            return false;
        };
        let Some(write_text) = js_sys::Reflect::get(&clipboard, &"writeText".into())
            .ok()
            .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
        else {
            return false;
        };
        write_text.call1(&clipboard, &text.into()).is_ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        false
    }
}

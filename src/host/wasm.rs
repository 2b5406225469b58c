use web_sys::js_sys;
use web_sys::wasm_bindgen::JsValue;
use crate::host::HostIdentitySource;

/// This [HostIdentitySource] reads `location.hostname` of the JS global object
///
/// It works inside a window and inside a [Web Worker]. If there is no location, [None] is returned.
///
/// [Web Worker]: https://developer.mozilla.org/en-US/docs/Web/API/Web_Workers_API
#[derive(Debug)]
pub struct BrowserHost;

impl BrowserHost {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BrowserHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HostIdentitySource for BrowserHost {
    fn hostname(&self) -> Option<String> {
        #[inline(always)]
        fn internal() -> Result<JsValue, JsValue> {
            let location = js_sys::Reflect::get(js_sys::global().as_ref(), &"location".into())?;
            if location.is_undefined() || location.is_null() {
                return Ok(JsValue::UNDEFINED);
            }

            js_sys::Reflect::get(&location, &"hostname".into())
        }

        internal().ok()?.as_string()
    }
}

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PreviewError {
    #[error("DOM error: {0}")]
    Dom(String),

    #[error("template slot `{0}` is missing from the shadow root")]
    MissingSlot(&'static str),

    #[error("`{0}` is not a valid custom element name")]
    InvalidTagName(String),

    #[error("registration error: {0}")]
    Registration(String),

    #[error("invalid date: {0}")]
    InvalidDate(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for PreviewError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        PreviewError::Dom(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}

#[cfg(feature = "hydrate")]
impl From<PreviewError> for wasm_bindgen::JsValue {
    fn from(err: PreviewError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

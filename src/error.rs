use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum FxError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("document has no <{0}>")]
    MissingRoot(&'static str),
    #[error("element is not a {0}")]
    WrongElement(&'static str),
    #[error("dom call failed: {0}")]
    Dom(String),
    #[cfg(feature = "serde_json")]
    #[error("bad config: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for FxError {
    fn from(value: JsValue) -> Self {
        FxError::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<FxError> for JsValue {
    fn from(err: FxError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type FxResult<T> = Result<T, FxError>;

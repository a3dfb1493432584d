use thiserror::Error;

#[derive(Debug, Error)]
pub enum StarfieldError {
    #[error("no window available")]
    NoWindow,

    #[error("no document available")]
    NoDocument,

    #[error("canvas element #{0} not found")]
    CanvasNotFound(String),

    #[error("element #{0} is not a canvas")]
    NotACanvas(String),

    #[error("2d context unavailable")]
    ContextUnavailable,

    #[error("invalid starfield config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("JavaScript error: {0}")]
    Js(String),
}

impl From<wasm_bindgen::JsValue> for StarfieldError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        StarfieldError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MotionError {
    #[error("gradient needs at least one colour stop")]
    EmptyGradient,
    #[error("colour stop {index} at offset {offset} does not come after the previous stop")]
    UnorderedStops { index: usize, offset: f64 },
    #[error("colour stop {index} is too far from the previous stop to blend")]
    UnboundedSpan { index: usize },
    #[error("invalid hex colour {0:?}")]
    InvalidHex(String),
    #[error("{0} is not available")]
    Missing(&'static str),
    #[error("browser call failed: {0}")]
    Dom(String),
}

impl From<JsValue> for MotionError {
    fn from(value: JsValue) -> Self {
        MotionError::Dom(format!("{:?}", value))
    }
}

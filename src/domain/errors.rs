use derive_more::Display;

/// Failures of the outer shell. The simulation itself never fails.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum GameError {
    #[display(fmt = "Config Error: {}", _0)]
    Config(String),
    #[display(fmt = "Validation Error: {}", _0)]
    Validation(String),
    #[display(fmt = "Browser Error: {}", _0)]
    Browser(String),
    #[display(fmt = "Asset Error: {}: {}", path, reason)]
    Asset { path: String, reason: String },
}

impl std::error::Error for GameError {}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        GameError::Config(err.to_string())
    }
}

impl From<GameError> for wasm_bindgen::JsValue {
    fn from(err: GameError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}

pub type GameResult<T> = Result<T, GameError>;

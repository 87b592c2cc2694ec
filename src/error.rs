use wasm_bindgen::JsValue;

/// Failure decoding a state blob. Never reaches the caller of
/// [`GameSnapshot::decode`](crate::GameSnapshot::decode); it is logged and the
/// empty state is used instead.
#[derive(Debug)]
pub enum SnapshotError {
    Json(serde_json::Error),
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SnapshotError::Json(err) => Some(err),
        }
    }
}

impl std::fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapshotError::Json(err) => write!(f, "malformed game state: {}", err),
        }
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(err: serde_json::Error) -> Self {
        SnapshotError::Json(err)
    }
}

/// Errors mounting a board onto the page.
#[derive(Debug, PartialEq)]
pub enum BoardError {
    NoWindow,
    NoDocument,
    MissingCanvas(String),
    NoContext,
    InvalidPlayer(String),
    Dom(String),
}

impl std::error::Error for BoardError {}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::NoWindow => write!(f, "no window"),
            BoardError::NoDocument => write!(f, "no document"),
            BoardError::MissingCanvas(id) => write!(f, "no canvas element with id '{}'", id),
            BoardError::NoContext => write!(f, "canvas has no 2d context"),
            BoardError::InvalidPlayer(raw) => {
                write!(f, "player number must be 1-4, got '{}'", raw)
            }
            BoardError::Dom(msg) => write!(f, "dom call failed: {}", msg),
        }
    }
}

impl From<JsValue> for BoardError {
    fn from(value: JsValue) -> Self {
        BoardError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<BoardError> for JsValue {
    fn from(err: BoardError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

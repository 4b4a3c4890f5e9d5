use serde::{Serialize, ser::Serializer};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid color format: {0:?}")]
    InvalidColorFormat(String),
    #[error("config serialization failed: {0}")]
    ConfigSerialization(#[from] serde_json::Error),
    #[error("encoding failure: {0}")]
    EncodingFailure(String),
    #[error("failed to load bundle artifact {path}: {reason}")]
    ArtifactLoad { path: String, reason: String },
    #[error("script execution failed: {0}")]
    ScriptExecution(String),
    #[error("configuration not available")]
    ConfigNotAvailable,
    #[error("no background color configured")]
    NoBackgroundColor,
    #[error("tauri error: {0}")]
    Tauri(#[from] tauri::Error),
}

impl Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

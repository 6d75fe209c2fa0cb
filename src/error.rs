use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("profile document not found: {path} (run `profile-api template` to create one, or pass --input)")]
    InputNotFound { path: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown endpoint: {name}")]
    UnknownEndpoint { name: String },

    #[error("endpoint has no data: {name}")]
    EmptyEndpoint { name: String },

    #[error("refusing to overwrite existing file: {path} (use --force)")]
    OutputExists { path: String },

    #[error("invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ProfileError>;

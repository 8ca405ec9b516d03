use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkillboardError {
    #[error("user not found: {username}")]
    UserNotFound { username: String },

    #[error("area not found: {key}")]
    AreaNotFound { key: String },

    #[error("skill not found: {key}")]
    SkillNotFound { key: String },

    #[error("user already exists: {username}")]
    DuplicateUser { username: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Validation error in {field}: {reason}")]
    ValidationError { field: String, reason: String },
}

impl SkillboardError {
    /// NotFound is the one category callers are expected to branch on
    /// (it maps to a distinct exit path in the CLI).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            SkillboardError::UserNotFound { .. }
                | SkillboardError::AreaNotFound { .. }
                | SkillboardError::SkillNotFound { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, SkillboardError>;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkillGapError {
    #[error("Could not read {source_name} source '{location}': {reason}")]
    SourceUnavailable {
        source_name: String,
        location: String,
        reason: String,
    },

    #[error("Source location not configured: {field}")]
    MissingSourceError { field: String },

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("No skill records for alt '{alt}' under main '{main}'")]
    UnknownCharacter { main: String, alt: String },
}

impl SkillGapError {
    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            SkillGapError::SourceUnavailable { source_name, .. } => format!(
                "A required CSV file could not be read ({} data).",
                source_name
            ),
            SkillGapError::MissingSourceError { field } => {
                format!("The {} CSV path/URL is not set.", field)
            }
            SkillGapError::UnknownCharacter { main, alt } => {
                format!("Character '{}' was not found under main '{}'.", alt, main)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SkillGapError::SourceUnavailable { .. } | SkillGapError::HttpError(_) => {
                "Check that the path or URL is correct and the file is accessible"
            }
            SkillGapError::MissingSourceError { .. } => {
                "Set the location in the [sources] table of the config file or pass --skills/--multipliers"
            }
            SkillGapError::ConfigValidationError { .. }
            | SkillGapError::InvalidConfigValueError { .. } => {
                "Fix the reported field in the config file and try again"
            }
            SkillGapError::UnknownCharacter { .. } => {
                "Run with --list to see the characters present in the skills data"
            }
            SkillGapError::IoError(_) | SkillGapError::SerializationError(_) => {
                "Re-run with --verbose for more details"
            }
        }
    }

    /// 依錯誤種類決定程式結束碼
    pub fn exit_code(&self) -> i32 {
        match self {
            SkillGapError::ConfigValidationError { .. }
            | SkillGapError::InvalidConfigValueError { .. }
            | SkillGapError::MissingSourceError { .. } => 1,
            SkillGapError::SourceUnavailable { .. } | SkillGapError::HttpError(_) => 2,
            SkillGapError::UnknownCharacter { .. } => 4,
            SkillGapError::IoError(_) | SkillGapError::SerializationError(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, SkillGapError>;

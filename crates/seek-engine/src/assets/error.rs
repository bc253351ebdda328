/// Problems found while loading or validating a puzzle configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("puzzle JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("letter grid has no rows or no columns")]
    EmptyGrid,

    #[error("row {row} has {found} letters, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },

    #[error("target word {word:?} must be non-empty and alphabetic")]
    InvalidWord { word: String },

    #[error("target word {word:?} is listed twice")]
    DuplicateWord { word: String },

    #[error("palette must contain at least one colour")]
    EmptyPalette,

    #[error("colour {value:?} is not #RRGGBB or #RRGGBBAA")]
    InvalidColor { value: String },

    #[error("guard for {word:?} names line {index}, but the grid only has {limit}")]
    GuardOutOfBounds { word: String, index: usize, limit: usize },

    #[error("guard names {word:?}, which is not a target word")]
    UnknownGuardWord { word: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let err = ConfigError::RaggedRow { row: 4, expected: 12, found: 11 };
        assert_eq!(err.to_string(), "row 4 has 11 letters, expected 12");

        let err = ConfigError::UnknownGuardWord { word: "ARTEKALE".into() };
        assert!(err.to_string().contains("ARTEKALE"));
    }

    #[test]
    fn json_errors_convert() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: ConfigError = parse.unwrap_err().into();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}

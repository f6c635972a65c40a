//! Domain error types.

/// Top-level error type for portfel.
#[derive(Debug, thiserror::Error)]
pub enum PortfelError {
    #[error("source error: {reason}")]
    Source { reason: String },

    #[error("missing column '{column}' in {file}")]
    MissingColumn { file: String, column: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("report error: {reason}")]
    Report { reason: String },
}

impl From<&PortfelError> for std::process::ExitCode {
    fn from(err: &PortfelError) -> Self {
        let code: u8 = match err {
            PortfelError::ConfigParse { .. } | PortfelError::ConfigMissing { .. } => 2,
            PortfelError::Source { .. } | PortfelError::MissingColumn { .. } => 3,
            PortfelError::Report { .. } => 4,
        };
        std::process::ExitCode::from(code)
    }
}

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a rename run.
///
/// All variants are surfaced to the caller as events or early returns; none
/// of them is retried automatically.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The keep pattern does not compile as a regular expression. Raised
    /// when the rules are compiled, before any file is touched.
    #[error("invalid keep pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The keep pattern compiled but matched nothing in a file's stem.
    #[error("keep pattern `{pattern}` matched nothing in `{stem}`")]
    PatternNoMatch { pattern: String, stem: String },

    /// Refusing to rename onto a path that already exists.
    #[error("cannot rename `{}` to `{}`: target already exists", .from.display(), .to.display())]
    TargetExists { from: PathBuf, to: PathBuf },

    /// The underlying filesystem rename failed.
    #[error("failed to rename `{}` to `{}`: {source}", .from.display(), .to.display())]
    RenameFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input path has no usable file name (e.g. `/` or `..`), or the
    /// name is not valid UTF-8.
    #[error("not a renamable file name: `{}`", .path.display())]
    InvalidFileName { path: PathBuf },
}

impl EngineError {
    /// True for errors that indict the rule configuration rather than a
    /// specific file on disk.
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::InvalidPattern { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mentions_paths() {
        let err = EngineError::TargetExists {
            from: PathBuf::from("a.txt"),
            to: PathBuf::from("b.txt"),
        };
        let msg = err.to_string();
        assert!(msg.contains("a.txt"));
        assert!(msg.contains("b.txt"));
        assert!(msg.contains("already exists"));
    }

    #[test]
    fn test_pattern_no_match_display() {
        let err = EngineError::PatternNoMatch {
            pattern: "final.*".to_string(),
            stem: "notes".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "keep pattern `final.*` matched nothing in `notes`"
        );
    }

    #[test]
    fn test_configuration_error_classification() {
        let bad = regex::Regex::new("(").unwrap_err();
        let err = EngineError::InvalidPattern {
            pattern: "(".to_string(),
            source: bad,
        };
        assert!(err.is_configuration_error());

        let err = EngineError::PatternNoMatch {
            pattern: "x".to_string(),
            stem: "y".to_string(),
        };
        assert!(!err.is_configuration_error());
    }
}

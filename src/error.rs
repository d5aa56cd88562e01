//! Fixture construction and configuration errors.
//!
//! Nothing in the per-tick path returns an error: stale handles and unknown
//! signals degrade to no-ops. [`FixtureError`] is raised only while building
//! fixtures, loading configuration, or reading scene/replay files, so bad
//! input is rejected before the first tick runs.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("input fixture `{0}` has no actions bound")]
    EmptyActionSet(String),
    #[error("{what} interval must be positive and finite, got {value}")]
    NonPositiveInterval { what: &'static str, value: f32 },
    #[error("spawner item lifetime must be positive and finite, got {0}")]
    NonPositiveLifetime(f32),
    #[error("{what} must be a non-zero finite vector")]
    InvalidDirection { what: &'static str },
    #[error("invalid tween: {0}")]
    InvalidTween(String),
    #[error("trigger volume `{0}` accepts no collision layers")]
    EmptyLayerFilter(String),
    #[error("fixture name `{0}` is registered twice")]
    DuplicateName(String),
    #[error("config error: {0}")]
    Config(String),
    #[error("i/o error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to build behavior schedule: {0}")]
    Schedule(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_value() {
        let err = FixtureError::NonPositiveInterval {
            what: "spawner",
            value: -1.0,
        };
        assert_eq!(
            err.to_string(),
            "spawner interval must be positive and finite, got -1"
        );
        assert_eq!(
            FixtureError::EmptyActionSet("cube_a".into()).to_string(),
            "input fixture `cube_a` has no actions bound"
        );
    }

    #[test]
    fn test_json_errors_convert() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: FixtureError = parse.unwrap_err().into();
        assert!(matches!(err, FixtureError::Json(_)));
    }
}

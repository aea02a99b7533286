//! Error types for the flow field core.

use thiserror::Error;

/// Errors produced by engine, surface, and configuration operations.
///
/// The particle motion model itself is total and never produces one of these;
/// they come from construction, parsing, and the presentation layer.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Width or height was zero when creating a surface or seed.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// A parameter existed but had the wrong JSON type.
    #[error("parameter type mismatch for '{name}': expected {expected}, got {got}")]
    ParamTypeMismatch {
        name: String,
        expected: String,
        got: String,
    },

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// An engine name in a seed file was not recognized.
    #[error("unknown engine: {0}")]
    UnknownEngine(String),

    /// Writing a snapshot or reading a seed file failed.
    #[error("i/o error: {0}")]
    Io(String),

    /// The presentation surface rejected a frame.
    #[error("surface error: {0}")]
    Surface(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimensions_displays_readable_message() {
        let err = EngineError::InvalidDimensions;
        let msg = format!("{err}");
        assert!(
            msg.contains("width") && msg.contains("height"),
            "expected message mentioning width and height, got: {msg}"
        );
    }

    #[test]
    fn param_type_mismatch_includes_all_fields() {
        let err = EngineError::ParamTypeMismatch {
            name: "grid_size".into(),
            expected: "integer".into(),
            got: "string".into(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("grid_size"), "missing param name in: {msg}");
        assert!(msg.contains("integer"), "missing expected type in: {msg}");
        assert!(msg.contains("string"), "missing got type in: {msg}");
    }

    #[test]
    fn invalid_color_includes_message() {
        let err = EngineError::InvalidColor("bad hex".into());
        assert!(format!("{err}").contains("bad hex"));
    }

    #[test]
    fn unknown_engine_includes_name() {
        let err = EngineError::UnknownEngine("gray-scott".into());
        assert!(format!("{err}").contains("gray-scott"));
    }

    #[test]
    fn io_and_surface_errors_carry_message() {
        assert!(EngineError::Io("disk full".into())
            .to_string()
            .contains("disk full"));
        assert!(EngineError::Surface("window closed".into())
            .to_string()
            .contains("window closed"));
    }

    #[test]
    fn engine_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EngineError>();
    }

    #[test]
    fn engine_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<EngineError>();
    }
}

//! Error handling for the modgate CLI.
//!
//! Errors form a small hierarchy built with `thiserror`:
//!
//! - [`CliError`] is what every command returns
//! - [`ConfigError`] covers loading and resolving the build request
//!
//! Messages carry a `Hint:` line where there is something concrete the user
//! can do. The binary turns a `CliError` into a `miette` report at the very
//! end (see [`cli_error_to_miette`]).
//!
//! # Example
//!
//! ```rust,no_run
//! use modgate_cli::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn read_descriptor(path: &Path) -> Result<String> {
//!     std::fs::read_to_string(path)
//!         .with_path(path)
//!         .with_hint("Pass the path to a .uplugin or .uproject style JSON file")
//! }
//! ```

mod miette;

use modgate_descriptor::DescriptorError;
use std::path::PathBuf;
use thiserror::Error;

pub use self::miette::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration-related errors (missing file, bad value, unknown platform)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A descriptor document could not be decoded
    #[error("Invalid descriptor in {}: {source}", .path.display())]
    Descriptor {
        path: PathBuf,
        #[source]
        source: DescriptorError,
    },

    /// Two modules in one document share a name
    #[error(
        "Duplicate module '{name}' in {}\n\nHint: Module names must be unique within a document",
        .path.display()
    )]
    DuplicateModule { name: String, path: PathBuf },

    /// `--deny-warnings` was given and diagnostics were reported
    #[error("{count} warning(s) reported and --deny-warnings is set")]
    WarningsDenied { count: usize },

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with custom messages
    #[error("{0}")]
    Custom(String),
}

/// Errors raised while building the effective build request.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist
    #[error(
        "Config file not found: {}\n\nHint: Create a modgate.toml file or pass an existing \
         file to --config",
        .0.display()
    )]
    NotFound(PathBuf),

    /// A configuration value has the wrong type or an unknown name
    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        field: String,
        value: String,
        hint: String,
    },

    /// The requested platform is not known to the registry
    #[error("Unknown platform '{name}'\n\nHint: {hint}")]
    UnknownPlatform { name: String, hint: String },
}

pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Turn a not-found I/O error into [`CliError::FileNotFound`] for `path`.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;

    /// Append a hint to the error message.
    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| match e.into() {
            CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                CliError::FileNotFound(path.as_ref().to_path_buf())
            }
            other => other,
        })
    }

    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}\n\nHint: {}", err, hint))
        })
    }
}

/// Attach the file a descriptor error came from.
pub(crate) fn descriptor_error(
    path: &std::path::Path,
) -> impl FnOnce(DescriptorError) -> CliError + '_ {
    move |source| CliError::Descriptor {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_not_found() {
        let err = ConfigError::NotFound(PathBuf::from("modgate.toml"));
        let msg = err.to_string();
        assert!(msg.contains("Config file not found"));
        assert!(msg.contains("modgate.toml"));
        assert!(msg.contains("Hint:"));
    }

    #[test]
    fn test_unknown_platform_carries_hint() {
        let err = ConfigError::UnknownPlatform {
            name: "Amiga".to_string(),
            hint: "Add it to 'platforms'".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Unknown platform 'Amiga'"));
        assert!(msg.contains("Hint: Add it to 'platforms'"));
    }

    #[test]
    fn test_cli_error_from_config_error() {
        let config_err = ConfigError::NotFound(PathBuf::from("modgate.toml"));
        let cli_err: CliError = config_err.into();
        assert!(matches!(cli_err, CliError::Config(_)));
    }

    #[test]
    fn test_descriptor_error_names_file() {
        let source = DescriptorError::MissingRequiredField {
            field: "Type",
            module: Some("Core".to_string()),
        };
        let err = descriptor_error(std::path::Path::new("Sample.uplugin"))(source);
        let msg = err.to_string();
        assert!(msg.contains("Sample.uplugin"));
        assert!(msg.contains("'Type'"));
    }

    #[test]
    fn test_duplicate_module_message() {
        let err = CliError::DuplicateModule {
            name: "Core".to_string(),
            path: PathBuf::from("Sample.uplugin"),
        };
        assert!(err.to_string().contains("Duplicate module 'Core'"));
    }

    #[test]
    fn test_result_ext_with_path() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file not found",
        ));

        let err = result.with_path("/test/path.json").unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }

    #[test]
    fn test_result_ext_with_path_keeps_other_errors() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));

        let err = result.with_path("/test/path.json").unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }

    #[test]
    fn test_result_ext_with_hint() {
        let result: std::result::Result<(), ConfigError> =
            Err(ConfigError::NotFound(PathBuf::from("modgate.toml")));

        let err = result.with_hint("Try creating the file").unwrap_err();
        assert!(err.to_string().contains("Hint: Try creating the file"));
    }
}

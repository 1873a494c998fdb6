//! Comprehensive error handling for the Stubble CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//! - Exit code mapping

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use stubble_core::application::ApplicationError;
use stubble_core::domain::{CONVENTION_REGISTRY, DomainError};
use stubble_core::error::StubbleError;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Comprehensive CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input, caught before the core pipeline runs.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// A configuration value could not be read, parsed, or applied.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An error propagated from `stubble-core`.
    ///
    /// Wrapped so the CLI can attach suggestions and an exit code by
    /// matching on the core variants without touching core internals.
    #[error("Generation failed: {0}")]
    Core(#[from] StubbleError),

    /// An I/O operation failed outside the core pipeline.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Operation cancelled by user.
    #[error("Operation cancelled")]
    Cancelled,

    /// Feature not available (e.g. prompts without the `interactive` build).
    #[error("Feature not available: {feature}")]
    FeatureNotAvailable { feature: &'static str },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message } => vec![
                format!("Check your input: {}", message),
                "Use --help for usage information".into(),
            ],

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                "Check the file passed via --config".into(),
                "Remove the file to fall back to built-in defaults".into(),
            ],

            Self::Core(core) => core_suggestions(core),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check file permissions".into(),
                "Check available disk space".into(),
            ],

            Self::Cancelled => vec![
                "Operation was cancelled".into(),
                "No files were written".into(),
            ],

            Self::FeatureNotAvailable { feature } => vec![
                format!("The '{}' feature is not compiled into this build", feature),
                format!("Reinstall with: cargo install stubble-cli --features {}", feature),
                "Or pass KIND and NAME directly on the command line".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(StubbleError::Domain(_)) => ErrorCategory::UserError,
            Self::Core(StubbleError::Application(app)) => match app {
                ApplicationError::TemplateNotFound { .. } => ErrorCategory::NotFound,
                ApplicationError::Collision { .. } => ErrorCategory::UserError,
                ApplicationError::Io { .. } => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
            Self::Cancelled => ErrorCategory::UserError,
            Self::FeatureNotAvailable { .. } => ErrorCategory::Configuration,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        // Error header
        output.push_str(&format!(
            "\n{} {}\n\n",
            "\u{2717}".red().bold(), // ✗
            "Error:".red().bold()
        ));

        // Main error message
        output.push_str(&format!("  {}\n", self.to_string().red()));

        // Error chain (if verbose)
        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "\u{2192}".dimmed(), // →
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        // Suggestions
        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {}\n", suggestion));
            }
        }

        // Hint to re-run with -v
        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`] without ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {}\n", self));

        if verbose {
            let mut src = std::error::Error::source(self);
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::NotFound => tracing::warn!("Not found: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments).
    UserError,
    /// Resource not found.
    NotFound,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

// ── core error suggestions ────────────────────────────────────────────────────

/// Suggestions for errors that originate in the core pipeline.
///
/// The match is exhaustive on purpose: a new core variant forces a decision
/// about what to tell the user.
fn core_suggestions(err: &StubbleError) -> Vec<String> {
    match err {
        StubbleError::Domain(DomainError::InvalidName { .. }) => vec![
            "Separate segments with '/': User/CreateUser".into(),
            "At least one non-empty segment is required".into(),
        ],

        StubbleError::Domain(DomainError::UnsupportedKind { .. }) => {
            let mut suggestions = vec!["Supported kinds:".to_string()];
            for convention in CONVENTION_REGISTRY {
                suggestions.push(format!(
                    "  \u{2022} {:<8} generates into {}/",
                    convention.kind, convention.root_dir
                ));
            }
            suggestions
        }

        StubbleError::Application(ApplicationError::TemplateNotFound { .. }) => {
            vec!["List the registered kinds: stubble list".into()]
        }

        StubbleError::Application(ApplicationError::Collision { path }) => vec![
            format!("'{}' already exists and was left untouched", path.display()),
            "Choose a different name".into(),
            "Remove the existing file first if it is stale".into(),
        ],

        StubbleError::Application(ApplicationError::Io { .. }) => vec![
            "Check permissions on the application root".into(),
            "Ensure the application root exists and is writable".into(),
        ],
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    use stubble_core::domain::Kind;

    fn collision() -> CliError {
        CliError::Core(StubbleError::Application(ApplicationError::Collision {
            path: PathBuf::from("app/Dto/UserDto.rs"),
        }))
    }

    // ── suggestions ───────────────────────────────────────────────────────

    #[test]
    fn collision_suggests_a_different_name() {
        let suggestions = collision().suggestions();
        assert!(suggestions.iter().any(|s| s.contains("different name")));
        assert!(suggestions.iter().any(|s| s.contains("UserDto.rs")));
    }

    #[test]
    fn unsupported_kind_lists_registered_kinds() {
        let err = CliError::Core(StubbleError::Domain(DomainError::UnsupportedKind {
            kind: "widget".into(),
        }));
        let suggestions = err.suggestions();
        assert!(suggestions.iter().any(|s| s.contains("dto")));
        assert!(suggestions.iter().any(|s| s.contains("service")));
    }

    #[test]
    fn invalid_name_suggests_separators() {
        let err = CliError::Core(StubbleError::Domain(DomainError::InvalidName {
            name: "/".into(),
            reason: "name has no segments".into(),
        }));
        assert!(err.suggestions().iter().any(|s| s.contains("'/'")));
    }

    #[test]
    fn cancelled_confirms_nothing_was_written() {
        let suggestions = CliError::Cancelled.suggestions();
        assert!(suggestions.iter().any(|s| s.contains("No files")));
    }

    // ── categories and exit codes ─────────────────────────────────────────

    #[test]
    fn exit_code_user_error() {
        let err = CliError::InvalidInput {
            message: "x".into(),
        };
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn exit_code_collision_is_user_error() {
        assert_eq!(collision().category(), ErrorCategory::UserError);
        assert_eq!(collision().exit_code(), 2);
    }

    #[test]
    fn exit_code_template_not_found() {
        let err = CliError::Core(StubbleError::Application(
            ApplicationError::TemplateNotFound { kind: Kind::Dto },
        ));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn exit_code_configuration() {
        let err = CliError::ConfigError {
            message: "x".into(),
            source: None,
        };
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn exit_code_internal() {
        let err = CliError::IoError {
            message: "x".into(),
            source: io::Error::other("e"),
        };
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn domain_errors_are_user_errors() {
        let err = CliError::Core(StubbleError::Domain(DomainError::InvalidName {
            name: "".into(),
            reason: "name is empty".into(),
        }));
        assert_eq!(err.category(), ErrorCategory::UserError);
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_contains_error_and_suggestions() {
        let s = collision().format_plain(false);
        assert!(s.contains("Error:"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--verbose"));
    }

    #[test]
    fn format_plain_verbose_shows_chain_and_omits_hint() {
        let err = CliError::IoError {
            message: "writing file".into(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let s = err.format_plain(true);
        assert!(s.contains("Caused by"));
        assert!(!s.contains("--verbose"));
    }

    // ── conversions ───────────────────────────────────────────────────────

    #[test]
    fn io_errors_convert_with_from() {
        let err = CliError::from(io::Error::new(io::ErrorKind::NotFound, "missing"));
        assert!(matches!(err, CliError::IoError { .. }));
        assert_eq!(err.exit_code(), 1);
    }
}

use std::error::Error as StdError;
use std::fmt::{self, Display, Formatter};

/// Operator guidance reported when bridge installation fails.
///
/// Installation only fails when the host application was built without the
/// native bridge, so the remedy is always the same rebuild instruction.
pub const INSTALLATION_FAILURE_MESSAGE: &str = "syncfile: failed to install the file bridge. \
     Make sure the host application was rebuilt after adding the syncfile dependency.";

/// Classification of syncfile failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Free-form error message.
    Message(String),
    /// Bridge installation failure.
    Installation,
    /// Wrapper for I/O failures.
    Io,
}

/// Error type used by syncfile components.
///
/// Carries an [`ErrorKind`] classification plus an optional underlying cause
/// reachable through [`std::error::Error::source`].
#[derive(Debug)]
pub struct SyncFileError {
    kind: ErrorKind,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl SyncFileError {
    /// Creates an error of the given kind with no underlying cause.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Creates the installation failure error with its fixed message.
    pub fn installation() -> Self {
        Self::new(ErrorKind::Installation)
    }

    /// Attaches an underlying cause to this error.
    pub fn with_source(
        mut self,
        source: impl Into<Box<dyn StdError + Send + Sync + 'static>>,
    ) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Returns the error classification.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns `true` for setup failures, as opposed to per-call failures.
    pub fn is_installation_failure(&self) -> bool {
        matches!(self.kind, ErrorKind::Installation)
    }
}

impl Display for SyncFileError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::Message(message) => f.write_str(message),
            ErrorKind::Installation => f.write_str(INSTALLATION_FAILURE_MESSAGE),
            ErrorKind::Io => match &self.source {
                Some(source) => write!(f, "I/O error: {source}"),
                None => f.write_str("I/O error"),
            },
        }
    }
}

impl StdError for SyncFileError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source.as_deref().map(|source| source as _)
    }
}

impl From<std::io::Error> for SyncFileError {
    fn from(value: std::io::Error) -> Self {
        Self::new(ErrorKind::Io).with_source(value)
    }
}

impl From<String> for SyncFileError {
    fn from(value: String) -> Self {
        Self::new(ErrorKind::Message(value))
    }
}

impl From<&str> for SyncFileError {
    fn from(value: &str) -> Self {
        Self::new(ErrorKind::Message(value.to_owned()))
    }
}

/// Result alias that uses [`SyncFileError`] as its error type.
pub type Result<T> = std::result::Result<T, SyncFileError>;

/// Creates a [`SyncFileError`] with a formatted message.
#[macro_export]
macro_rules! syncfile_message_error {
    ($($arg:tt)*) => {
        $crate::error::SyncFileError::new($crate::error::ErrorKind::Message(format!($($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::{ErrorKind, SyncFileError, INSTALLATION_FAILURE_MESSAGE};

    #[test]
    fn converts_str_to_message_error() {
        let error = SyncFileError::from("boom");
        assert!(matches!(error.kind(), ErrorKind::Message(message) if message == "boom"));
    }

    #[test]
    fn converts_io_to_io_kind_with_source() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error = SyncFileError::from(io_error);
        assert!(matches!(error.kind(), ErrorKind::Io));
        assert!(error.source().is_some());
    }

    #[test]
    fn installation_error_displays_rebuild_instruction() {
        let error = SyncFileError::installation();
        assert!(error.is_installation_failure());
        assert_eq!(error.to_string(), INSTALLATION_FAILURE_MESSAGE);
    }

    #[test]
    fn message_macro_formats_arguments() {
        let error = crate::syncfile_message_error!("failed to read {}", "/a/b.txt");
        assert!(
            matches!(error.kind(), ErrorKind::Message(message) if message == "failed to read /a/b.txt")
        );
        assert!(!error.is_installation_failure());
    }

    #[test]
    fn source_chain_survives_wrapping() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "locked");
        let error = crate::syncfile_message_error!("failed to read /secret")
            .with_source(SyncFileError::from(io_error));

        let inner = error.source().expect("wrapped cause should be reachable");
        assert_eq!(inner.to_string(), "I/O error: locked");
    }
}

//! Common infrastructure shared by syncfile components.

pub mod bridge_path;
pub mod error;
pub mod logging;
pub mod shared_string;

pub use bridge_path::BridgePath;
pub use error::{ErrorKind, Result, SyncFileError, INSTALLATION_FAILURE_MESSAGE};
pub use parking_lot::Mutex;
pub use shared_string::SharedString;

/// Build-time project revision string.
pub const PROJECT_REVISION: &str = env!("SYNCFILE_PROJECT_REVISION");

/// Returns the build-time project revision string.
pub fn project_revision() -> &'static str {
    PROJECT_REVISION
}

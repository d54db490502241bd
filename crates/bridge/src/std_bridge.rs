use std::path::PathBuf;

use syncfile_base::{
    syncfile_message_error, BridgePath, ErrorKind, Result, SharedString, SyncFileError,
};

use crate::encoding::decode_bridge_text;
use crate::FileBridge;

/// Standard-library-backed file bridge.
///
/// Paths resolve against a root directory; an absolute [`BridgePath`]
/// replaces the root outright, so device-absolute paths behave the same as
/// in a bridge rooted at `/`.
#[derive(Debug, Default, Clone)]
pub struct StdFileBridge {
    root: PathBuf,
}

impl StdFileBridge {
    /// Creates a new bridge anchored at the current working directory.
    pub fn new_at_cwd() -> Self {
        Self {
            root: std::env::current_dir().unwrap_or_default(),
        }
    }

    /// Creates a new bridge anchored at the given root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &BridgePath) -> PathBuf {
        self.root.join(path.as_str())
    }

    fn read_bytes(&self, path: &BridgePath) -> Result<Vec<u8>> {
        let abs_path = self.resolve(path);
        std::fs::read(&abs_path).map_err(|error| {
            syncfile_message_error!("failed to read {}", abs_path.display())
                .with_source(SyncFileError::new(ErrorKind::Io).with_source(error))
        })
    }
}

impl FileBridge for StdFileBridge {
    fn read_text(&self, path: &BridgePath) -> Result<SharedString> {
        self.read_bytes(path).map(|bytes| decode_bridge_text(&bytes))
    }

    fn read_binary(&self, path: &BridgePath) -> Result<Vec<u8>> {
        self.read_bytes(path)
    }

    fn exists(&self, path: &BridgePath) -> bool {
        self.resolve(path).exists()
    }
}

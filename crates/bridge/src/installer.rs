use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use crate::{FileBridge, StdFileBridge};

/// Capability that makes a file bridge callable.
///
/// `None` reports an installation failure. A failed attempt may be retried
/// by a later call; after the first success the caller drops the installer
/// and never invokes it again.
pub trait BridgeInstaller: Send + Sync {
    /// Attempts to install a bridge.
    fn install(&self) -> Option<Arc<dyn FileBridge>>;
}

/// Installer that provides a [`StdFileBridge`] over the real filesystem.
#[derive(Debug, Clone)]
pub struct StdBridgeInstaller {
    root: PathBuf,
}

impl StdBridgeInstaller {
    /// Creates an installer whose bridge is anchored at the given root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Creates an installer whose bridge is anchored at the current working
    /// directory.
    pub fn new_at_cwd() -> Self {
        Self {
            root: std::env::current_dir().unwrap_or_default(),
        }
    }
}

impl BridgeInstaller for StdBridgeInstaller {
    fn install(&self) -> Option<Arc<dyn FileBridge>> {
        debug!(root = %self.root.display(), "installing std file bridge");
        Some(Arc::new(StdFileBridge::new(self.root.clone())))
    }
}

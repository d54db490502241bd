use std::sync::Arc;

use syncfile_base::{BridgePath, Mutex, Result, SharedString, SyncFileError};
use tracing::{info, warn};

use crate::{BridgeInstaller, FileBridge};

enum BridgeState {
    /// Bridge not installed yet; holds the installer capability.
    Pending(Box<dyn BridgeInstaller>),
    /// Bridge installed; the installer has been dropped.
    Ready(Arc<dyn FileBridge>),
}

/// Synchronous file access backed by a lazily installed bridge.
///
/// The first call to any public operation installs the bridge; the
/// `Pending` to `Ready` transition is one-way and happens at most once per
/// facade. A failed installation leaves the facade `Pending`, so the next
/// call attempts installation again. Every operation blocks the calling
/// thread until the underlying read completes.
pub struct FileAccess {
    state: Mutex<BridgeState>,
}

impl FileAccess {
    /// Creates a facade over an already installed bridge.
    ///
    /// No installer exists in this configuration, so no installation is
    /// ever attempted.
    pub fn with_bridge(bridge: Arc<dyn FileBridge>) -> Self {
        Self {
            state: Mutex::new(BridgeState::Ready(bridge)),
        }
    }

    /// Creates a facade that installs its bridge on first use.
    pub fn with_installer(installer: impl BridgeInstaller + 'static) -> Self {
        Self {
            state: Mutex::new(BridgeState::Pending(Box::new(installer))),
        }
    }

    /// Returns the installed bridge, installing it first if necessary.
    fn ensure_installed(&self) -> Result<Arc<dyn FileBridge>> {
        let mut state = self.state.lock();
        let bridge = match &*state {
            BridgeState::Ready(bridge) => return Ok(bridge.clone()),
            BridgeState::Pending(installer) => match installer.install() {
                Some(bridge) => bridge,
                None => {
                    warn!("file bridge installation failed");
                    return Err(SyncFileError::installation());
                }
            },
        };
        info!("file bridge installed");
        *state = BridgeState::Ready(bridge.clone());
        Ok(bridge)
    }

    /// Reads an entire file as text (synchronous).
    pub fn read_text_file_sync(&self, path: &BridgePath) -> Result<SharedString> {
        self.ensure_installed()?.read_text(path)
    }

    /// Reads an entire file as raw bytes (synchronous).
    pub fn read_binary_file_sync(&self, path: &BridgePath) -> Result<Vec<u8>> {
        self.ensure_installed()?.read_binary(path)
    }

    /// Checks whether a file or directory exists (synchronous).
    ///
    /// The boolean is the bridge's verdict unchanged; the error case only
    /// covers installation failure.
    pub fn exists_sync(&self, path: &BridgePath) -> Result<bool> {
        Ok(self.ensure_installed()?.exists(path))
    }
}

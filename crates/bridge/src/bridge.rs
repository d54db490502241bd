use syncfile_base::{BridgePath, Result, SharedString};

/// Synchronous file operations supplied by an installed bridge.
///
/// Every operation blocks the calling thread until the underlying read
/// completes. The facade forwards results and errors unchanged, so the
/// bridge alone decides path meaning, encoding, and failure policy.
pub trait FileBridge: Send + Sync {
    /// Reads an entire file and decodes it as text.
    fn read_text(&self, path: &BridgePath) -> Result<SharedString>;

    /// Reads an entire file as raw bytes.
    fn read_binary(&self, path: &BridgePath) -> Result<Vec<u8>>;

    /// Returns `true` if the path refers to an existing file or directory.
    fn exists(&self, path: &BridgePath) -> bool;
}

use std::collections::{HashMap, HashSet};

use syncfile_base::{
    syncfile_message_error, BridgePath, ErrorKind, Mutex, Result, SharedString, SyncFileError,
};

use crate::encoding::decode_bridge_text;
use crate::FileBridge;

#[derive(Debug, Default)]
struct State {
    files: HashMap<BridgePath, Vec<u8>>,
    dirs: HashSet<BridgePath>,
}

/// In-memory file bridge for tests and deterministic behavior.
///
/// Content is stored as raw bytes and decoded on text reads with the same
/// rule as [`StdFileBridge`](crate::StdFileBridge). Seeding happens through
/// the inherent helpers; the [`FileBridge`] trait itself stays read-only.
#[derive(Debug, Default)]
pub struct InMemoryFileBridge {
    state: Mutex<State>,
}

impl InMemoryFileBridge {
    /// Stores raw bytes under the given path.
    pub fn write_file(&self, path: impl Into<BridgePath>, bytes: impl Into<Vec<u8>>) {
        self.state.lock().files.insert(path.into(), bytes.into());
    }

    /// Stores text content under the given path.
    pub fn write_text(&self, path: impl Into<BridgePath>, text: &str) {
        self.write_file(path, text.as_bytes().to_vec());
    }

    /// Marks a directory as existing.
    pub fn add_dir(&self, path: impl Into<BridgePath>) {
        self.state.lock().dirs.insert(path.into());
    }

    fn not_found_error(path: &BridgePath) -> SyncFileError {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "path not found");
        syncfile_message_error!("failed to read {path}")
            .with_source(SyncFileError::new(ErrorKind::Io).with_source(io))
    }
}

impl FileBridge for InMemoryFileBridge {
    fn read_text(&self, path: &BridgePath) -> Result<SharedString> {
        let state = self.state.lock();
        match state.files.get(path) {
            Some(bytes) => Ok(decode_bridge_text(bytes)),
            None => Err(Self::not_found_error(path)),
        }
    }

    fn read_binary(&self, path: &BridgePath) -> Result<Vec<u8>> {
        let state = self.state.lock();
        match state.files.get(path) {
            Some(bytes) => Ok(bytes.clone()),
            None => Err(Self::not_found_error(path)),
        }
    }

    fn exists(&self, path: &BridgePath) -> bool {
        let state = self.state.lock();
        state.files.contains_key(path) || state.dirs.contains(path)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use syncfile_base::{BridgePath, ErrorKind};

    use crate::{FileBridge, InMemoryFileBridge};

    #[test]
    fn writes_and_reads_text_content() {
        let bridge = InMemoryFileBridge::default();
        bridge.write_text("/virtual/sample.txt", "hello in-memory");

        let text = bridge
            .read_text(&BridgePath::from("/virtual/sample.txt"))
            .expect("should read content");
        assert_eq!(text, "hello in-memory");
    }

    #[test]
    fn preserves_binary_content_exactly() {
        let bridge = InMemoryFileBridge::default();
        bridge.write_file("/virtual/blob.bin", vec![0x00, 0xFF, 0x10]);

        let bytes = bridge
            .read_binary(&BridgePath::from("/virtual/blob.bin"))
            .expect("should read content");
        assert_eq!(bytes, vec![0x00, 0xFF, 0x10]);
    }

    #[test]
    fn tracks_file_and_directory_existence() {
        let bridge = InMemoryFileBridge::default();
        bridge.write_text("/virtual/present.txt", "x");
        bridge.add_dir("/virtual/dir");

        assert!(bridge.exists(&BridgePath::from("/virtual/present.txt")));
        assert!(bridge.exists(&BridgePath::from("/virtual/dir")));
        assert!(!bridge.exists(&BridgePath::from("/virtual/missing.txt")));
    }

    #[test]
    fn returns_not_found_error_for_missing_file() {
        let bridge = InMemoryFileBridge::default();

        let error = bridge
            .read_text(&BridgePath::from("/virtual/missing.txt"))
            .expect_err("missing file should fail");

        assert!(matches!(
            error.kind(),
            ErrorKind::Message(message) if message == "failed to read /virtual/missing.txt"
        ));
        assert!(error.source().is_some());
    }
}

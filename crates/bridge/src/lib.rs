//! Synchronous file access behind a lazily installed bridge.
//!
//! The [`FileAccess`] facade installs its [`FileBridge`] on first use and
//! then forwards every read unchanged. [`StdFileBridge`] backs it with the
//! real filesystem; [`InMemoryFileBridge`] backs it with seeded content for
//! deterministic behavior.

pub mod bridge;
pub mod encoding;
pub mod facade;
pub mod in_memory_bridge;
pub mod installer;
pub mod std_bridge;

pub use bridge::FileBridge;
pub use encoding::decode_bridge_text;
pub use facade::FileAccess;
pub use in_memory_bridge::InMemoryFileBridge;
pub use installer::{BridgeInstaller, StdBridgeInstaller};
pub use std_bridge::StdFileBridge;

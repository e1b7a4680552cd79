//! Default implementations of the port traits.

use crate::ports::{NameResolver, WritePort};
use anyhow::Context;
use camino::Utf8Path;
use fs_err as fs;

/// A resolver that always returns a name known up front.
///
/// Used by callers that received an explicit name and by tests.
#[derive(Debug, Clone)]
pub struct FixedNameResolver {
    name: String,
}

impl FixedNameResolver {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl NameResolver for FixedNameResolver {
    fn resolve(&self) -> anyhow::Result<String> {
        Ok(self.name.clone())
    }
}

/// Filesystem write operations.
#[derive(Debug, Clone, Default)]
pub struct FsWritePort;

impl WritePort for FsWritePort {
    fn write_file(&self, path: &Utf8Path, contents: &[u8]) -> anyhow::Result<()> {
        fs::write(path, contents).with_context(|| format!("write {path}"))
    }
}

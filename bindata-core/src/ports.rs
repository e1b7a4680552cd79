//! Port traits abstracting the pipeline's external collaborators.

use camino::Utf8Path;

/// Resolves the container/package name when none is given explicitly.
///
/// Implementations may sniff the working directory, read a manifest, or
/// return a fixed value; the pipeline only sees the resolved name.
pub trait NameResolver {
    fn resolve(&self) -> anyhow::Result<String>;
}

/// File-system write operations.
pub trait WritePort {
    /// Write `contents` to `path`, truncating any existing file.
    fn write_file(&self, path: &Utf8Path, contents: &[u8]) -> anyhow::Result<()>;
}

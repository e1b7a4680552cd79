//! Deterministic path walking.
//!
//! Turns an ordered list of root paths into an ordered set of open file
//! entries. Order is a correctness requirement, not a nicety: repeated runs
//! over an unchanged tree must produce byte-identical generated output, so
//! traversal is depth-first and lexicographic within every directory, and
//! roots contribute in the order they were given.

use crate::error::{EmbedError, EmbedResult};
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err::File;
use std::time::UNIX_EPOCH;
use tracing::debug;
use walkdir::WalkDir;

/// Traversal toggles, surfaced as CLI flags.
#[derive(Debug, Clone)]
pub struct WalkOptions {
    /// Descend into subdirectories of a directory root.
    pub recurse: bool,
    /// Skip directory roots entirely instead of walking into them.
    pub skip_dirs: bool,
    /// Include entries whose name starts with a dot.
    pub include_hidden: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            recurse: true,
            skip_dirs: false,
            include_hidden: false,
        }
    }
}

/// An opened input file plus the metadata its archive header needs.
///
/// The handle is opened at discovery time (unreadable files fail the run
/// immediately) and stays open until the archiver consumes it.
#[derive(Debug)]
pub struct FileEntry {
    /// Path the file was discovered under.
    pub path: Utf8PathBuf,
    /// Base name; doubles as the archive entry name.
    pub name: String,
    /// Byte size at discovery time.
    pub size: u64,
    /// Unix permission bits.
    pub mode: u32,
    /// Modification time, seconds since the epoch.
    pub mtime: u64,
    /// Open handle, consumed by the archiver.
    pub file: File,
}

/// Collect all regular files reachable from `roots`, in discovery order.
///
/// A root that is a regular file yields exactly that file. A root that is a
/// directory yields its contents; the directory node itself never becomes an
/// entry. Any I/O error aborts the whole collection.
pub fn collect_files(roots: &[Utf8PathBuf], opts: &WalkOptions) -> EmbedResult<Vec<FileEntry>> {
    let mut entries = Vec::new();
    for root in roots {
        let meta = fs_err::metadata(root).map_err(EmbedError::input)?;
        if meta.is_file() {
            entries.push(open_entry(root)?);
            continue;
        }
        if opts.skip_dirs {
            debug!(root = %root, "skipping directory root");
            continue;
        }
        walk_dir_root(root, opts, &mut entries)?;
    }
    debug!(count = entries.len(), "collected input files");
    Ok(entries)
}

fn walk_dir_root(
    root: &Utf8Path,
    opts: &WalkOptions,
    out: &mut Vec<FileEntry>,
) -> EmbedResult<()> {
    let mut walker = WalkDir::new(root).min_depth(1).sort_by_file_name();
    if !opts.recurse {
        walker = walker.max_depth(1);
    }

    let include_hidden = opts.include_hidden;
    // depth 0 is the root the caller named; it is exempt from hidden
    // filtering so `bindata .` still works.
    let iter = walker
        .into_iter()
        .filter_entry(move |e| e.depth() == 0 || include_hidden || !is_hidden(e));

    for entry in iter {
        let entry = entry
            .map_err(|e| EmbedError::input(anyhow::Error::new(e).context(format!("walk {root}"))))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = Utf8PathBuf::from_path_buf(entry.into_path())
            .map_err(|p| EmbedError::input(anyhow::anyhow!("non-UTF-8 path: {}", p.display())))?;
        out.push(open_entry(&path)?);
    }
    Ok(())
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

fn open_entry(path: &Utf8Path) -> EmbedResult<FileEntry> {
    let name = path
        .file_name()
        .ok_or_else(|| EmbedError::input(anyhow::anyhow!("{path} has no file name")))?
        .to_string();

    let file = File::open(path.as_std_path()).map_err(EmbedError::input)?;
    let meta = file
        .metadata()
        .with_context(|| format!("stat {path}"))
        .map_err(EmbedError::input)?;

    let mtime = meta
        .modified()
        .ok()
        .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
        .map(|d| d.as_secs())
        .unwrap_or(0);

    Ok(FileEntry {
        path: path.to_path_buf(),
        name,
        size: meta.len(),
        mode: permission_bits(&meta),
        mtime,
        file,
    })
}

#[cfg(unix)]
fn permission_bits(meta: &std::fs::Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o7777
}

#[cfg(not(unix))]
fn permission_bits(_meta: &std::fs::Metadata) -> u32 {
    0o644
}

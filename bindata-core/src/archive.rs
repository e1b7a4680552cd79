//! Payload construction: raw passthrough or tar packing.
//!
//! The single-file-vs-archive decision lives here and nowhere else: the
//! resulting [`Payload`] carries its own `is_archive` flag instead of any
//! ambient state, and everything downstream reads it from there.

use crate::error::{EmbedError, EmbedResult};
use crate::walk::FileEntry;
use anyhow::Context;
use std::io::Read;
use tracing::debug;

/// The byte sequence to embed, plus its archive-format flag.
///
/// Produced once per invocation and never mutated afterwards. `is_archive`
/// is true iff the input set contained anything other than exactly one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    bytes: Vec<u8>,
    is_archive: bool,
}

impl Payload {
    pub(crate) fn new(bytes: Vec<u8>, is_archive: bool) -> Self {
        Self { bytes, is_archive }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn is_archive(&self) -> bool {
        self.is_archive
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Build the payload for an ordered set of input files.
///
/// Exactly one file is copied verbatim with no framing, so extraction gets
/// the exact original bytes back. Any other count (zero included) produces a
/// tar stream: one header per entry in input order, data padded to block
/// alignment, standard end-of-archive marker. Each file handle is closed as
/// soon as its bytes have been copied.
pub fn build_payload(entries: Vec<FileEntry>) -> EmbedResult<Payload> {
    let mut entries = entries;

    if entries.len() == 1 {
        let mut entry = entries.remove(0);
        let mut bytes = Vec::with_capacity(entry.size as usize);
        entry
            .file
            .read_to_end(&mut bytes)
            .with_context(|| format!("read {}", entry.path))
            .map_err(EmbedError::archive)?;
        debug!(name = %entry.name, len = bytes.len(), "single file, skipping tar archiving");
        return Ok(Payload::new(bytes, false));
    }

    let mut builder = tar::Builder::new(Vec::new());
    for entry in entries {
        let FileEntry {
            path,
            name,
            size,
            mode,
            mtime,
            mut file,
        } = entry;

        let mut header = tar::Header::new_gnu();
        header
            .set_path(&name)
            .with_context(|| format!("encode header for {name}"))
            .map_err(EmbedError::archive)?;
        header.set_size(size);
        header.set_mode(mode);
        header.set_mtime(mtime);
        header.set_uid(0);
        header.set_gid(0);
        header.set_cksum();

        builder
            .append(&header, &mut file)
            .with_context(|| format!("append {path}"))
            .map_err(EmbedError::archive)?;
        debug!(name = %name, size, "archived entry");
        // `file` drops here, closing the handle before the next entry opens
        // its stream into the builder.
    }

    let bytes = builder
        .into_inner()
        .context("finish archive")
        .map_err(EmbedError::archive)?;
    Ok(Payload::new(bytes, true))
}

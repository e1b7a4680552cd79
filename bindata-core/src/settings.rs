//! Clap-free settings for the embed pipeline.

use crate::walk::WalkOptions;
use camino::Utf8PathBuf;

/// Settings for a single embed invocation.
#[derive(Debug, Clone)]
pub struct EmbedSettings {
    /// Input roots, in the order given on the command line.
    pub roots: Vec<Utf8PathBuf>,

    /// Name of the generated accessor function.
    pub symbol_name: String,

    /// Container name override; `None` defers to the [`NameResolver`].
    ///
    /// [`NameResolver`]: crate::ports::NameResolver
    pub package_name: Option<String>,

    /// Destination file for the generated source.
    pub out_file: Utf8PathBuf,

    /// Traversal toggles.
    pub walk: WalkOptions,
}

impl Default for EmbedSettings {
    fn default() -> Self {
        Self {
            roots: Vec::new(),
            symbol_name: "bindata".to_string(),
            package_name: None,
            out_file: Utf8PathBuf::from("bindata.rs"),
            walk: WalkOptions::default(),
        }
    }
}

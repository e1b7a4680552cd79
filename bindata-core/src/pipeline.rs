//! The embed pipeline: resolve name, walk paths, pack bytes, emit source.
//!
//! `run_embed` performs no process exit and writes nothing; errors propagate
//! to the caller, which owns the single point of exit-code decision. The
//! generated text is persisted separately through [`write_output`] so the
//! pipeline stays I/O-light and testable.

use crate::archive::build_payload;
use crate::emit::{GeneratedSource, emit};
use crate::error::{EmbedError, EmbedResult};
use crate::ports::{NameResolver, WritePort};
use crate::settings::EmbedSettings;
use crate::walk::collect_files;
use camino::Utf8Path;
use tracing::{debug, info};

/// Outcome of `run_embed`, ready to be written and reported.
#[derive(Debug, Clone)]
pub struct EmbedOutcome {
    /// The rendered, validated source artifact.
    pub source: GeneratedSource,
    /// Archive entry names (base names), in discovery order.
    pub entry_names: Vec<String>,
    /// Size of the embedded payload in bytes.
    pub payload_len: usize,
}

/// Run the embed pipeline over `settings.roots`.
///
/// The resolver is only consulted when no explicit package name was given.
pub fn run_embed(
    settings: &EmbedSettings,
    resolver: &dyn NameResolver,
) -> EmbedResult<EmbedOutcome> {
    let package_name = match &settings.package_name {
        Some(name) => name.clone(),
        None => resolver
            .resolve()
            .map_err(|e| EmbedError::input(e.context("resolve package name")))?,
    };
    debug!(package = %package_name, roots = settings.roots.len(), "starting embed");

    let entries = collect_files(&settings.roots, &settings.walk)?;
    let entry_names: Vec<String> = entries.iter().map(|e| e.name.clone()).collect();

    let payload = build_payload(entries)?;
    let payload_len = payload.len();

    let source = emit(&payload, &package_name, &settings.symbol_name)?;
    info!(
        package = %package_name,
        symbol = %settings.symbol_name,
        bytes = payload_len,
        archive = source.is_archive(),
        "generated source"
    );

    Ok(EmbedOutcome {
        source,
        entry_names,
        payload_len,
    })
}

/// Persist the generated source, truncating any existing file.
pub fn write_output(
    outcome: &EmbedOutcome,
    out_file: &Utf8Path,
    writer: &dyn WritePort,
) -> EmbedResult<()> {
    writer
        .write_file(out_file, outcome.source.text().as_bytes())
        .map_err(|e| EmbedError::emit(e.context(format!("write {out_file}"))))?;
    info!(out = %out_file, "wrote generated source");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{FixedNameResolver, FsWritePort};
    use camino::Utf8PathBuf;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    struct FailingResolver;

    impl NameResolver for FailingResolver {
        fn resolve(&self) -> anyhow::Result<String> {
            anyhow::bail!("no manifest here")
        }
    }

    fn utf8_root(temp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("utf8 temp dir")
    }

    fn settings_for(roots: Vec<Utf8PathBuf>) -> EmbedSettings {
        EmbedSettings {
            roots,
            package_name: Some("assets".to_string()),
            ..EmbedSettings::default()
        }
    }

    #[test]
    fn explicit_package_name_skips_the_resolver() {
        let temp = TempDir::new().expect("temp dir");
        let root = utf8_root(&temp);
        fs_err::write(root.join("f.txt"), "f").expect("fixture");

        let settings = settings_for(vec![root.join("f.txt")]);
        let outcome = run_embed(&settings, &FailingResolver).expect("run_embed");
        assert_eq!(outcome.source.package_name(), "assets");
    }

    #[test]
    fn resolver_failure_is_an_input_error() {
        let temp = TempDir::new().expect("temp dir");
        let root = utf8_root(&temp);
        fs_err::write(root.join("f.txt"), "f").expect("fixture");

        let settings = EmbedSettings {
            roots: vec![root.join("f.txt")],
            ..EmbedSettings::default()
        };
        let err = run_embed(&settings, &FailingResolver).expect_err("must fail");
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("resolve package name"));
    }

    #[test]
    fn resolver_supplies_the_package_name() {
        let temp = TempDir::new().expect("temp dir");
        let root = utf8_root(&temp);
        fs_err::write(root.join("f.txt"), "f").expect("fixture");

        let settings = EmbedSettings {
            roots: vec![root.join("f.txt")],
            ..EmbedSettings::default()
        };
        let resolver = FixedNameResolver::new("resolved_pkg");
        let outcome = run_embed(&settings, &resolver).expect("run_embed");
        assert_eq!(outcome.source.package_name(), "resolved_pkg");
        assert!(outcome.source.text().contains("pub mod resolved_pkg {"));
    }

    #[test]
    fn outcome_reports_entries_and_payload_size() {
        let temp = TempDir::new().expect("temp dir");
        let root = utf8_root(&temp);
        fs_err::write(root.join("a.txt"), "aa").expect("fixture");
        fs_err::write(root.join("b.txt"), "bb").expect("fixture");

        let settings = settings_for(vec![root.clone()]);
        let outcome = run_embed(&settings, &FailingResolver).expect("run_embed");
        assert_eq!(outcome.entry_names, vec!["a.txt", "b.txt"]);
        assert!(outcome.source.is_archive());
        assert!(outcome.payload_len > 0);
    }

    #[test]
    fn write_output_persists_the_text() {
        let temp = TempDir::new().expect("temp dir");
        let root = utf8_root(&temp);
        fs_err::write(root.join("f.txt"), "f").expect("fixture");

        let settings = settings_for(vec![root.join("f.txt")]);
        let outcome = run_embed(&settings, &FailingResolver).expect("run_embed");

        let out_file = root.join("generated.rs");
        write_output(&outcome, &out_file, &FsWritePort).expect("write");

        let written = fs_err::read_to_string(&out_file).expect("read back");
        assert_eq!(written, outcome.source.text());
    }

    #[test]
    fn walk_failure_aborts_before_any_output() {
        let temp = TempDir::new().expect("temp dir");
        let root = utf8_root(&temp);

        let settings = settings_for(vec![root.join("missing")]);
        let err = run_embed(&settings, &FailingResolver).expect_err("must fail");
        assert_eq!(err.exit_code(), 2);
    }
}

//! Package-name resolution from the working directory's manifest.

use anyhow::{Context, bail};
use bindata_core::ports::NameResolver;
use camino::Utf8PathBuf;
use fs_err as fs;
use tracing::debug;

/// Resolves the container name from `<dir>/Cargo.toml`.
///
/// The `[package] name` is the single candidate; dashes map to underscores
/// because the name becomes a module identifier in the generated source. A
/// manifest that is only a multi-member virtual workspace offers more than
/// one candidate and is rejected as ambiguous; a missing manifest or name
/// is rejected outright. Both failures abort before any output is written.
#[derive(Debug, Clone)]
pub struct CargoPackageResolver {
    dir: Utf8PathBuf,
}

impl CargoPackageResolver {
    pub fn new(dir: impl Into<Utf8PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl NameResolver for CargoPackageResolver {
    fn resolve(&self) -> anyhow::Result<String> {
        let manifest_path = self.dir.join("Cargo.toml");
        let raw = fs::read_to_string(&manifest_path).with_context(|| {
            format!("no package manifest at {manifest_path}; use --package to name the container")
        })?;
        let manifest: toml::Value =
            toml::from_str(&raw).with_context(|| format!("parse {manifest_path}"))?;

        if let Some(name) = manifest
            .get("package")
            .and_then(|p| p.get("name"))
            .and_then(|n| n.as_str())
        {
            if name.is_empty() {
                bail!("{manifest_path} declares an empty package name");
            }
            let name = name.replace('-', "_");
            debug!(package = %name, "resolved package name from manifest");
            return Ok(name);
        }

        if let Some(members) = manifest
            .get("workspace")
            .and_then(|w| w.get("members"))
            .and_then(|m| m.as_array())
        {
            bail!(
                "{manifest_path} is a virtual workspace with {} members and no [package]; \
                 use --package to pick a name",
                members.len()
            );
        }

        bail!("{manifest_path} has no [package] name; use --package to name the container")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn resolver_for(manifest: Option<&str>) -> (TempDir, CargoPackageResolver) {
        let temp = TempDir::new().expect("temp dir");
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("utf8");
        if let Some(contents) = manifest {
            fs::write(root.join("Cargo.toml"), contents).expect("write manifest");
        }
        (temp, CargoPackageResolver::new(root))
    }

    #[test]
    fn resolves_package_name() {
        let (_temp, resolver) = resolver_for(Some(
            "[package]\nname = \"myapp\"\nversion = \"0.1.0\"\n",
        ));
        assert_eq!(resolver.resolve().expect("resolve"), "myapp");
    }

    #[test]
    fn dashes_become_underscores() {
        let (_temp, resolver) = resolver_for(Some(
            "[package]\nname = \"my-cool-app\"\nversion = \"0.1.0\"\n",
        ));
        assert_eq!(resolver.resolve().expect("resolve"), "my_cool_app");
    }

    #[test]
    fn missing_manifest_fails() {
        let (_temp, resolver) = resolver_for(None);
        let err = resolver.resolve().expect_err("must fail");
        assert!(err.to_string().contains("no package manifest"));
    }

    #[test]
    fn virtual_workspace_is_ambiguous() {
        let (_temp, resolver) = resolver_for(Some(
            "[workspace]\nmembers = [\"crates/a\", \"crates/b\"]\n",
        ));
        let err = resolver.resolve().expect_err("must fail");
        assert!(err.to_string().contains("virtual workspace"));
    }

    #[test]
    fn manifest_without_name_fails() {
        let (_temp, resolver) = resolver_for(Some("[dependencies]\n"));
        let err = resolver.resolve().expect_err("must fail");
        assert!(err.to_string().contains("no [package] name"));
    }

    #[test]
    fn empty_name_fails() {
        let (_temp, resolver) = resolver_for(Some("[package]\nname = \"\"\n"));
        let err = resolver.resolve().expect_err("must fail");
        assert!(err.to_string().contains("empty package name"));
    }
}

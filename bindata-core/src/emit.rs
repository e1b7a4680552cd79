//! Rendering of the generated Rust source.
//!
//! A pure transform: the same (payload, package name, symbol name) triple
//! always renders the same text, and no I/O happens here. The rendered text
//! is round-tripped through `syn` before success is reported, so a caller
//! never receives source that does not parse.

use crate::archive::Payload;
use crate::error::{EmbedError, EmbedResult};

/// Marker comment at the top of every generated file.
const GENERATED_MARKER: &str = "// @generated by bindata; do not edit.";
/// Comment noting the symbol holds a tar archive rather than raw content.
const TAR_REMINDER: &str = "// This symbol holds a tar-format archive.";
/// Byte literals rendered per line.
const BYTES_PER_LINE: usize = 16;

/// A generated source artifact.
///
/// Constructed once from a payload, written to a destination file, then
/// discarded; there is no reuse.
#[derive(Debug, Clone)]
pub struct GeneratedSource {
    package_name: String,
    symbol_name: String,
    is_archive: bool,
    text: String,
}

impl GeneratedSource {
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn symbol_name(&self) -> &str {
        &self.symbol_name
    }

    pub fn is_archive(&self) -> bool {
        self.is_archive
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

/// Render `payload` as a Rust module exposing the bytes under
/// `package_name::symbol_name()`.
pub fn emit(
    payload: &Payload,
    package_name: &str,
    symbol_name: &str,
) -> EmbedResult<GeneratedSource> {
    parse_ident(package_name)?;
    parse_ident(symbol_name)?;

    let text = render(payload, package_name, symbol_name);
    syn::parse_file(&text)
        .map_err(|e| EmbedError::emit(anyhow::anyhow!("generated source does not parse: {e}")))?;

    Ok(GeneratedSource {
        package_name: package_name.to_string(),
        symbol_name: symbol_name.to_string(),
        is_archive: payload.is_archive(),
        text,
    })
}

fn parse_ident(name: &str) -> EmbedResult<()> {
    syn::parse_str::<syn::Ident>(name)
        .map(|_| ())
        .map_err(|_| EmbedError::emit(anyhow::anyhow!("`{name}` is not a valid Rust identifier")))
}

fn render(payload: &Payload, package_name: &str, symbol_name: &str) -> String {
    let mut out = String::new();
    out.push_str(GENERATED_MARKER);
    out.push_str("\n\n");
    out.push_str(&format!("pub mod {package_name} {{\n"));
    if payload.is_archive() {
        out.push_str(&format!("    {TAR_REMINDER}\n"));
    }
    out.push_str(&format!(
        "    pub fn {symbol_name}() -> &'static [u8] {{\n"
    ));
    out.push_str("        &[\n");
    for chunk in payload.bytes().chunks(BYTES_PER_LINE) {
        let line: Vec<String> = chunk.iter().map(|b| format!("{b:#04x},")).collect();
        out.push_str(&format!("            {}\n", line.join(" ")));
    }
    out.push_str("        ]\n    }\n}\n");
    out
}

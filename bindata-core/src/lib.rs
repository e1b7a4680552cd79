//! Embeddable core library for bindata.
//!
//! Provides a clap-free embedding pipeline: walk input paths, pack the bytes
//! (verbatim for a single file, tar for anything else), and render a Rust
//! source file exposing them under a named symbol.
//!
//! # Port traits
//!
//! External collaborators are abstracted behind port traits in [`ports`]:
//! - [`NameResolver`](ports::NameResolver) — supply the container name
//! - [`WritePort`](ports::WritePort) — persist the generated file
//!
//! The [`adapters`] module provides default implementations.
//!
//! # Entry points
//!
//! - [`run_embed`](pipeline::run_embed) — walk, pack, and render
//! - [`write_output`](pipeline::write_output) — persist the result

pub mod adapters;
pub mod archive;
pub mod emit;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod settings;
pub mod walk;

pub use archive::{Payload, build_payload};
pub use emit::{GeneratedSource, emit};
pub use error::{EmbedError, EmbedResult};
pub use pipeline::{EmbedOutcome, run_embed, write_output};
pub use settings::EmbedSettings;
pub use walk::{FileEntry, WalkOptions, collect_files};

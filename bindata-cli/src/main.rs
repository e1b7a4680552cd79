mod pkgname;

use bindata_core::adapters::FsWritePort;
use bindata_core::{EmbedError, EmbedSettings, WalkOptions, run_embed, write_output};
use camino::Utf8PathBuf;
use clap::Parser;
use pkgname::CargoPackageResolver;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "bindata",
    version,
    about = "Generate a Rust source file embedding the bytes of the given paths.",
    long_about = "Generate a Rust source file for the package in the current directory \
                  containing all files found at the given paths, exposed through \
                  `fn <NAME>() -> &'static [u8]`. Multiple files (or a directory) are \
                  packed into a tar archive first; a single file is embedded verbatim."
)]
struct Cli {
    /// Input paths (files or directories) to embed.
    #[arg(required = true)]
    paths: Vec<Utf8PathBuf>,

    /// Symbol name for the generated accessor; also names the output file
    /// `<NAME>.rs` unless --out is given.
    #[arg(long, default_value = "bindata")]
    name: String,

    /// Container (module) name; default: resolved from ./Cargo.toml.
    #[arg(long)]
    package: Option<String>,

    /// Output file name. An existing file is overwritten.
    #[arg(long)]
    out: Option<Utf8PathBuf>,

    /// Do not descend into subdirectories of directory paths.
    #[arg(long, default_value_t = false)]
    no_recurse: bool,

    /// Skip directory paths instead of walking into them.
    #[arg(long, default_value_t = false)]
    skip_dirs: bool,

    /// Include hidden (dot-prefixed) entries.
    #[arg(long, default_value_t = false)]
    hidden: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: Cli) -> Result<(), EmbedError> {
    let settings = settings_from(&cli);
    let resolver = CargoPackageResolver::new(Utf8PathBuf::from("."));

    let outcome = run_embed(&settings, &resolver)?;
    write_output(&outcome, &settings.out_file, &FsWritePort)?;

    println!(
        "created {} for package {} containing: {}",
        settings.out_file,
        outcome.source.package_name(),
        outcome.entry_names.join(", ")
    );
    Ok(())
}

fn settings_from(cli: &Cli) -> EmbedSettings {
    let out_file = cli
        .out
        .clone()
        .unwrap_or_else(|| Utf8PathBuf::from(format!("{}.rs", cli.name)));

    EmbedSettings {
        roots: cli.paths.clone(),
        symbol_name: cli.name.clone(),
        package_name: cli.package.clone(),
        out_file,
        walk: WalkOptions {
            recurse: !cli.no_recurse,
            skip_dirs: cli.skip_dirs,
            include_hidden: cli.hidden,
        },
    }
}

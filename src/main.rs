use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "reflexgen",
    version,
    about = "Generate aggregate test fixtures for the field-reflection test suite"
)]
struct Cli {
    /// Directory to write reflexpr_test_types.inl into
    out_dir: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = reflexgen::config::GeneratorConfig::default();
    if let Err(err) = reflexgen::write_corpus(&cli.out_dir, &config) {
        reflexgen::diagnostics::render_error(&err);
        std::process::exit(1);
    }
}

pub mod diagnostics;
pub mod config;
pub mod fixture;
pub mod corpus;
pub mod emit;
pub mod instance;

use config::GeneratorConfig;
use corpus::Corpus;
use diagnostics::GenError;
use std::path::{Path, PathBuf};

/// Generate the fixture text for sizes `1..num_supported_members` with default settings.
pub fn generate(num_supported_members: usize) -> Result<String, GenError> {
    generate_with_config(&GeneratorConfig::with_members(num_supported_members))
}

/// Generate the fixture text (assemble → emit). No file I/O.
pub fn generate_with_config(config: &GeneratorConfig) -> Result<String, GenError> {
    config.validate()?;
    let corpus = Corpus::assemble(config.num_supported_members);
    Ok(emit::emit_corpus(&corpus, config))
}

/// Generate the corpus and write it to `out_dir/<config.file_name>`, overwriting any existing file.
/// Returns the path written.
pub fn write_corpus(out_dir: &Path, config: &GeneratorConfig) -> Result<PathBuf, GenError> {
    if !out_dir.is_dir() {
        return Err(GenError::output_dir(
            "output path does not exist or is not a directory",
            out_dir,
        ));
    }

    let text = generate_with_config(config)?;
    let out_path = out_dir.join(&config.file_name);
    std::fs::write(&out_path, &text)
        .map_err(|e| GenError::io(format!("failed to write fixture file: {e}"), &out_path))?;

    tracing::info!(
        path = %out_path.display(),
        fixtures = config.num_supported_members - 1,
        bytes = text.len(),
        "wrote fixture corpus"
    );
    Ok(out_path)
}

//! Chunks command implementation.

use crate::cli::ChunksArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use stratex_document::load_document;
use stratex_extractor::TextChunker;

/// Execute the chunks command.
///
/// Loads the document and prints the chunk boundaries the pipeline would use,
/// without contacting the model.
pub async fn execute_chunks(args: ChunksArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let chunk_size = args.chunk_size.unwrap_or(config.extractor.chunk_size);
    if chunk_size == 0 {
        return Err(CliError::InvalidInput(
            "Chunk size must be greater than 0".to_string(),
        ));
    }

    let path = args.path;
    let max_file_size = config.settings.max_file_size;
    let document = tokio::task::spawn_blocking(move || load_document(&path, None, max_file_size))
        .await
        .map_err(std::io::Error::other)??;

    let chunks = TextChunker::new(chunk_size).chunk(document.text());

    println!("{}", formatter.format_chunks(&chunks)?);
    Ok(())
}

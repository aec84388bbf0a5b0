use crate::core::{ConfigProvider, FilterOutcome, FilterReport, Pipeline, Storage, WordList};
use crate::domain::services;
use crate::utils::error::{FilterError, Result};

/// Reads a word list through `Storage`, keeps words of the configured length
/// and writes them back.
pub struct WordFilterPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> WordFilterPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for WordFilterPipeline<S, C> {
    async fn extract(&self) -> Result<WordList> {
        let path = self.config.source_path();
        tracing::debug!("Reading word list from: {}", path);

        let raw = self.storage.read_file(path).await?;
        tracing::debug!("Read {} bytes", raw.len());

        let text = String::from_utf8(raw)?;
        Ok(services::candidate_words(&text))
    }

    async fn transform(&self, words: WordList) -> Result<FilterOutcome> {
        let word_length = self.config.word_length();
        if word_length == 0 {
            return Err(FilterError::ProcessingError {
                message: "word length must be at least 1".to_string(),
            });
        }
        tracing::debug!(
            "Keeping {}-character words out of {} candidates",
            word_length,
            words.len()
        );

        Ok(services::filter_words(words, word_length))
    }

    async fn load(&self, outcome: FilterOutcome) -> Result<FilterReport> {
        let destination = self.config.destination_path();
        let written = !self.config.dry_run();

        if written {
            tracing::debug!(
                "Writing {} words ({} bytes) to: {}",
                outcome.kept.len(),
                outcome.rendered.len(),
                destination
            );
            self.storage
                .write_file(destination, outcome.rendered.as_bytes())
                .await?;
        } else {
            tracing::info!("Dry run: leaving {} untouched", destination);
        }

        Ok(FilterReport {
            source: self.config.source_path().to_string(),
            destination: destination.to_string(),
            word_length: self.config.word_length(),
            candidates: outcome.candidates,
            kept: outcome.kept.len(),
            discarded: outcome.discarded,
            written,
        })
    }
}

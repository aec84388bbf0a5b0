use crate::domain::model::{FilterOutcome, FilterReport, WordList};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    /// Replaces the whole content at `path`.
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn source_path(&self) -> &str;
    /// Defaults to the source path, which makes the load an in-place overwrite.
    fn destination_path(&self) -> &str;
    fn word_length(&self) -> usize;
    fn atomic_write(&self) -> bool;
    fn dry_run(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<WordList>;
    async fn transform(&self, words: WordList) -> Result<FilterOutcome>;
    async fn load(&self, outcome: FilterOutcome) -> Result<FilterReport>;
}

use crate::config::{cli::LocalStorage, FilterSettings};
use crate::core::pipeline::WordFilterPipeline;
use crate::core::{ConfigProvider, FilterReport, Pipeline};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Runs a pipeline's read, filter and write phases in order.
pub struct FilterEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> FilterEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<FilterReport> {
        tracing::info!("Starting word filter");
        if self.monitor.is_enabled() {
            tracing::info!("🔍 System monitoring enabled");
        }
        self.monitor.log_stats("Start");

        tracing::info!("Reading word list...");
        let words = self.pipeline.extract().await?;
        tracing::info!("Read {} candidate words", words.len());
        self.monitor.log_stats("Read");

        tracing::info!("Filtering words...");
        let outcome = self.pipeline.transform(words).await?;
        tracing::info!(
            "Kept {} words, discarded {}",
            outcome.kept.len(),
            outcome.discarded
        );
        self.monitor.log_stats("Filter");

        tracing::info!("Writing word list...");
        let report = self.pipeline.load(outcome).await?;
        if report.written {
            tracing::info!("Output saved to: {}", report.destination);
        }
        self.monitor.log_stats("Write");
        self.monitor.log_final_stats();

        Ok(report)
    }
}

/// Runs one filter pass against the local file system.
pub async fn run_with_settings(settings: FilterSettings) -> Result<FilterReport> {
    let storage = LocalStorage::default().with_atomic_writes(settings.atomic_write());
    let monitor_enabled = settings.monitor;
    let pipeline = WordFilterPipeline::new(storage, settings);
    FilterEngine::new_with_monitoring(pipeline, monitor_enabled)
        .run()
        .await
}

/// Keeps only the five-character words of the list at `path`, overwriting it.
pub async fn filter_file(path: impl Into<String>) -> Result<FilterReport> {
    run_with_settings(FilterSettings::in_place(path)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pipeline::tests::{MockConfig, MockStorage};
    use crate::utils::error::FilterError;

    #[tokio::test]
    async fn test_run_filters_in_place() {
        let storage = MockStorage::new();
        storage.put_file("words.txt", b"apple\npear\n  mango  \n").await;
        let pipeline = WordFilterPipeline::new(storage.clone(), MockConfig::new("words.txt"));

        let report = FilterEngine::new(pipeline).run().await.unwrap();

        assert_eq!(report.kept, 2);
        assert_eq!(report.destination, "words.txt");
        assert_eq!(
            storage.get_file("words.txt").await.unwrap(),
            b"apple\nmango"
        );
    }

    #[tokio::test]
    async fn test_run_twice_is_idempotent() {
        let storage = MockStorage::new();
        storage
            .put_file("words.txt", b"crane\r\nslate\nat\n\nadieu \n")
            .await;

        let first = WordFilterPipeline::new(storage.clone(), MockConfig::new("words.txt"));
        FilterEngine::new(first).run().await.unwrap();
        let once = storage.get_file("words.txt").await.unwrap();

        let second = WordFilterPipeline::new(storage.clone(), MockConfig::new("words.txt"));
        let report = FilterEngine::new(second).run().await.unwrap();

        assert_eq!(report.discarded, 0);
        assert_eq!(storage.get_file("words.txt").await.unwrap(), once);
        assert_eq!(once, b"crane\nslate\nadieu");
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_monitoring_flag_reaches_monitor() {
        let quiet = WordFilterPipeline::new(MockStorage::new(), MockConfig::new("words.txt"));
        assert!(!FilterEngine::new(quiet).monitor.is_enabled());

        let watched = WordFilterPipeline::new(MockStorage::new(), MockConfig::new("words.txt"));
        assert!(FilterEngine::new_with_monitoring(watched, true)
            .monitor
            .is_enabled());
    }

    #[tokio::test]
    async fn test_run_aborts_on_missing_file() {
        let storage = MockStorage::new();
        let pipeline = WordFilterPipeline::new(storage.clone(), MockConfig::new("words.txt"));

        let result = FilterEngine::new_with_monitoring(pipeline, true).run().await;

        assert!(matches!(result, Err(FilterError::IoError(_))));
        assert!(storage.get_file("words.txt").await.is_none());
    }
}

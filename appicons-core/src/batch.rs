use crate::{
    export::{ExportError, Exported, Exporter},
    targets::{ExportTarget, Targets},
};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
#[error("source image not found: {}", .0.display())]
pub struct SourceMissing(pub PathBuf);

/// Aggregate outcome of a batch run.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
pub struct RunResult {
    pub succeeded: usize,
    pub total: usize,
}

impl RunResult {
    pub fn failed(&self) -> usize {
        self.total - self.succeeded
    }

    pub fn all_succeeded(&self) -> bool {
        self.succeeded == self.total
    }
}

/// Receives progress of a batch run, one call per target in table order.
pub trait Report {
    fn started(&mut self, _source: &Path, _total: usize) {}

    fn exported(&mut self, target: &ExportTarget, outcome: &Result<Exported, ExportError>);

    fn finished(&mut self, _result: &RunResult) {}
}

#[derive(Debug, Clone)]
pub struct Batch {
    project_dir: PathBuf,
    source: PathBuf,
    targets: Targets,
}

impl Batch {
    /// `source` and all target paths are resolved against `project_dir`.
    pub fn new(project_dir: impl Into<PathBuf>, source: impl AsRef<Path>, targets: Targets) -> Self {
        let project_dir = project_dir.into();
        let source = project_dir.join(source);
        Batch {
            project_dir,
            source,
            targets,
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub async fn run(
        &self,
        exporter: &Exporter,
        report: &mut impl Report,
    ) -> Result<RunResult, SourceMissing> {
        if tokio::fs::metadata(&self.source).await.is_err() {
            tracing::warn!("source image {} does not exist", self.source.display());
            return Err(SourceMissing(self.source.clone()));
        }

        tracing::info!(
            "exporting {} icons from {}",
            self.targets.len(),
            self.source.display()
        );
        report.started(&self.source, self.targets.len());

        let mut result = RunResult {
            succeeded: 0,
            total: self.targets.len(),
        };
        for target in &self.targets {
            let destination = target.resolve(&self.project_dir);
            let outcome = exporter
                .export(&self.source, &destination, target.size, target.size)
                .await;
            match &outcome {
                Ok(_) => result.succeeded += 1,
                Err(e) => tracing::warn!("failed to export {}: {}", target, e.describe()),
            }
            report.exported(target, &outcome);
        }

        tracing::info!("{}/{} icons generated", result.succeeded, result.total);
        report.finished(&result);
        Ok(result)
    }
}

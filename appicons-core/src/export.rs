use crate::converter::{self, ExitStatus, Inkscape, Locator};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("converter not found, install Inkscape from https://inkscape.org")]
    ConverterNotFound,
    #[error("failed to create directory {}", .0.display())]
    CreateDirectory(PathBuf, #[source] std::io::Error),
    #[error("error running converter")]
    Converter(#[from] converter::Error),
}

impl ExportError {
    /// The error message followed by its causes.
    pub fn describe(&self) -> String {
        let mut msg = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            msg.push_str(": ");
            msg.push_str(&cause.to_string());
            source = cause.source();
        }
        msg
    }
}

/// How an export that counts as successful ended.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Exported {
    Clean,
    /// The converter reported failure but the output file is there anyway.
    Tolerated(ExitStatus),
}

#[derive(Debug, Clone)]
pub struct Exporter {
    locator: Locator,
}

impl Exporter {
    pub fn new(locator: Locator) -> Self {
        Exporter { locator }
    }

    #[tracing::instrument(level = "debug", skip(self, source, destination), fields(destination = %destination.display()))]
    pub async fn export(
        &self,
        source: &Path,
        destination: &Path,
        width: u32,
        height: u32,
    ) -> Result<Exported, ExportError> {
        let inkscape = self
            .locator
            .locate()
            .map(Inkscape::new)
            .ok_or(ExportError::ConverterNotFound)?;

        if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| ExportError::CreateDirectory(parent.to_owned(), e))?;
        }

        let output = inkscape.export(source, destination, width, height).await?;
        output.log();

        match output.status.check_status() {
            Ok(()) => Ok(Exported::Clean),
            Err(e) => {
                if output_exists(destination).await {
                    tracing::warn!(
                        "{}, but {} was written; treating as success",
                        output.status.message(),
                        destination.display()
                    );
                    Ok(Exported::Tolerated(output.status))
                } else {
                    Err(e.into())
                }
            }
        }
    }
}

async fn output_exists(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|m| m.is_file())
        .unwrap_or(false)
}

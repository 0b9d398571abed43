use std::{
    ffi::{OsStr, OsString},
    path::{Path, PathBuf},
    process::Stdio,
};
use tokio::process::Command;

pub use process::*;

mod process;

const PROGRAM_NAME: &str = "inkscape";

const WINDOWS_INSTALL_PATHS: &[&str] = &[
    r"C:\Program Files\Inkscape\bin\inkscape.exe",
    r"C:\Program Files\Inkscape\inkscape.exe",
    r"C:\Program Files (x86)\Inkscape\bin\inkscape.exe",
    r"C:\Program Files (x86)\Inkscape\inkscape.exe",
];

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to start converter process")]
    FailedToStartConverterProcess(#[source] std::io::Error),
    #[error("{}", .0.message())]
    ConverterError(ExitStatus),
}

/// How to find the converter executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    /// An explicitly configured executable. Bare names go through the search
    /// path, anything else has to exist.
    Explicit(PathBuf),
    /// Well-known installation paths, the first one that exists wins.
    Candidates(Vec<PathBuf>),
    /// A program name resolved through a `PATH`-style search path, like `which`.
    SearchPath {
        name: OsString,
        paths: Option<OsString>,
    },
}

impl Locator {
    /// The platform default: fixed install locations on Windows, the `PATH`
    /// everywhere else.
    pub fn for_host() -> Self {
        if cfg!(windows) {
            Locator::Candidates(WINDOWS_INSTALL_PATHS.iter().map(PathBuf::from).collect())
        } else {
            Locator::SearchPath {
                name: OsString::from(PROGRAM_NAME),
                paths: std::env::var_os("PATH"),
            }
        }
    }

    pub fn with_override(binary: Option<PathBuf>) -> Self {
        match binary {
            Some(binary) => Locator::Explicit(binary),
            None => Locator::for_host(),
        }
    }

    pub fn locate(&self) -> Option<PathBuf> {
        let found = match self {
            Locator::Explicit(path) => which::which(path).ok(),
            Locator::Candidates(candidates) => candidates.iter().find(|p| p.is_file()).cloned(),
            Locator::SearchPath { name, paths } => {
                let cwd = std::env::current_dir().ok()?;
                which::which_in(name, paths.as_ref(), cwd).ok()
            }
        };
        match &found {
            Some(path) => tracing::debug!("found converter at {}", path.display()),
            None => tracing::debug!(locator = ?self, "converter not found"),
        }
        found
    }
}

/// A located Inkscape executable.
#[derive(Debug, Clone)]
pub struct Inkscape {
    path: PathBuf,
}

impl Inkscape {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Inkscape { path: path.into() }
    }

    pub fn export_args(source: &Path, destination: &Path, width: u32, height: u32) -> Vec<OsString> {
        let mut filename_arg = OsString::from("--export-filename=");
        filename_arg.push(destination);
        vec![
            source.as_os_str().to_owned(),
            filename_arg,
            OsString::from(format!("--export-width={}", width)),
            OsString::from(format!("--export-height={}", height)),
        ]
    }

    /// Renders `source` into a PNG at `destination` and waits for the
    /// converter to exit.
    pub async fn export(
        &self,
        source: &Path,
        destination: &Path,
        width: u32,
        height: u32,
    ) -> Result<ConverterOutput, Error> {
        self.run(&Self::export_args(source, destination, width, height))
            .await
    }

    async fn run(&self, args: &[impl AsRef<OsStr>]) -> Result<ConverterOutput, Error> {
        let mut cmd = Command::new(&self.path);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        for arg in args {
            cmd.arg(arg.as_ref());
        }

        tracing::debug!(command = ?cmd.as_std(), "running converter");
        let output = cmd
            .output()
            .await
            .map_err(Error::FailedToStartConverterProcess)?;
        Ok(ConverterOutput::from(output))
    }
}

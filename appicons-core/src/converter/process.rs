use super::Error;

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum ExitStatus {
    Successful,
    Failed(Option<i32>),
}

impl ExitStatus {
    pub fn check_status(&self) -> Result<(), Error> {
        match self {
            ExitStatus::Successful => Ok(()),
            ExitStatus::Failed(_) => Err(Error::ConverterError(*self)),
        }
    }

    pub fn message(&self) -> String {
        match self {
            ExitStatus::Successful => "converter exited successfully".to_owned(),
            ExitStatus::Failed(Some(code)) => {
                format!("converter exited with error status {}", code)
            }
            ExitStatus::Failed(None) => "converter exited with unknown error status".to_owned(),
        }
    }
}

impl From<std::process::ExitStatus> for ExitStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        if status.success() {
            ExitStatus::Successful
        } else {
            ExitStatus::Failed(status.code())
        }
    }
}

/// Exit status and captured output streams of a finished converter process.
#[derive(Debug)]
pub struct ConverterOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl From<std::process::Output> for ConverterOutput {
    fn from(output: std::process::Output) -> Self {
        ConverterOutput {
            status: output.status.into(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

impl ConverterOutput {
    pub(crate) fn log(&self) {
        for line in self.stdout.lines().filter(|l| !l.trim().is_empty()) {
            tracing::debug!(stream = "stdout", "{}", line);
        }
        for line in self.stderr.lines().filter(|l| !l.trim().is_empty()) {
            tracing::debug!(stream = "stderr", "{}", line);
        }
    }
}

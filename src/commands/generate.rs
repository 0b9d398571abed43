use crate::cli;
use appicons_core::{
    batch::{Batch, Report, RunResult},
    config::Config,
    converter::Locator,
    export::{ExportError, Exported, Exporter},
    targets::ExportTarget,
};
use std::{
    io::{IsTerminal as _, Write as _},
    path::Path,
    time::Instant,
};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

fn write_color(stdout: &mut StandardStream, text: &str, fg_color: Color) -> std::io::Result<()> {
    stdout.set_color(ColorSpec::new().set_fg(Some(fg_color)))?;
    let result = stdout.write_all(text.as_bytes());
    stdout.reset().ok();
    result
}

fn color_choice() -> ColorChoice {
    if std::io::stdout().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Prints one line per exported icon and a summary.
struct ConsoleReport {
    stdout: StandardStream,
    started_at: Instant,
}

impl ConsoleReport {
    fn new() -> Self {
        ConsoleReport {
            stdout: StandardStream::stdout(color_choice()),
            started_at: Instant::now(),
        }
    }

    fn print_exported(
        &mut self,
        target: &ExportTarget,
        outcome: &Result<Exported, ExportError>,
    ) -> std::io::Result<()> {
        match outcome {
            Ok(Exported::Clean) => {
                write_color(&mut self.stdout, "✓ created", Color::Green)?;
                writeln!(self.stdout, ": {}", target)
            }
            Ok(Exported::Tolerated(status)) => {
                write_color(&mut self.stdout, "✓ created", Color::Green)?;
                write!(self.stdout, ": {} ", target)?;
                write_color(
                    &mut self.stdout,
                    &format!("({})", status.message()),
                    Color::Yellow,
                )?;
                writeln!(self.stdout)
            }
            Err(e) => {
                write_color(&mut self.stdout, "✗ failed", Color::Red)?;
                writeln!(self.stdout, ": {}: {}", target, e.describe())
            }
        }
    }

    fn print_summary(&mut self, result: &RunResult) -> std::io::Result<()> {
        let elapsed = humantime::format_duration(std::time::Duration::from_millis(
            self.started_at.elapsed().as_millis() as u64,
        ));
        writeln!(self.stdout)?;
        let color = if result.all_succeeded() {
            Color::Green
        } else {
            Color::Red
        };
        write_color(
            &mut self.stdout,
            &format!("{}/{} icons generated", result.succeeded, result.total),
            color,
        )?;
        writeln!(self.stdout, " in {}", elapsed)
    }
}

impl Report for ConsoleReport {
    fn started(&mut self, source: &Path, _total: usize) {
        self.started_at = Instant::now();
        writeln!(self.stdout, "source image: {}\n", source.display()).ok();
    }

    fn exported(&mut self, target: &ExportTarget, outcome: &Result<Exported, ExportError>) {
        self.print_exported(target, outcome).ok();
    }

    fn finished(&mut self, result: &RunResult) {
        self.print_summary(result).ok();
    }
}

pub async fn generate(
    project_dir: &Path,
    config: &Config,
    locator: Locator,
    args: cli::generate::Cli,
) -> eyre::Result<()> {
    let batch = Batch::new(
        project_dir,
        config.source(),
        config.targets().for_platforms(&args.platforms),
    );
    let exporter = Exporter::new(locator);
    let mut report = ConsoleReport::new();

    match batch.run(&exporter, &mut report).await {
        Ok(result) if result.all_succeeded() => Ok(()),
        Ok(result) if args.strict => {
            Err(eyre::eyre!("{} of {} icons failed", result.failed(), result.total))
        }
        Ok(_) => Ok(()),
        Err(e) if args.strict => Err(e.into()),
        Err(e) => {
            write_color(&mut report.stdout, "✗ ", Color::Red)?;
            writeln!(report.stdout, "{}", e)?;
            Ok(())
        }
    }
}

use appicons_core::targets::Platform;
use std::path::PathBuf;

/// Generates platform icon assets from a single SVG logo using Inkscape.
#[derive(clap::Parser)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Sets the project directory that source and output paths are relative to
    #[arg(short = 'C', long, env = "APPICONS_PROJECT_DIR")]
    pub project_dir: Option<PathBuf>,

    /// Sets a custom configuration file path
    #[arg(short, long, env = "APPICONS_CONFIG_FILE")]
    pub config_file: Option<PathBuf>,

    /// Sets the Inkscape binary to use
    #[arg(long, env = "APPICONS_INKSCAPE")]
    pub inkscape_binary: Option<PathBuf>,

    /// Logs more details, repeat for debug output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub subcommand: Option<Cmd>,
}

#[derive(clap::Subcommand)]
pub enum Cmd {
    /// Exports all icons (the default)
    Generate(generate::Cli),

    /// Prints the icons that would be exported
    List(list::Cli),

    /// Prints the Inkscape binary that would be used
    Locate,

    /// Prints version information
    Version,
}

pub mod generate {
    use super::*;

    #[derive(clap::Args, Default)]
    pub struct Cli {
        /// Only exports icons for this platform (android, ios, macos, web, other)
        #[arg(short, long = "platform", value_name = "PLATFORM")]
        pub platforms: Vec<Platform>,

        /// Exits with an error status unless every icon was exported
        #[arg(long)]
        pub strict: bool,
    }
}

pub mod list {
    use super::*;

    #[derive(clap::Args)]
    pub struct Cli {
        /// Only lists icons for this platform (android, ios, macos, web, other)
        #[arg(short, long = "platform", value_name = "PLATFORM")]
        pub platforms: Vec<Platform>,
    }
}

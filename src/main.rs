use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use nixci::cli::{handle_config_command, handle_submissions_command, handle_validate_command};
use nixci::config::{paths::NixciPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "nixci",
    author = "NixCI",
    version,
    about = "Onboarding flow for the NixCI construction management app",
    long_about = "NixCI walks new users through a seven-step registration wizard: \
                  identity, account type, personal details, qualifications, medical \
                  information and company details. Run without a subcommand to \
                  start the interactive interface."
)]
struct Cli {
    /// Base directory for settings and the submission log
    #[arg(long, global = true, env = "NIXCI_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Check a draft file against every wizard step
    Validate {
        /// Path to a JSON or YAML draft
        file: PathBuf,
        /// Draft format (json, yaml); inferred from the extension if omitted
        #[arg(short, long)]
        format: Option<String>,
    },

    /// List submitted registrations
    #[command(alias = "subs")]
    Submissions {
        /// Number of submissions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
        /// Show one submission in full
        #[arg(long)]
        id: Option<String>,
    },

    /// Create the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => NixciPaths::with_base_dir(dir),
        None => NixciPaths::new()?,
    };

    match cli.command {
        None | Some(Commands::Tui) => {
            let settings = Settings::load_or_create(&paths)?;
            nixci::tui::run_tui(&settings, &paths)?;
        }
        Some(Commands::Validate { file, format }) => {
            handle_validate_command(&file, format.as_deref())?;
        }
        Some(Commands::Submissions { limit, id }) => {
            handle_submissions_command(&paths, limit, id.as_deref())?;
        }
        Some(Commands::Init) => {
            let settings = Settings::load_or_create(&paths)?;
            settings.save(&paths)?;
            println!("Initialized NixCI at: {}", paths.base_dir().display());
            println!("Settings written to: {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            let settings = Settings::load_or_create(&paths)?;
            handle_config_command(&paths, &settings)?;
        }
    }

    Ok(())
}

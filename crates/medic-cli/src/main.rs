use std::io::{self, Write};

use clap::{Parser, Subcommand};
use eyre::Result;

use medic_cli::commands::{self, EvaluateArgs};
use medic_cli::config::{self, LogFormat, MedicConfig};
use medic_cli::logging;
use medic_cli::shell::Shell;

#[derive(Parser)]
#[command(name = "medic")]
#[command(about = "Medical algorithm browser: symptom protocols and dispositions")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List body-region categories
    Categories,
    /// List the protocols of a category
    Protocols {
        /// Category letter (e.g. A)
        category: String,
    },
    /// Print a protocol's questions and disposition text
    Show {
        /// Protocol code (e.g. A-1)
        code: String,
    },
    /// Evaluate a protocol for a set of checked controls
    Evaluate {
        /// Protocol code (e.g. A-1)
        code: String,
        /// Control to check (repeatable)
        #[arg(long = "check")]
        checks: Vec<String>,
        /// Screening is complete
        #[arg(long)]
        screened: bool,
        /// Also print a disposition note
        #[arg(long)]
        note: bool,
        /// Print the evaluation as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate the protocol registry, including any overlay
    Validate,
    /// Browse protocols interactively (default)
    Browse,
    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the config file location
    Path,
    /// Print the effective config
    Show,
    /// Write a default config file if none exists
    Init,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    // The log format is part of the config, so config loading (and any
    // migration it runs) logs through a pretty stderr subscriber.
    let config = tracing::subscriber::with_default(
        logging::subscriber(LogFormat::Pretty, logging::default_filter(), io::stderr),
        config::load_config,
    )?;
    tracing::subscriber::set_global_default(logging::subscriber(
        config.log_format,
        logging::default_filter(),
        io::stderr,
    ))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Commands::Browse) {
        Commands::Categories => {
            let registry = commands::load_registry(&config)?;
            commands::list_categories(&registry, &mut out)?;
        }
        Commands::Protocols { category } => {
            let registry = commands::load_registry(&config)?;
            commands::list_protocols(&registry, &category.to_ascii_uppercase(), &mut out)?;
        }
        Commands::Show { code } => {
            let registry = commands::load_registry(&config)?;
            commands::show_protocol(&registry, &code.to_ascii_uppercase(), &mut out)?;
        }
        Commands::Evaluate {
            code,
            checks,
            screened,
            note,
            json,
        } => {
            let registry = commands::load_registry(&config)?;
            let args = EvaluateArgs {
                code: code.to_ascii_uppercase(),
                checks,
                screened,
                note,
                json,
            };
            commands::evaluate(&registry, &config, &args, &mut out)?;
        }
        Commands::Validate => {
            if !commands::validate(&config, &mut out)? {
                out.flush()?;
                std::process::exit(1);
            }
        }
        Commands::Browse => {
            let registry = commands::load_registry(&config)?;
            let mut shell = Shell::new(&registry, &config);
            shell.run(io::stdin().lock(), &mut out)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Path => writeln!(out, "{}", config::config_path()?.display())?,
            ConfigAction::Show => {
                writeln!(out, "{}", serde_json::to_string_pretty(&config)?)?;
            }
            ConfigAction::Init => {
                let path = config::config_path()?;
                if path.exists() {
                    writeln!(out, "config already exists at {}", path.display())?;
                } else {
                    let path = config::save_config(&MedicConfig::default())?;
                    writeln!(out, "wrote {}", path.display())?;
                }
            }
        },
    }

    Ok(())
}

use super::render::{print_config, print_error, print_json, print_messages, print_rows};
use super::setup::{init_logging, Cli, Commands};
use super::shell;
use anyhow::Context;
use clap::Parser;
use directories::ProjectDirs;
use roastery::api::{CmdResult, ConfigAction, FieldChanges, RoasteryApi};
use roastery::config::RoasteryConfig;
use roastery::error::Result;
use roastery::store::sqlite::SqliteStore;
use std::path::PathBuf;
use std::process::ExitCode;

pub(super) struct AppContext {
    pub api: RoasteryApi<SqliteStore>,
    pub db_label: String,
}

pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config_dir = config_dir();
    let config = RoasteryConfig::load(&config_dir)
        .with_context(|| format!("reading config in {}", config_dir.display()))?;
    let color = !cli.no_color && config.color;
    init_logging(cli.verbose, color);
    install_panic_hook();
    if !color {
        colored::control::set_override(false);
    }

    let db_path = cli.db.clone().unwrap_or_else(|| config.database_path());
    tracing::debug!(db = %db_path.display(), config = %config_dir.display(), "starting");
    let mut ctx = AppContext {
        db_label: db_path.display().to_string(),
        api: RoasteryApi::new(SqliteStore::new(db_path), config_dir),
    };

    let command = cli.command.unwrap_or(Commands::List { json: false });
    if let Commands::Shell = command {
        return Ok(shell::run(&mut ctx));
    }

    // Edit selects by row number, so the grid has to exist before the selection is read.
    if let Commands::Edit { .. } = command {
        ctx.api.list()?;
    }

    let ok = execute(&mut ctx, command);
    Ok(if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Runs one command and prints its outcome. Returns false if anything went wrong.
pub(super) fn execute(ctx: &mut AppContext, command: Commands) -> bool {
    match dispatch(ctx, command) {
        Ok(result) => !result.has_errors(),
        Err(e) => {
            print_error(&e);
            false
        }
    }
}

fn dispatch(ctx: &mut AppContext, command: Commands) -> Result<CmdResult> {
    let result = match command {
        Commands::List { json } => {
            let result = ctx.api.list()?;
            if json {
                print_json(&result.listed_rows)?;
            } else {
                print_rows(&result.listed_rows);
            }
            result
        }
        Commands::Add(args) => {
            let result = ctx.api.add(FieldChanges::from(args).into_fields())?;
            print_rows(&result.listed_rows);
            result
        }
        Commands::Edit { rows, fields } => {
            let result = ctx.api.edit(&rows, FieldChanges::from(fields))?;
            print_rows(&result.listed_rows);
            result
        }
        Commands::Show { id, json } => {
            let result = ctx.api.show(id)?;
            if json {
                print_json(&result.affected_records)?;
            } else {
                print_rows(&result.listed_rows);
            }
            result
        }
        Commands::Init => ctx.api.init(&ctx.db_label)?,
        Commands::Config { key, value } => {
            let action = match (key, value) {
                (None, _) => ConfigAction::ShowAll,
                (Some(k), None) => ConfigAction::ShowKey(k),
                (Some(k), Some(v)) => ConfigAction::Set(k, v),
            };
            let result = ctx.api.config(action)?;
            if result.messages.is_empty() {
                if let Some(config) = &result.config {
                    print_config(config);
                }
            }
            result
        }
        Commands::Shell => {
            let mut result = CmdResult::default();
            result.add_message(roastery::api::CmdMessage::warning("already in a shell"));
            result
        }
    };
    print_messages(&result.messages);
    Ok(result)
}

/// `ROASTERY_HOME` if set, otherwise the platform config directory.
fn config_dir() -> PathBuf {
    if let Some(home) = std::env::var_os("ROASTERY_HOME") {
        return PathBuf::from(home);
    }
    match ProjectDirs::from("com", "roastery", "roastery") {
        Some(dirs) => dirs.config_dir().to_path_buf(),
        None => {
            tracing::warn!("no home directory found, using the working directory for config");
            PathBuf::from(".")
        }
    }
}

/// Panics go through the log on stderr instead of the default banner. With error logging
/// filtered out (`RUST_LOG=off`) the report is printed directly so it is never lost.
fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        if panic_goes_to_log() {
            tracing::error!(panic = %info, "unexpected failure");
        } else {
            eprintln!("roastery: unexpected failure: {}", info);
        }
    }));
}

fn panic_goes_to_log() -> bool {
    tracing::enabled!(tracing::Level::ERROR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    fn subscriber(filter: &str) -> impl tracing::Subscriber + Send + Sync + 'static {
        FmtSubscriber::builder()
            .with_env_filter(EnvFilter::new(filter))
            .with_writer(std::io::sink)
            .finish()
    }

    #[test]
    fn panic_report_uses_log_when_errors_are_enabled() {
        tracing::subscriber::with_default(subscriber("warn"), || {
            assert!(panic_goes_to_log());
        });
    }

    #[test]
    fn panic_report_bypasses_log_when_logging_is_off() {
        tracing::subscriber::with_default(subscriber("off"), || {
            assert!(!panic_goes_to_log());
        });
    }
}

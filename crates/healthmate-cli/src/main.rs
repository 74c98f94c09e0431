//! healthmate - exercise suggestions from ExerciseDB, with an offline cache.
//!
//! Every lookup tries the ExerciseDB API first and falls back to the local
//! SQLite cache when no API key is configured, the request fails, or the
//! API has nothing for the query.

mod render;

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use healthmate_core::utils::capitalize;
use healthmate_core::{
    Config, CredentialStore, ExerciseDbClient, ExerciseStore, FallbackResolver, ResolveError,
};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(
    name = "healthmate",
    version,
    about = "Exercise suggestions that work offline"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Use only the local cache, even if an API key is configured
    #[arg(long, global = true)]
    offline: bool,

    /// Cache database path override
    #[arg(long, global = true)]
    database: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// List exercises for a body part (abs, arms, back, chest, legs, "full body")
    Category { name: String },
    /// Show one exercise in detail
    Show { id: String },
    /// List every exercise in the local cache
    List,
    /// Show cache location, schema version and API key status
    Status,
    /// Manage the ExerciseDB API key in the OS keychain
    Key {
        #[command(subcommand)]
        action: KeyCommand,
    },
    /// Show the configuration file settings, or write them with --init
    Config {
        /// Write the settings to the configuration file
        #[arg(long)]
        init: bool,
    },
}

#[derive(Subcommand)]
enum KeyCommand {
    /// Prompt for the API key and store it
    Set,
    /// Remove the stored API key
    Clear,
}

/// Initialize the tracing subscriber for logging
fn init_tracing(verbose: bool) {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.verbose);
    info!("healthmate starting");

    if let Command::Key { action } = cli.command {
        run_key_command(action)?;
        return Ok(ExitCode::SUCCESS);
    }
    if let Command::Config { init } = cli.command {
        run_config_command(init, cli.database)?;
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = Config::load().context("Failed to load configuration")?;
    if let Some(path) = cli.database {
        config.database_path = Some(path);
    }

    let db_path = config.database_path()?;
    let store = ExerciseStore::open(&db_path, config.migration_policy)
        .await
        .with_context(|| format!("Failed to open exercise cache at {}", db_path.display()))?;

    let credentials = if cli.offline { None } else { config.credentials() };
    let has_credentials = credentials.is_some();
    let remote = ExerciseDbClient::new(&config.client_settings())
        .context("Failed to create ExerciseDB client")?;
    let resolver = FallbackResolver::new(store.clone(), Arc::new(remote), credentials);

    let result = run_command(&resolver, cli.command, &db_path, has_credentials).await;
    store.close().await;

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(ResolveError::NotFound(lookup)) => {
            eprintln!("No exercises found for {}", lookup);
            Ok(ExitCode::FAILURE)
        }
        Err(ResolveError::UnknownCategory(e)) => {
            eprintln!("{}. Try one of: abs, arms, back, chest, legs, \"full body\"", e);
            Ok(ExitCode::FAILURE)
        }
        Err(e) => {
            error!(error = %e, "Command failed");
            Err(e.into())
        }
    }
}

async fn run_command(
    resolver: &FallbackResolver,
    command: Command,
    db_path: &Path,
    has_credentials: bool,
) -> Result<(), ResolveError> {
    match command {
        Command::Category { name } => {
            let resolved = resolver.resolve_category_name(&name).await?;
            let title = format!("{} exercises", capitalize(name.trim()));
            render::print_list(&title, &resolved);
        }
        Command::Show { id } => {
            let resolved = resolver.exercise(&id).await?;
            if let Some(exercise) = resolved.exercises.first() {
                render::print_detail(exercise, &resolved);
            }
        }
        Command::List => {
            let records = resolver.store().get_all().await?;
            render::print_records(&records);
        }
        Command::Status => {
            let store = resolver.store();
            println!("Cache:          {}", db_path.display());
            println!("Schema version: {}", store.schema_version().await?);
            println!("Exercises:      {}", store.count().await?);
            println!(
                "API key:        {}",
                if has_credentials { "configured" } else { "not configured (local only)" }
            );
        }
        // Handled before the cache is opened
        Command::Key { .. } | Command::Config { .. } => {}
    }
    Ok(())
}

fn run_key_command(action: KeyCommand) -> Result<()> {
    match action {
        KeyCommand::Set => {
            let key = rpassword::prompt_password("ExerciseDB API key: ")
                .context("Failed to read API key")?;
            let key = key.trim();
            if key.is_empty() {
                anyhow::bail!("API key must not be empty");
            }
            CredentialStore::store_api_key(key)?;
            println!("API key stored in keychain");
        }
        KeyCommand::Clear => {
            CredentialStore::delete_api_key()?;
            println!("API key removed from keychain");
        }
    }
    Ok(())
}

fn run_config_command(init: bool, database: Option<PathBuf>) -> Result<()> {
    let path = Config::config_path()?;
    // The file alone; environment overrides are not persisted
    let mut config = Config::load_from(&path).context("Failed to load configuration")?;
    if let Some(database) = database {
        config.database_path = Some(database);
    }

    if init {
        config.save().context("Failed to save configuration")?;
        info!(path = %path.display(), "Configuration written");
        println!("Wrote {}", path.display());
    } else {
        println!("Config file:      {}", path.display());
    }
    println!("API host:         {}", config.api_host);
    println!("Base URL:         {}", config.base_url);
    println!("Timeout:          {} s", config.request_timeout_secs);
    println!("Database:         {}", config.database_path()?.display());
    println!("Migration policy: {:?}", config.migration_policy);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category_with_global_flags() {
        let cli = Cli::try_parse_from([
            "healthmate",
            "category",
            "full body",
            "--offline",
            "--database",
            "/tmp/exercises.db",
        ])
        .unwrap();

        assert!(cli.offline);
        assert!(!cli.verbose);
        assert_eq!(cli.database, Some(PathBuf::from("/tmp/exercises.db")));
        assert!(matches!(cli.command, Command::Category { ref name } if name == "full body"));
    }

    #[test]
    fn test_parse_show_verbose() {
        let cli = Cli::try_parse_from(["healthmate", "-v", "show", "back-2"]).unwrap();
        assert!(cli.verbose);
        assert!(!cli.offline);
        assert!(cli.database.is_none());
        assert!(matches!(cli.command, Command::Show { ref id } if id == "back-2"));
    }

    #[test]
    fn test_parse_key_actions() {
        let set = Cli::try_parse_from(["healthmate", "key", "set"]).unwrap();
        assert!(matches!(set.command, Command::Key { action: KeyCommand::Set }));

        let clear = Cli::try_parse_from(["healthmate", "key", "clear"]).unwrap();
        assert!(matches!(clear.command, Command::Key { action: KeyCommand::Clear }));

        assert!(Cli::try_parse_from(["healthmate", "key", "rotate"]).is_err());
    }

    #[test]
    fn test_parse_config_init() {
        let cli = Cli::try_parse_from(["healthmate", "config", "--init"]).unwrap();
        assert!(matches!(cli.command, Command::Config { init: true }));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["healthmate", "--offline"]).is_err());
        assert!(Cli::try_parse_from(["healthmate", "category"]).is_err());
    }
}

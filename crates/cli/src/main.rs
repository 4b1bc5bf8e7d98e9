//! Almacén CLI - store inspection and maintenance tools.
//!
//! # Usage
//!
//! ```bash
//! # Print a stored collection
//! almacen-cli --store data/almacen.json store show inventario
//!
//! # Check every key decodes
//! almacen-cli store check
//!
//! # Seed the sample sales
//! almacen-cli store seed-sales
//!
//! # Remove the session, or everything
//! almacen-cli store clear usuarioActual
//! almacen-cli store clear
//!
//! # List demo accounts
//! almacen-cli users list
//! ```
//!
//! The store file defaults to `ALMACEN_STORE_PATH`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "almacen-cli")]
#[command(author, version, about = "Almacén CLI tools")]
struct Cli {
    /// Store file (defaults to `ALMACEN_STORE_PATH`)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect and maintain the JSON store
    Store {
        #[command(subcommand)]
        action: StoreAction,
    },
    /// Demo accounts
    Users {
        #[command(subcommand)]
        action: UsersAction,
    },
}

#[derive(Subcommand)]
enum StoreAction {
    /// Print the raw value of a key
    Show {
        /// One of usuarioActual, inventario, empleados, ventas
        key: String,
    },
    /// Decode every key; exits non-zero if any is corrupt
    Check,
    /// Write the sample sales if none are stored
    SeedSales,
    /// Remove a key, or every known key
    Clear {
        key: Option<String>,
    },
}

#[derive(Subcommand)]
enum UsersAction {
    /// List usernames and roles
    List,
}

fn main() {
    // Load .env file if present (ignore errors if not found)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so command output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "almacen_cli=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Store { action } => {
            let store = commands::store::open(cli.store)?;
            match action {
                StoreAction::Show { key } => commands::store::show(&store, &key, &mut out)?,
                StoreAction::Check => commands::store::check(&store, &mut out)?,
                StoreAction::SeedSales => commands::store::seed_sales(&store, &mut out)?,
                StoreAction::Clear { key } => {
                    commands::store::clear(&store, key.as_deref(), &mut out)?;
                }
            }
        }
        Commands::Users { action } => match action {
            UsersAction::List => commands::users::list(&mut out)?,
        },
    }
    Ok(())
}

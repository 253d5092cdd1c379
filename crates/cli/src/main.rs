//! Washboard CLI - Database migrations and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Create the database schema (create-if-absent)
//! washboard migrate
//!
//! # Register a dashboard user
//! washboard register -u jan -e jan@example.com -p s3cret -c s3cret
//!
//! # Deregister a user by email
//! washboard deregister -e jan@example.com
//!
//! # Print the sales dashboard, optionally exporting the filtered view
//! washboard report --status Pending --export pending.csv
//! ```
//!
//! # Environment Variables
//!
//! - `WASHBOARD_DATABASE_URL` - SQLite connection string
//!   (default: `sqlite://washboard.db`)

#![cfg_attr(not(test), forbid(unsafe_code))]
// CLI output is the product here.
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "washboard")]
#[command(author, version, about = "Washboard CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create or update the database schema
    Migrate,
    /// Register a dashboard user
    Register {
        /// Username
        #[arg(short, long)]
        username: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,

        /// Password confirmation
        #[arg(short, long)]
        confirm_password: String,
    },
    /// Deregister a dashboard user by email
    Deregister {
        /// Email address of the user to remove
        #[arg(short, long)]
        email: String,
    },
    /// Print the sales dashboard
    Report {
        /// Filter the exported view by status (Pending or Completed)
        #[arg(short, long)]
        status: Option<String>,

        /// Also export the filtered order view to this CSV path
        #[arg(long)]
        export: Option<std::path::PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Initialize tracing with EnvFilter; default to info level
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "washboard=info,washboard_ops=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Register {
            username,
            email,
            password,
            confirm_password,
        } => commands::users::register(username, email, password, confirm_password).await?,
        Commands::Deregister { email } => commands::users::deregister(email).await?,
        Commands::Report { status, export } => commands::report::run(status, export).await?,
    }

    Ok(())
}

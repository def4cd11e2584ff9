//! BRF Portal CLI - database migrations and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! brf-cli migrate
//!
//! # Create a user account
//! brf-cli admin create -e styrelsen@example.com -p "ett starkt lösenord" -r admin
//!
//! # Seed the standard content pages
//! brf-cli seed
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `admin create` - Create user accounts (members and admins)
//! - `seed` - Insert the standard content pages if missing

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "brf-cli")]
#[command(author, version, about = "BRF Sjöutsikten portal CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Manage user accounts
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
    /// Seed the standard content pages
    Seed,
}

#[derive(Subcommand)]
enum AdminAction {
    /// Create a new user account
    Create {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password (min 8 characters)
        #[arg(short, long)]
        password: String,

        /// Role (`member` or `admin`)
        #[arg(short, long, default_value = "member")]
        role: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

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
        Commands::Admin { action } => match action {
            AdminAction::Create {
                email,
                password,
                role,
            } => {
                commands::admin::create_user(&email, &password, &role).await?;
            }
        },
        Commands::Seed => commands::seed::run().await?,
    }
    Ok(())
}

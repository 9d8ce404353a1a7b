//! Operator CLI for the land registry contracts.
//!
//! Configuration comes from an optional TOML file plus `LAND_REGISTRY_*`
//! environment variables (a `.env` file in the working directory is read
//! first). Results are printed as JSON.

use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;

use land_registry_client::config::load_config;
use land_registry_client::observability::logging::init_logging;
use land_registry_client::RegistryClient;

#[derive(Parser)]
#[command(name = "land-registry-client")]
#[command(about = "Operate the land registry contracts", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new account (no configuration needed)
    NewAddress,
    #[command(flatten)]
    Chain(ChainCommands),
}

#[derive(Subcommand)]
enum ChainCommands {
    /// Number of registered users
    UserCount,
    /// Check whether an address is a verified user
    VerifyUser { address: String },
    /// List every registered user address
    AllUsers,
    /// Number of minted land tokens
    LandCount,
    /// Owner of a land token
    OwnerOf { land_id: u64 },
    /// View and approval state of a requester for a land token
    RequesterStatus { address: String, land_id: u64 },
    /// L1/L2 approval and completed registration counts
    ApprovalCounts,
    /// Whitelist an L1 approver on both contracts
    WhitelistL1 { address: String },
    /// Whitelist an L2 approver
    WhitelistL2 { address: String },
    /// Mint a land token
    Mint {
        approver: String,
        to: String,
        land_id: u64,
        token_uri: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let command = match cli.command {
        Commands::NewAddress => return print_json(&RegistryClient::create_address()?),
        Commands::Chain(command) => command,
    };

    let config = load_config(cli.config.as_deref())?;
    init_logging(&config.observability);
    let client = RegistryClient::new(config)?;

    match command {
        ChainCommands::UserCount => print_json(&client.user_count().await?)?,
        ChainCommands::VerifyUser { address } => print_json(&client.verify_user(&address).await?)?,
        ChainCommands::AllUsers => print_json(&client.all_user_addresses().await?)?,
        ChainCommands::LandCount => print_json(&client.land_count().await?)?,
        ChainCommands::OwnerOf { land_id } => print_json(&client.owner_of(land_id).await?)?,
        ChainCommands::RequesterStatus { address, land_id } => {
            print_json(&client.land_requester_status(&address, land_id).await?)?
        }
        ChainCommands::ApprovalCounts => print_json(&json!({
            "l1": client.l1_approval_count().await?,
            "l2": client.l2_approval_count().await?,
            "completed": client.completed_registrations().await?,
        }))?,
        ChainCommands::WhitelistL1 { address } => print_json(&json!({
            "user_registry": client.whitelist_user_approver_l1(&address).await?,
            "land_registry": client.whitelist_approver_l1(&address).await?,
        }))?,
        ChainCommands::WhitelistL2 { address } => {
            print_json(&client.whitelist_approver_l2(&address).await?)?
        }
        ChainCommands::Mint {
            approver,
            to,
            land_id,
            token_uri,
        } => print_json(&client.mint(&approver, &to, land_id, &token_uri).await?)?,
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::Level;

use fairfund_cli::{
    commands::{
        deploy::{self as deploy_cmd, DeployTarget},
        encode::encode,
    },
    config::{AuctionHouseOverrides, DEFAULT_CONFIG_PATH, load_config},
    provider,
};
use fairfund_core::{ContractKind, DEFAULT_CONFIRMATIONS};

#[derive(Debug, Parser)]
#[command(
    name = "fairfund",
    about = "Deploy the fair-funding AuctionHouse and Vault contracts",
    version
)]
struct Cli {
    /// Path to the deployment configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: PathBuf,

    /// RPC URL for the target chain (not needed for `encode`)
    #[arg(long, env = "FAIRFUND_RPC_URL", value_name = "URL")]
    rpc_url: Option<String>,

    /// Deployer private key; defaults to the node's first unlocked account
    #[arg(long, env = "PRIVATE_KEY", value_name = "KEY", hide_env_values = true)]
    private_key: Option<String>,

    /// Confirmations to wait for after each deployment
    #[arg(long, default_value_t = DEFAULT_CONFIRMATIONS, value_name = "N")]
    confirmations: u64,

    /// JSON file to record deployed addresses in
    #[arg(long, value_name = "FILE")]
    deployments: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Deploy the AuctionHouse contract
    AuctionHouse(AuctionHouseArgs),

    /// Deploy the Vault contract
    Vault,

    /// Deploy the Vault, then an AuctionHouse that pays into it
    All(AllArgs),

    /// Print the ABI-encoded constructor arguments without sending anything
    Encode(EncodeArgs),
}

#[derive(Debug, Args)]
struct AuctionHouseArgs {
    /// Vault address (from config by default)
    #[arg(long, value_name = "ADDRESS")]
    vault: Option<String>,

    /// Reserve price in ether (from config by default)
    #[arg(long, value_name = "ETHER")]
    reserve_price: Option<String>,
}

#[derive(Debug, Args)]
struct AllArgs {
    /// Reserve price in ether (from config by default)
    #[arg(long, value_name = "ETHER")]
    reserve_price: Option<String>,
}

#[derive(Debug, Args)]
struct EncodeArgs {
    /// Contract whose constructor arguments to encode
    #[arg(value_enum)]
    contract: Contract,

    #[command(flatten)]
    auction_house: AuctionHouseArgs,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Contract {
    AuctionHouse,
    Vault,
}

impl From<Contract> for ContractKind {
    fn from(contract: Contract) -> Self {
        match contract {
            Contract::AuctionHouse => ContractKind::AuctionHouse,
            Contract::Vault => ContractKind::Vault,
        }
    }
}

impl From<AllArgs> for AuctionHouseOverrides {
    fn from(args: AllArgs) -> Self {
        Self {
            vault_address: None,
            reserve_price: args.reserve_price,
        }
    }
}

impl From<AuctionHouseArgs> for AuctionHouseOverrides {
    fn from(args: AuctionHouseArgs) -> Self {
        Self {
            vault_address: args.vault,
            reserve_price: args.reserve_price,
        }
    }
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config = match load_config(&cli.config) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    };
    let config_dir = cli.config.parent().unwrap_or(Path::new("."));
    let target = DeployTarget {
        config: &config,
        config_dir,
        deployments: cli.deployments.as_deref(),
    };

    let rpc_url = cli.rpc_url.as_deref();
    let private_key = cli.private_key.as_deref();

    match cli.command {
        Commands::Encode(args) => {
            println!("{}", encode(&config, args.contract.into(), args.auction_house.into())?);
        }
        Commands::AuctionHouse(args) => {
            let deployer = connect(rpc_url, private_key, cli.confirmations).await?;
            deploy_cmd::auction_house(&deployer, &target, args.into()).await?;
        }
        Commands::Vault => {
            let deployer = connect(rpc_url, private_key, cli.confirmations).await?;
            deploy_cmd::vault(&deployer, &target).await?;
        }
        Commands::All(args) => {
            let deployer = connect(rpc_url, private_key, cli.confirmations).await?;
            deploy_cmd::all(&deployer, &target, args.into()).await?;
        }
    }

    Ok(())
}

async fn connect(
    rpc_url: Option<&str>,
    private_key: Option<&str>,
    confirmations: u64,
) -> eyre::Result<provider::RpcDeployer> {
    let rpc_url =
        rpc_url.ok_or_else(|| eyre::eyre!("--rpc-url or FAIRFUND_RPC_URL is required to deploy"))?;
    provider::connect(rpc_url, private_key, confirmations).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn all_rejects_vault_override() {
        let err = Cli::try_parse_from([
            "fairfund",
            "all",
            "--vault",
            "0x00000000000000000000000000000000000000aa",
        ])
        .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn all_accepts_reserve_price() {
        let cli = Cli::try_parse_from(["fairfund", "all", "--reserve-price", "2"])
            .expect("should parse");

        let Commands::All(args) = cli.command else {
            panic!("expected `all`");
        };
        assert_eq!(
            AuctionHouseOverrides::from(args),
            AuctionHouseOverrides {
                vault_address: None,
                reserve_price: Some("2".into()),
            }
        );
    }

    #[test]
    fn auction_house_accepts_vault_override() {
        let cli = Cli::try_parse_from([
            "fairfund",
            "auction-house",
            "--vault",
            "0x00000000000000000000000000000000000000aa",
        ])
        .expect("should parse");

        assert!(matches!(
            cli.command,
            Commands::AuctionHouse(AuctionHouseArgs { vault: Some(_), .. })
        ));
    }
}

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use pony_maze::{
    init_logging, CliNavigator, ClientConfig, HttpGateway, InMemoryGateway, MazeClient,
    DEFAULT_API_URL, DEFAULT_REQUEST_TIMEOUT,
};

#[cfg(feature = "std")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "std")]
use std::time::Duration;

/// Without a subcommand the play flags apply directly: `pony-maze --api-url URL`.
#[derive(Parser)]
#[command(author, version, about, long_about = None, args_conflicts_with_subcommands = true)]
#[cfg(feature = "std")]
struct Cli {
    #[command(flatten)]
    play: PlayArgs,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
#[cfg(feature = "std")]
struct PlayArgs {
    #[arg(long, env = "PONY_MAZE_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,
    #[arg(
        long,
        default_value_t = DEFAULT_REQUEST_TIMEOUT.as_secs(),
        help = "Timeout for each request to the service"
    )]
    timeout_secs: u64,
    #[arg(long, help = "Ignore proxy settings from the environment")]
    no_proxy: bool,
}

#[cfg(feature = "std")]
impl PlayArgs {
    fn config(&self) -> ClientConfig {
        let config = ClientConfig::new(self.api_url.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs));
        if self.no_proxy {
            config.without_proxy()
        } else {
            config
        }
    }
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the remote maze service (default).
    Play(PlayArgs),
    /// Play against a maze generated locally, without network access.
    Offline {
        #[arg(long, help = "Fix RNG seed for reproducible mazes (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, num_args = 1.., help = "Only accept these player names")]
        players: Vec<String>,
    },
}

#[cfg(feature = "std")]
impl Cli {
    fn into_command(self) -> Commands {
        self.command.unwrap_or(Commands::Play(self.play))
    }
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let command = Cli::parse().into_command();

    let mut client = match command {
        Commands::Play(args) => {
            let gateway = HttpGateway::new(&args.config())?;
            MazeClient::new(Box::new(CliNavigator::stdio()), Box::new(gateway))
        }
        Commands::Offline { seed, players } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (mazes will be reproducible)", s);
            }
            let mut gateway = match seed {
                Some(s) => InMemoryGateway::with_seed(s),
                None => InMemoryGateway::new(),
            };
            if !players.is_empty() {
                gateway = gateway.with_allowed_players(players);
            }
            MazeClient::new(Box::new(CliNavigator::stdio()), Box::new(gateway))
        }
    };

    client.run().await
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pony_maze::API_URL_ENV;

    fn parse(args: &[&str]) -> Commands {
        Cli::try_parse_from(args).unwrap().into_command()
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn play_flags_work_without_subcommand() {
        let Commands::Play(args) = parse(&["pony-maze", "--api-url", "http://x/", "--no-proxy"]) else {
            panic!("expected play");
        };
        assert_eq!(args.api_url, "http://x/");
        assert_eq!(args.timeout_secs, DEFAULT_REQUEST_TIMEOUT.as_secs());
        let config = args.config();
        assert_eq!(config.api_url, "http://x/");
        assert!(!config.use_proxy);
    }

    #[test]
    fn explicit_play_takes_the_same_flags() {
        let Commands::Play(args) = parse(&["pony-maze", "play", "--api-url", "http://y/", "--timeout-secs", "5"]) else {
            panic!("expected play");
        };
        assert_eq!(args.api_url, "http://y/");
        assert_eq!(args.config().request_timeout, Duration::from_secs(5));
        assert!(args.config().use_proxy);
    }

    #[test]
    fn offline_subcommand_parses_seed_and_players() {
        assert_eq!(
            parse(&["pony-maze", "offline", "--seed", "7", "--players", "Rarity", "Applejack"]),
            Commands::Offline {
                seed: Some(7),
                players: vec!["Rarity".to_string(), "Applejack".to_string()],
            }
        );
    }

    #[test]
    fn play_flags_conflict_with_other_subcommands() {
        assert!(Cli::try_parse_from(["pony-maze", "--api-url", "http://x/", "offline"]).is_err());
    }

    #[test]
    fn api_url_reads_the_documented_env_var() {
        let cmd = Cli::command();
        let arg = cmd
            .get_arguments()
            .find(|a| a.get_id() == "api_url")
            .unwrap();
        assert_eq!(arg.get_env(), Some(std::ffi::OsStr::new(API_URL_ENV)));
    }
}

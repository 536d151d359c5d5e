use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub const DEFAULT_HOST: &str = "http://localhost:8080";

#[derive(Parser)]
#[command(
    name = "chainlog",
    about = "chainlog: an append-only hash-linked ledger node and client",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Node to talk to
    #[arg(long, global = true, env = "CHAINLOG_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run a ledger node
    Serve(ServeArgs),
    /// List every block held by the node
    List,
    /// Append a block carrying DATA
    #[command(alias = "mine")]
    Append(AppendArgs),
    /// Offer a replacement chain read from a JSON file
    Replace(ReplaceArgs),
    /// Fetch the node's chain and validate it locally
    Verify,
    /// Show node health
    Health,
}

#[derive(Args)]
pub struct ServeArgs {
    /// TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub bind: Option<SocketAddr>,
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,
    /// Require replacement chains to start with a valid genesis
    #[arg(long)]
    pub strict_root: bool,
}

#[derive(Args)]
pub struct AppendArgs {
    pub data: String,
}

#[derive(Args)]
pub struct ReplaceArgs {
    /// JSON array of blocks; `-` reads stdin
    pub file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_list() {
        let cli = Cli::try_parse_from(["chainlog", "list"]).unwrap();
        assert!(matches!(cli.command, Command::List));
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn parse_append() {
        let cli = Cli::try_parse_from(["chainlog", "append", "hello world"]).unwrap();
        if let Command::Append(args) = cli.command {
            assert_eq!(args.data, "hello world");
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_mine_alias() {
        let cli = Cli::try_parse_from(["chainlog", "mine", "x"]).unwrap();
        assert!(matches!(cli.command, Command::Append(_)));
    }

    #[test]
    fn append_requires_data() {
        assert!(Cli::try_parse_from(["chainlog", "append"]).is_err());
    }

    #[test]
    fn parse_replace_stdin() {
        let cli = Cli::try_parse_from(["chainlog", "replace", "-"]).unwrap();
        if let Command::Replace(args) = cli.command {
            assert_eq!(args.file, PathBuf::from("-"));
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_serve() {
        let cli = Cli::try_parse_from([
            "chainlog",
            "serve",
            "--bind",
            "127.0.0.1:9000",
            "--strict-root",
        ])
        .unwrap();
        if let Command::Serve(args) = cli.command {
            assert_eq!(args.bind, Some("127.0.0.1:9000".parse().unwrap()));
            assert!(args.strict_root);
            assert!(args.config.is_none());
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_serve_rejects_bad_bind() {
        assert!(Cli::try_parse_from(["chainlog", "serve", "--bind", "nowhere"]).is_err());
    }

    #[test]
    fn parse_host() {
        let cli =
            Cli::try_parse_from(["chainlog", "--host", "http://node:9000", "health"]).unwrap();
        assert_eq!(cli.host, "http://node:9000");
        assert!(matches!(cli.command, Command::Health));
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["chainlog", "verify", "--verbose"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn parse_json_format() {
        let cli = Cli::try_parse_from(["chainlog", "--format", "json", "list"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
    }
}

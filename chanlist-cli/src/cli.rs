use channel_index::DuplicatePolicy;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "chanlist",
    about = "Chanlist - fetch an EPG channel index and save it as an M3U playlist",
    version,
    author
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output and print every channel name
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Configuration file path (TOML)
    #[arg(short, long, global = true, env = "CHANLIST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Base URL for streams
    #[arg(long, global = true, env = "CHANLIST_BASE_URL")]
    pub base: Option<String>,

    /// API URL to fetch the channel list from
    #[arg(long, global = true, env = "CHANLIST_API_URL")]
    pub api: Option<String>,

    /// Output file path
    #[arg(short, long, global = true, env = "CHANLIST_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Request timeout in seconds (0 waits indefinitely)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// User agent string for requests
    #[arg(long, global = true)]
    pub user_agent: Option<String>,

    /// Proxy URL (supports http, https, socks5)
    #[arg(long, global = true)]
    pub proxy: Option<String>,

    /// Proxy username (if proxy requires authentication)
    #[arg(long, global = true)]
    pub proxy_username: Option<String>,

    /// Proxy password (if proxy requires authentication)
    #[arg(long, global = true)]
    pub proxy_password: Option<String>,

    /// How to resolve channel keys that share an order number
    #[arg(long, global = true, value_enum)]
    pub duplicates: Option<DuplicatePolicy>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate shell completions
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },

    /// Show configuration information
    Config {
        /// Show the effective configuration
        #[arg(short, long)]
        show: bool,
    },
}

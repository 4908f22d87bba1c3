use crate::cli::Args;
use anyhow::{Context, Result};
use channel_index::{ClientOptions, DEFAULT_API_URL, DEFAULT_BASE_URL, DuplicatePolicy, ProxyConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL the channel name and id are appended to
    pub base_url: String,

    /// Channel index endpoint
    pub api_url: String,

    /// Playlist output path
    pub output: PathBuf,

    /// Request timeout in seconds, 0 disables it
    pub timeout_secs: u64,

    /// Print every channel name while generating
    pub list_channels: bool,

    /// Resolution of channel keys sharing an order number
    pub duplicate_policy: DuplicatePolicy,

    /// Enable colored output
    pub colored_output: bool,

    /// User agent string for requests
    pub user_agent: Option<String>,

    /// Proxy URL (supports http, https, socks5)
    pub proxy: Option<String>,

    /// Proxy username (if proxy requires authentication)
    pub proxy_username: Option<String>,

    /// Proxy password (if proxy requires authentication)
    pub proxy_password: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            output: PathBuf::from("channel.m3u8"),
            timeout_secs: 30,
            list_channels: false,
            duplicate_policy: DuplicatePolicy::default(),
            colored_output: true,
            user_agent: None,
            proxy: None,
            proxy_username: None,
            proxy_password: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file, or the defaults when no file is given
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        match config_path {
            Some(path) => {
                let content = std::fs::read_to_string(path).with_context(|| {
                    format!("Failed to read configuration file {}", path.display())
                })?;
                toml::from_str(&content).with_context(|| {
                    format!("Failed to parse configuration file {}", path.display())
                })
            }
            None => Ok(Self::default()),
        }
    }

    /// Overlay command line and environment values
    pub fn with_args(mut self, args: &Args) -> Self {
        if let Some(base) = &args.base {
            self.base_url = base.clone();
        }
        if let Some(api) = &args.api {
            self.api_url = api.clone();
        }
        if let Some(output) = &args.output {
            self.output = output.clone();
        }
        if let Some(timeout) = args.timeout {
            self.timeout_secs = timeout;
        }
        if let Some(policy) = args.duplicates {
            self.duplicate_policy = policy;
        }
        if args.user_agent.is_some() {
            self.user_agent = args.user_agent.clone();
        }
        if args.proxy.is_some() {
            self.proxy = args.proxy.clone();
        }
        if args.proxy_username.is_some() {
            self.proxy_username = args.proxy_username.clone();
        }
        if args.proxy_password.is_some() {
            self.proxy_password = args.proxy_password.clone();
        }
        if args.verbose {
            self.list_channels = true;
        }
        if args.no_color {
            self.colored_output = false;
        }
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }

    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            timeout: self.timeout(),
            user_agent: self.user_agent.clone(),
            proxy: self.proxy.as_ref().map(|url| ProxyConfig {
                url: url.clone(),
                username: self.proxy_username.clone(),
                password: self.proxy_password.clone(),
            }),
        }
    }

    /// Show current configuration as a formatted string
    pub fn show(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration for display")
    }
}

use crate::error::{ChannelIndexError, Result};
use crate::models::ChannelMap;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Channel index endpoint of the looktv EPG service.
pub const DEFAULT_API_URL: &str = "http://looktvepg.jsa.bcs.ottcn.com:8080/ysten-lvoms-epg/epg/getChannelIndexs.shtml?deviceGroupId=1697";

pub(crate) const DEFAULT_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/136.0.0.0 Safari/537.36";

#[derive(Debug, Clone)]
pub struct ProxyConfig {
    pub url: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    /// Overall request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    pub user_agent: Option<String>,
    pub proxy: Option<ProxyConfig>,
}

/// Builds the HTTP client used to query the channel index.
pub fn create_client(options: &ClientOptions) -> Result<Client> {
    let mut builder =
        Client::builder().user_agent(options.user_agent.as_deref().unwrap_or(DEFAULT_UA));

    if let Some(timeout) = options.timeout {
        builder = builder.timeout(timeout);
    }

    if let Some(config) = &options.proxy {
        let mut proxy = reqwest::Proxy::all(&config.url).map_err(|e| {
            ChannelIndexError::InvalidUrl(format!("proxy '{}': {}", config.url, e))
        })?;
        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            proxy = proxy.basic_auth(username, password);
        }
        builder = builder.proxy(proxy);
    }

    Ok(builder.build()?)
}

/// Client for the `getChannelIndexs` endpoint.
#[derive(Debug, Clone)]
pub struct ChannelIndexClient {
    client: Client,
    api_url: Url,
}

impl ChannelIndexClient {
    pub fn new(client: Client, api_url: &str) -> Result<Self> {
        let api_url = Url::parse(api_url)
            .map_err(|e| ChannelIndexError::InvalidUrl(format!("api url '{api_url}': {e}")))?;
        Ok(Self { client, api_url })
    }

    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// Issues a single GET for the channel index and decodes the body.
    ///
    /// Anything but `200 OK` is an error; the request is never retried.
    pub async fn fetch(&self) -> Result<ChannelMap> {
        debug!("Requesting channel index from {}", self.api_url);

        let response = self.client.get(self.api_url.clone()).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ChannelIndexError::ApiStatus(status.to_string()));
        }

        let body = response.text().await?;
        let channels: ChannelMap = serde_json::from_str(&body)?;

        debug!("Channel index contains {} entries", channels.len());
        Ok(channels)
    }
}

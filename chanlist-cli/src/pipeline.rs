use crate::{config::AppConfig, error::Result, output::Reporter};
use channel_index::{
    ChannelIndexClient, Playlist, StreamUrlBuilder, create_client, order_channels, write_playlist,
};
use std::path::PathBuf;
use tracing::debug;

pub struct PlaylistGenerator {
    config: AppConfig,
    reporter: Reporter,
}

impl PlaylistGenerator {
    pub fn new(config: AppConfig, reporter: Reporter) -> Self {
        Self { config, reporter }
    }

    /// Fetches, orders, renders and saves the playlist, returning its path.
    ///
    /// The output file is only touched once every earlier stage succeeded.
    pub async fn run(&self) -> Result<PathBuf> {
        // URLs are validated before any network traffic.
        let urls = StreamUrlBuilder::new(&self.config.base_url)?;
        let client = create_client(&self.config.client_options())?;
        let index = ChannelIndexClient::new(client, &self.config.api_url)?;

        self.reporter.step("Fetching channel list...");
        let pb = self.reporter.spinner("Waiting for the channel index...");
        let result = index.fetch().await;
        pb.finish_and_clear();
        let channels = result?;
        debug!("Fetched {} channels from {}", channels.len(), index.api_url());

        self.reporter.step("Parsing...");
        let channels = order_channels(channels, self.config.duplicate_policy)?;

        self.reporter.step("Generating m3u8...");
        let mut playlist = Playlist::new();
        for channel in &channels {
            playlist.push(channel, &urls);
            if self.config.list_channels {
                self.reporter.channel(&channel.display_name);
            }
        }
        debug!("Rendered {} playlist entries", playlist.len());

        write_playlist(&self.config.output, playlist.as_str())?;
        self.reporter.done(&self.config.output);

        Ok(self.config.output.clone())
    }
}

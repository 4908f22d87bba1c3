use crate::error::{ChannelIndexError, Result};
use crate::models::Channel;
use std::path::Path;
use tracing::debug;
use url::Url;

/// Live stream root the channel paths are appended to.
pub const DEFAULT_BASE_URL: &str = "http://183.207.248.71:80/cntv/live1";

pub const PLAYLIST_HEADER: &str = "#EXTM3U\n\n";

/// Resolves the stream URL of a channel against a base URL.
#[derive(Debug, Clone)]
pub struct StreamUrlBuilder {
    base: Url,
}

impl StreamUrlBuilder {
    pub fn new(base: &str) -> Result<Self> {
        let url = Url::parse(base)
            .map_err(|e| ChannelIndexError::InvalidUrl(format!("base url '{base}': {e}")))?;

        if url.cannot_be_a_base() {
            return Err(ChannelIndexError::InvalidUrl(format!(
                "base url '{base}' cannot carry path segments"
            )));
        }

        Ok(Self { base: url })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Appends `<display_name>/<id>` to the base, percent-encoding each
    /// segment.
    pub fn stream_url(&self, channel: &Channel) -> Url {
        let mut url = self.base.clone();
        // `new` rejects cannot-be-a-base URLs, so the segments are always available.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .push(&channel.display_name)
                .push(&channel.id);
        }
        url
    }
}

/// Renders the `#EXTINF` block of a single channel.
pub fn format_entry(channel: &Channel, urls: &StreamUrlBuilder) -> String {
    format!(
        "#EXTINF:-1,{}\n{}\n",
        channel.display_name,
        urls.stream_url(channel)
    )
}

/// Extended M3U document built one channel at a time.
#[derive(Debug, Clone)]
pub struct Playlist {
    contents: String,
    entries: usize,
}

impl Default for Playlist {
    fn default() -> Self {
        Self::new()
    }
}

impl Playlist {
    pub fn new() -> Self {
        Self {
            contents: PLAYLIST_HEADER.to_string(),
            entries: 0,
        }
    }

    pub fn push(&mut self, channel: &Channel, urls: &StreamUrlBuilder) {
        self.contents.push_str(&format_entry(channel, urls));
        self.entries += 1;
    }

    /// Number of channel entries, the header excluded.
    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    pub fn as_str(&self) -> &str {
        &self.contents
    }

    pub fn into_string(self) -> String {
        self.contents
    }
}

pub fn render_playlist(channels: &[Channel], urls: &StreamUrlBuilder) -> String {
    let mut playlist = Playlist::new();
    for channel in channels {
        playlist.push(channel, urls);
    }
    playlist.into_string()
}

/// Writes `contents` to `path`, replacing any existing file.
pub fn write_playlist(path: &Path, contents: &str) -> Result<()> {
    let write_error = |source| ChannelIndexError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }
    std::fs::write(path, contents).map_err(write_error)?;

    debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel(id: &str, name: &str) -> Channel {
        Channel {
            id: id.to_string(),
            display_name: name.to_string(),
            icon_url: "http://img/icon.png".to_string(),
        }
    }

    #[test]
    fn test_stream_url() {
        let urls = StreamUrlBuilder::new("http://host/live1").unwrap();
        let url = urls.stream_url(&channel("xyz123", "CCTV1"));
        assert_eq!(url.as_str(), "http://host/live1/CCTV1/xyz123");
    }

    #[test]
    fn test_stream_url_trailing_slash() {
        let urls = StreamUrlBuilder::new("http://host/live1/").unwrap();
        let url = urls.stream_url(&channel("xyz123", "CCTV1"));
        assert_eq!(url.as_str(), "http://host/live1/CCTV1/xyz123");

        let urls = StreamUrlBuilder::new("http://host").unwrap();
        let url = urls.stream_url(&channel("xyz123", "CCTV1"));
        assert_eq!(url.as_str(), "http://host/CCTV1/xyz123");
    }

    #[test]
    fn test_stream_url_escapes_segments() {
        let urls = StreamUrlBuilder::new("http://host/live1").unwrap();

        let url = urls.stream_url(&channel("a/b?c", "CCTV 5#HD"));
        assert_eq!(url.as_str(), "http://host/live1/CCTV%205%23HD/a%2Fb%3Fc");
        assert_eq!(url.path_segments().unwrap().count(), 3);

        let url = urls.stream_url(&channel("id1", "央视"));
        assert_eq!(url.as_str(), "http://host/live1/%E5%A4%AE%E8%A7%86/id1");
    }

    #[test]
    fn test_stream_url_keeps_query() {
        let urls = StreamUrlBuilder::new("http://host/live1?token=t").unwrap();
        let url = urls.stream_url(&channel("xyz123", "CCTV1"));
        assert_eq!(url.as_str(), "http://host/live1/CCTV1/xyz123?token=t");
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            StreamUrlBuilder::new("live1/no-scheme"),
            Err(ChannelIndexError::InvalidUrl(_))
        ));
        assert!(matches!(
            StreamUrlBuilder::new("mailto:someone@example.com"),
            Err(ChannelIndexError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_format_entry() {
        let urls = StreamUrlBuilder::new("http://host/live1").unwrap();
        let entry = format_entry(&channel("abc", "CCTV1"), &urls);
        assert_eq!(entry, "#EXTINF:-1,CCTV1\nhttp://host/live1/CCTV1/abc\n");
    }

    #[test]
    fn test_render_empty_playlist() {
        let urls = StreamUrlBuilder::new(DEFAULT_BASE_URL).unwrap();
        assert_eq!(render_playlist(&[], &urls), "#EXTM3U\n\n");
        assert!(Playlist::new().is_empty());
    }

    #[test]
    fn test_render_playlist_in_order() {
        let urls = StreamUrlBuilder::new("http://host/live1").unwrap();
        let channels = vec![channel("abc", "CCTV1"), channel("def", "CCTV2")];

        let expected = "#EXTM3U\n\n\
            #EXTINF:-1,CCTV1\nhttp://host/live1/CCTV1/abc\n\
            #EXTINF:-1,CCTV2\nhttp://host/live1/CCTV2/def\n";
        assert_eq!(render_playlist(&channels, &urls), expected);

        let mut playlist = Playlist::new();
        for c in &channels {
            playlist.push(c, &urls);
        }
        assert_eq!(playlist.len(), 2);
        assert_eq!(playlist.as_str(), expected);
    }

    #[test]
    fn test_icon_is_not_rendered() {
        let urls = StreamUrlBuilder::new("http://host/live1").unwrap();
        let rendered = render_playlist(&[channel("abc", "CCTV1")], &urls);
        assert!(!rendered.contains("icon.png"));
    }

    #[test]
    fn test_write_playlist_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("channel.m3u8");

        std::fs::write(&path, "stale content that is longer than the new one").unwrap();
        write_playlist(&path, PLAYLIST_HEADER).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "#EXTM3U\n\n");
    }

    #[test]
    fn test_write_playlist_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lists").join("tv").join("channel.m3u8");

        write_playlist(&path, PLAYLIST_HEADER).unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn test_write_playlist_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be replaced by the playlist.
        let err = write_playlist(dir.path(), PLAYLIST_HEADER).unwrap_err();
        match err {
            ChannelIndexError::Write { path, .. } => assert_eq!(path, dir.path()),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

//! Channel index to M3U playlist conversion.
//!
//! The conversion runs in four stages, each returning a [`Result`]:
//!
//! 1. [`ChannelIndexClient::fetch`] downloads the index as a [`ChannelMap`].
//! 2. [`order_channels`] sorts it by the number embedded in each channel key.
//! 3. [`Playlist`] renders every channel through a [`StreamUrlBuilder`].
//! 4. [`write_playlist`] saves the document.

pub mod client;
pub mod error;
pub mod models;
pub mod order;
pub mod playlist;

pub use client::{ChannelIndexClient, ClientOptions, DEFAULT_API_URL, ProxyConfig, create_client};
pub use error::{ChannelIndexError, Result};
pub use models::{Channel, ChannelMap};
pub use order::{DuplicatePolicy, order_channels, order_key};
pub use playlist::{
    DEFAULT_BASE_URL, PLAYLIST_HEADER, Playlist, StreamUrlBuilder, format_entry, render_playlist,
    write_playlist,
};

use crate::error::{ChannelIndexError, Result};
use crate::models::{Channel, ChannelMap};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use tracing::{debug, warn};

/// What to do when two channel keys yield the same order number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum DuplicatePolicy {
    /// The key visited last replaces the earlier one.
    #[default]
    #[cfg_attr(feature = "clap", value(name = "last"))]
    #[serde(rename = "last")]
    LastWins,
    /// The key visited first is kept.
    #[cfg_attr(feature = "clap", value(name = "first"))]
    #[serde(rename = "first")]
    FirstWins,
    /// Fail the run.
    #[serde(rename = "reject")]
    Reject,
}

impl std::fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DuplicatePolicy::LastWins => write!(f, "last"),
            DuplicatePolicy::FirstWins => write!(f, "first"),
            DuplicatePolicy::Reject => write!(f, "reject"),
        }
    }
}

/// Extracts the order number embedded in a channel key.
///
/// Every ASCII digit of `key` is taken left to right and the concatenation
/// is parsed as a base-10 integer, so `"ch0a1b2"` yields `12`. A key without
/// digits, or whose digits overflow `u64`, is an error.
pub fn order_key(key: &str) -> Result<u64> {
    let digits: String = key.chars().filter(char::is_ascii_digit).collect();

    if digits.is_empty() {
        return Err(ChannelIndexError::InvalidKey {
            key: key.to_string(),
            reason: "no digits".to_string(),
        });
    }

    digits
        .parse::<u64>()
        .map_err(|e| ChannelIndexError::InvalidKey {
            key: key.to_string(),
            reason: e.to_string(),
        })
}

/// Orders the channels of `map` by the number embedded in their keys.
///
/// Keys sharing an order number collapse into one entry according to
/// `policy`; the result therefore has exactly one channel per distinct
/// order number, ascending.
pub fn order_channels(mut map: ChannelMap, policy: DuplicatePolicy) -> Result<Vec<Channel>> {
    let mut by_order: BTreeMap<u64, String> = BTreeMap::new();

    for key in map.keys() {
        let order = order_key(key)?;

        match by_order.entry(order) {
            Entry::Vacant(slot) => {
                slot.insert(key.clone());
            }
            Entry::Occupied(mut slot) => match policy {
                DuplicatePolicy::LastWins => {
                    warn!(
                        "Channel key '{}' replaces '{}' at position {}",
                        key,
                        slot.get(),
                        order
                    );
                    slot.insert(key.clone());
                }
                DuplicatePolicy::FirstWins => {
                    warn!(
                        "Channel key '{}' dropped, position {} is taken by '{}'",
                        key,
                        order,
                        slot.get()
                    );
                }
                DuplicatePolicy::Reject => {
                    return Err(ChannelIndexError::DuplicateKey {
                        order,
                        first: slot.get().clone(),
                        second: key.clone(),
                    });
                }
            },
        }
    }

    debug!(
        "Ordered {} of {} channel keys",
        by_order.len(),
        map.len()
    );

    Ok(by_order
        .into_values()
        .filter_map(|key| map.remove(&key))
        .collect())
}

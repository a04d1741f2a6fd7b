//! Observer seam for per-item aging notifications.
//!
//! The engine calls the observer synchronously, once per item, after the
//! item's quality has been clamped. Observers must be fast and must not fail:
//! a slow observer holds up the whole tick.

use serde::{Deserialize, Serialize};
use tracing::info;

use gildedrose_core::ValueObject;

use crate::item::Category;

/// Before/after snapshot of one item for one tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemChange {
    pub name: String,
    pub category: Category,
    pub conjured: bool,
    pub old_sell_in: i32,
    pub new_sell_in: i32,
    pub old_quality: i32,
    pub new_quality: i32,
}

impl ValueObject for ItemChange {}

impl ItemChange {
    /// Signed quality change over the tick (widened so it cannot overflow).
    pub fn quality_delta(&self) -> i64 {
        i64::from(self.new_quality) - i64::from(self.old_quality)
    }

    /// Signed `sell_in` change over the tick.
    pub fn sell_in_delta(&self) -> i64 {
        i64::from(self.new_sell_in) - i64::from(self.old_sell_in)
    }
}

impl core::fmt::Display for ItemChange {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}, sell_in {} → {}, quality {} → {}",
            self.name, self.old_sell_in, self.new_sell_in, self.old_quality, self.new_quality
        )
    }
}

/// Receives one notification per item per tick.
pub trait TickObserver {
    fn on_item_aged(&mut self, change: &ItemChange);
}

impl<O> TickObserver for &mut O
where
    O: TickObserver + ?Sized,
{
    fn on_item_aged(&mut self, change: &ItemChange) {
        (**self).on_item_aged(change)
    }
}

impl<O> TickObserver for Box<O>
where
    O: TickObserver + ?Sized,
{
    fn on_item_aged(&mut self, change: &ItemChange) {
        (**self).on_item_aged(change)
    }
}

/// Discards every notification.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoopObserver;

impl TickObserver for NoopObserver {
    fn on_item_aged(&mut self, _change: &ItemChange) {}
}

/// Writes every notification to the `tracing` audit log.
#[derive(Debug, Default, Copy, Clone)]
pub struct TracingObserver;

impl TickObserver for TracingObserver {
    fn on_item_aged(&mut self, change: &ItemChange) {
        if change.category == Category::Legendary {
            info!(
                item = %change.name,
                category = change.category.as_str(),
                sell_in = change.old_sell_in,
                quality = change.old_quality,
                "skipping update for {} (legendary), sell_in {}, quality {}",
                change.name,
                change.old_sell_in,
                change.old_quality,
            );
            return;
        }

        info!(
            item = %change.name,
            category = change.category.as_str(),
            conjured = change.conjured,
            old_sell_in = change.old_sell_in,
            new_sell_in = change.new_sell_in,
            old_quality = change.old_quality,
            new_quality = change.new_quality,
            "{change}"
        );
    }
}

/// Keeps every notification in memory, in the order received.
#[derive(Debug, Default, Clone)]
pub struct RecordingObserver {
    changes: Vec<ItemChange>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn changes(&self) -> &[ItemChange] {
        &self.changes
    }

    pub fn into_changes(self) -> Vec<ItemChange> {
        self.changes
    }

    pub fn clear(&mut self) {
        self.changes.clear();
    }
}

impl TickObserver for RecordingObserver {
    fn on_item_aged(&mut self, change: &ItemChange) {
        self.changes.push(change.clone());
    }
}

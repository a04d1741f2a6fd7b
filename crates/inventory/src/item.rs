use core::str::FromStr;

use serde::{Deserialize, Serialize};

use gildedrose_core::{DomainError, DomainResult};

/// Lowest quality an ordinary item can have once a tick has run.
pub const MIN_QUALITY: i32 = 0;

/// Highest quality an ordinary item can have once a tick has run.
pub const MAX_QUALITY: i32 = 50;

/// Fixed quality of every legendary item.
pub const LEGENDARY_QUALITY: i32 = 80;

/// Aging category of an item.
///
/// Categories are mutually exclusive. When derived from a name, the first
/// match wins in this order: legendary, aged brie, backstage pass, normal.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Loses quality every day, twice as fast once past due.
    Normal,
    /// Gains quality every day, twice as fast once past due.
    AgedBrie,
    /// Gains quality faster as the concert approaches, worthless afterwards.
    BackstagePass,
    /// Never sold, never ages. Quality is always 80.
    Legendary,
}

impl Category {
    /// Derive the category from an item name (case-insensitive substring match).
    pub fn classify(name: &str) -> Self {
        let name = name.to_lowercase();
        if name.contains("sulfuras") {
            Category::Legendary
        } else if name.contains("aged brie") {
            Category::AgedBrie
        } else if name.contains("backstage passes") {
            Category::BackstagePass
        } else {
            Category::Normal
        }
    }

    /// Stable label used in logs and serialized records.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Normal => "normal",
            Category::AgedBrie => "aged_brie",
            Category::BackstagePass => "backstage_pass",
            Category::Legendary => "legendary",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Ok(Category::Normal),
            "aged_brie" => Ok(Category::AgedBrie),
            "backstage_pass" => Ok(Category::BackstagePass),
            "legendary" => Ok(Category::Legendary),
            other => Err(DomainError::unknown_category(other)),
        }
    }
}

/// Whether a name marks the item as conjured (case-insensitive).
pub fn is_conjured(name: &str) -> bool {
    name.to_lowercase().contains("conjured")
}

/// An inventory record.
///
/// Classification happens once, at construction; ticks only read the stored
/// category and conjured flag. Initial `sell_in`/`quality` are taken as given
/// and corrected by the next tick if they are out of range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    name: String,
    pub(crate) sell_in: i32,
    pub(crate) quality: i32,
    category: Category,
    conjured: bool,
}

impl Item {
    /// Create an item, classifying it from its name.
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        let name = name.into();
        let category = Category::classify(&name);
        let conjured = is_conjured(&name);
        Self {
            name,
            sell_in,
            quality,
            category,
            conjured,
        }
    }

    /// Create an item with an explicitly supplied classification.
    ///
    /// The name is not inspected. `conjured` is stored but has no effect on
    /// legendary items.
    pub fn with_category(
        name: impl Into<String>,
        sell_in: i32,
        quality: i32,
        category: Category,
        conjured: bool,
    ) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
            category,
            conjured,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sell_in(&self) -> i32 {
        self.sell_in
    }

    pub fn quality(&self) -> i32 {
        self.quality
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn is_conjured(&self) -> bool {
        self.conjured
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

//! Building the initial inventory.

use std::path::Path;

use serde::{Deserialize, Serialize};

use gildedrose_core::{DomainError, DomainResult};
use gildedrose_inventory::{Category, Item, is_conjured};

use crate::error::CliError;

/// One entry of a JSON inventory file.
///
/// `category` and `conjured` are optional; when absent they are derived from
/// the name the same way [`Item::new`] does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub name: String,
    pub sell_in: i32,
    pub quality: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conjured: Option<bool>,
}

impl TryFrom<ItemRecord> for Item {
    type Error = DomainError;

    fn try_from(record: ItemRecord) -> DomainResult<Self> {
        if record.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        let category = record
            .category
            .unwrap_or_else(|| Category::classify(&record.name));
        let conjured = record
            .conjured
            .unwrap_or_else(|| is_conjured(&record.name));

        Ok(Item::with_category(
            record.name,
            record.sell_in,
            record.quality,
            category,
            conjured,
        ))
    }
}

/// Parse a JSON array of [`ItemRecord`]s into items, preserving order.
pub fn parse_inventory(json: &str) -> Result<Vec<Item>, CliError> {
    let records: Vec<ItemRecord> = serde_json::from_str(json)?;
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            Item::try_from(record).map_err(|source| CliError::InvalidRecord { index, source })
        })
        .collect()
}

/// Read and parse an inventory file.
pub fn load_inventory(path: &Path) -> Result<Vec<Item>, CliError> {
    let json = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_inventory(&json)
}

/// Demo inventory covering every category, the conjured variants and the
/// edge cases around sell dates and quality bounds.
pub fn demo_inventory() -> Vec<Item> {
    vec![
        // Normal items
        Item::new("Normal Item 1", 0, 0),
        Item::new("Normal Item 2", 10, 10),
        Item::new("Normal Item 3", 10, 50),
        Item::new("Normal Item 4", -1, 10),
        // Aged Brie
        Item::new("Aged Brie", 0, 0),
        Item::new("Aged Brie", 10, 10),
        Item::new("Aged Brie", 10, 50),
        Item::new("Aged Brie", -1, 10),
        // Backstage passes
        Item::new("Backstage passes 1", 10, 10),
        Item::new("Backstage passes 2", 9, 10),
        Item::new("Backstage passes 3", 4, 10),
        Item::new("Backstage passes 4", 0, 10),
        Item::new("Backstage passes 5", 20, 10),
        // Legendary
        Item::new("Sulfuras", 0, 80),
        Item::new("Sulfuras, Hand", 0, 80),
        Item::new("Sulfuras, Hand of Ragnaros", 0, 80),
        // Conjured
        Item::new("Conjured Normal Item 1", 0, 0),
        Item::new("Conjured Normal Item 2", 10, 10),
        Item::new("Conjured Normal Item 3", 10, 50),
        Item::new("Conjured Normal Item 4", -1, 10),
        Item::new("Conjured Aged Brie", 0, 0),
        Item::new("Conjured Aged Brie", 10, 10),
        Item::new("Conjured Aged Brie", 10, 50),
        Item::new("Conjured Aged Brie", -1, 10),
        Item::new("Conjured Backstage passes 1", 10, 10),
        Item::new("Conjured Backstage passes 2", 9, 10),
        Item::new("Conjured Backstage passes 3", 4, 10),
        Item::new("Conjured Backstage passes 4", 0, 10),
        Item::new("Conjured Backstage passes 5", 20, 10),
    ]
}

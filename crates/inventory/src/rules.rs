//! Per-category aging rules.
//!
//! Everything here is pure: given a category, a conjured flag and the current
//! `(sell_in, quality)` pair, compute the next pair. Mutation and observer
//! notification live in [`crate::engine`].

use crate::item::{Category, LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY};

/// What a category does to quality on a given day.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum QualityRule {
    /// Add a signed delta to the current quality.
    Adjust(i32),
    /// Overwrite quality with a fixed value.
    Set(i32),
}

impl QualityRule {
    /// Double the magnitude of an adjustment. Overrides are left untouched.
    pub fn conjured(self) -> Self {
        match self {
            QualityRule::Adjust(delta) => QualityRule::Adjust(delta.saturating_mul(2)),
            QualityRule::Set(value) => QualityRule::Set(value),
        }
    }

    /// Apply the rule to a quality value (unclamped).
    pub fn apply(self, quality: i32) -> i32 {
        match self {
            QualityRule::Adjust(delta) => quality.saturating_add(delta),
            QualityRule::Set(value) => value,
        }
    }
}

/// Quality rule for `category`, given the already-decremented `sell_in`.
pub fn quality_rule(category: Category, sell_in: i32) -> QualityRule {
    match category {
        Category::Normal => QualityRule::Adjust(if sell_in >= 0 { -1 } else { -2 }),
        Category::AgedBrie => QualityRule::Adjust(if sell_in >= 0 { 1 } else { 2 }),
        Category::BackstagePass => {
            if sell_in < 0 {
                // Concert is over.
                QualityRule::Set(MIN_QUALITY)
            } else if sell_in < 5 {
                QualityRule::Adjust(3)
            } else if sell_in < 10 {
                QualityRule::Adjust(2)
            } else {
                QualityRule::Adjust(1)
            }
        }
        Category::Legendary => QualityRule::Set(LEGENDARY_QUALITY),
    }
}

/// Bring quality back into the legal range for `category`.
pub fn clamp_quality(category: Category, quality: i32) -> i32 {
    match category {
        Category::Legendary => LEGENDARY_QUALITY,
        _ => quality.clamp(MIN_QUALITY, MAX_QUALITY),
    }
}

/// Compute the next `(sell_in, quality)` pair for one day of aging.
///
/// Legendary items keep their `sell_in` and are pinned to 80. Every other
/// item counts down one day first; the rule then reads the new `sell_in`.
pub fn advance(category: Category, conjured: bool, sell_in: i32, quality: i32) -> (i32, i32) {
    if category == Category::Legendary {
        return (sell_in, LEGENDARY_QUALITY);
    }

    let sell_in = sell_in.saturating_sub(1);
    let mut rule = quality_rule(category, sell_in);
    if conjured {
        rule = rule.conjured();
    }

    (sell_in, clamp_quality(category, rule.apply(quality)))
}

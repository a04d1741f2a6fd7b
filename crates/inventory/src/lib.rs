//! Inventory aging engine.
//!
//! This crate contains the business rules for aging inventory, implemented
//! purely as deterministic domain logic (no IO, no storage). The only side
//! effect of a tick is the notification handed to the caller's observer.

pub mod engine;
pub mod item;
pub mod observer;
pub mod rules;

pub use engine::{RuleEngine, age, tick};
pub use item::{Category, Item, LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY, is_conjured};
pub use observer::{ItemChange, NoopObserver, RecordingObserver, TickObserver, TracingObserver};
pub use rules::{QualityRule, advance, clamp_quality, quality_rule};

//! The rule engine: ages items in place and reports every change.

use tracing::debug;

use crate::item::Item;
use crate::observer::{ItemChange, TickObserver};
use crate::rules;

/// Age a single item by one day, in place, and return its before/after snapshot.
pub fn age(item: &mut Item) -> ItemChange {
    let old_sell_in = item.sell_in;
    let old_quality = item.quality;

    let (sell_in, quality) =
        rules::advance(item.category(), item.is_conjured(), old_sell_in, old_quality);
    item.sell_in = sell_in;
    item.quality = quality;

    ItemChange {
        name: item.name().to_string(),
        category: item.category(),
        conjured: item.is_conjured(),
        old_sell_in,
        new_sell_in: sell_in,
        old_quality,
        new_quality: quality,
    }
}

/// Advance every item by one day, in order, notifying `observer` once per item.
///
/// Total over any input: empty slices and out-of-range values are fine.
pub fn tick<O>(items: &mut [Item], observer: &mut O)
where
    O: TickObserver + ?Sized,
{
    for item in items.iter_mut() {
        let change = age(item);
        observer.on_item_aged(&change);
    }
}

/// Owns an observer and drives ticks with it.
///
/// Holds no inventory state between calls; the caller keeps the items.
#[derive(Debug, Default, Clone)]
pub struct RuleEngine<O> {
    observer: O,
}

impl<O: TickObserver> RuleEngine<O> {
    pub fn new(observer: O) -> Self {
        Self { observer }
    }

    /// Advance every item by one day.
    pub fn tick(&mut self, items: &mut [Item]) {
        tick(items, &mut self.observer);
    }

    /// Advance every item by `days` days. Zero days is a no-op.
    pub fn run(&mut self, items: &mut [Item], days: u32) {
        for day in 1..=days {
            debug!(day, items = items.len(), "tick");
            self.tick(items);
        }
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Category, LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY};
    use crate::observer::{NoopObserver, RecordingObserver};
    use proptest::prelude::*;

    fn aged_once(name: &str, sell_in: i32, quality: i32) -> (i32, i32) {
        let mut items = vec![Item::new(name, sell_in, quality)];
        tick(&mut items, &mut NoopObserver);
        (items[0].sell_in(), items[0].quality())
    }

    #[test]
    fn normal_item_before_sell_date() {
        assert_eq!(aged_once("Normal", 5, 10), (4, 9));
    }

    #[test]
    fn normal_item_on_sell_date_degrades_twice_as_fast() {
        assert_eq!(aged_once("Normal", 0, 10), (-1, 8));
    }

    #[test]
    fn aged_brie_increases_quality() {
        assert_eq!(aged_once("Aged Brie", 2, 0), (1, 1));
    }

    #[test]
    fn aged_brie_after_sell_date_increases_by_two() {
        assert_eq!(aged_once("Aged Brie", 0, 10), (-1, 12));
    }

    #[test]
    fn backstage_pass_uses_decremented_sell_in() {
        assert_eq!(aged_once("Backstage passes", 5, 20), (4, 23));
        assert_eq!(aged_once("Backstage passes", 10, 20), (9, 22));
        assert_eq!(aged_once("Backstage passes", 11, 20), (10, 21));
        assert_eq!(aged_once("Backstage passes", 15, 20), (14, 21));
    }

    #[test]
    fn backstage_pass_after_concert_is_worthless() {
        assert_eq!(aged_once("Backstage passes", 0, 20), (-1, 0));
    }

    #[test]
    fn sulfuras_never_changes() {
        assert_eq!(aged_once("Sulfuras", 0, 80), (0, 80));
    }

    #[test]
    fn sulfuras_quality_is_forced_to_eighty() {
        assert_eq!(aged_once("Sulfuras, Hand of Ragnaros", -3, 12), (-3, 80));
    }

    #[test]
    fn conjured_normal_degrades_twice_as_fast() {
        assert_eq!(aged_once("Conjured Normal", 3, 6), (2, 4));
        assert_eq!(aged_once("Conjured Normal Item", -1, 10), (-2, 6));
    }

    #[test]
    fn conjured_aged_brie_and_passes_improve_twice_as_fast() {
        assert_eq!(aged_once("Conjured Aged Brie", 10, 10), (9, 12));
        assert_eq!(aged_once("Conjured Aged Brie", -1, 10), (-2, 14));
        assert_eq!(aged_once("Conjured Backstage passes", 4, 10), (3, 16));
        assert_eq!(aged_once("Conjured Backstage passes", 9, 10), (8, 14));
        assert_eq!(aged_once("Conjured Backstage passes", 0, 10), (-1, 0));
    }

    #[test]
    fn quality_never_exceeds_fifty() {
        assert_eq!(aged_once("Aged Brie", 2, 50), (1, 50));
        assert_eq!(aged_once("Backstage passes", 3, 49), (2, 50));
    }

    #[test]
    fn quality_never_negative() {
        assert_eq!(aged_once("Normal", 0, 0), (-1, 0));
        assert_eq!(aged_once("Conjured Normal", 5, 1), (4, 0));
    }

    #[test]
    fn out_of_range_initial_quality_is_corrected_after_one_tick() {
        let mut items = vec![Item::new("Normal", 5, 90), Item::new("Aged Brie", 5, -10)];
        let mut recorder = RecordingObserver::new();
        tick(&mut items, &mut recorder);

        assert_eq!(items[0].quality(), MAX_QUALITY);
        assert_eq!(items[1].quality(), MIN_QUALITY);
        assert_eq!(recorder.changes()[0].old_quality, 90);
        assert_eq!(recorder.changes()[1].old_quality, -10);
    }

    #[test]
    fn empty_inventory_produces_no_notifications() {
        let mut recorder = RecordingObserver::new();
        tick(&mut [], &mut recorder);
        assert!(recorder.changes().is_empty());
    }

    #[test]
    fn observer_sees_each_item_in_order_after_clamping() {
        let mut items = vec![
            Item::new("Sulfuras", 0, 80),
            Item::new("Aged Brie", 2, 50),
            Item::new("Elixir of the Mongoose", 5, 7),
        ];
        let mut recorder = RecordingObserver::new();
        tick(&mut items, &mut recorder);

        let changes = recorder.changes();
        assert_eq!(changes.len(), 3);
        assert_eq!(changes[0].name, "Sulfuras");
        assert_eq!(changes[0].category, Category::Legendary);
        assert_eq!((changes[0].old_sell_in, changes[0].new_sell_in), (0, 0));
        assert_eq!(changes[1].name, "Aged Brie");
        assert_eq!((changes[1].old_quality, changes[1].new_quality), (50, 50));
        assert_eq!(changes[2].name, "Elixir of the Mongoose");
        assert_eq!((changes[2].old_sell_in, changes[2].new_sell_in), (5, 4));
        assert_eq!((changes[2].old_quality, changes[2].new_quality), (7, 6));
    }

    #[test]
    fn age_returns_the_same_snapshot_the_observer_would_see() {
        let mut item = Item::new("Backstage passes to a TAFKAL80ETC concert", 11, 20);
        let change = age(&mut item);
        assert_eq!(change.old_sell_in, 11);
        assert_eq!(change.new_sell_in, 10);
        assert_eq!(change.quality_delta(), 1);
        assert_eq!(item.sell_in(), change.new_sell_in);
        assert_eq!(item.quality(), change.new_quality);
    }

    #[test]
    fn run_ticks_once_per_day() {
        let mut items = vec![Item::new("Normal", 3, 10)];
        let mut engine = RuleEngine::new(RecordingObserver::new());

        engine.run(&mut items, 0);
        assert!(engine.observer().changes().is_empty());
        assert_eq!(items[0].sell_in(), 3);

        engine.run(&mut items, 5);
        assert_eq!(engine.observer().changes().len(), 5);
        // Days 1-3 cost one point each, days 4-5 are past due and cost two.
        assert_eq!((items[0].sell_in(), items[0].quality()), (-2, 3));

        engine.observer_mut().clear();
        engine.tick(&mut items);
        assert_eq!(engine.into_observer().changes().len(), 1);
    }

    fn any_name() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("+5 Dexterity Vest".to_string()),
            Just("Aged Brie".to_string()),
            Just("Backstage passes to a TAFKAL80ETC concert".to_string()),
            Just("Sulfuras, Hand of Ragnaros".to_string()),
            Just("Conjured Mana Cake".to_string()),
            Just("Conjured Aged Brie".to_string()),
            Just("Conjured Backstage passes".to_string()),
            "[A-Za-z ]{0,20}",
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: after every tick, ordinary items stay within 0..=50 and
        /// legendary items sit at exactly 80 with an untouched sell_in.
        #[test]
        fn bounds_hold_after_every_tick(
            name in any_name(),
            sell_in in any::<i32>(),
            quality in any::<i32>(),
            days in 1u32..40,
        ) {
            let mut items = vec![Item::new(name, sell_in, quality)];
            let legendary = items[0].category() == Category::Legendary;

            for _ in 0..days {
                tick(&mut items, &mut NoopObserver);
                let q = items[0].quality();
                if legendary {
                    prop_assert_eq!(q, LEGENDARY_QUALITY);
                    prop_assert_eq!(items[0].sell_in(), sell_in);
                } else {
                    prop_assert!((MIN_QUALITY..=MAX_QUALITY).contains(&q));
                }
            }
        }

        /// Property: each tick decrements sell_in by exactly one for ordinary items.
        #[test]
        fn sell_in_counts_down_by_one(
            name in any_name(),
            sell_in in -10_000i32..10_000,
            quality in -100i32..100,
            days in 1u32..20,
        ) {
            let mut item = Item::new(name, sell_in, quality);
            prop_assume!(item.category() != Category::Legendary);

            for _ in 0..days {
                let change = age(&mut item);
                prop_assert_eq!(change.sell_in_delta(), -1);
            }
            prop_assert_eq!(i64::from(item.sell_in()), i64::from(sell_in) - i64::from(days));
        }

        /// Property: a conjured item moves exactly twice as far as its plain
        /// twin whenever neither one is clamped.
        #[test]
        fn conjured_twin_moves_twice_as_far(
            category in prop_oneof![
                Just(Category::Normal),
                Just(Category::AgedBrie),
                Just(Category::BackstagePass),
            ],
            sell_in in 1i32..30,
            quality in 10i32..=40,
        ) {
            let mut plain = Item::with_category("plain", sell_in, quality, category, false);
            let mut conjured = Item::with_category("conjured", sell_in, quality, category, true);

            let plain_delta = age(&mut plain).quality_delta();
            let conjured_delta = age(&mut conjured).quality_delta();

            prop_assert_eq!(conjured_delta, plain_delta * 2);
        }
    }
}

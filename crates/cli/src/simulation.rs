use std::io::{self, Write};

use gildedrose_inventory::{Item, RuleEngine, TickObserver};

use crate::report;

/// Age `items` for `days` days and print the result to `out`.
///
/// With `every_day` set, the starting inventory (day 0) and the inventory after
/// each day are printed as dated blocks; otherwise only the final inventory is.
pub fn simulate<O, W>(
    engine: &mut RuleEngine<O>,
    items: &mut [Item],
    days: u32,
    every_day: bool,
    out: &mut W,
) -> io::Result<()>
where
    O: TickObserver,
    W: Write,
{
    if !every_day {
        engine.run(items, days);
        return report::write_inventory(out, items);
    }

    report::write_day(out, 0, items)?;
    for day in 1..=days {
        engine.tick(items);
        report::write_day(out, day, items)?;
    }
    Ok(())
}

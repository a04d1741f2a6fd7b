//! Console presentation of an inventory.

use std::io::{self, Write};

use gildedrose_inventory::Item;

/// One line per item: `name, sell_in, quality`.
pub fn write_inventory<W: Write>(out: &mut W, items: &[Item]) -> io::Result<()> {
    for item in items {
        writeln!(out, "{item}")?;
    }
    Ok(())
}

/// A dated block: header, column names, items, blank line.
pub fn write_day<W: Write>(out: &mut W, day: u32, items: &[Item]) -> io::Result<()> {
    writeln!(out, "-------- day {day} --------")?;
    writeln!(out, "name, sellIn, quality")?;
    write_inventory(out, items)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn inventory_is_one_line_per_item() {
        let items = vec![Item::new("Aged Brie", 1, 1), Item::new("Sulfuras", 0, 80)];
        let text = render(|out| write_inventory(out, &items));
        assert_eq!(text, "Aged Brie, 1, 1\nSulfuras, 0, 80\n");
    }

    #[test]
    fn day_block_has_header_and_trailing_blank_line() {
        let items = vec![Item::new("Elixir of the Mongoose", 5, 7)];
        let text = render(|out| write_day(out, 3, &items));
        assert_eq!(
            text,
            "-------- day 3 --------\nname, sellIn, quality\nElixir of the Mongoose, 5, 7\n\n"
        );
    }
}

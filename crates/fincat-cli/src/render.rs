//! Table rendering for the terminal frontend

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, ContentArrangement, Table};
use fincat_core::Stock;

/// Render the stock list as a table, sorted by symbol for display (the
/// store itself keeps insertion order).
pub fn stock_table(stocks: &[Stock]) -> Table {
    let mut sorted: Vec<&Stock> = stocks.iter().collect();
    sorted.sort_by(|a, b| a.symbol.cmp(&b.symbol));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Symbol", "Name", "Price", "Notes"]);

    for stock in sorted {
        table.add_row(vec![
            Cell::new(&stock.symbol),
            Cell::new(&stock.name),
            Cell::new(format!("{:.2}", stock.price)),
            Cell::new(stock.notes.as_deref().unwrap_or("")),
        ]);
    }

    table
}

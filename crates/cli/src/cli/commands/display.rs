//! Table rendering helpers shared by the read-only commands.

use comfy_table::{presets::UTF8_FULL, CellAlignment, ContentArrangement, Table};

use coinfolio_core::services::quote_service::Quote;

/// Render successfully quoted coins as a Symbol / Current Price table.
pub fn quotes_table(quotes: &[Quote]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Symbol", "Current Price"]);

    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for quote in quotes {
        if let Ok(price) = &quote.result {
            table.add_row(vec![quote.symbol.clone(), format!("${price:.2}")]);
        }
    }

    table
}

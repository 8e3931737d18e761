//! Terminal cart table

use std::io;

use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;
use tabled::{
    builder::Builder,
    settings::{Alignment, Color, Style, object::Columns, object::Rows},
};
use thiserror::Error;

use crate::display::CartLine;

/// Errors raised while writing a cart table.
#[derive(Debug, Error)]
pub enum TableError {
    /// The output could not be written.
    #[error("failed to write cart table")]
    Io(#[from] io::Error),
}

/// Writes rendered cart lines as a table, followed by the subtotal when given.
///
/// # Errors
///
/// Returns a [`TableError`] if writing to `out` fails.
pub fn write_cart(
    mut out: impl io::Write,
    lines: &[CartLine<'_>],
    subtotal: Option<Money<'_, Currency>>,
) -> Result<(), TableError> {
    let mut builder = Builder::default();

    builder.push_record(["", "Item", "Quantity", "Unit Price", "Total"]);

    let mut highlighted_rows: SmallVec<[usize; 4]> = SmallVec::new();

    for (idx, line) in lines.iter().enumerate() {
        if line.highlighted() {
            highlighted_rows.push(idx + 1);
        }

        builder.push_record(line_record(idx, line));
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(2..5), Alignment::right());

    for row in highlighted_rows {
        table.modify(Rows::one(row), color_highlight());
    }

    writeln!(out, "{table}")?;

    if let Some(subtotal) = subtotal {
        writeln!(out, " Subtotal: {subtotal}")?;
    }

    Ok(())
}

fn line_record(idx: usize, line: &CartLine<'_>) -> [String; 5] {
    let marker = if line.highlighted() { ">" } else { "" };
    let position = format!("{marker}#{}", idx + 1);

    match line {
        CartLine::Rendered(display) => {
            let item = match &display.detail {
                Some(detail) => format!("{}\n({detail})", display.label),
                None => display.label.clone(),
            };

            [
                position,
                item,
                display.quantity.quantity.to_string(),
                display.quantity.unit_price.to_string(),
                display.quantity.total.to_string(),
            ]
        }
        CartLine::Unrenderable(unrenderable) => [
            position,
            format!("{}\n({})", unrenderable.label(), unrenderable.error),
            String::new(),
            String::new(),
            String::new(),
        ],
    }
}

/// ANSI magenta for the selected line.
fn color_highlight() -> Color {
    Color::new("\x1b[35m", "\x1b[0m")
}

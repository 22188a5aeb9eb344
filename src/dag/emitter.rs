// src/dag/emitter.rs

//! Presentation of a resolved order.

use std::io::Write;

use serde::Serialize;

use crate::errors::Result;
use crate::types::OutputFormat;

/// One line of output: a 1-based position and the item at that position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderEntry {
    pub index: usize,
    pub name: String,
}

/// Pair each item with its 1-based position.
pub fn format<S: AsRef<str>>(order: &[S]) -> Vec<OrderEntry> {
    order
        .iter()
        .enumerate()
        .map(|(i, name)| OrderEntry {
            index: i + 1,
            name: name.as_ref().to_string(),
        })
        .collect()
}

/// `index<TAB>name`, one entry per line.
pub fn render_text<S: AsRef<str>>(order: &[S]) -> String {
    format(order)
        .iter()
        .map(|entry| format!("{}\t{}\n", entry.index, entry.name))
        .collect()
}

pub fn render_json<S: AsRef<str>>(order: &[S]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&format(order))?)
}

/// Write `order` to `out` in the requested format.
pub fn write_order<W, S>(out: &mut W, order: &[S], output: OutputFormat) -> Result<()>
where
    W: Write,
    S: AsRef<str>,
{
    match output {
        OutputFormat::Text => out.write_all(render_text(order).as_bytes())?,
        OutputFormat::Json => writeln!(out, "{}", render_json(order)?)?,
    }
    out.flush()?;
    Ok(())
}

//! Plain-text report of a statement run, one line per row:
//!
//! ```text
//! service:String
//! value:Long
//!
//! #0.0: service:(null)=(null) value:Long=3
//! #0.1: service:String=Test value:Long=7
//! ```

use crate::engine::window::{ColumnSpec, WindowBatch};

pub fn format_report(columns: &[ColumnSpec], batches: &[WindowBatch]) -> String {
    let header = columns
        .iter()
        .map(|c| format!("{}:{}", c.name, c.logical_type))
        .collect::<Vec<_>>()
        .join("\n");

    let body = batches
        .iter()
        .enumerate()
        .map(|(n, batch)| {
            batch
                .rows
                .iter()
                .enumerate()
                .map(|(i, row)| {
                    let group = &columns[0];
                    let key = match row.key.as_str() {
                        Some(value) => format!("{}:{}={}", group.name, group.logical_type, value),
                        None => format!("{}:(null)=(null)", group.name),
                    };
                    format!(
                        "#{}.{}: {} {}:{}={}",
                        n, i, key, columns[1].name, columns[1].logical_type, row.count
                    )
                })
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("{}\n\n{}", header, body)
}

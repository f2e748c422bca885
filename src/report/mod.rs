//! Result emission
//!
//! Writes the per-node result table and summarises the strength distribution.

pub mod histogram;

pub use histogram::{Bucket, Histogram, StrengthSummary};

use crate::algo::TieRow;
use std::io::{self, Write};
use tracing::debug;

/// Write rows as `label<TAB>degree<TAB>top labels` lines
pub fn write_rows<W: Write>(mut writer: W, rows: &[TieRow]) -> io::Result<()> {
    for row in rows {
        writeln!(writer, "{}\t{}\t{}", row.label, row.degree, row.joined_labels())?;
    }
    writer.flush()?;
    debug!("Wrote {} result rows", rows.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::TopTie;

    #[test]
    fn test_write_rows() {
        let rows = vec![
            TieRow {
                node: 1,
                label: "Erdos".to_string(),
                degree: 2,
                top: vec![
                    TopTie { node: 2, label: "Renyi".to_string(), strength: 0.5 },
                    TopTie { node: 3, label: "Turan".to_string(), strength: 0.25 },
                ],
            },
            TieRow { node: 2, label: "Loner".to_string(), degree: 0, top: vec![] },
        ];

        let mut out = Vec::new();
        write_rows(&mut out, &rows).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Erdos\t2\tRenyi; Turan\nLoner\t0\t\n");
    }
}

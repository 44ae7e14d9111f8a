pub mod json;
pub mod latex;

use crate::input::Table;

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

pub fn is_numeric_column(table: &Table, idx: usize) -> bool {
    !table.rows.is_empty()
        && table
            .rows
            .iter()
            .all(|r| r[idx].trim().parse::<f64>().is_ok())
}

// Plain aligned echo of a frame, index column first, everything
// right-aligned under its header.
pub fn render_frame(table: &Table) -> String {
    let n_cols = table.columns.len();
    let index_width = table.rows.len().saturating_sub(1).to_string().len();

    let mut widths: Vec<usize> = table.columns.iter().map(|c| c.len()).collect();
    for row in &table.rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let mut out = String::new();
    out.push_str(&" ".repeat(index_width));
    for i in 0..n_cols {
        out.push_str("  ");
        out.push_str(&format!("{:>width$}", table.columns[i], width = widths[i]));
    }
    out.push('\n');

    for (r, row) in table.rows.iter().enumerate() {
        out.push_str(&format!("{:>width$}", r, width = index_width));
        for (i, cell) in row.iter().enumerate() {
            out.push_str("  ");
            out.push_str(&format!("{:>width$}", cell, width = widths[i]));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table {
            columns: vec!["Pair".to_string(), "p".to_string()],
            rows: vec![
                vec!["a".to_string(), "0.01".to_string()],
                vec!["bb".to_string(), "0.5".to_string()],
            ],
        }
    }

    #[test]
    fn test_render_frame_alignment() {
        let text = render_frame(&sample());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "   Pair     p");
        assert_eq!(lines[1], "0     a  0.01");
        assert_eq!(lines[2], "1    bb   0.5");
    }

    #[test]
    fn test_is_numeric_column() {
        let t = sample();
        assert!(!is_numeric_column(&t, 0));
        assert!(is_numeric_column(&t, 1));
    }
}

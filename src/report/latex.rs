use crate::input::Table;
use crate::report::is_numeric_column;

// Booktabs tabular with a leading index column, numeric columns
// right-aligned, text columns left-aligned.
pub fn render_latex(table: &Table) -> String {
    let mut spec = String::from("l");
    for idx in 0..table.columns.len() {
        spec.push(if is_numeric_column(table, idx) { 'r' } else { 'l' });
    }

    let mut out = String::new();
    out.push_str(&format!("\\begin{{tabular}}{{{spec}}}\n"));
    out.push_str("\\toprule\n");

    let header: Vec<String> = table.columns.iter().map(|c| escape_latex(c)).collect();
    out.push_str(" & ");
    out.push_str(&header.join(" & "));
    out.push_str(" \\\\\n");
    out.push_str("\\midrule\n");

    for (r, row) in table.rows.iter().enumerate() {
        let cells: Vec<String> = row.iter().map(|c| escape_latex(c)).collect();
        out.push_str(&format!("{r} & "));
        out.push_str(&cells.join(" & "));
        out.push_str(" \\\\\n");
    }

    out.push_str("\\bottomrule\n");
    out.push_str("\\end{tabular}\n");
    out
}

pub fn escape_latex(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("\\&"),
            '%' => out.push_str("\\%"),
            '$' => out.push_str("\\$"),
            '#' => out.push_str("\\#"),
            '_' => out.push_str("\\_"),
            '{' => out.push_str("\\{"),
            '}' => out.push_str("\\}"),
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            '\\' => out.push_str("\\textbackslash{}"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/latex.rs"]
mod tests;

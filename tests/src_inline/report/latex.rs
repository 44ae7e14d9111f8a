use super::*;

use crate::input::Table;

fn sample() -> Table {
    Table {
        columns: vec!["Pairing".to_string(), "p_value".to_string()],
        rows: vec![
            vec!["singlet vs triplet".to_string(), "0.031".to_string()],
            vec!["singlet_0 vs init".to_string(), "0.5".to_string()],
        ],
    }
}

#[test]
fn test_render_latex_pinned() {
    let latex = render_latex(&sample());
    let expected = "\\begin{tabular}{llr}\n\
                    \\toprule\n \
                    & Pairing & p\\_value \\\\\n\
                    \\midrule\n\
                    0 & singlet vs triplet & 0.031 \\\\\n\
                    1 & singlet\\_0 vs init & 0.5 \\\\\n\
                    \\bottomrule\n\
                    \\end{tabular}\n";
    assert_eq!(latex, expected);
}

#[test]
fn test_numeric_columns_right_aligned() {
    let latex = render_latex(&sample());
    assert!(latex.starts_with("\\begin{tabular}{llr}"));
}

#[test]
fn test_escape_latex() {
    assert_eq!(escape_latex("a_b"), "a\\_b");
    assert_eq!(escape_latex("50%"), "50\\%");
    assert_eq!(escape_latex("A & B"), "A \\& B");
    assert_eq!(escape_latex("x#1"), "x\\#1");
}

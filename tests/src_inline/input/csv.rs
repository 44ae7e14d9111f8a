use super::*;

use std::io::Cursor;

#[test]
fn test_parse_csv_basic() {
    let data = "a,b,c\n1,2,3\n4,5,6\n";
    let table = parse_csv(Cursor::new(data)).unwrap();
    assert_eq!(table.columns, vec!["a", "b", "c"]);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[1], vec!["4", "5", "6"]);
}

#[test]
fn test_parse_csv_quoted_fields() {
    let data = "name,value\n\"Site ID (for paper)\",7\n\"a,b\",8\n\"he said \"\"hi\"\"\",9\n";
    let table = parse_csv(Cursor::new(data)).unwrap();
    assert_eq!(table.rows[0][0], "Site ID (for paper)");
    assert_eq!(table.rows[1][0], "a,b");
    assert_eq!(table.rows[2][0], "he said \"hi\"");
}

#[test]
fn test_parse_csv_crlf_and_blank_lines() {
    let data = "a,b\r\n1,2\r\n\r\n3,4\r\n";
    let table = parse_csv(Cursor::new(data)).unwrap();
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[1], vec!["3", "4"]);
}

#[test]
fn test_parse_csv_rejects_ragged_rows() {
    let data = "a,b\n1\n";
    assert!(parse_csv(Cursor::new(data)).is_err());
}

#[test]
fn test_parse_csv_rejects_empty_input() {
    assert!(parse_csv(Cursor::new("")).is_err());
}

#[test]
fn test_parse_csv_rejects_unterminated_quote() {
    let data = "a,b\n\"oops,2\n";
    assert!(parse_csv(Cursor::new(data)).is_err());
}

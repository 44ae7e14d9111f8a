use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;

use crate::input::{InputError, Table};

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

pub fn parse_csv<R: BufRead>(mut reader: R) -> Result<Table, InputError> {
    let mut buf = String::new();

    let read = reader.read_line(&mut buf)?;
    if read == 0 {
        return Err(InputError::Parse("csv file is empty".to_string()));
    }
    let columns = split_record(buf.trim_end_matches(['\r', '\n']))?;
    if columns.is_empty() {
        return Err(InputError::Parse("csv header is empty".to_string()));
    }

    let mut rows = Vec::new();
    let mut line_no = 1usize;
    loop {
        buf.clear();
        let read = reader.read_line(&mut buf)?;
        if read == 0 {
            break;
        }
        line_no += 1;
        let line = buf.trim_end_matches(['\r', '\n']);
        if line.is_empty() {
            continue;
        }
        let fields = split_record(line)?;
        if fields.len() != columns.len() {
            return Err(InputError::Parse(format!(
                "csv line {} has {} fields, expected {}",
                line_no,
                fields.len(),
                columns.len()
            )));
        }
        rows.push(fields);
    }

    Ok(Table { columns, rows })
}

fn split_record(line: &str) -> Result<Vec<String>, InputError> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut chars = line.chars().peekable();
    let mut quoted = false;

    while let Some(c) = chars.next() {
        if quoted {
            match c {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        quoted = false;
                    }
                }
                other => field.push(other),
            }
        } else {
            match c {
                '"' => {
                    if field.is_empty() {
                        quoted = true;
                    } else {
                        return Err(InputError::Parse(
                            "unexpected quote inside unquoted csv field".to_string(),
                        ));
                    }
                }
                ',' => {
                    fields.push(std::mem::take(&mut field));
                }
                other => field.push(other),
            }
        }
    }
    if quoted {
        return Err(InputError::Parse(
            "unterminated quoted csv field".to_string(),
        ));
    }
    fields.push(field);
    Ok(fields)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/csv.rs"]
mod tests;

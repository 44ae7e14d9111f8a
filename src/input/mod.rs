use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

pub mod csv;

use csv::{open_maybe_gz, parse_csv};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("parse error: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn require_column(&self, name: &str) -> Result<usize, InputError> {
        self.column_index(name).ok_or_else(|| {
            InputError::InvalidInput(format!("column {name:?} is not present in the table"))
        })
    }

    pub fn str_column(&self, name: &str) -> Result<Vec<&str>, InputError> {
        let idx = self.require_column(name)?;
        Ok(self.rows.iter().map(|r| r[idx].as_str()).collect())
    }

    pub fn f64_column(&self, name: &str) -> Result<Vec<f64>, InputError> {
        let idx = self.require_column(name)?;
        self.rows
            .iter()
            .map(|r| parse_f64(&r[idx], name))
            .collect()
    }

    pub fn i64_column(&self, name: &str) -> Result<Vec<i64>, InputError> {
        let idx = self.require_column(name)?;
        self.rows
            .iter()
            .map(|r| {
                r[idx].trim().parse::<i64>().map_err(|_| {
                    InputError::Parse(format!(
                        "column {name:?} holds non-integer value {:?}",
                        r[idx]
                    ))
                })
            })
            .collect()
    }

    pub fn filter_eq(&self, column: &str, value: &str) -> Result<Table, InputError> {
        let idx = self.require_column(column)?;
        let rows = self
            .rows
            .iter()
            .filter(|r| r[idx] == value)
            .cloned()
            .collect();
        Ok(Table {
            columns: self.columns.clone(),
            rows,
        })
    }

    pub fn filter_rows<F: FnMut(&[String]) -> bool>(&self, mut keep: F) -> Table {
        Table {
            columns: self.columns.clone(),
            rows: self.rows.iter().filter(|r| keep(r)).cloned().collect(),
        }
    }

    pub fn rename_column(&mut self, from: &str, to: &str) {
        if let Some(idx) = self.column_index(from) {
            self.columns[idx] = to.to_string();
        }
    }

    pub fn replace_value(&mut self, column: &str, from: &str, to: &str) -> Result<(), InputError> {
        let idx = self.require_column(column)?;
        for row in &mut self.rows {
            if row[idx] == from {
                row[idx] = to.to_string();
            }
        }
        Ok(())
    }

    pub fn append(&mut self, other: &Table) -> Result<(), InputError> {
        if self.columns.len() != other.columns.len() {
            return Err(InputError::InvalidInput(
                "cannot append tables with differing column sets".to_string(),
            ));
        }
        let mut mapping = Vec::with_capacity(self.columns.len());
        for name in &self.columns {
            mapping.push(other.require_column(name)?);
        }
        for row in &other.rows {
            self.rows
                .push(mapping.iter().map(|&idx| row[idx].clone()).collect());
        }
        Ok(())
    }

    pub fn unique_values(&self, column: &str) -> Result<Vec<String>, InputError> {
        let idx = self.require_column(column)?;
        let mut seen = Vec::new();
        for row in &self.rows {
            if !seen.iter().any(|s: &String| s == &row[idx]) {
                seen.push(row[idx].clone());
            }
        }
        Ok(seen)
    }
}

pub fn parse_f64(raw: &str, column: &str) -> Result<f64, InputError> {
    raw.trim().parse::<f64>().map_err(|_| {
        InputError::Parse(format!("column {column:?} holds non-numeric value {raw:?}"))
    })
}

pub fn find_csv(data_dir: &Path, stem: &str) -> Result<PathBuf, InputError> {
    let candidates = [format!("{stem}.csv"), format!("{stem}.csv.gz")];
    for name in &candidates {
        let path = data_dir.join(name);
        if path.exists() {
            return Ok(path);
        }
    }
    Err(InputError::MissingInput(format!(
        "missing {stem}.csv or {stem}.csv.gz under {}",
        data_dir.display()
    )))
}

pub fn load_table(data_dir: &Path, stem: &str) -> Result<Table, InputError> {
    let path = find_csv(data_dir, stem)?;
    let reader = open_maybe_gz(&path)?;
    let table = parse_csv(reader)?;
    info!(
        "loaded {} ({} rows, {} columns)",
        path.display(),
        table.rows.len(),
        table.columns.len()
    );
    Ok(table)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/table.rs"]
mod tests;

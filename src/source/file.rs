use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::debug;

use crate::error::{MiningError, Result};
use crate::itemset::{Item, Itemset};

use super::TransactionSource;

/// Reads one transaction per line of a text file.
///
/// Tokens are split on ASCII whitespace and parsed as `T`. Tokens that are
/// not valid UTF-8 or do not parse are dropped, so a line with nothing
/// usable becomes an empty transaction.
#[derive(Debug)]
pub struct FileSource<T> {
    path: PathBuf,
    reader: Option<BufReader<File>>,
    pending: Option<Itemset<T>>,
    line_number: usize,
}

impl<T> FileSource<T>
where
    T: Item + FromStr,
{
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            reader: None,
            pending: None,
            line_number: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the line after the current one into `pending`.
    fn advance(&mut self) -> Result<()> {
        self.pending = None;
        let Some(reader) = self.reader.as_mut() else {
            return Ok(());
        };

        let mut line = Vec::new();
        let read = reader.read_until(b'\n', &mut line).map_err(|source| MiningError::Read {
            path: self.path.clone(),
            source,
        })?;
        if read == 0 {
            return Ok(());
        }

        self.line_number += 1;
        self.pending = Some(parse_line(&line, self.line_number));
        Ok(())
    }
}

fn parse_line<T>(line: &[u8], line_number: usize) -> Itemset<T>
where
    T: Item + FromStr,
{
    line.split(u8::is_ascii_whitespace)
        .filter(|token| !token.is_empty())
        .filter_map(|token| {
            let Ok(token) = std::str::from_utf8(token) else {
                debug!(line = line_number, "skipping token that is not valid UTF-8");
                return None;
            };
            match token.parse::<T>() {
                Ok(item) => Some(item),
                Err(_) => {
                    debug!(line = line_number, token, "skipping unparsable token");
                    None
                }
            }
        })
        .collect()
}

impl<T> TransactionSource for FileSource<T>
where
    T: Item + FromStr,
{
    type Item = T;

    fn open(&mut self) -> Result<()> {
        self.close();

        let file = File::open(&self.path).map_err(|source| MiningError::SourceUnavailable {
            path: self.path.clone(),
            source,
        })?;
        self.reader = Some(BufReader::new(file));
        self.line_number = 0;
        self.advance()
    }

    fn is_done(&self) -> bool {
        self.pending.is_none()
    }

    fn next_transaction(&mut self) -> Result<Option<Itemset<T>>> {
        let current = self.pending.take();
        if current.is_some() {
            self.advance()?;
        }
        Ok(current)
    }

    fn close(&mut self) {
        self.reader = None;
        self.pending = None;
    }
}

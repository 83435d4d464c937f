// Mon Jan 19 2026 - Alex

use std::fs;
use std::io;
use std::path::Path;

/// Lookup from FName comparison index to text.
pub trait NameTable: Send + Sync {
    /// Zero means the table has not been loaded.
    fn count(&self) -> usize;
    fn name(&self, index: usize) -> Option<&str>;
}

/// An in-memory name table, one name per index.
#[derive(Debug, Clone, Default)]
pub struct StaticNameTable {
    names: Vec<String>,
}

impl StaticNameTable {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Reads a dump with one name per line; line `n` is index `n`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self::from_lines(&text))
    }

    pub fn from_lines(text: &str) -> Self {
        let names = text
            .lines()
            .map(|line| line.trim_end_matches('\r').to_string())
            .collect();
        Self { names }
    }

    pub fn push(&mut self, name: impl Into<String>) -> usize {
        self.names.push(name.into());
        self.names.len() - 1
    }
}

impl<S: Into<String>> FromIterator<S> for StaticNameTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl NameTable for StaticNameTable {
    fn count(&self) -> usize {
        self.names.len()
    }

    fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_lines() {
        let names = StaticNameTable::from_lines("None\r\nByteProperty\nObject\n");
        assert_eq!(names.count(), 3);
        assert_eq!(names.name(0), Some("None"));
        assert_eq!(names.name(1), Some("ByteProperty"));
        assert_eq!(names.name(3), None);
    }

    #[test]
    fn test_push_returns_index() {
        let mut names: StaticNameTable = ["None"].into_iter().collect();
        assert_eq!(names.push("Actor"), 1);
        assert_eq!(names.name(1), Some("Actor"));
    }
}

//! Watchlist assembly: a hard-coded base set plus a one-symbol-per-line file.

use anyhow::Context;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Read the ticker file at `path` and merge it into the base set.
///
/// Duplicates collapse; iteration order is alphabetical. A missing or
/// unreadable file is fatal, since the run would silently screen only the
/// base names otherwise.
pub fn load(path: &Path, base: &[&str]) -> anyhow::Result<BTreeSet<String>> {
    let file =
        File::open(path).with_context(|| format!("opening ticker list {}", path.display()))?;
    let mut watchlist: BTreeSet<String> = base.iter().map(|s| s.to_string()).collect();
    extend_from_reader(&mut watchlist, BufReader::new(file))
        .with_context(|| format!("reading ticker list {}", path.display()))?;
    Ok(watchlist)
}

fn extend_from_reader(watchlist: &mut BTreeSet<String>, reader: impl BufRead) -> io::Result<()> {
    for line in reader.lines() {
        let symbol = line?.trim().to_string();
        if !symbol.is_empty() {
            watchlist.insert(symbol);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn merges_file_symbols_into_base() {
        let mut watchlist: BTreeSet<String> = ["MSFT", "GOOG"].iter().map(|s| s.to_string()).collect();
        extend_from_reader(&mut watchlist, Cursor::new("AAPL\nNVDA\n")).unwrap();
        assert_eq!(watchlist.len(), 4);
        assert!(watchlist.contains("AAPL"));
        assert!(watchlist.contains("MSFT"));
    }

    #[test]
    fn duplicate_of_base_symbol_collapses() {
        let mut watchlist: BTreeSet<String> = ["MSFT"].iter().map(|s| s.to_string()).collect();
        extend_from_reader(&mut watchlist, Cursor::new("MSFT\nMSFT\nAMZN\n")).unwrap();
        assert_eq!(watchlist.len(), 2);
    }

    #[test]
    fn blank_lines_and_trailing_newlines_are_ignored() {
        let mut watchlist = BTreeSet::new();
        extend_from_reader(&mut watchlist, Cursor::new("AAPL\n\n  \nTSLA")).unwrap();
        assert_eq!(watchlist.len(), 2);
    }
}

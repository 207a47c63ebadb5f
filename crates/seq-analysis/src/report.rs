//! Tab-separated term listing: `"<index>\t<value>\n"`, 1-indexed.

use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::AnalysisError;

/// Default listing name for `count` terms, e.g. `A005243_first30000.txt`.
pub fn default_output_path(count: usize) -> PathBuf {
    PathBuf::from(format!("A005243_first{}.txt", count))
}

/// Write one `index\tvalue` line per term.
pub fn write_tsv<W: Write>(mut writer: W, terms: &[u64]) -> Result<(), AnalysisError> {
    for (index, value) in (1usize..).zip(terms) {
        writeln!(writer, "{}\t{}", index, value)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the listing to `path`, replacing any existing file.
pub fn write_tsv_file(path: &Path, terms: &[u64]) -> Result<(), AnalysisError> {
    let file = File::create(path)?;
    write_tsv(BufWriter::new(file), terms)?;
    tracing::debug!(path = %path.display(), terms = terms.len(), "wrote term listing");
    Ok(())
}

/// Parse a listing back into terms.
///
/// Indices must start at 1 and increase by one per line. Blank lines are
/// ignored.
pub fn read_tsv<R: BufRead>(reader: R) -> Result<Vec<u64>, AnalysisError> {
    let mut terms = Vec::new();
    for (line_no, line) in (1usize..).zip(reader.lines()) {
        let line = line?;
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }

        let parse_err = |message: String| AnalysisError::Parse {
            line: line_no,
            message,
        };
        let (index, value) = line
            .split_once('\t')
            .ok_or_else(|| parse_err("expected <index>\\t<value>".to_string()))?;
        let index: usize = index
            .trim()
            .parse()
            .map_err(|e| parse_err(format!("bad index {:?}: {}", index, e)))?;
        let value: u64 = value
            .trim()
            .parse()
            .map_err(|e| parse_err(format!("bad value {:?}: {}", value, e)))?;

        let expected = terms.len() + 1;
        if index != expected {
            return Err(parse_err(format!("index {} out of order, expected {}", index, expected)));
        }
        terms.push(value);
    }
    Ok(terms)
}

//! The Extractor module is in charge of taking an
//! encoded instruction listing and producing the set
//! of distinct mnemonics it contains.
//!
//! It does this in a single pass: every line is read,
//! its first `:` field kept, and the result written back
//! out one mnemonic per line.

pub mod record;
pub mod set;

pub use set::{Entry, MnemonicSet, OutputOrder};

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ExtractError {
    /// The input listing could not be opened.
    #[error("fatal: unable to open input file `{}`: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },
    /// Reading a line of the input listing failed.
    #[error("fatal: unable to read line {line} of input file `{}`: {source}", path.display())]
    Read { path: PathBuf, line: usize, source: io::Error },
    /// The output listing could not be created.
    #[error("fatal: unable to open output file `{}`: {source}", path.display())]
    Create { path: PathBuf, source: io::Error },
    /// Writing to the output listing failed.
    #[error("fatal: unable to write to output file `{}`: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Reads the listing at `path` and collects its mnemonics.
pub fn extract(path: &Path) -> Result<MnemonicSet, ExtractError> {
    let file = File::open(path).map_err(|source| ExtractError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    extract_from(BufReader::new(file), path)
}

/// Collects the mnemonics of every line in `reader`.
/// `origin` is only used to label errors.
pub fn extract_from<R: BufRead>(reader: R, origin: &Path) -> Result<MnemonicSet, ExtractError> {
    let mut set = MnemonicSet::new();
    let mut scanned: usize = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| ExtractError::Read {
            path: origin.to_path_buf(),
            line: index + 1,
            source,
        })?;

        let mnemonic = record::mnemonic(&line);
        if set.insert(mnemonic, index + 1) {
            debug!("new mnemonic `{}` on line {}", mnemonic, index + 1);
        }
        scanned += 1;
    }

    info!("Scanned {} line(s) of `{}`, found {} distinct mnemonic(s).",
        scanned, origin.display(), set.len());

    Ok(set)
}

/// Creates (or truncates) the file at `path` and writes
/// one mnemonic per line into it.
pub fn write_output(path: &Path, set: &MnemonicSet, order: OutputOrder) -> Result<(), ExtractError> {
    let file = File::create(path).map_err(|source| ExtractError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = BufWriter::new(file);
    write_to(&mut writer, set, order)
        .and_then(|_| writer.flush())
        .map_err(|source| ExtractError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    info!("Wrote {} mnemonic(s) to `{}`.", set.len(), path.display());
    Ok(())
}

pub fn write_to<W: Write>(writer: &mut W, set: &MnemonicSet, order: OutputOrder) -> io::Result<()> {
    for entry in set.ordered(order) {
        writer.write_all(entry.mnemonic.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

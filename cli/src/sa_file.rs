// The text formats on either side of the suffix tree: the input is a
// file holding the string, the output one 1-indexed offset per line.
use std::fs;
use std::io::prelude::*;
use std::path::Path;

use anyhow::{Context, Result};

pub fn read_text(path: &Path) -> Result<Vec<u8>> {
    let mut text =
        fs::read(path).with_context(|| format!("Could not read file `{}`", path.display()))?;
    trim_newline(&mut text);
    Ok(text)
}

// Drops exactly one trailing line break, `\n` or `\r\n`
pub fn trim_newline(text: &mut Vec<u8>) {
    if text.last() == Some(&b'\n') {
        text.pop();
        if text.last() == Some(&b'\r') {
            text.pop();
        }
    }
}

pub fn write_suffix_array<W: Write>(out: &mut W, suffix_array: &[usize]) -> Result<()> {
    for &index in suffix_array {
        writeln!(out, "{}", index + 1).context("Could not write suffix array")?;
    }
    out.flush().context("Could not flush suffix array output")?;
    Ok(())
}

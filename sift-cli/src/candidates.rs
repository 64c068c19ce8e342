use std::{
    fs,
    io::{self, IsTerminal, Read},
    path::Path,
};

use anyhow::{bail, Context, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    Newline,
    Nul,
}

impl Separator {
    pub fn from_read0(read0: bool) -> Self {
        if read0 {
            Separator::Nul
        } else {
            Separator::Newline
        }
    }
}

/// Splits raw input into candidates. A trailing separator does not produce
/// an extra empty candidate.
pub fn split(raw: &str, sep: Separator) -> Vec<String> {
    match sep {
        Separator::Newline => raw.lines().map(str::to_string).collect(),
        Separator::Nul => {
            let raw = raw.strip_suffix('\0').unwrap_or(raw);
            if raw.is_empty() {
                return Vec::new();
            }
            raw.split('\0').map(str::to_string).collect()
        }
    }
}

fn decode(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
}

pub fn from_file<P: AsRef<Path>>(path: P, sep: Separator) -> Result<Vec<String>> {
    let path = path.as_ref();
    let bytes = fs::read(path).with_context(|| format!("failed to read '{}'", path.display()))?;
    Ok(split(&decode(bytes), sep))
}

pub fn from_stdin(sep: Separator) -> Result<Vec<String>> {
    let mut stdin = io::stdin().lock();
    if stdin.is_terminal() {
        bail!("no candidates: pass ITEMS, --file, or pipe them on stdin");
    }

    let mut bytes = Vec::new();
    stdin
        .read_to_end(&mut bytes)
        .context("failed to read candidates from stdin")?;
    Ok(split(&decode(bytes), sep))
}

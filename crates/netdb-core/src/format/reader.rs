use std::io::{BufRead, BufReader, Read};

use log::debug;

use super::error::ParseError;

/// One non-empty line of a database file, split into its fields.
///
/// Only lines with at least a name and a key field become entries.
#[derive(Debug, PartialEq, Eq)]
pub struct Entry<'a> {
    /// 1-based line number within the stream.
    pub line: usize,
    pub name: &'a str,
    /// Second field: number, hex number, or `port/protocol`.
    pub key: &'a str,
    pub aliases: Vec<&'a str>,
    /// Trimmed text after the first `#`, empty when absent.
    pub comment: &'a str,
}

impl Entry<'_> {
    pub fn owned_aliases(&self) -> Vec<String> {
        self.aliases.iter().map(|alias| alias.to_string()).collect()
    }
}

/// Split a raw line into an [`Entry`].
///
/// Returns `None` for blank lines, comment-only lines, and lines with fewer
/// than two fields.
///
/// # Examples
/// This helper is part of an internal module, so the example is marked as
/// text example.
/// ```text
/// use netdb_core::format::reader::split_entry;
///
/// let entry = split_entry(1, "name 12 alias1 alias2 # c").unwrap();
/// assert_eq!(entry.key, "12");
/// assert_eq!(entry.comment, "c");
/// ```
pub fn split_entry(line: usize, raw: &str) -> Option<Entry<'_>> {
    let trimmed = raw.trim();
    let (data, comment) = match trimmed.split_once('#') {
        Some((data, comment)) => (data, comment.trim()),
        None => (trimmed, ""),
    };
    let mut fields = data.split_whitespace();
    let name = fields.next()?;
    let key = fields.next()?;
    Some(Entry {
        line,
        name,
        key,
        aliases: fields.collect(),
        comment,
    })
}

/// Read `reader` to exhaustion, handing every well-formed entry to `visit`.
///
/// Lines that are not valid UTF-8 are skipped like other malformed lines, so
/// distinct byte sequences never collapse onto the same name. The first
/// error, either from the stream or returned by `visit`, stops the walk and is
/// propagated.
pub fn for_each_entry<R, F>(reader: R, mut visit: F) -> Result<(), ParseError>
where
    R: Read,
    F: FnMut(Entry<'_>) -> Result<(), ParseError>,
{
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();
    let mut line = 0usize;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }
        line += 1;
        let Ok(text) = std::str::from_utf8(&buf) else {
            debug!("skipping line {}: not valid UTF-8", line);
            continue;
        };
        if let Some(entry) = split_entry(line, text) {
            visit(entry)?;
        }
    }
}

/// Parse an unsigned number in the given radix, strictly.
///
/// Only digits of the radix are accepted: no sign, no `0x` prefix, no
/// separators. Values not fitting into `T` are rejected.
pub fn parse_unsigned<T: TryFrom<u64>>(token: &str, radix: u32) -> Option<T> {
    if token.is_empty() || !token.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    u64::from_str_radix(token, radix)
        .ok()
        .and_then(|value| T::try_from(value).ok())
}

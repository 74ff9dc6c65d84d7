use std::io::Read;

use crate::format::error::ParseError;
use crate::format::reader::{for_each_entry, parse_unsigned};

use super::EtherTypeRecord;

/// Parse EtherType definitions from `reader`, in file order.
///
/// The number field is hexadecimal without prefix. An unparsable number or
/// a stream error fails the whole parse with no records returned.
///
/// # Examples
/// ```
/// use netdb_core::parse_ethertypes;
///
/// let ethertypes = parse_ethertypes("LOOP 9000 loopback # loop proto".as_bytes())?;
/// assert_eq!(ethertypes[0].number, 0x9000);
/// assert_eq!(ethertypes[0].comment, "loop proto");
/// # Ok::<(), netdb_core::ParseError>(())
/// ```
pub fn parse_ethertypes<R: Read>(reader: R) -> Result<Vec<EtherTypeRecord>, ParseError> {
    let mut ethertypes = Vec::new();
    for_each_entry(reader, |entry| {
        let number = parse_unsigned::<u16>(entry.key, 16).ok_or_else(|| ParseError::Format {
            line: entry.line,
            field: "EtherType number",
            value: entry.key.to_string(),
        })?;
        ethertypes.push(EtherTypeRecord {
            name: entry.name.to_string(),
            number,
            aliases: entry.owned_aliases(),
            comment: entry.comment.to_string(),
        });
        Ok(())
    })?;
    Ok(ethertypes)
}

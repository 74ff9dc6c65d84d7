use std::io::Read;

use crate::format::error::ParseError;
use crate::format::reader::{for_each_entry, parse_unsigned};

use super::ProtocolRecord;

/// Parse protocol definitions from `reader`, in file order.
///
/// Lines with fewer than two fields are skipped. A protocol number that is
/// not a decimal `u8` fails the whole parse; so does a stream error. In both
/// cases no records are returned.
///
/// # Examples
/// ```
/// use netdb_core::parse_protocols;
///
/// let protocols = parse_protocols("tcp 6 TCP # transmission control".as_bytes())?;
/// assert_eq!(protocols[0].number, 6);
/// # Ok::<(), netdb_core::ParseError>(())
/// ```
pub fn parse_protocols<R: Read>(reader: R) -> Result<Vec<ProtocolRecord>, ParseError> {
    let mut protocols = Vec::new();
    for_each_entry(reader, |entry| {
        let number = parse_unsigned::<u8>(entry.key, 10).ok_or_else(|| ParseError::Format {
            line: entry.line,
            field: "protocol number",
            value: entry.key.to_string(),
        })?;
        protocols.push(ProtocolRecord {
            name: entry.name.to_string(),
            number,
            aliases: entry.owned_aliases(),
        });
        Ok(())
    })?;
    Ok(protocols)
}

#[cfg(test)]
pub(crate) mod tests {
    use std::io::{self, Read};

    use super::parse_protocols;
    use crate::format::error::ParseError;

    /// Reader that fails on the first read, like a closed file.
    pub(crate) struct BrokenReader;

    impl Read for BrokenReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("stream closed"))
        }
    }

    #[test]
    fn parse_valid_protocols() {
        let input = concat!(
            "\nfoobar 66\n",
            "ratzfatz\t123 schwuppdiwupp siebenmeilenstiefler # aber nicht rumpelpumpel\n",
        );
        let protocols = parse_protocols(input.as_bytes()).unwrap();
        assert_eq!(protocols.len(), 2);
        assert_eq!(protocols[0].name, "foobar");
        assert_eq!(protocols[0].number, 66);
        assert!(protocols[0].aliases.is_empty());
        assert_eq!(protocols[1].name, "ratzfatz");
        assert_eq!(protocols[1].number, 123);
        assert_eq!(
            protocols[1].aliases,
            vec!["schwuppdiwupp", "siebenmeilenstiefler"]
        );
    }

    #[test]
    fn parse_single_line_with_comment() {
        let protocols = parse_protocols("name 12 alias1 alias2 # c".as_bytes()).unwrap();
        assert_eq!(protocols.len(), 1);
        assert_eq!(protocols[0].name, "name");
        assert_eq!(protocols[0].number, 12);
        assert_eq!(protocols[0].aliases, vec!["alias1", "alias2"]);
    }

    #[test]
    fn parse_ignores_comments_and_blank_lines() {
        let input = "\n# A comment\n\t\t# Another comment\n\nfoobar 66\n";
        let protocols = parse_protocols(input.as_bytes()).unwrap();
        assert_eq!(protocols.len(), 1);
    }

    #[test]
    fn parse_skips_lone_name() {
        let protocols = parse_protocols("\nfoobar\n".as_bytes()).unwrap();
        assert!(protocols.is_empty());
    }

    #[test]
    fn parse_number_is_decimal() {
        let protocols = parse_protocols("test 90".as_bytes()).unwrap();
        assert_eq!(protocols[0].number, 90);
    }

    #[test]
    fn parse_out_of_range_number_fails() {
        let err = parse_protocols("ok 1\nfoobar 666\n".as_bytes()).unwrap_err();
        match err {
            ParseError::Format { line, field, value } => {
                assert_eq!(line, 2);
                assert_eq!(field, "protocol number");
                assert_eq!(value, "666");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parse_hex_number_fails() {
        let err = parse_protocols("foobar 0x11\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("invalid protocol number"));
    }

    #[test]
    fn parse_reports_stream_errors() {
        let err = parse_protocols(BrokenReader).unwrap_err();
        assert!(matches!(err, ParseError::Stream(_)));
    }
}

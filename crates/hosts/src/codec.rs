//! `;`-separated CSV codec for host records.
//!
//! Columns are positional: priority, host, hostname, user, identityfile,
//! port. The first non-blank line is a header and is never inspected.
//! Fields are split on `;` only; there is no quoting or trimming.

use crate::error::CsvError;
use crate::record::HostRecord;
use std::fmt::Write as _;
use std::str::FromStr;

/// Header row written by [`encode`].
pub const HEADER: &str = "priority;host;hostname;user;identityfile;port";

/// Number of columns in every data row.
pub const COLUMNS: usize = 6;

const DELIMITER: char = ';';

/// How numeric columns (`priority`, `port`) that fail to parse are handled.
///
/// A value parses only when it is one or more ASCII digits. Signs and
/// whitespace are never accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NumericPolicy {
    /// Non-digit values become `0`; digit strings too large for the column
    /// saturate to its maximum. This is what existing CSV files rely on.
    #[default]
    Lenient,
    /// Anything that does not fit aborts decoding with
    /// [`CsvError::InvalidNumber`].
    Strict,
}

/// Unsigned column types.
trait Column: FromStr + Default {
    const MAX: Self;
}

impl Column for u64 {
    const MAX: Self = u64::MAX;
}

impl Column for u16 {
    const MAX: Self = u16::MAX;
}

impl NumericPolicy {
    fn parse<T>(self, value: &str, line: usize, column: &'static str) -> Result<T, CsvError>
    where
        T: Column,
    {
        let digits = !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit());

        if digits && let Ok(number) = value.parse() {
            return Ok(number);
        }

        match self {
            // Only overflow makes a digit string fail to parse.
            Self::Lenient if digits => {
                tracing::debug!(line, column, value, "out of range number saturated");
                Ok(T::MAX)
            }
            Self::Lenient => {
                tracing::debug!(line, column, value, "unparseable number read as 0");
                Ok(T::default())
            }
            Self::Strict => Err(CsvError::InvalidNumber {
                line,
                column,
                value: value.to_owned(),
            }),
        }
    }
}

/// Configurable CSV decoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct Decoder {
    policy: NumericPolicy,
}

impl Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the policy for numeric columns.
    #[must_use]
    pub fn numeric_policy(mut self, policy: NumericPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Decodes raw CSV bytes into records, in file order.
    ///
    /// Blank lines are skipped. `\r\n` line endings are accepted.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not UTF-8, if a data row does not
    /// have exactly [`COLUMNS`] fields, or if a number fails to parse under
    /// [`NumericPolicy::Strict`].
    pub fn decode(self, raw: &[u8]) -> Result<Vec<HostRecord>, CsvError> {
        let text = std::str::from_utf8(raw)?;

        let mut rows = text
            .lines()
            .enumerate()
            .map(|(index, row)| (index + 1, row))
            .filter(|(_, row)| !row.is_empty());

        if rows.next().is_none() {
            return Ok(Vec::new());
        }

        rows.map(|(line, row)| self.decode_row(line, row)).collect()
    }

    fn decode_row(self, line: usize, row: &str) -> Result<HostRecord, CsvError> {
        let fields: Vec<&str> = row.split(DELIMITER).collect();

        let [priority, host, hostname, user, identity_file, port] = fields.as_slice() else {
            return Err(CsvError::ColumnCount {
                line,
                expected: COLUMNS,
                found: fields.len(),
            });
        };

        Ok(HostRecord {
            priority: self.policy.parse(priority, line, "priority")?,
            host: (*host).to_owned(),
            hostname: (*hostname).to_owned(),
            user: (*user).to_owned(),
            identity_file: (*identity_file).to_owned(),
            port: self.policy.parse(port, line, "port")?,
        })
    }
}

/// Decodes raw CSV bytes with the lenient numeric policy.
///
/// # Errors
///
/// See [`Decoder::decode`].
pub fn decode(raw: &[u8]) -> Result<Vec<HostRecord>, CsvError> {
    Decoder::new().decode(raw)
}

/// Encodes records as CSV: the [`HEADER`] row, then one row per record in
/// the given order. Every row ends with `\n`.
pub fn encode(records: &[HostRecord]) -> Vec<u8> {
    let mut out = String::with_capacity(HEADER.len() + 1 + records.len() * 48);
    out.push_str(HEADER);
    out.push('\n');

    for record in records {
        let _ = writeln!(
            out,
            "{};{};{};{};{};{}",
            record.priority,
            record.host,
            record.hostname,
            record.user,
            record.identity_file,
            record.port
        );
    }

    out.into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nvpy(priority: u64, user: &str) -> HostRecord {
        HostRecord::new(priority, "nvpy", "10.10.10.10", user, "id_rsa", 22)
    }

    #[test]
    fn test_decode_rows_in_file_order() {
        let raw = b"priority;host;host_name;user;identity_file;port\n\
                    2;nvpy;10.10.10.10;root;id_rsa;22\n\
                    1;nvpy;10.10.10.10;sysuser;id_rsa;22\n";
        let records = decode(raw).unwrap();
        assert_eq!(records, vec![nvpy(2, "root"), nvpy(1, "sysuser")]);
    }

    #[test]
    fn test_decode_ignores_header_content() {
        let raw = b"whatever\n1;a;b;c;d;22\n";
        let records = decode(raw).unwrap();
        assert_eq!(records, vec![HostRecord::new(1, "a", "b", "c", "d", 22)]);
    }

    #[test]
    fn test_decode_empty_input() {
        assert!(decode(b"").unwrap().is_empty());
        assert!(decode(HEADER.as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_decode_skips_blank_lines_and_crlf() {
        let raw = b"\r\nheader\r\n\r\n1;a;b;;;22\r\n\n";
        let records = decode(raw).unwrap();
        assert_eq!(records, vec![HostRecord::new(1, "a", "b", "", "", 22)]);
    }

    #[test]
    fn test_decode_wrong_column_count_reports_line() {
        let raw = b"header\n1;a;b;c;d;22\n\n1;a;b;c;22\n";
        match decode(raw) {
            Err(CsvError::ColumnCount {
                line,
                expected,
                found,
            }) => {
                assert_eq!(line, 4);
                assert_eq!(expected, COLUMNS);
                assert_eq!(found, 5);
            }
            other => panic!("Expected ColumnCount error, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_too_many_columns() {
        let result = decode(b"header\n1;a;b;c;d;22;extra\n");
        assert!(matches!(result, Err(CsvError::ColumnCount { found: 7, .. })));
    }

    #[test]
    fn test_decode_lenient_numbers_default_to_zero() {
        let raw = b"header\nfirst;a;b;c;d;ssh\n-1;a;b;c;d;\n 3;a;b;c;d;22 \n+7;a;b;c;d;+22\n";
        let records = decode(raw).unwrap();
        let numbers: Vec<(u64, u16)> = records.iter().map(|r| (r.priority, r.port)).collect();
        assert_eq!(numbers, vec![(0, 0), (0, 0), (0, 0), (0, 0)]);
    }

    #[test]
    fn test_decode_lenient_numbers_saturate_on_overflow() {
        let raw = b"header\n99999999999999999999;a;b;c;d;70000\n";
        let record = &decode(raw).unwrap()[0];
        assert_eq!(record.priority, u64::MAX);
        assert_eq!(record.port, u16::MAX);
    }

    #[test]
    fn test_decode_strict_numbers_fail() {
        let decoder = Decoder::new().numeric_policy(NumericPolicy::Strict);
        match decoder.decode(b"header\n1;a;b;c;d;ssh\n") {
            Err(CsvError::InvalidNumber {
                line,
                column,
                value,
            }) => {
                assert_eq!(line, 2);
                assert_eq!(column, "port");
                assert_eq!(value, "ssh");
            }
            other => panic!("Expected InvalidNumber error, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_strict_rejects_signs_and_overflow() {
        let decoder = Decoder::new().numeric_policy(NumericPolicy::Strict);

        let signed = decoder.decode(b"header\n+7;a;b;c;d;22\n");
        assert!(matches!(
            signed,
            Err(CsvError::InvalidNumber { column: "priority", .. })
        ));

        let overflow = decoder.decode(b"header\n1;a;b;c;d;70000\n");
        assert!(matches!(
            overflow,
            Err(CsvError::InvalidNumber { column: "port", .. })
        ));
    }

    #[test]
    fn test_decode_strict_accepts_valid_numbers() {
        let decoder = Decoder::new().numeric_policy(NumericPolicy::Strict);
        let records = decoder.decode(b"header\n5;a;b;c;d;65535\n").unwrap();
        assert_eq!(records[0].priority, 5);
        assert_eq!(records[0].port, 65535);
    }

    #[test]
    fn test_decode_strings_are_verbatim() {
        let raw = b"header\n1; web ;\"example.org\";  ;keys/id ed25519;22\n";
        let record = &decode(raw).unwrap()[0];
        assert_eq!(record.host, " web ");
        assert_eq!(record.hostname, "\"example.org\"");
        assert_eq!(record.user, "  ");
        assert_eq!(record.identity_file, "keys/id ed25519");
    }

    #[test]
    fn test_decode_invalid_utf8() {
        let result = decode(b"header\n1;\xff;b;c;d;22\n");
        assert!(matches!(result, Err(CsvError::Utf8(_))));
    }

    #[test]
    fn test_encode_header_and_rows() {
        let records = vec![nvpy(1, "sysuser"), HostRecord::new(0, "bare", "", "", "", 0)];
        let text = String::from_utf8(encode(&records)).unwrap();
        assert_eq!(
            text,
            "priority;host;hostname;user;identityfile;port\n\
             1;nvpy;10.10.10.10;sysuser;id_rsa;22\n\
             0;bare;;;;0\n"
        );
    }

    #[test]
    fn test_encode_keeps_given_order() {
        let records = vec![nvpy(2, "root"), nvpy(1, "sysuser")];
        let decoded = decode(&encode(&records)).unwrap();
        assert_eq!(decoded, records);
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode(&[]), format!("{HEADER}\n").into_bytes());
    }
}

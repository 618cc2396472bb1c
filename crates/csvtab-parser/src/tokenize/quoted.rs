//! Single-pass tokenizer with quoted-field support.

use csvtab_model::{Record, Table};

use crate::config::{EscapeRule, Quoting};
use crate::error::{ParseError, Result};

/// Scan `text` left to right, splitting on the delimiters outside quoted
/// sections.
///
/// Outside quoted sections records are split before fields, as in plain mode:
/// the record delimiter is tried first at each position, and a field delimiter
/// match that a record delimiter starts inside of is read as content.
pub(crate) fn scan(
    text: &str,
    field_delimiter: &str,
    record_delimiter: &str,
    quoting: Quoting,
) -> Result<Table> {
    let mut table = Table::new();
    let mut record = Record::new();
    let mut field = String::new();
    let mut at_field_start = true;
    let mut record_open = false;
    let mut rest = text;

    while let Some(ch) = rest.chars().next() {
        if at_field_start && ch == quoting.quote {
            rest = read_quoted(&rest[ch.len_utf8()..], &mut field, quoting).ok_or(
                ParseError::UnterminatedQuote {
                    record: table.num_records(),
                },
            )?;
            at_field_start = false;
            record_open = true;
        } else if let Some(after) = rest.strip_prefix(record_delimiter) {
            record.push(std::mem::take(&mut field));
            table.push(std::mem::take(&mut record));
            rest = after;
            at_field_start = true;
            record_open = false;
        } else if let Some(after) = rest
            .strip_prefix(field_delimiter)
            .filter(|_| !record_delimiter_within(rest, field_delimiter, record_delimiter))
        {
            record.push(std::mem::take(&mut field));
            rest = after;
            at_field_start = true;
            record_open = true;
        } else {
            field.push(ch);
            rest = &rest[ch.len_utf8()..];
            at_field_start = false;
            record_open = true;
        }
    }

    if record_open {
        record.push(field);
        table.push(record);
    }
    Ok(table)
}

/// Whether a record delimiter starts inside the field delimiter at the front
/// of `rest`.
fn record_delimiter_within(rest: &str, field_delimiter: &str, record_delimiter: &str) -> bool {
    field_delimiter
        .char_indices()
        .skip(1)
        .any(|(offset, _)| rest[offset..].starts_with(record_delimiter))
}

/// Consume a quoted section whose opening quote is already stripped.
///
/// Appends the unescaped content to `field` and returns the input after the
/// closing quote, or `None` if the input ends first.
fn read_quoted<'a>(text: &'a str, field: &mut String, quoting: Quoting) -> Option<&'a str> {
    let quote = quoting.quote;
    let quote_len = quote.len_utf8();
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        match quoting.escape {
            EscapeRule::Doubled if ch == quote => {
                if chars.peek().is_some_and(|&(_, next)| next == quote) {
                    chars.next();
                    field.push(quote);
                } else {
                    return Some(&text[idx + quote_len..]);
                }
            }
            EscapeRule::Backslash if ch == quote => {
                return Some(&text[idx + quote_len..]);
            }
            EscapeRule::Backslash if ch == '\\' => match chars.next() {
                Some((_, next)) if next == quote || next == '\\' => field.push(next),
                Some((_, next)) => {
                    field.push('\\');
                    field.push(next);
                }
                None => return None,
            },
            _ => field.push(ch),
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doubled(text: &str) -> Result<Table> {
        scan(text, ",", "\n", Quoting::default())
    }

    fn backslash(text: &str) -> Result<Table> {
        scan(
            text,
            ",",
            "\n",
            Quoting::default().with_escape(EscapeRule::Backslash),
        )
    }

    #[test]
    fn test_unquoted_matches_plain_rules() {
        let table = doubled("element11,element12\nelement21,element22\n").unwrap();
        assert_eq!(
            table.to_rows(),
            vec![
                vec!["element11", "element12"],
                vec!["element21", "element22"],
            ]
        );
        assert!(doubled("").unwrap().is_empty());
        assert_eq!(doubled("\n").unwrap().to_rows(), vec![vec![""]]);
        assert_eq!(doubled("a,").unwrap().to_rows(), vec![vec!["a", ""]]);
    }

    #[test]
    fn test_quoted_delimiters_are_content() {
        let table = doubled("\"Hello, World\",b\n\"multi\nline\",c").unwrap();
        assert_eq!(
            table.to_rows(),
            vec![vec!["Hello, World", "b"], vec!["multi\nline", "c"]]
        );
    }

    #[test]
    fn test_doubled_quote_escape() {
        let table = doubled("\"Value with \"\"quotes\"\"\",\"\"\"\"").unwrap();
        assert_eq!(
            table.to_rows(),
            vec![vec!["Value with \"quotes\"", "\""]]
        );
    }

    #[test]
    fn test_backslash_escape() {
        let table = backslash(r#""say \"hi\"","a\\b","c\d""#).unwrap();
        assert_eq!(
            table.to_rows(),
            vec![vec!["say \"hi\"", "a\\b", "c\\d"]]
        );
    }

    #[test]
    fn test_mid_field_quote_is_literal() {
        let table = doubled("ab\"c,d").unwrap();
        assert_eq!(table.to_rows(), vec![vec!["ab\"c", "d"]]);
    }

    #[test]
    fn test_text_after_closing_quote_is_appended() {
        let table = doubled("\"ab\"cd,e").unwrap();
        assert_eq!(table.to_rows(), vec![vec!["abcd", "e"]]);
    }

    #[test]
    fn test_empty_quoted_field_is_a_record() {
        let table = doubled("\"\"").unwrap();
        assert_eq!(table.to_rows(), vec![vec![""]]);
    }

    #[test]
    fn test_unterminated_quote() {
        let err = doubled("a,b\n\"open,c").unwrap_err();
        assert!(matches!(err, ParseError::UnterminatedQuote { record: 1 }));

        let err = backslash("\"trailing\\").unwrap_err();
        assert!(matches!(err, ParseError::UnterminatedQuote { record: 0 }));
    }

    #[test]
    fn test_record_delimiter_wins_over_field_delimiter() {
        // "\r" alone is the field delimiter, "\r\n" the record delimiter.
        let table = scan("a\rb\r\nc", "\r", "\r\n", Quoting::default()).unwrap();
        assert_eq!(table.to_rows(), vec![vec!["a", "b"], vec!["c"]]);
    }

    #[test]
    fn test_record_delimiter_inside_field_delimiter() {
        let quote = Quoting::new().with_quote('\'');
        // "b" ends the record before "ab" can separate fields.
        let table = scan("xab", "ab", "b", quote).unwrap();
        assert_eq!(table.to_rows(), vec![vec!["xa"]]);

        let table = scan("xabcy", "ab", "bc", quote).unwrap();
        assert_eq!(table.to_rows(), vec![vec!["xa"], vec!["y"]]);

        let table = scan("xaby", "ab", "bc", quote).unwrap();
        assert_eq!(table.to_rows(), vec![vec!["x", "y"]]);
    }

    #[test]
    fn test_custom_quote_and_multibyte_content() {
        let table = scan("'ä;ö';ü\r\n", ";", "\r\n", Quoting::new().with_quote('\'')).unwrap();
        assert_eq!(table.to_rows(), vec![vec!["ä;ö", "ü"]]);
    }
}

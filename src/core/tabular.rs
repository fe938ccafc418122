//! Semicolon-delimited row parsing shared by the skills and multipliers feeds.
//!
//! Each physical line is parsed on its own. Lines whose field count differs
//! from the expected arity are dropped without error.

use csv::{ReaderBuilder, StringRecord};

pub const FIELD_DELIMITER: u8 = b';';

/// 以 `\r\n`、`\n`、`\r` 任一種換行切割
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split("\r\n").flat_map(|chunk| chunk.split(['\n', '\r']))
}

pub fn parse_rows(text: &str, expected_columns: usize) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut dropped = 0usize;

    for (index, line) in split_lines(text).enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        match split_fields(line) {
            Some(fields) if fields.len() == expected_columns => rows.push(fields),
            Some(fields) => {
                dropped += 1;
                tracing::debug!(
                    "Dropping line {}: expected {} columns, found {}",
                    index + 1,
                    expected_columns,
                    fields.len()
                );
            }
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        tracing::debug!("Dropped {} non-conforming lines", dropped);
    }

    rows
}

fn split_fields(line: &str) -> Option<Vec<String>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(FIELD_DELIMITER)
        .has_headers(false)
        .flexible(true)
        .double_quote(true)
        .from_reader(line.as_bytes());

    let mut record = StringRecord::new();
    match reader.read_record(&mut record) {
        Ok(true) => Some(record.iter().map(str::to_string).collect()),
        Ok(false) => None,
        Err(e) => {
            tracing::debug!("Dropping unreadable line: {}", e);
            None
        }
    }
}

/// 寬鬆整數解析：忽略前導空白，讀取可選正負號與連續數字，其餘忽略；
/// 完全沒有數字時為 0。
pub fn lenient_int(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, b| {
            acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
        });

    if negative {
        -value
    } else {
        value
    }
}

//! # Tiktoken Rank File IO

use std::io::{BufRead, Write};

use base64::{Engine, prelude::BASE64_STANDARD};

use crate::{
    errors::{TPResult, TokenpressError},
    types::TokenType,
    vocab::RankList,
};

/// Read a [`RankList`] from a `tiktoken` rank file line reader.
///
/// Lines are:
/// ```terminaloutput
/// {BASE64 SPAN} {TOKEN}
/// ```
///
/// Blank lines are skipped. Entries are returned in file order; no
/// consistency checks beyond the line format are made here.
///
/// ## Returns
/// [`TokenpressError::VocabLoad`] naming the 1-based line of the first malformed line.
pub fn read_tiktoken_rank_list<T, R>(reader: R) -> TPResult<RankList<T>>
where
    T: TokenType,
    R: BufRead,
{
    let mut rank_list = RankList::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }

        let bad_line = |msg: String| TokenpressError::VocabLoad(format!("line {}: {msg}", idx + 1));

        let (encoded, rank) = line
            .split_once(' ')
            .ok_or_else(|| bad_line("expected `{BASE64} {RANK}`".to_string()))?;

        let span = BASE64_STANDARD
            .decode(encoded)
            .map_err(|e| bad_line(e.to_string()))?;

        let id: u64 = rank
            .trim()
            .parse()
            .map_err(|e: core::num::ParseIntError| bad_line(e.to_string()))?;
        let token =
            T::from_u64(id).ok_or_else(|| bad_line(format!("rank {id} overflows the token type")))?;

        rank_list.push((span, token));
    }

    Ok(rank_list)
}

/// Write a [`RankList`] to a [`Write`] writer, sorted by token.
///
/// Lines are:
/// ```terminaloutput
/// {BASE64 SPAN} {TOKEN}
/// ```
pub fn write_tiktoken_rank_list<T, W>(
    rank_list: &[(Vec<u8>, T)],
    writer: &mut W,
) -> TPResult<()>
where
    T: TokenType,
    W: Write,
{
    let mut entries: Vec<&(Vec<u8>, T)> = rank_list.iter().collect();
    entries.sort_by_key(|(_, token)| *token);

    for (span, token) in entries {
        writeln!(writer, "{} {}", BASE64_STANDARD.encode(span), token)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_read_write_rank_list() {
        type T = u32;

        let rank_list: RankList<T> = vec![
            (b"pear".to_vec(), 302),
            (b"apple".to_vec(), 300),
            (b"banana".to_vec(), 301),
        ];

        let mut buf = Vec::new();
        write_tiktoken_rank_list(&rank_list, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf.clone()).unwrap(),
            "YXBwbGU= 300\nYmFuYW5h 301\ncGVhcg== 302\n"
        );

        let loaded: RankList<T> = read_tiktoken_rank_list(Cursor::new(buf)).unwrap();
        assert_eq!(
            loaded,
            vec![
                (b"apple".to_vec(), 300),
                (b"banana".to_vec(), 301),
                (b"pear".to_vec(), 302),
            ]
        );
    }

    #[test]
    fn test_read_skips_blank_lines() {
        let text = "IQ== 0\n\n  \r\nIg== 1\r\n";
        let loaded: RankList<u16> = read_tiktoken_rank_list(Cursor::new(text)).unwrap();
        assert_eq!(loaded, vec![(b"!".to_vec(), 0), (b"\"".to_vec(), 1)]);
    }

    #[test]
    fn test_read_malformed_lines() {
        let cases = [
            ("IQ== 0\nIg==\n", "line 2"),
            ("IQ== 0\n!!!! 1\n", "line 2"),
            ("IQ== zero\n", "line 1"),
            ("IQ== 70000\n", "line 1"),
        ];
        for (text, expected) in cases {
            let err = read_tiktoken_rank_list::<u16, _>(Cursor::new(text)).unwrap_err();
            assert!(matches!(err, TokenpressError::VocabLoad(_)), "{err}");
            assert!(err.to_string().contains(expected), "{err}");
        }
    }
}

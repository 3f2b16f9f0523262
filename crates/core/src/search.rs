//! Free-text search box: word tokenization and receivables matching.

use crate::table::Table;

const LEADING: [char; 8] = ['(', '[', '{', '<', '"', '\'', '$', '#'];
const TRAILING: [char; 11] = [')', ']', '}', '>', '"', '\'', ',', ';', ':', '!', '?'];
const CONTRACTIONS: [&str; 6] = ["'s", "'re", "'ve", "'ll", "'d", "'m"];

/// Lowercases and splits a query into word and punctuation tokens.
///
/// Leading and trailing punctuation become separate tokens, contraction
/// suffixes are split off (`can't` → `ca`, `n't`), and intra-word
/// punctuation such as `1,000` or `e-mail` is kept.
#[must_use]
pub fn tokenize(query: &str) -> Vec<String> {
    let lower = query.to_lowercase();
    let mut tokens = Vec::new();
    for word in lower.split_whitespace() {
        split_word(word, &mut tokens);
    }
    tokens
}

fn split_word(word: &str, out: &mut Vec<String>) {
    let mut rest = word;

    while let Some(c) = rest.chars().next().filter(|c| LEADING.contains(c)) {
        out.push(c.to_string());
        rest = &rest[c.len_utf8()..];
    }

    let mut trailing = Vec::new();
    loop {
        if let Some(core) = rest.strip_suffix("...") {
            trailing.push("...".to_string());
            rest = core;
            continue;
        }
        match rest.chars().next_back() {
            Some(c) if TRAILING.contains(&c) || c == '%' => {
                trailing.push(c.to_string());
                rest = &rest[..rest.len() - c.len_utf8()];
            }
            Some('.') if rest.len() > 1 && !rest[..rest.len() - 1].contains('.') => {
                trailing.push(".".to_string());
                rest = &rest[..rest.len() - 1];
            }
            _ => break,
        }
    }

    let (core, suffix) = split_contraction(rest);
    if !core.is_empty() {
        out.push(core.to_string());
    }
    if let Some(suffix) = suffix {
        out.push(suffix.to_string());
    }
    out.extend(trailing.into_iter().rev());
}

fn split_contraction(word: &str) -> (&str, Option<&str>) {
    std::iter::once("n't")
        .chain(CONTRACTIONS)
        .find_map(|suffix| {
            word.strip_suffix(suffix)
                .filter(|core| !core.is_empty())
                .map(|core| (core, Some(suffix)))
        })
        .unwrap_or((word, None))
}

/// Output fragment shown under the search box, e.g.
/// `Search tokens: ['ca', "n't", 'find']`.
#[must_use]
pub fn format_tokens(tokens: &[String]) -> String {
    let quoted: Vec<String> = tokens.iter().map(|t| quote_token(t)).collect();
    format!("Search tokens: [{}]", quoted.join(", "))
}

// Single quotes, unless the token holds one and no double quote.
fn quote_token(token: &str) -> String {
    let quote = if token.contains('\'') && !token.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(token.len() + 2);
    out.push(quote);
    for c in token.chars() {
        if c == quote || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push(quote);
    out
}

/// Rows where every word token appears in some cell, case-insensitively.
///
/// Punctuation-only tokens are ignored; a query with no words matches nothing.
#[must_use]
pub fn match_rows(table: &Table, tokens: &[String]) -> Vec<usize> {
    let words: Vec<&str> = tokens
        .iter()
        .map(String::as_str)
        .filter(|t| t.chars().any(char::is_alphanumeric))
        .collect();
    if words.is_empty() {
        return Vec::new();
    }

    table
        .rows()
        .iter()
        .enumerate()
        .filter(|(_, cells)| {
            let haystack: Vec<String> = cells
                .iter()
                .map(|c| c.to_string().to_lowercase())
                .collect();
            words
                .iter()
                .all(|word| haystack.iter().any(|cell| cell.contains(word)))
        })
        .map(|(row, _)| row)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;
    use crate::schema::Dataset;
    use rstest::rstest;

    #[rstest]
    #[case("Overdue invoices", &["overdue", "invoices"])]
    #[case(
        "Can't find Acme's invoices, please!",
        &["ca", "n't", "find", "acme", "'s", "invoices", ",", "please", "!"]
    )]
    #[case("1,000 e-mail", &["1,000", "e-mail"])]
    #[case("(overdue)", &["(", "overdue", ")"])]
    #[case("$100.", &["$", "100", "."])]
    #[case("u.s. clients", &["u.s.", "clients"])]
    #[case("wait...", &["wait", "..."])]
    #[case("50%?", &["50", "%", "?"])]
    #[case("we'll see", &["we", "'ll", "see"])]
    #[case("   ", &[])]
    fn test_tokenize(#[case] query: &str, #[case] expected: &[&str]) {
        assert_eq!(tokenize(query), expected);
    }

    #[rstest]
    #[case("Open Invoices", "Search tokens: ['open', 'invoices']")]
    #[case("Can't pay", r#"Search tokens: ['ca', "n't", 'pay']"#)]
    #[case("", "Search tokens: []")]
    fn test_format_tokens(#[case] query: &str, #[case] expected: &str) {
        assert_eq!(format_tokens(&tokenize(query)), expected);
    }

    #[test]
    fn test_quote_token_escapes() {
        assert_eq!(quote_token(r#"a'b""#), r#"'a\'b"'"#);
        assert_eq!(quote_token(r"a\b"), r"'a\\b'");
    }

    #[rstest]
    #[case("acme open", vec![0])]
    #[case("open", vec![0, 2])]
    #[case("Initech, Inc.", vec![2])]
    #[case("globex open", vec![])]
    #[case("?!", vec![])]
    fn test_match_rows(#[case] query: &str, #[case] expected: Vec<usize>) {
        let table = sample::ledger(Dataset::Receivables).unwrap();
        assert_eq!(match_rows(&table, &tokenize(query)), expected);
    }
}

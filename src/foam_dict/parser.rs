//! Recursive-descent parser over the token stream.
//!
//! Entry forms:
//!
//! ```text
//! keyword value ... ;
//! keyword { entries }
//! #directive rest-of-line [;]
//! ```
//!
//! A value that is a single parenthesized group (optionally prefixed by its
//! size, `3(a b c)`) becomes a list; any other multi-token value is kept as
//! one word re-joined from the source, so `uniform (3 0 0)` survives intact.
//!
//! Directives may repeat (`#includeEtc` often does). The first occurrence is
//! stored as a word; later ones turn the entry into a list of words in file
//! order.

use super::lexer::{join_tokens, Token, TokenKind};
use super::value::{Entries, FoamValue};
use crate::error::{FoamCaseError, Result};

pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn last_line(&self) -> usize {
        self.tokens.last().map_or(1, |t| t.line)
    }

    /// Parse entries until end of input, or until the matching `}` when
    /// `closing` is set.
    pub fn parse_entries(&mut self, closing: bool) -> Result<Entries> {
        let mut entries = Entries::new();
        loop {
            let Some(tok) = self.peek() else {
                if closing {
                    return Err(FoamCaseError::parse(
                        self.last_line(),
                        "unterminated dictionary, expected '}'",
                    ));
                }
                return Ok(entries);
            };

            match tok.kind {
                TokenKind::RBrace if closing => {
                    self.pos += 1;
                    return Ok(entries);
                }
                TokenKind::Semicolon => self.pos += 1,
                TokenKind::Directive => {
                    self.pos += 1;
                    let value = self.directive_value(tok.line);
                    push_directive(&mut entries, &tok.text, value);
                }
                TokenKind::Word | TokenKind::Str => {
                    self.pos += 1;
                    let value = self.entry_value(tok)?;
                    entries.insert(tok.text.clone(), value);
                }
                _ => {
                    return Err(FoamCaseError::parse(
                        tok.line,
                        format!("expected keyword, found '{}'", tok.text),
                    ));
                }
            }
        }
    }

    /// Everything after a directive on the same line, up to an optional `;`.
    fn directive_value(&mut self, line: usize) -> FoamValue {
        let start = self.pos;
        while let Some(tok) = self.peek() {
            if tok.line != line || matches!(tok.kind, TokenKind::RBrace | TokenKind::Semicolon) {
                break;
            }
            self.pos += 1;
        }
        FoamValue::Word(join_tokens(&self.tokens[start..self.pos]))
    }

    fn entry_value(&mut self, keyword: &Token) -> Result<FoamValue> {
        if self.peek().is_some_and(|t| t.kind == TokenKind::LBrace) {
            self.pos += 1;
            return Ok(FoamValue::Dict(self.parse_entries(true)?));
        }

        let missing_semicolon = || {
            FoamCaseError::parse(
                keyword.line,
                format!("missing ';' after value of '{}'", keyword.text),
            )
        };

        let start = self.pos;
        let mut open: Vec<TokenKind> = Vec::new();
        loop {
            let Some(tok) = self.peek() else {
                return Err(missing_semicolon());
            };
            if tok.kind.opens() {
                open.push(tok.kind);
            } else if tok.kind.closes() {
                match open.pop() {
                    Some(opener) if opener.closer() == Some(tok.kind) => {}
                    None if tok.kind == TokenKind::RBrace => return Err(missing_semicolon()),
                    _ => {
                        return Err(FoamCaseError::parse(
                            tok.line,
                            format!("unexpected '{}'", tok.text),
                        ));
                    }
                }
            } else if tok.kind == TokenKind::Semicolon && open.is_empty() {
                break;
            }
            self.pos += 1;
        }

        let value = &self.tokens[start..self.pos];
        self.pos += 1;
        value_from_tokens(value)
    }
}

/// Record a directive without losing earlier occurrences of it.
fn push_directive(entries: &mut Entries, keyword: &str, value: FoamValue) {
    match entries.get_mut(keyword) {
        Some(FoamValue::List(seen)) => seen.push(value),
        Some(slot) => {
            let first = std::mem::replace(slot, FoamValue::List(Vec::new()));
            *slot = FoamValue::List(vec![first, value]);
        }
        None => {
            entries.insert(keyword.to_string(), value);
        }
    }
}

/// Index of the token closing the group opened at `open`.
fn matching_close(tokens: &[Token], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, tok) in tokens.iter().enumerate().skip(open) {
        if tok.kind.opens() {
            depth += 1;
        } else if tok.kind.closes() {
            depth = depth.checked_sub(1)?;
            if depth == 0 {
                return Some(i);
            }
        }
    }
    None
}

fn value_from_tokens(tokens: &[Token]) -> Result<FoamValue> {
    match tokens {
        [] => Ok(FoamValue::Word(String::new())),
        [single] if single.kind.is_atom() => Ok(FoamValue::Word(single.text.clone())),
        _ => {
            let group = match tokens {
                [size, rest @ ..] if size.is_integer() => rest,
                _ => tokens,
            };
            let is_single_list = group.first().is_some_and(|t| t.kind == TokenKind::LParen)
                && matching_close(group, 0) == Some(group.len() - 1);
            if is_single_list {
                Ok(FoamValue::List(parse_list(&group[1..group.len() - 1])?))
            } else {
                Ok(FoamValue::Word(join_tokens(tokens)))
            }
        }
    }
}

fn parse_list(items: &[Token]) -> Result<Vec<FoamValue>> {
    let mut out = Vec::new();
    let mut i = 0;
    while i < items.len() {
        let tok = &items[i];
        match tok.kind {
            kind if kind.is_atom() => {
                // `3(a b c)`: the size prefix is written flush against the list
                let sized = tok.is_integer()
                    && items
                        .get(i + 1)
                        .is_some_and(|next| next.kind == TokenKind::LParen && next.start == tok.end);
                if !sized {
                    out.push(FoamValue::Word(tok.text.clone()));
                }
                i += 1;
            }
            TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace => {
                let close = matching_close(items, i)
                    .ok_or_else(|| FoamCaseError::parse(tok.line, "unbalanced list"))?;
                if tok.kind.closer() != Some(items[close].kind) {
                    return Err(FoamCaseError::parse(
                        items[close].line,
                        format!("mismatched '{}'", items[close].text),
                    ));
                }
                let inner = &items[i + 1..close];
                out.push(match tok.kind {
                    TokenKind::LParen => FoamValue::List(parse_list(inner)?),
                    TokenKind::LBracket => FoamValue::Word(join_tokens(&items[i..=close])),
                    _ => FoamValue::Dict(Parser::new(inner).parse_entries(false)?),
                });
                i = close + 1;
            }
            _ => {
                return Err(FoamCaseError::parse(
                    tok.line,
                    format!("unexpected '{}' in list", tok.text),
                ));
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foam_dict::lexer::tokenize;

    fn parse(src: &str) -> Result<Entries> {
        let tokens = tokenize(src)?;
        Parser::new(&tokens).parse_entries(false)
    }

    fn word(s: &str) -> FoamValue {
        FoamValue::Word(s.to_string())
    }

    #[test]
    fn test_scalar_and_compound_words() {
        let e = parse("nu 1e-05; internalField uniform (3 0 0); dimensions [0 1 -1 0 0 0 0];")
            .unwrap();
        assert_eq!(e["nu"], word("1e-05"));
        assert_eq!(e["internalField"], word("uniform (3 0 0)"));
        assert_eq!(e["dimensions"], word("[0 1 -1 0 0 0 0]"));
    }

    #[test]
    fn test_lists() {
        let e = parse("a (x y); b 2(p q); c ((0 0 0) (1 0 0)); d ();").unwrap();
        assert_eq!(e["a"], FoamValue::List(vec![word("x"), word("y")]));
        assert_eq!(e["b"], FoamValue::List(vec![word("p"), word("q")]));
        assert_eq!(
            e["c"],
            FoamValue::List(vec![
                FoamValue::List(vec![word("0"), word("0"), word("0")]),
                FoamValue::List(vec![word("1"), word("0"), word("0")]),
            ])
        );
        assert_eq!(e["d"], FoamValue::List(vec![]));
    }

    #[test]
    fn test_sized_inner_list_and_plain_numbers() {
        let e = parse("a (2(x y) 3 (z));").unwrap();
        assert_eq!(
            e["a"],
            FoamValue::List(vec![
                FoamValue::List(vec![word("x"), word("y")]),
                word("3"),
                FoamValue::List(vec![word("z")]),
            ])
        );
    }

    #[test]
    fn test_dict_inside_list() {
        let e = parse("boundary ( inlet { type patch; } );").unwrap();
        let items = e["boundary"].as_list().unwrap();
        assert_eq!(items[0], word("inlet"));
        assert_eq!(items[1].as_dict().unwrap()["type"], word("patch"));
    }

    #[test]
    fn test_nested_dict_and_duplicate_key() {
        let e = parse("solvers { p { solver PCG; tolerance 1e-6; } } x 1; x 2;").unwrap();
        let p = e["solvers"].as_dict().unwrap()["p"].as_dict().unwrap();
        assert_eq!(p["solver"], word("PCG"));
        assert_eq!(e["x"], word("2"));
    }

    #[test]
    fn test_directive_takes_rest_of_line() {
        let e = parse("#include \"initialConditions\"\nnext 1;").unwrap();
        assert_eq!(e["#include"], word("\"initialConditions\""));
        assert_eq!(e["next"], word("1"));
    }

    #[test]
    fn test_directive_stops_at_semicolon() {
        let e = parse("#include \"initialConditions\"; next 1;").unwrap();
        assert_eq!(e["#include"], word("\"initialConditions\""));
        assert_eq!(e["next"], word("1"));
    }

    #[test]
    fn test_repeated_directives_are_all_kept() {
        let e = parse("#include \"a\"\n#include \"b\"\n#include \"c\"\nx 1;").unwrap();
        assert_eq!(
            e["#include"],
            FoamValue::List(vec![word("\"a\""), word("\"b\""), word("\"c\"")])
        );
        assert_eq!(e["x"], word("1"));
    }

    #[test]
    fn test_empty_value() {
        let e = parse("flag;").unwrap();
        assert_eq!(e["flag"], word(""));
    }

    #[test]
    fn test_missing_semicolon() {
        let err = parse("a 1\n}").unwrap_err();
        assert!(matches!(err, FoamCaseError::Parse { line: 1, .. }));
        assert!(parse("a 1").is_err());
    }

    #[test]
    fn test_unterminated_dict() {
        let err = parse("a {\n b 1;\n").unwrap_err();
        assert!(matches!(err, FoamCaseError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_unexpected_closers() {
        assert!(parse("}").is_err());
        assert!(parse("a );").is_err());
        assert!(parse("(a b);").is_err());
        assert!(parse("a (b ];").is_err());
    }
}

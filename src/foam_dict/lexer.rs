//! Tokenizer for OpenFOAM dictionary text.
//!
//! Comments are dropped here. Each token keeps its byte span so multi-token
//! values can be re-joined with the spacing they had in the source.

use crate::error::{FoamCaseError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Bare word, number, `$macro`, or a word with balanced parentheses such as `div(phi,U)`
    Word,
    /// Double-quoted string, quotes included
    Str,
    /// `#include`, `#inputMode`, ...
    Directive,
    /// `#{ ... #}` code block
    Verbatim,
    LBrace,
    RBrace,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Semicolon,
}

impl TokenKind {
    pub fn is_atom(self) -> bool {
        matches!(self, Self::Word | Self::Str | Self::Directive | Self::Verbatim)
    }

    pub fn opens(self) -> bool {
        matches!(self, Self::LBrace | Self::LParen | Self::LBracket)
    }

    pub fn closes(self) -> bool {
        matches!(self, Self::RBrace | Self::RParen | Self::RBracket)
    }

    /// The token that closes a group opened by `self`.
    pub fn closer(self) -> Option<TokenKind> {
        match self {
            Self::LBrace => Some(Self::RBrace),
            Self::LParen => Some(Self::RParen),
            Self::LBracket => Some(Self::RBracket),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub fn is_integer(&self) -> bool {
        self.kind == TokenKind::Word && self.text.parse::<u64>().is_ok()
    }
}

/// Re-join tokens, with one space wherever the source had a gap.
pub fn join_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for (i, tok) in tokens.iter().enumerate() {
        if i > 0 && tok.start > tokens[i - 1].end {
            out.push(' ');
        }
        out.push_str(&tok.text);
    }
    out
}

fn is_comment_start(bytes: &[u8], i: usize) -> bool {
    bytes[i] == b'/' && matches!(bytes.get(i + 1), Some(b'/') | Some(b'*'))
}

fn ends_word(bytes: &[u8], i: usize) -> bool {
    let b = bytes[i];
    b.is_ascii_whitespace() || b"{}[];\"".contains(&b) || is_comment_start(bytes, i)
}

pub fn tokenize(src: &str) -> Result<Vec<Token>> {
    let bytes = src.as_bytes();
    let len = bytes.len();
    let mut tokens = Vec::new();
    let mut i = 0;
    let mut line = 1;

    while i < len {
        let b = bytes[i];

        if b == b'\n' {
            line += 1;
            i += 1;
            continue;
        }
        if b.is_ascii_whitespace() {
            i += 1;
            continue;
        }

        if b == b'/' && bytes.get(i + 1) == Some(&b'/') {
            while i < len && bytes[i] != b'\n' {
                i += 1;
            }
            continue;
        }

        if b == b'/' && bytes.get(i + 1) == Some(&b'*') {
            let opened = line;
            i += 2;
            loop {
                if i + 1 >= len {
                    return Err(FoamCaseError::parse(opened, "unterminated block comment"));
                }
                if bytes[i] == b'*' && bytes[i + 1] == b'/' {
                    i += 2;
                    break;
                }
                if bytes[i] == b'\n' {
                    line += 1;
                }
                i += 1;
            }
            continue;
        }

        let start = i;
        let opened = line;
        let kind = match b {
            b'{' => {
                i += 1;
                TokenKind::LBrace
            }
            b'}' => {
                i += 1;
                TokenKind::RBrace
            }
            b'(' => {
                i += 1;
                TokenKind::LParen
            }
            b')' => {
                i += 1;
                TokenKind::RParen
            }
            b'[' => {
                i += 1;
                TokenKind::LBracket
            }
            b']' => {
                i += 1;
                TokenKind::RBracket
            }
            b';' => {
                i += 1;
                TokenKind::Semicolon
            }
            b'"' => {
                i += 1;
                loop {
                    match bytes.get(i) {
                        None => return Err(FoamCaseError::parse(opened, "unterminated string")),
                        Some(b'\\') => {
                            if bytes.get(i + 1) == Some(&b'\n') {
                                line += 1;
                            }
                            i += 2;
                        }
                        Some(b'"') => {
                            i += 1;
                            break;
                        }
                        Some(b'\n') => {
                            line += 1;
                            i += 1;
                        }
                        Some(_) => i += 1,
                    }
                }
                TokenKind::Str
            }
            b'#' if bytes.get(i + 1) == Some(&b'{') => {
                i += 2;
                loop {
                    if i + 1 >= len {
                        return Err(FoamCaseError::parse(opened, "unterminated #{ code block"));
                    }
                    if bytes[i] == b'#' && bytes[i + 1] == b'}' {
                        i += 2;
                        break;
                    }
                    if bytes[i] == b'\n' {
                        line += 1;
                    }
                    i += 1;
                }
                TokenKind::Verbatim
            }
            _ => {
                // parentheses belong to the word while balanced: div(phi,U)
                // numbers stop at '(' so `3(a b c)` keeps its size prefix apart
                let numeric = b.is_ascii_digit() || matches!(b, b'-' | b'+' | b'.');
                let mut depth = 0usize;
                while i < len && !ends_word(bytes, i) {
                    match bytes[i] {
                        b'(' if numeric => break,
                        b'(' => depth += 1,
                        b')' if depth == 0 => break,
                        b')' => depth -= 1,
                        _ => {}
                    }
                    i += 1;
                }
                if b == b'#' {
                    TokenKind::Directive
                } else {
                    TokenKind::Word
                }
            }
        };

        tokens.push(Token {
            kind,
            text: src[start..i].to_string(),
            line: opened,
            start,
            end: i,
        });
    }

    Ok(tokens)
}

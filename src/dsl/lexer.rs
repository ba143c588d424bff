//! Lexer (tokenizer) for the board description language.

use crate::error::{CircuitError, Result};

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The token's text
    pub text: String,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

/// Token types in the language.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// A bare word: keyword, instance id, or terminal reference
    Word,
    /// A directive (starts with '.')
    Directive,
    /// Newline
    Newline,
    /// End of file
    Eof,
}

/// Characters that may not appear in a word.
const RESERVED: &[char] = &['(', ')', '[', ']', '{', '}', '=', ',', '"', '\''];

/// Lexer for tokenizing board descriptions.
pub struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            line: 1,
            column: 1,
        }
    }

    /// Get the next token.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace_and_comments();

        let ch = match self.chars.peek().copied() {
            Some(ch) => ch,
            None => {
                return Ok(Token {
                    kind: TokenKind::Eof,
                    text: String::new(),
                    line: self.line,
                    column: self.column,
                });
            }
        };

        let start_column = self.column;
        let start_line = self.line;

        let token = match ch {
            '\n' => {
                self.advance();
                Token {
                    kind: TokenKind::Newline,
                    text: "\n".to_string(),
                    line: start_line,
                    column: start_column,
                }
            }
            '.' => {
                let text = self.read_word();
                Token {
                    kind: TokenKind::Directive,
                    text,
                    line: start_line,
                    column: start_column,
                }
            }
            _ if RESERVED.contains(&ch) || ch.is_control() => {
                return Err(CircuitError::lexer(
                    start_line,
                    start_column,
                    format!("unexpected character '{}'", ch.escape_default()),
                ));
            }
            _ => {
                let text = self.read_word();
                Token {
                    kind: TokenKind::Word,
                    text,
                    line: start_line,
                    column: start_column,
                }
            }
        };

        Ok(token)
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn skip_whitespace_and_comments(&mut self) {
        while let Some(&ch) = self.chars.peek() {
            if ch == ' ' || ch == '\t' || ch == '\r' {
                self.advance();
            } else if ch == '#' || ch == ';' {
                // Skip comment until end of line
                while let Some(&c) = self.chars.peek() {
                    if c == '\n' {
                        break;
                    }
                    self.advance();
                }
            } else {
                break;
            }
        }
    }

    fn read_word(&mut self) -> String {
        let mut text = String::new();
        while let Some(&ch) = self.chars.peek() {
            if ch.is_whitespace() || ch == '#' || ch == ';' || RESERVED.contains(&ch) {
                break;
            }
            text.push(ch);
            self.advance();
        }
        text
    }
}

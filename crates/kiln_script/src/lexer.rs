//! Scanner for KilnScript source
//!
//! Produces the token stream the declaration recognizer works on. The
//! scanner is deliberately infallible: schema extraction must never fail
//! loudly, so anything it cannot classify becomes an [`TokenKind::Unknown`]
//! token for the recognizer to step over.

/// Token kinds
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// Identifier (`property`, `hash`, `url`, receiver names, ...)
    Ident(String),
    /// Double-quoted string literal, escapes resolved
    Str(String),
    /// Decimal number literal
    Number(f64),
    LParen,
    RParen,
    Comma,
    Dot,
    Minus,
    /// Any character the declaration grammar has no use for
    Unknown(char),
}

/// A token with position information
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, line: usize, column: usize) -> Self {
        Self { kind, line, column }
    }
}

/// Scanner over KilnScript source
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new scanner for the given source
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            line: 1,
            column: 1,
        }
    }

    /// Scan the entire source
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        tokens
    }

    /// Get the next token, or `None` at end of input
    fn next_token(&mut self) -> Option<Token> {
        self.skip_whitespace_and_comments();

        let (line, column) = (self.line, self.column);
        let (pos, c) = self.advance()?;

        let kind = match c {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            '-' => TokenKind::Minus,
            '"' => self.string(),
            c if c.is_ascii_digit() => self.number(pos, c),
            c if c.is_alphabetic() || c == '_' => self.identifier(pos),
            other => TokenKind::Unknown(other),
        };

        Some(Token::new(kind, line, column))
    }

    /// Advance to the next character
    fn advance(&mut self) -> Option<(usize, char)> {
        let result = self.chars.next();
        if let Some((_, c)) = result {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        result
    }

    /// Peek at the next character
    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    /// Skip whitespace and `//` line comments
    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.peek() {
                Some(' ' | '\t' | '\r' | '\n') => {
                    self.advance();
                }
                Some('/') => {
                    let mut lookahead = self.chars.clone();
                    lookahead.next();
                    if lookahead.peek().map(|(_, c)| *c) == Some('/') {
                        while let Some(c) = self.peek() {
                            if c == '\n' {
                                break;
                            }
                            self.advance();
                        }
                    } else {
                        break;
                    }
                }
                _ => break,
            }
        }
    }

    /// Scan a string literal; the opening quote is already consumed.
    ///
    /// An unterminated string yields whatever was collected so far rather
    /// than an error, consistent with the skip-don't-fail extraction policy.
    fn string(&mut self) -> TokenKind {
        let mut value = String::new();

        loop {
            match self.advance() {
                Some((_, '"')) | None => break,
                Some((_, '\\')) => match self.advance() {
                    Some((_, 'n')) => value.push('\n'),
                    Some((_, 't')) => value.push('\t'),
                    Some((_, 'r')) => value.push('\r'),
                    Some((_, '\\')) => value.push('\\'),
                    Some((_, '"')) => value.push('"'),
                    Some((_, c)) => {
                        value.push('\\');
                        value.push(c);
                    }
                    None => break,
                },
                Some((_, c)) => value.push(c),
            }
        }

        TokenKind::Str(value)
    }

    /// Scan a number: digits, optional fraction, optional exponent
    fn number(&mut self, start: usize, first: char) -> TokenKind {
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                self.advance();
            } else {
                break;
            }
        }

        if self.peek() == Some('.') {
            let mut lookahead = self.chars.clone();
            lookahead.next();
            if lookahead
                .peek()
                .map(|(_, c)| c.is_ascii_digit())
                .unwrap_or(false)
            {
                self.advance();
                while let Some(c) = self.peek() {
                    if c.is_ascii_digit() {
                        self.advance();
                    } else {
                        break;
                    }
                }
            }
        }

        if matches!(self.peek(), Some('e' | 'E')) {
            let mut lookahead = self.chars.clone();
            lookahead.next();
            let after_sign = match lookahead.peek().map(|(_, c)| *c) {
                Some('+' | '-') => {
                    lookahead.next();
                    lookahead.peek().map(|(_, c)| *c)
                }
                other => other,
            };
            if after_sign.map(|c| c.is_ascii_digit()).unwrap_or(false) {
                self.advance(); // e
                if matches!(self.peek(), Some('+' | '-')) {
                    self.advance();
                }
                while let Some(c) = self.peek() {
                    if c.is_ascii_digit() {
                        self.advance();
                    } else {
                        break;
                    }
                }
            }
        }

        let end = self
            .chars
            .peek()
            .map(|(pos, _)| *pos)
            .unwrap_or(self.source.len());

        self.source[start..end]
            .parse()
            .map(TokenKind::Number)
            .unwrap_or(TokenKind::Unknown(first))
    }

    /// Scan an identifier
    fn identifier(&mut self, start: usize) -> TokenKind {
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '_' {
                self.advance();
            } else {
                break;
            }
        }

        let end = self
            .chars
            .peek()
            .map(|(pos, _)| *pos)
            .unwrap_or(self.source.len());

        TokenKind::Ident(self.source[start..end].to_string())
    }
}

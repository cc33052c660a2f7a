use std::iter::Peekable;

use cgmath::{vec2, vec3};

use crate::{error::{ParseError, Result}, types::{Float, Vec2, Vec3}};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind<'a> {
    /// `name:` with the colon stripped
    Key(&'a str),
    Word(&'a str),
    Open,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'a> {
    pub kind: TokenKind<'a>,
    pub line: usize,
}

impl<'a> Token<'a> {
    fn text(&self) -> String {
        match self.kind {
            TokenKind::Key(key) => format!("{key}:"),
            TokenKind::Word(word) => word.to_string(),
            TokenKind::Open => "{".to_string(),
            TokenKind::Close => "}".to_string(),
        }
    }
}

pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let mut tokens = vec![];

    for (index, line) in source.lines().enumerate() {
        let line_number = index + 1;
        let code = match line.find('#') {
            Some(comment) => &line[..comment],
            None => line,
        };

        for mut part in code.split_ascii_whitespace() {
            while let Some(brace) = part.find(['{', '}']) {
                push_word(&mut tokens, &part[..brace], line_number);
                let kind = if part.as_bytes()[brace] == b'{' { TokenKind::Open } else { TokenKind::Close };
                tokens.push(Token { kind, line: line_number });
                part = &part[brace + 1..];
            }
            push_word(&mut tokens, part, line_number);
        }
    }

    tokens
}

fn push_word<'a>(tokens: &mut Vec<Token<'a>>, word: &'a str, line: usize) {
    if word.is_empty() {
        return;
    }
    let kind = match word.strip_suffix(':') {
        Some(key) => TokenKind::Key(key),
        None => TokenKind::Word(word),
    };
    tokens.push(Token { kind, line });
}

/// Cursor over the token list with the value readers every block parser shares.
pub struct Tokens<'a> {
    inner: Peekable<std::vec::IntoIter<Token<'a>>>,
    last_line: usize,
}

impl<'a> Tokens<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { inner: tokenize(source).into_iter().peekable(), last_line: 1 }
    }

    pub fn peek(&mut self) -> Option<&Token<'a>> {
        self.inner.peek()
    }

    /// Line of the most recently consumed token.
    pub fn line(&self) -> usize {
        self.last_line
    }

    pub fn next_token(&mut self, expected: &'static str) -> Result<Token<'a>> {
        let token = self.inner.next().ok_or(ParseError::UnexpectedEnd { expected })?;
        self.last_line = token.line;
        Ok(token)
    }

    pub fn expect_open(&mut self) -> Result<()> {
        let token = self.next_token("`{`")?;
        match token.kind {
            TokenKind::Open => Ok(()),
            _ => Err(unexpected(&token, "`{`")),
        }
    }

    /// Next `key:` inside a block, or `None` once the closing brace is consumed.
    pub fn next_key(&mut self) -> Result<Option<&'a str>> {
        let token = self.next_token("a field or `}`")?;
        match token.kind {
            TokenKind::Key(key) => Ok(Some(key)),
            TokenKind::Close => Ok(None),
            _ => Err(unexpected(&token, "a field or `}`")),
        }
    }

    pub fn next_word(&mut self, expected: &'static str) -> Result<&'a str> {
        let token = self.next_token(expected)?;
        match token.kind {
            TokenKind::Word(word) => Ok(word),
            _ => Err(unexpected(&token, expected)),
        }
    }

    pub fn next_float(&mut self) -> Result<Float> {
        let token = self.next_token("a number")?;
        let TokenKind::Word(word) = token.kind else {
            return Err(unexpected(&token, "a number"));
        };
        match word.parse::<Float>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(ParseError::MalformedNumber { line: token.line, token: word.to_string() }),
        }
    }

    pub fn next_vec2(&mut self) -> Result<Vec2> {
        Ok(vec2(self.next_float()?, self.next_float()?))
    }

    pub fn next_vec3(&mut self) -> Result<Vec3> {
        Ok(vec3(self.next_float()?, self.next_float()?, self.next_float()?))
    }
}

pub fn unexpected(token: &Token, expected: &'static str) -> ParseError {
    ParseError::UnexpectedToken { line: token.line, expected, found: token.text() }
}

#[cfg(test)]
mod test {
    use cgmath::vec3;

    use crate::error::ParseError;

    use super::{tokenize, Token, TokenKind, Tokens};

    fn kinds(source: &str) -> Vec<TokenKind<'_>> {
        tokenize(source).into_iter().map(|Token { kind, .. }| kind).collect()
    }

    #[test]
    fn splits_braces_glued_to_words() {
        assert_eq!(
            kinds("sphere{position: 1 2 3}"),
            vec![
                TokenKind::Word("sphere"),
                TokenKind::Open,
                TokenKind::Key("position"),
                TokenKind::Word("1"),
                TokenKind::Word("2"),
                TokenKind::Word("3"),
                TokenKind::Close,
            ]
        );
    }

    #[test]
    fn skips_comments_and_tracks_lines() {
        let tokens = tokenize("# header\nbox {\n  # inside\n}  # trailing\n");
        let lines: Vec<usize> = tokens.iter().map(|token| token.line).collect();
        assert_eq!(lines, vec![2, 2, 4]);
    }

    #[test]
    fn reads_vectors() {
        let mut tokens = Tokens::new("0.5 -1 2e1");
        assert_eq!(tokens.next_vec3().unwrap(), vec3(0.5, -1.0, 20.0));
    }

    #[test]
    fn rejects_non_finite_and_garbage_numbers() {
        for source in ["NaN", "inf", "1.0.0", "0x10"] {
            let mut tokens = Tokens::new(source);
            assert!(
                matches!(tokens.next_float(), Err(ParseError::MalformedNumber { line: 1, .. })),
                "{source} should be rejected"
            );
        }
    }

    #[test]
    fn next_key_stops_at_close() {
        let mut tokens = Tokens::new("color: }");
        assert_eq!(tokens.next_key().unwrap(), Some("color"));
        assert_eq!(tokens.next_key().unwrap(), None);
        assert!(matches!(tokens.next_key(), Err(ParseError::UnexpectedEnd { .. })));
    }
}

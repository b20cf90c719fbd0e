use crate::token::{Token, TokenKind};
use peekmore::{PeekMore, PeekMoreIterator};
use phf::phf_map;
use std::str::Chars;

static KEYWORDS: phf::Map<&'static str, TokenKind> = phf_map! {
    "let" => TokenKind::Let,
};

pub struct Scanner<'a> {
    src: PeekMoreIterator<Chars<'a>>,
    lexeme_buffer: String,
    exhausted: bool,
}

impl <'a> Iterator for Scanner<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.exhausted {
            return None;
        }

        let token = self.next_token();
        self.exhausted = token.kind == TokenKind::EndOfInput;
        Some(token)
    }
}

impl <'a> Scanner<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src: src.chars().peekmore(),
            lexeme_buffer: String::new(),
            exhausted: false,
        }
    }

    pub fn scan_tokens(self) -> Vec<Token> {
        self.collect()
    }

    /// Produces the next token in the input. Once the input is used up
    /// every further call keeps returning the end-of-input token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let next_char = match self.src.next() {
            None => return Token::end_of_input(),
            Some(c) => c,
        };
        self.lexeme_buffer.push(next_char);

        use TokenKind::*;
        let kind = match next_char {
            '=' => Equals,
            '+' => Plus,
            '-' => Minus,
            '*' => Star,
            '/' => Slash,
            '(' => OpenParen,
            ')' => CloseParen,
            c if c.is_ascii_digit() => self.extract_number(),
            c if is_identifier_char(&c) => self.extract_identifier(),
            _ => Illegal,
        };

        let lexeme = std::mem::take(&mut self.lexeme_buffer);
        Token { kind, lexeme }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.src.peek(), Some(&(' ' | '\t' | '\n' | '\r'))) {
            self.src.next();
        }
    }

    fn extract_number(&mut self) -> TokenKind {
        self.advance_while(|c| c.is_ascii_digit());
        TokenKind::Number
    }

    fn extract_identifier(&mut self) -> TokenKind {
        self.advance_while(is_identifier_char);

        match KEYWORDS.get(self.lexeme_buffer.as_str()) {
            Some(kind) => *kind,
            None => TokenKind::Identifier,
        }
    }

    fn advance_while(&mut self, keep_going: impl Fn(&char) -> bool) {
        let is_done = |nxt: Option<&char>| nxt.is_none() || !keep_going(nxt.unwrap());
        while !is_done(self.src.peek()) {
            let next = self.src.next().unwrap();
            self.lexeme_buffer.push(next);
        }
    }
}

// Digits are deliberately not identifier characters.
fn is_identifier_char(c: &char) -> bool {
    c.is_ascii_alphabetic() || c == &'_'
}

use std::fmt::{self, Display};

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
}

impl Token {
    pub fn new<S: Into<String>>(kind: TokenKind, lexeme: S) -> Token {
        Token { kind, lexeme: lexeme.into() }
    }

    pub fn end_of_input() -> Token {
        Token { kind: TokenKind::EndOfInput, lexeme: String::new() }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type: {}, Literal: '{}'", self.kind.name(), self.lexeme)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    Number, Identifier,

    Equals, Plus, Minus, Star, Slash,
    OpenParen, CloseParen,

    Let,

    Illegal, EndOfInput,
}

impl TokenKind {
    /// Uppercase name of the kind, for debug output only.
    pub fn name(self) -> &'static str {
        use TokenKind::*;
        match self {
            Number => "NUMBER",
            Identifier => "IDENTIFIER",
            Equals => "EQUALS",
            Plus => "PLUS",
            Minus => "MINUS",
            Star => "STAR",
            Slash => "SLASH",
            OpenParen => "OPEN_PAREN",
            CloseParen => "CLOSE_PAREN",
            Let => "LET",
            Illegal => "ILLEGAL",
            EndOfInput => "EOF",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_of_input_has_empty_lexeme() {
        let t = Token::end_of_input();
        assert_eq!(t.kind, TokenKind::EndOfInput);
        assert_eq!(t.lexeme, "");
    }

    #[test]
    fn kind_names_are_uppercase_identifiers() {
        assert_eq!("NUMBER", TokenKind::Number.name());
        assert_eq!("IDENTIFIER", TokenKind::Identifier.name());
        assert_eq!("EQUALS", TokenKind::Equals.name());
        assert_eq!("PLUS", TokenKind::Plus.name());
        assert_eq!("MINUS", TokenKind::Minus.name());
        assert_eq!("STAR", TokenKind::Star.name());
        assert_eq!("SLASH", TokenKind::Slash.name());
        assert_eq!("OPEN_PAREN", TokenKind::OpenParen.name());
        assert_eq!("CLOSE_PAREN", TokenKind::CloseParen.name());
        assert_eq!("LET", TokenKind::Let.name());
        assert_eq!("ILLEGAL", TokenKind::Illegal.name());
        assert_eq!("EOF", TokenKind::EndOfInput.name());
    }

    #[test]
    fn display_shows_kind_and_lexeme() {
        let t = Token::new(TokenKind::Number, "42");
        assert_eq!("Type: NUMBER, Literal: '42'", t.to_string());
    }
}

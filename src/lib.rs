mod scanner;
mod token;

pub use crate::scanner::Scanner;
pub use crate::token::{Token, TokenKind};

//! Token vocabulary and syntax tree for the Monkey language front end.
//!
//! The lexer classifies words with [`token::lookup_ident`] and hands
//! [`token::Token`]s to the parser, which assembles a [`lang::Program`].

pub mod frontend;
pub mod lang;
pub mod token;

pub use lang::{
    CodecError, Expression, ExpressionStatement, Identifier, LetStatement, Node, Program,
    ReturnStatement, Statement,
};
pub use token::{Token, TokenKind, lookup_ident};

//! # Abstract Syntax Tree
//!
//! Node types produced by the parser and consumed by the evaluator.
//!
//! ## Conventions
//!
//! - Every node keeps the token that introduced it; [`Node::token_literal`]
//!   returns that token's source text for diagnostics.
//! - Rendering goes through `Display`: each node writes itself and lets its
//!   children write themselves. [`Node::render`] collects the result.
//! - Children that the parser has not filled in yet are `None`. They render
//!   as the empty string.

pub mod codec;
pub mod codec_error;
pub mod expression;
pub mod node;
pub mod program;
pub mod statement;

pub use codec_error::CodecError;
pub use expression::{Expression, Identifier};
pub use node::Node;
pub use program::Program;
pub use statement::{ExpressionStatement, LetStatement, ReturnStatement, Statement};

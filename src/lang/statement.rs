use serde::{Deserialize, Serialize};

use super::expression::{Expression, Identifier};
use super::node::Node;
use crate::token::{Token, TokenKind};

/// Statement node: performs an action, produces no value.
///
/// The set of variants is closed. Consumers match on it exhaustively, so a
/// new statement kind shows up as a compile error in every walker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Statement {
    /// Bind a name: `let x = y;`
    Let(LetStatement),

    /// Leave the enclosing function: `return x;`
    Return(ReturnStatement),

    /// Bare expression evaluated for its effect: `x`
    Expression(ExpressionStatement),
}

impl Statement {
    /// Returns false while the parser has not filled in the child expression.
    pub fn is_complete(&self) -> bool {
        match self {
            Statement::Let(stmt) => stmt.value.is_some(),
            Statement::Return(stmt) => stmt.return_value.is_some(),
            Statement::Expression(stmt) => stmt.expression.is_some(),
        }
    }
}

impl Node for Statement {
    fn token_literal(&self) -> &str {
        match self {
            Statement::Let(stmt) => stmt.token_literal(),
            Statement::Return(stmt) => stmt.token_literal(),
            Statement::Expression(stmt) => stmt.token_literal(),
        }
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Statement::Let(stmt) => write!(f, "{}", stmt),
            Statement::Return(stmt) => write!(f, "{}", stmt),
            Statement::Expression(stmt) => write!(f, "{}", stmt),
        }
    }
}

impl From<LetStatement> for Statement {
    fn from(stmt: LetStatement) -> Self {
        Statement::Let(stmt)
    }
}

impl From<ReturnStatement> for Statement {
    fn from(stmt: ReturnStatement) -> Self {
        Statement::Return(stmt)
    }
}

impl From<ExpressionStatement> for Statement {
    fn from(stmt: ExpressionStatement) -> Self {
        Statement::Expression(stmt)
    }
}

/// `let <name> = <value>;`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetStatement {
    /// The `let` token.
    pub token: Token,
    pub name: Identifier,
    /// `None` only while the statement is still being parsed.
    pub value: Option<Expression>,
}

impl LetStatement {
    pub fn new(token: Token, name: Identifier, value: Option<Expression>) -> Self {
        LetStatement { token, name, value }
    }

    /// `let name = value;` with a synthesised `let` token.
    pub fn binding(name: Identifier, value: Expression) -> Self {
        LetStatement::new(Token::new(TokenKind::Let, "let"), name, Some(value))
    }
}

impl Node for LetStatement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl std::fmt::Display for LetStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} = ", self.token_literal(), self.name)?;
        if let Some(value) = &self.value {
            write!(f, "{}", value)?;
        }
        write!(f, ";")
    }
}

/// `return <value>;`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnStatement {
    /// The `return` token.
    pub token: Token,
    pub return_value: Option<Expression>,
}

impl ReturnStatement {
    pub fn new(token: Token, return_value: Option<Expression>) -> Self {
        ReturnStatement {
            token,
            return_value,
        }
    }

    /// `return value;` with a synthesised `return` token.
    pub fn of(value: Expression) -> Self {
        ReturnStatement::new(Token::new(TokenKind::Return, "return"), Some(value))
    }
}

impl Node for ReturnStatement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl std::fmt::Display for ReturnStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ", self.token_literal())?;
        if let Some(value) = &self.return_value {
            write!(f, "{}", value)?;
        }
        write!(f, ";")
    }
}

/// An expression in statement position.
///
/// Adds no terminator of its own when rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpressionStatement {
    /// First token of the expression.
    pub token: Token,
    pub expression: Option<Expression>,
}

impl ExpressionStatement {
    pub fn new(token: Token, expression: Option<Expression>) -> Self {
        ExpressionStatement { token, expression }
    }
}

impl From<Expression> for ExpressionStatement {
    fn from(expression: Expression) -> Self {
        let token = match &expression {
            Expression::Identifier(ident) => ident.token.clone(),
        };
        ExpressionStatement::new(token, Some(expression))
    }
}

impl Node for ExpressionStatement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl std::fmt::Display for ExpressionStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.expression {
            Some(expression) => write!(f, "{}", expression),
            None => Ok(()),
        }
    }
}

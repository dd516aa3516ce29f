use serde::{Deserialize, Serialize};

use super::node::Node;
use super::statement::Statement;

/// Root of the tree: top-level statements in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, statement: impl Into<Statement>) {
        self.statements.push(statement.into());
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// True once every statement has its child expression.
    pub fn is_complete(&self) -> bool {
        self.statements.iter().all(Statement::is_complete)
    }

    /// Statements still missing their child expression, with their index.
    pub fn incomplete_statements(&self) -> impl Iterator<Item = (usize, &Statement)> {
        self.statements
            .iter()
            .enumerate()
            .filter(|(_, stmt)| !stmt.is_complete())
    }
}

impl Node for Program {
    fn token_literal(&self) -> &str {
        match self.statements.first() {
            Some(stmt) => stmt.token_literal(),
            None => "",
        }
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

impl From<Vec<Statement>> for Program {
    fn from(statements: Vec<Statement>) -> Self {
        Program { statements }
    }
}

impl FromIterator<Statement> for Program {
    fn from_iter<I: IntoIterator<Item = Statement>>(iter: I) -> Self {
        Program {
            statements: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{Expression, ExpressionStatement, Identifier, LetStatement, ReturnStatement};
    use crate::token::{Token, TokenKind};

    fn ident(name: &str) -> Identifier {
        Identifier::new(Token::new(TokenKind::Ident, name))
    }

    /// Rebuild a program from its own rendering, one statement per `;`.
    ///
    /// Understands only the forms this tree can hold.
    fn reparse(source: &str) -> Program {
        source
            .split_terminator(';')
            .map(|chunk| -> Statement {
                let words: Vec<&str> = chunk.split_whitespace().collect();
                match words.as_slice() {
                    ["let", name, "="] => {
                        LetStatement::new(Token::ident("let"), ident(name), None).into()
                    }
                    ["let", name, "=", value] => {
                        let value = Some(ident(value).into());
                        LetStatement::new(Token::ident("let"), ident(name), value).into()
                    }
                    ["return"] => ReturnStatement::new(Token::ident("return"), None).into(),
                    ["return", value] => {
                        let value = Some(ident(value).into());
                        ReturnStatement::new(Token::ident("return"), value).into()
                    }
                    [name] => ExpressionStatement::from(Expression::from(ident(name))).into(),
                    other => panic!("unexpected statement: {:?}", other),
                }
            })
            .collect()
    }

    #[test]
    fn test_empty_program() {
        let program = Program::new();
        assert!(program.is_empty());
        assert_eq!(program.token_literal(), "");
        assert_eq!(program.render(), "");
        assert!(program.is_complete());
    }

    #[test]
    fn test_token_literal_is_first_statement() {
        let mut program = Program::new();
        program.push(ReturnStatement::of(ident("a").into()));
        program.push(LetStatement::binding(ident("a"), ident("b").into()));
        assert_eq!(program.token_literal(), "return");
    }

    #[test]
    fn test_program_string() {
        let program = Program::from(vec![
            Statement::Let(LetStatement::new(
                Token::new(TokenKind::Let, "let"),
                ident("myVar"),
                Some(Expression::Identifier(ident("anotherVar"))),
            )),
        ]);
        assert_eq!(program.render(), "let myVar = anotherVar;");
    }

    #[test]
    fn test_statements_concatenate_without_separator() {
        let mut program = Program::new();
        program.push(LetStatement::binding(ident("a"), ident("b").into()));
        program.push(ReturnStatement::of(ident("a").into()));
        assert_eq!(program.len(), 2);
        assert_eq!(program.render(), "let a = b;return a;");
    }

    #[test]
    fn test_render_is_deterministic() {
        let statements: Vec<Statement> = vec![
            LetStatement::binding(ident("x"), ident("y").into()).into(),
            ReturnStatement::of(ident("x").into()).into(),
        ];
        let program: Program = statements.into_iter().collect();
        assert_eq!(program.render(), program.render());
    }

    #[test]
    fn test_render_is_fixed_point_under_reparse() {
        let mut program = Program::new();
        program.push(LetStatement::binding(ident("x"), ident("y").into()));
        program.push(ReturnStatement::new(Token::ident("return"), None));
        program.push(ReturnStatement::of(ident("x").into()));

        let rendered = program.render();
        let reparsed = reparse(&rendered);
        assert_eq!(reparsed.render(), rendered);
        assert_eq!(reparsed, program);
    }

    #[test]
    fn test_incomplete_statements() {
        let mut program = Program::new();
        program.push(LetStatement::binding(ident("a"), ident("b").into()));
        program.push(LetStatement::new(Token::ident("let"), ident("c"), None));
        program.push(ReturnStatement::new(Token::ident("return"), None));

        assert!(!program.is_complete());
        let missing: Vec<usize> = program.incomplete_statements().map(|(i, _)| i).collect();
        assert_eq!(missing, vec![1, 2]);
    }
}

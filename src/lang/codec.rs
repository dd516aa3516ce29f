//! Binary encoding of parsed trees, so a front end can cache a `Program`.

use super::codec_error::CodecError;
use super::expression::{Expression, Identifier};
use super::program::Program;
use super::statement::Statement;

pub type CodecResult<T> = Result<T, CodecError>;

impl Program {
    pub fn to_bytes(&self) -> CodecResult<Vec<u8>> {
        postcard::to_allocvec(self).map_err(CodecError::encode)
    }

    /// Decode a tree written by [`Program::to_bytes`].
    ///
    /// The buffer must hold exactly one tree, and every identifier must agree
    /// with its token.
    pub fn from_bytes(bytes: &[u8]) -> CodecResult<Program> {
        let (program, rest): (Program, &[u8]) = postcard::take_from_bytes(bytes)
            .map_err(|err| CodecError::decode(err, bytes.len()))?;
        if !rest.is_empty() {
            return Err(CodecError::trailing_bytes(rest.len(), bytes.len()));
        }
        check_identifiers(&program, bytes.len())?;
        Ok(program)
    }
}

fn check_identifiers(program: &Program, len: usize) -> CodecResult<()> {
    for stmt in &program.statements {
        match stmt {
            Statement::Let(stmt) => {
                check_identifier(&stmt.name, len)?;
                check_expression(stmt.value.as_ref(), len)?;
            }
            Statement::Return(stmt) => check_expression(stmt.return_value.as_ref(), len)?,
            Statement::Expression(stmt) => check_expression(stmt.expression.as_ref(), len)?,
        }
    }
    Ok(())
}

fn check_expression(expr: Option<&Expression>, len: usize) -> CodecResult<()> {
    match expr {
        Some(Expression::Identifier(ident)) => check_identifier(ident, len),
        None => Ok(()),
    }
}

fn check_identifier(ident: &Identifier, len: usize) -> CodecResult<()> {
    if ident.value != ident.token.literal {
        return Err(CodecError::mismatched_identifier(
            &ident.value,
            &ident.token.literal,
            len,
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{ExpressionStatement, LetStatement, Node, ReturnStatement};
    use crate::token::{Token, TokenKind};

    fn sample() -> Program {
        let mut program = Program::new();
        program.push(LetStatement::binding(
            Identifier::named("a"),
            Identifier::named("b").into(),
        ));
        program.push(ReturnStatement::new(Token::ident("return"), None));
        program.push(ExpressionStatement::from(Expression::from(
            Identifier::named("a"),
        )));
        program
    }

    #[test]
    fn test_decoded_tree_renders_the_same() {
        let program = sample();
        let bytes = program.to_bytes().unwrap();
        let decoded = Program::from_bytes(&bytes).unwrap();
        assert_eq!(decoded, program);
        assert_eq!(decoded.render(), "let a = b;return ;a");
    }

    #[test]
    fn test_truncated_input() {
        let bytes = sample().to_bytes().unwrap();
        let err = Program::from_bytes(&bytes[..bytes.len() / 2]).unwrap_err();
        assert!(matches!(err, CodecError::Decode { .. }));
    }

    #[test]
    fn test_trailing_bytes_rejected() {
        let mut program = Program::new();
        program.push(LetStatement::binding(
            Identifier::named("a"),
            Identifier::named("b").into(),
        ));
        let mut bytes = program.to_bytes().unwrap();
        let len = bytes.len() + 4;
        bytes.extend_from_slice(&[0xde, 0xad, 0xbe, 0xef]);

        let err = Program::from_bytes(&bytes).unwrap_err();
        assert_eq!(err, CodecError::trailing_bytes(4, len));
    }

    #[test]
    fn test_identifier_out_of_sync_with_token() {
        let stale = Identifier {
            token: Token::new(TokenKind::Ident, "c"),
            value: "b".to_string(),
        };
        let mut program = Program::new();
        program.push(LetStatement::binding(Identifier::named("a"), stale.into()));
        let bytes = program.to_bytes().unwrap();

        let err = Program::from_bytes(&bytes).unwrap_err();
        assert_eq!(err, CodecError::mismatched_identifier("b", "c", bytes.len()));
    }

    #[test]
    fn test_empty_program_encodes() {
        let bytes = Program::new().to_bytes().unwrap();
        assert!(Program::from_bytes(&bytes).unwrap().is_empty());
    }
}

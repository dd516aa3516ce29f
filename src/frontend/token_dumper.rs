use std::fmt::Write;

use crate::token::{Token, TokenKind};

/// Formats a token stream one token per line, for lexer debugging.
pub struct TokenDumper {
    pub color: bool,
    pub show_debug_repr: bool, // if false, prints `KIND literal` instead of the Debug form
}

impl Default for TokenDumper {
    fn default() -> Self {
        Self {
            color: true,
            show_debug_repr: true,
        }
    }
}

impl TokenDumper {
    // ANSI colors
    const RESET: &'static str = "\x1b[0m";
    const DIM: &'static str = "\x1b[2m";
    const RED: &'static str = "\x1b[31m";
    const YEL: &'static str = "\x1b[33m";
    const CYN: &'static str = "\x1b[36m";
    const MAG: &'static str = "\x1b[35m";
    const BLU: &'static str = "\x1b[34m";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn no_color(mut self) -> Self {
        self.color = false;
        self
    }

    pub fn pretty(mut self) -> Self {
        self.show_debug_repr = false;
        self
    }

    pub fn dump(&self, tokens: &[Token]) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.dump_to(&mut out, tokens);
        out
    }

    pub fn dump_to(&self, out: &mut impl Write, tokens: &[Token]) -> std::fmt::Result {
        for (i, token) in tokens.iter().enumerate() {
            self.write_one(out, i, token)?;
        }
        Ok(())
    }

    fn write_one(&self, out: &mut impl Write, index: usize, token: &Token) -> std::fmt::Result {
        let category = Self::category(token.kind);
        let colr = if self.color { Self::color(token.kind) } else { "" };
        let reset = if self.color { Self::RESET } else { "" };

        if self.show_debug_repr {
            writeln!(out, "[{:03}] {}{:<8} {:?}{}", index, colr, category, token, reset)
        } else {
            match token.kind {
                TokenKind::Eof => {
                    writeln!(out, "[{:03}] {}{:<8} EOF{}", index, colr, category, reset)
                }
                kind => writeln!(
                    out,
                    "[{:03}] {}{:<8} {} {}{}",
                    index, colr, category, kind, token.literal, reset
                ),
            }
        }
    }

    fn category(kind: TokenKind) -> &'static str {
        match kind {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            k if k.is_keyword() => "KEYWORD",
            k if k.is_comparison() => "CMP",
            k if k.is_operator() => "OP",
            _ => "DELIM",
        }
    }

    fn color(kind: TokenKind) -> &'static str {
        match kind {
            TokenKind::Eof => Self::DIM,
            TokenKind::Illegal => Self::RED,
            TokenKind::Ident => Self::YEL,
            TokenKind::Int => Self::CYN,
            k if k.is_keyword() => Self::BLU,
            k if k.is_operator() || k.is_comparison() => Self::MAG,
            _ => Self::RESET,
        }
    }
}

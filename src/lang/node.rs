use std::fmt::Display;

/// Capability shared by every AST node.
pub trait Node: Display {
    /// Literal of the token that introduced this node.
    fn token_literal(&self) -> &str;

    /// Textual form of the node, valid input for the parser.
    ///
    /// Whitespace is normalised, so the result is not necessarily the
    /// original source byte for byte.
    fn render(&self) -> String {
        self.to_string()
    }
}

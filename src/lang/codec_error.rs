/// Failure while encoding or decoding a tree.
#[derive(Debug, Clone, PartialEq)]
pub enum CodecError {
    /// The tree could not be written to bytes.
    Encode { reason: String },
    /// The bytes do not hold a valid tree.
    Decode {
        reason: String,
        len: usize,
        hint: Option<String>,
    },
}

impl CodecError {
    pub fn encode(err: postcard::Error) -> Self {
        CodecError::Encode {
            reason: err.to_string(),
        }
    }

    pub fn decode(err: postcard::Error, len: usize) -> Self {
        let hint = match err {
            postcard::Error::DeserializeUnexpectedEnd => {
                Some("input ends early; was the buffer truncated?".to_string())
            }
            postcard::Error::DeserializeBadEnum => {
                Some("unknown node tag; the bytes may come from a newer node set".to_string())
            }
            _ => None,
        };
        CodecError::Decode {
            reason: err.to_string(),
            len,
            hint,
        }
    }

    /// A whole tree was read but `extra` bytes follow it.
    pub fn trailing_bytes(extra: usize, len: usize) -> Self {
        CodecError::Decode {
            reason: format!("{} trailing bytes after tree", extra),
            len,
            hint: Some("the buffer may be corrupted or hold more than one tree".to_string()),
        }
    }

    /// An identifier whose name differs from the literal of its token.
    pub fn mismatched_identifier(value: &str, literal: &str, len: usize) -> Self {
        CodecError::Decode {
            reason: format!(
                "identifier '{}' does not match its token literal '{}'",
                value, literal
            ),
            len,
            hint: None,
        }
    }
}

impl std::fmt::Display for CodecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CodecError::Encode { reason } => {
                write!(f, "codec error: cannot encode tree: {}", reason)
            }
            CodecError::Decode { reason, len, hint } => {
                write!(
                    f,
                    "codec error: cannot decode tree from {} bytes: {}",
                    len, reason
                )?;
                if let Some(h) = hint {
                    write!(f, "\n  hint: {}", h)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for CodecError {}

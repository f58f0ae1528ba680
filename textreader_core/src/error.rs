use miette::Diagnostic;
use thiserror::Error;

use crate::Position;
use crate::symbols::Expected;

/// A failure detected while parsing a document. Parsing is all-or-nothing, so
/// when one of these is returned no part of the tree survives.
///
/// Every variant records the byte `offset` into the source at which the
/// problem was detected. Use [`ParseError::position`] to turn it into a line
/// and column.
#[derive(Debug, Clone, Diagnostic, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
	#[error("expected {expected} but found `{found}` at offset {offset}")]
	#[diagnostic(
		code(textreader::structural_mismatch),
		help("check that every `{{`, `[` and statement is closed in the order it was opened")
	)]
	StructuralMismatch {
		expected: Expected,
		found: char,
		offset: usize,
	},

	/// An item position held a zero-length scalar.
	///
	/// The current grammar never reports this: a closer where an item is
	/// expected is reported as [`ParseError::EmptyStatement`] or
	/// [`ParseError::StructuralMismatch`] first. It remains part of the error
	/// taxonomy for callers that match on every failure kind.
	#[error("empty token at offset {offset}")]
	#[diagnostic(code(textreader::empty_token))]
	EmptyToken { offset: usize },

	#[error("empty statement at offset {offset}")]
	#[diagnostic(
		code(textreader::empty_statement),
		help("every statement needs at least one item before its terminator")
	)]
	EmptyStatement { offset: usize },

	#[error("unexpected end of input at offset {offset}, expected {expected}")]
	#[diagnostic(code(textreader::unterminated_input))]
	UnterminatedInput { expected: Expected, offset: usize },

	#[error("unexpected trailing input at offset {offset}")]
	#[diagnostic(
		code(textreader::trailing_input),
		help("terminate the last statement with `;` or remove the stray text")
	)]
	TrailingInput { offset: usize },

	#[error("nesting deeper than {limit} levels at offset {offset}")]
	#[diagnostic(
		code(textreader::nesting_too_deep),
		help("raise `max_depth` in the parse options or flatten the document")
	)]
	NestingTooDeep { limit: usize, offset: usize },
}

impl ParseError {
	/// The byte offset into the source where the error was detected.
	pub fn offset(&self) -> usize {
		match self {
			Self::StructuralMismatch { offset, .. }
			| Self::EmptyToken { offset }
			| Self::EmptyStatement { offset }
			| Self::UnterminatedInput { offset, .. }
			| Self::TrailingInput { offset }
			| Self::NestingTooDeep { offset, .. } => *offset,
		}
	}

	/// Resolve the error offset to a line and column within `source`.
	pub fn position(&self, source: &str) -> Position {
		Position::from_offset(source, self.offset())
	}
}

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum TextReaderError {
	#[error(transparent)]
	#[diagnostic(code(textreader::io_error))]
	Io(#[from] std::io::Error),

	#[error("invalid parse options: {0}")]
	#[diagnostic(
		code(textreader::config_parse),
		help("check that the options file is valid TOML with `max_depth` and/or `quoted_scalars`")
	)]
	ConfigParse(String),

	#[error(transparent)]
	#[diagnostic(transparent)]
	Parse(#[from] ParseError),
}

pub type ParseResult<T> = Result<T, ParseError>;
pub type TextReaderResult<T> = Result<T, TextReaderError>;

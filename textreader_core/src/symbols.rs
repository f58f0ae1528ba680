use std::fmt::Display;

/// Structural punctuation recognised by the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Punct {
	/// `;`
	Semicolon,
	/// `{`
	BraceOpen,
	/// `}`
	BraceClose,
	/// `[`
	BracketOpen,
	/// `]`
	BracketClose,
}

impl Punct {
	pub fn from_char(ch: char) -> Option<Self> {
		match ch {
			';' => Some(Self::Semicolon),
			'{' => Some(Self::BraceOpen),
			'}' => Some(Self::BraceClose),
			'[' => Some(Self::BracketOpen),
			']' => Some(Self::BracketClose),
			_ => None,
		}
	}

	pub fn as_char(self) -> char {
		match self {
			Self::Semicolon => ';',
			Self::BraceOpen => '{',
			Self::BraceClose => '}',
			Self::BracketOpen => '[',
			Self::BracketClose => ']',
		}
	}

	/// Whether this punctuation ends the line that is currently open.
	pub fn ends_line(self) -> bool {
		matches!(self, Self::Semicolon | Self::BraceClose | Self::BracketClose)
	}
}

impl Display for Punct {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_char())
	}
}

/// What the parser was waiting for when it failed. Carried by
/// [`ParseError`](crate::ParseError) for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Expected {
	/// A specific piece of punctuation.
	Punct(Punct),
	/// The first item of a line.
	Item,
	/// The `"` closing a quoted scalar.
	ClosingQuote,
}

impl Display for Expected {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Expected::Punct(punct) => write!(f, "`{punct}`"),
			Expected::Item => write!(f, "an item"),
			Expected::ClosingQuote => write!(f, "a closing `\"`"),
		}
	}
}

/// Grammar symbols held on the parser stack. The top of the stack names the
/// construct the parser expects next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Symbol {
	/// `Block := (Line ';')*`
	Block,
	/// `Line := Item Items`
	Line,
	/// The remainder of a line: zero or more further items.
	Items,
	/// `Item := Scalar | '[' Line ']' | '{' Block '}'`
	Item,
	/// Punctuation that must appear literally at the cursor.
	Literal(Punct),
}

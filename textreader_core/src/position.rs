use std::fmt::Display;

/// A 1-based line and column within a source buffer, together with the byte
/// offset they were resolved from. Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
	pub line: usize,
	pub column: usize,
	pub offset: usize,
}

impl Position {
	pub fn new(line: usize, column: usize, offset: usize) -> Self {
		Self {
			line,
			column,
			offset,
		}
	}

	/// Resolve `offset` against `source`. Offsets past the end clamp to the end
	/// of the buffer.
	pub fn from_offset(source: &str, offset: usize) -> Self {
		let offset = offset.min(source.len());
		let mut position = Self::new(1, 1, 0);

		for (index, ch) in source.char_indices() {
			if index >= offset {
				break;
			}

			position.advance(ch);
		}

		position.offset = offset;
		position
	}

	fn advance(&mut self, ch: char) {
		if ch == '\n' {
			self.line += 1;
			self.column = 1;
		} else {
			self.column += 1;
		}
	}
}

impl Display for Position {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}:{}", self.line, self.column)
	}
}

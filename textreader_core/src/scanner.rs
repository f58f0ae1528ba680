use crate::symbols::Punct;

/// Characters that separate tokens and are otherwise insignificant.
pub fn is_whitespace(ch: char) -> bool {
	matches!(ch, ' ' | '\t' | '\n')
}

/// A cursor over the source buffer which classifies the next significant
/// character for the parser. The scanner never looks more than one character
/// ahead and only moves forward.
#[derive(Debug, Clone)]
pub(crate) struct Scanner<'a> {
	/// The full source text.
	source: &'a str,
	/// Byte offset of the next unread character.
	cursor: usize,
	/// Whether `\r` separates tokens like the other whitespace characters.
	carriage_return: bool,
}

impl<'a> Scanner<'a> {
	pub fn new(source: &'a str) -> Self {
		Self {
			source,
			cursor: 0,
			carriage_return: false,
		}
	}

	/// Also treat `\r` as whitespace, so CRLF input reads like LF input.
	#[must_use]
	pub fn with_carriage_return(mut self, carriage_return: bool) -> Self {
		self.carriage_return = carriage_return;
		self
	}

	fn is_space(&self, ch: char) -> bool {
		is_whitespace(ch) || (self.carriage_return && ch == '\r')
	}

	/// Characters that end a bare scalar.
	fn is_delimiter(&self, ch: char) -> bool {
		self.is_space(ch) || Punct::from_char(ch).is_some()
	}

	/// Byte offset of the next unread character.
	pub fn offset(&self) -> usize {
		self.cursor
	}

	fn rest(&self) -> &'a str {
		&self.source[self.cursor..]
	}

	/// Move the cursor past any whitespace.
	pub fn skip_whitespace(&mut self) {
		let rest = self.rest();
		let trimmed = rest.trim_start_matches(|ch| self.is_space(ch));
		self.cursor += rest.len() - trimmed.len();
	}

	/// Skip whitespace and return the next significant character without
	/// consuming it. `None` at end of input.
	pub fn peek(&mut self) -> Option<char> {
		self.skip_whitespace();
		self.rest().chars().next()
	}

	/// Consume the character under the cursor.
	pub fn bump(&mut self) -> Option<char> {
		let ch = self.rest().chars().next()?;
		self.cursor += ch.len_utf8();
		Some(ch)
	}

	/// Consume the maximal run of non-delimiter characters at the cursor. The
	/// returned slice is empty when the cursor sits on a delimiter or at the end
	/// of input.
	pub fn scalar(&mut self) -> &'a str {
		let rest = self.rest();
		let end = rest
			.find(|ch| self.is_delimiter(ch))
			.unwrap_or(rest.len());
		self.cursor += end;
		&rest[..end]
	}

	/// Consume a `"`-quoted scalar at the cursor and return its contents without
	/// the quotes. Returns `None`, leaving the cursor at the end of input, when
	/// the closing quote is missing.
	pub fn quoted(&mut self) -> Option<&'a str> {
		let rest = self.rest();
		let inner = rest.strip_prefix('"')?;

		let Some(end) = inner.find('"') else {
			self.cursor = self.source.len();
			return None;
		};

		// opening quote + contents + closing quote
		self.cursor += end + 2;
		Some(&inner[..end])
	}

	/// Whether only whitespace remains.
	pub fn is_at_end(&mut self) -> bool {
		self.peek().is_none()
	}
}

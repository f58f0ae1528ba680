use std::path::Path;

use derive_more::Deref;

use crate::Block;
use crate::ParseOptions;
use crate::ParseResult;
use crate::TextReaderResult;
use crate::parse_with_options;

/// A parsed document together with the text it was parsed from.
///
/// A `Reader` only exists for input that parsed successfully. It derefs to
/// the root [`Block`].
#[derive(Debug, Clone, Deref)]
pub struct Reader {
	source: String,
	#[deref]
	block: Block,
}

impl Reader {
	/// Parse `text` with the default options.
	pub fn new(text: impl Into<String>) -> ParseResult<Self> {
		Self::with_options(text, &ParseOptions::default())
	}

	pub fn with_options(text: impl Into<String>, options: &ParseOptions) -> ParseResult<Self> {
		let source = text.into();
		let block = parse_with_options(&source, options)?;

		Ok(Self { source, block })
	}

	/// Read and parse the UTF-8 file at `path`.
	pub fn from_path(path: impl AsRef<Path>, options: &ParseOptions) -> TextReaderResult<Self> {
		let source = std::fs::read_to_string(path)?;
		Ok(Self::with_options(source, options)?)
	}

	/// The text this reader was parsed from.
	pub fn source(&self) -> &str {
		&self.source
	}

	pub fn block(&self) -> &Block {
		&self.block
	}

	pub fn into_block(self) -> Block {
		self.block
	}
}

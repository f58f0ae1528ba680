use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::TextReaderError;
use crate::TextReaderResult;

/// Supported options file locations in discovery order (highest precedence
/// first).
pub const OPTIONS_FILE_CANDIDATES: [&str; 2] = ["textreader.toml", ".textreader.toml"];

/// Options which adjust how a document is parsed. The default options parse
/// the plain grammar with no nesting limit.
///
/// ```toml
/// max_depth = 64
/// quoted_scalars = true
/// carriage_return_whitespace = true
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ParseOptions {
	/// The maximum number of `{` and `[` structures that may be open at once.
	/// `None` means no limit beyond available memory.
	pub max_depth: Option<usize>,
	/// Treat `"..."` at the start of an item as a single scalar. The quoted
	/// text may contain whitespace and structural characters but no `"`; there
	/// are no escape sequences.
	pub quoted_scalars: bool,
	/// Treat `\r` as whitespace, so CRLF documents parse like LF documents.
	/// When off, `\r` is an ordinary scalar character.
	pub carriage_return_whitespace: bool,
}

impl ParseOptions {
	#[must_use]
	pub fn with_max_depth(mut self, max_depth: usize) -> Self {
		self.max_depth = Some(max_depth);
		self
	}

	#[must_use]
	pub fn with_quoted_scalars(mut self, quoted_scalars: bool) -> Self {
		self.quoted_scalars = quoted_scalars;
		self
	}

	#[must_use]
	pub fn with_carriage_return_whitespace(mut self, carriage_return_whitespace: bool) -> Self {
		self.carriage_return_whitespace = carriage_return_whitespace;
		self
	}

	/// Parse options from TOML content.
	pub fn from_toml_str(content: &str) -> TextReaderResult<Self> {
		toml::from_str(content).map_err(|e| TextReaderError::ConfigParse(e.to_string()))
	}

	/// Load options from the TOML file at `path`.
	pub fn load(path: impl AsRef<Path>) -> TextReaderResult<Self> {
		let content = std::fs::read_to_string(path)?;
		Self::from_toml_str(&content)
	}

	/// Resolve the options path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		OPTIONS_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the options from the first discovered options file in `root`.
	/// Returns `None` if no options file exists.
	pub fn discover(root: &Path) -> TextReaderResult<Option<Self>> {
		let Some(path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		Self::load(path).map(Some)
	}
}

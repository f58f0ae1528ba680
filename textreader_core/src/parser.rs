//! The stack-machine parser.
//!
//! The grammar is recognised without native recursion. A stack of pending
//! grammar [`Symbol`]s names what the parser expects next, and two builder
//! stacks hold the blocks and lines that are still open. Each iteration pops
//! one symbol and runs the step for it, which either consumes input or pushes
//! the symbols the grammar rule expands to:
//!
//! ```text
//! Block  := (Line ';')*
//! Line   := Item Items
//! Items  := (Item)*
//! Item   := Scalar | '[' Line ']' | '{' Block '}'
//! ```
//!
//! Nesting depth is therefore bounded by memory rather than by the call stack.

use tracing::debug;
use tracing::trace;

use crate::Block;
use crate::Item;
use crate::Line;
use crate::ParseError;
use crate::ParseOptions;
use crate::ParseResult;
use crate::scanner::Scanner;
use crate::symbols::Expected;
use crate::symbols::Punct;
use crate::symbols::Symbol;

/// Parse `content` into its root [`Block`] using the default options.
pub fn parse(content: impl AsRef<str>) -> ParseResult<Block> {
	parse_with_options(content, &ParseOptions::default())
}

/// Parse `content` into its root [`Block`]. Either the whole document parses
/// or an error is returned; no partial tree is ever produced.
pub fn parse_with_options(content: impl AsRef<str>, options: &ParseOptions) -> ParseResult<Block> {
	let content = content.as_ref();
	debug!(length = content.len(), ?options, "parsing document");

	let result = ParserState::new(content, *options).run();

	match &result {
		Ok(block) => debug!(lines = block.len(), "parsed document"),
		Err(error) => debug!(%error, "failed to parse document"),
	}

	result
}

/// Everything the parser needs while it runs. The symbol stack and the two
/// builder stacks are only ever modified together by the step functions
/// below, so that after every step:
///
/// - `blocks` holds the root block plus one entry per open `{`.
/// - `lines` holds one entry per line whose items are still being read.
/// - `depth` counts the open `{` and `[` structures.
struct ParserState<'a> {
	scanner: Scanner<'a>,
	options: ParseOptions,
	/// Pending grammar symbols, top of stack last.
	symbols: Vec<Symbol>,
	/// Lines of the blocks currently being built, innermost last.
	blocks: Vec<Vec<Line>>,
	/// Items of the lines currently being built, innermost last.
	lines: Vec<Vec<Item>>,
	depth: usize,
}

impl<'a> ParserState<'a> {
	fn new(source: &'a str, options: ParseOptions) -> Self {
		Self {
			scanner: Scanner::new(source).with_carriage_return(options.carriage_return_whitespace),
			options,
			symbols: vec![Symbol::Block],
			blocks: vec![Vec::new()],
			lines: Vec::new(),
			depth: 0,
		}
	}

	fn run(mut self) -> ParseResult<Block> {
		while let Some(symbol) = self.symbols.pop() {
			match symbol {
				Symbol::Block => self.block()?,
				Symbol::Line => self.line()?,
				Symbol::Items => self.items(),
				Symbol::Item => self.item()?,
				Symbol::Literal(punct) => self.literal(punct)?,
			}
		}

		if !self.scanner.is_at_end() {
			return Err(ParseError::TrailingInput {
				offset: self.scanner.offset(),
			});
		}

		debug_assert_eq!(self.blocks.len(), 1, "only the root block remains open");
		debug_assert!(self.lines.is_empty(), "no line remains open");

		Ok(Block::new(self.blocks.pop().unwrap_or_default()))
	}

	fn push(&mut self, symbols: &[Symbol]) {
		self.symbols.extend_from_slice(symbols);
	}

	/// `Block := (Line ';')*`. A block ends at `}` or at the end of input; any
	/// other significant character starts another statement.
	fn block(&mut self) -> ParseResult<()> {
		match self.scanner.peek() {
			None | Some('}') => Ok(()),
			Some(';' | ']') => Err(ParseError::EmptyStatement {
				offset: self.scanner.offset(),
			}),
			Some(_) => {
				self.push(&[
					Symbol::Block,
					Symbol::Literal(Punct::Semicolon),
					Symbol::Line,
				]);
				Ok(())
			}
		}
	}

	/// `Line := Item Items`. Opens a new line builder.
	fn line(&mut self) -> ParseResult<()> {
		let next = self.scanner.peek();
		let offset = self.scanner.offset();

		match next {
			None => Err(ParseError::UnterminatedInput {
				expected: Expected::Item,
				offset,
			}),
			Some(ch) if ends_line(ch) => Err(ParseError::EmptyStatement { offset }),
			Some(_) => {
				self.lines.push(Vec::new());
				self.push(&[Symbol::Items, Symbol::Item]);
				Ok(())
			}
		}
	}

	/// The rest of a line. It ends at the end of input or at a closing
	/// character; the literal underneath decides whether that closer is the
	/// right one.
	fn items(&mut self) {
		match self.scanner.peek() {
			None => {}
			Some(ch) if ends_line(ch) => {}
			Some(_) => self.push(&[Symbol::Items, Symbol::Item]),
		}
	}

	/// `Item := Scalar | '[' Line ']' | '{' Block '}'`.
	fn item(&mut self) -> ParseResult<()> {
		let next = self.scanner.peek();
		let offset = self.scanner.offset();

		match next {
			None => Err(ParseError::UnterminatedInput {
				expected: Expected::Item,
				offset,
			}),
			Some('{') => {
				self.push(&[
					Symbol::Literal(Punct::BraceClose),
					Symbol::Block,
					Symbol::Literal(Punct::BraceOpen),
				]);
				Ok(())
			}
			Some('[') => {
				self.push(&[
					Symbol::Literal(Punct::BracketClose),
					Symbol::Line,
					Symbol::Literal(Punct::BracketOpen),
				]);
				Ok(())
			}
			Some('"') if self.options.quoted_scalars => {
				let Some(text) = self.scanner.quoted() else {
					return Err(ParseError::UnterminatedInput {
						expected: Expected::ClosingQuote,
						offset: self.scanner.offset(),
					});
				};

				trace!(offset, text, "quoted scalar");
				self.push_item(Item::scalar(text));
				Ok(())
			}
			Some(_) => {
				let text = self.scanner.scalar();
				// `line` and `items` stop before `;`, `]` and `}`, and `{`/`[` are
				// handled above, so the cursor is never on a delimiter here.
				debug_assert!(!text.is_empty(), "an item never starts on a delimiter");
				if text.is_empty() {
					return Err(ParseError::EmptyToken { offset });
				}

				trace!(offset, text, "scalar");
				self.push_item(Item::scalar(text));
				Ok(())
			}
		}
	}

	/// Require `punct` at the cursor, consume it and apply its structural
	/// effect.
	fn literal(&mut self, punct: Punct) -> ParseResult<()> {
		let next = self.scanner.peek();
		let offset = self.scanner.offset();

		match next {
			// A top level statement without its `;` is text after the last
			// complete statement.
			None if punct == Punct::Semicolon && self.blocks.len() == 1 => {
				Err(ParseError::TrailingInput { offset })
			}
			None => Err(ParseError::UnterminatedInput {
				expected: Expected::Punct(punct),
				offset,
			}),
			Some(found) if found != punct.as_char() => Err(ParseError::StructuralMismatch {
				expected: Expected::Punct(punct),
				found,
				offset,
			}),
			Some(_) => {
				self.scanner.bump();
				self.close(punct, offset)
			}
		}
	}

	fn close(&mut self, punct: Punct, offset: usize) -> ParseResult<()> {
		match punct {
			Punct::BraceOpen => {
				self.enter(offset)?;
				self.blocks.push(Vec::new());
			}
			Punct::BracketOpen => self.enter(offset)?,
			Punct::BraceClose => {
				self.depth -= 1;
				let lines = self.blocks.pop().unwrap_or_default();
				self.push_item(Item::Block(Block::new(lines)));
			}
			Punct::BracketClose => {
				self.depth -= 1;
				let items = self.lines.pop().unwrap_or_default();
				self.push_item(Item::Line(Line::new(items)));
			}
			Punct::Semicolon => {
				let items = self.lines.pop().unwrap_or_default();
				let Some(block) = self.blocks.last_mut() else {
					unreachable!("a statement is always inside a block");
				};

				block.push(Line::new(items));
			}
		}

		Ok(())
	}

	/// Record that another `{` or `[` has been opened.
	fn enter(&mut self, offset: usize) -> ParseResult<()> {
		self.depth += 1;

		match self.options.max_depth {
			Some(limit) if self.depth > limit => Err(ParseError::NestingTooDeep { limit, offset }),
			_ => Ok(()),
		}
	}

	fn push_item(&mut self, item: Item) {
		let Some(line) = self.lines.last_mut() else {
			unreachable!("an item is always inside a line");
		};

		line.push(item);
	}
}

fn ends_line(ch: char) -> bool {
	Punct::from_char(ch).is_some_and(Punct::ends_line)
}

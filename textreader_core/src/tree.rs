use derive_more::Deref;
use serde::Serialize;

use crate::FromItem;

/// An ordered sequence of statement [`Line`]s. Either the whole document or
/// the payload of a `{ ... }` item.
///
/// `Block` derefs to `[Line]`, so `len()`, `get(index)` and `iter()` are
/// available directly.
///
/// Dropping, cloning and comparing work at any nesting depth. The derived
/// `Debug` and `Serialize` recurse once per level; bound untrusted input with
/// [`ParseOptions::max_depth`](crate::ParseOptions::max_depth) before
/// formatting or serializing it.
#[derive(Debug, Default, Deref, Serialize)]
#[serde(transparent)]
pub struct Block {
	#[deref]
	lines: Vec<Line>,
}

impl Block {
	pub fn new(lines: Vec<Line>) -> Self {
		Self { lines }
	}

	/// Find the first line whose first item is the scalar `key`. Comparison is
	/// exact, byte for byte.
	///
	/// ```text
	/// name foo;
	/// age 9;
	/// ```
	///
	/// `find("age")` returns the second line.
	pub fn find(&self, key: &str) -> Option<&Line> {
		self.lines.iter().find(|line| line.is_key(key))
	}

	/// Read item `index` of the line keyed by `key` as a `T`. Index `0` is the
	/// key itself.
	pub fn value<'a, T: FromItem<'a>>(&'a self, key: &str, index: usize) -> Option<T> {
		self.find(key)?.value(index)
	}

	/// Take ownership of the lines.
	pub fn into_lines(mut self) -> Vec<Line> {
		std::mem::take(&mut self.lines)
	}
}

impl From<Vec<Line>> for Block {
	fn from(lines: Vec<Line>) -> Self {
		Self::new(lines)
	}
}

impl<'a> IntoIterator for &'a Block {
	type IntoIter = std::slice::Iter<'a, Line>;
	type Item = &'a Line;

	fn into_iter(self) -> Self::IntoIter {
		self.lines.iter()
	}
}

impl Clone for Block {
	fn clone(&self) -> Self {
		match clone_tree(CloneFrame::block(self)) {
			Built::Block(block) => block,
			Built::Line(_) => unreachable!("a block frame finishes as a block"),
		}
	}
}

impl PartialEq for Block {
	fn eq(&self, other: &Self) -> bool {
		let mut pending = Vec::new();
		push_lines(&mut pending, &self.lines, &other.lines) && items_eq(pending)
	}
}

impl Eq for Block {}

impl Drop for Block {
	fn drop(&mut self) {
		let mut pending = Vec::new();
		for line in &mut self.lines {
			pending.append(&mut line.items);
		}

		drop_items(pending);
	}
}

/// An ordered sequence of [`Item`]s. Terminated by `;` inside a block, or by
/// `]` when nested in another line. Parsed lines always hold at least one
/// item; [`Line::new`] does not check this.
///
/// Same depth behavior as [`Block`].
#[derive(Debug, Deref, Serialize)]
#[serde(transparent)]
pub struct Line {
	#[deref]
	items: Vec<Item>,
}

impl Line {
	pub fn new(items: Vec<Item>) -> Self {
		Self { items }
	}

	/// Whether the first item of this line is the scalar `key`.
	pub fn is_key(&self, key: &str) -> bool {
		self.items.first().and_then(Item::as_str) == Some(key)
	}

	/// Read item `index` as a `T`.
	pub fn value<'a, T: FromItem<'a>>(&'a self, index: usize) -> Option<T> {
		self.items.get(index)?.value()
	}

	/// Take ownership of the items.
	pub fn into_items(mut self) -> Vec<Item> {
		std::mem::take(&mut self.items)
	}
}

impl From<Vec<Item>> for Line {
	fn from(items: Vec<Item>) -> Self {
		Self::new(items)
	}
}

impl<'a> IntoIterator for &'a Line {
	type IntoIter = std::slice::Iter<'a, Item>;
	type Item = &'a Item;

	fn into_iter(self) -> Self::IntoIter {
		self.items.iter()
	}
}

impl Clone for Line {
	fn clone(&self) -> Self {
		match clone_tree(CloneFrame::line(self)) {
			Built::Line(line) => line,
			Built::Block(_) => unreachable!("a line frame finishes as a line"),
		}
	}
}

impl PartialEq for Line {
	fn eq(&self, other: &Self) -> bool {
		let mut pending = Vec::new();
		push_items(&mut pending, &self.items, &other.items) && items_eq(pending)
	}
}

impl Eq for Line {}

impl Drop for Line {
	fn drop(&mut self) {
		drop_items(std::mem::take(&mut self.items));
	}
}

/// Flatten nested lines and blocks onto a work list before they are dropped,
/// so that freeing a deeply nested tree does not recurse once per level.
fn drop_items(mut pending: Vec<Item>) {
	while let Some(item) = pending.pop() {
		match item {
			Item::Scalar(_) => {}
			Item::Line(mut line) => pending.append(&mut line.items),
			Item::Block(mut block) => {
				for line in &mut block.lines {
					pending.append(&mut line.items);
				}
			}
		}
	}
}

/// A finished node handed from a [`CloneFrame`] to its parent.
enum Built {
	Line(Line),
	Block(Block),
}

/// A node being copied, with the position of the next child to copy.
enum CloneFrame<'a> {
	Block {
		source: &'a Block,
		next: usize,
		lines: Vec<Line>,
	},
	Line {
		source: &'a Line,
		next: usize,
		items: Vec<Item>,
	},
}

impl<'a> CloneFrame<'a> {
	fn block(source: &'a Block) -> Self {
		Self::Block {
			source,
			next: 0,
			lines: Vec::with_capacity(source.lines.len()),
		}
	}

	fn line(source: &'a Line) -> Self {
		Self::Line {
			source,
			next: 0,
			items: Vec::with_capacity(source.items.len()),
		}
	}

	/// Copy scalars until a nested child needs a frame of its own and return
	/// that frame. `None` once every child has been copied.
	fn advance(&mut self) -> Option<CloneFrame<'a>> {
		match self {
			Self::Block { source, next, .. } => {
				let source: &'a Block = *source;
				let line = source.lines.get(*next)?;
				*next += 1;
				Some(Self::line(line))
			}
			Self::Line {
				source,
				next,
				items,
			} => {
				let source: &'a Line = *source;
				while let Some(item) = source.items.get(*next) {
					*next += 1;
					match item {
						Item::Scalar(text) => items.push(Item::Scalar(text.clone())),
						Item::Line(line) => return Some(Self::line(line)),
						Item::Block(block) => return Some(Self::block(block)),
					}
				}

				None
			}
		}
	}

	fn attach(&mut self, child: Built) {
		match (self, child) {
			(Self::Block { lines, .. }, Built::Line(line)) => lines.push(line),
			(Self::Line { items, .. }, Built::Line(line)) => items.push(Item::Line(line)),
			(Self::Line { items, .. }, Built::Block(block)) => items.push(Item::Block(block)),
			(Self::Block { .. }, Built::Block(_)) => unreachable!("a block only holds lines"),
		}
	}

	fn finish(self) -> Built {
		match self {
			Self::Block { lines, .. } => Built::Block(Block::new(lines)),
			Self::Line { items, .. } => Built::Line(Line::new(items)),
		}
	}
}

/// Copy a tree depth first, keeping the open ancestors on a heap stack
/// instead of the call stack.
fn clone_tree(root: CloneFrame<'_>) -> Built {
	let mut current = root;
	let mut parents = Vec::new();

	loop {
		if let Some(child) = current.advance() {
			parents.push(std::mem::replace(&mut current, child));
			continue;
		}

		let built = current.finish();
		let Some(mut parent) = parents.pop() else {
			return built;
		};

		parent.attach(built);
		current = parent;
	}
}

/// Queue the item pairs of two lines for comparison. `false` when their
/// lengths already differ.
fn push_items<'a>(pending: &mut Vec<(&'a Item, &'a Item)>, left: &'a [Item], right: &'a [Item]) -> bool {
	if left.len() != right.len() {
		return false;
	}

	pending.extend(left.iter().zip(right));
	true
}

fn push_lines<'a>(pending: &mut Vec<(&'a Item, &'a Item)>, left: &'a [Line], right: &'a [Line]) -> bool {
	left.len() == right.len()
		&& left
			.iter()
			.zip(right)
			.all(|(left, right)| push_items(pending, &left.items, &right.items))
}

/// Compare queued item pairs, queueing the children of nested pairs rather
/// than recursing into them.
fn items_eq<'a>(mut pending: Vec<(&'a Item, &'a Item)>) -> bool {
	while let Some(pair) = pending.pop() {
		let matches = match pair {
			(Item::Scalar(left), Item::Scalar(right)) => left == right,
			(Item::Line(left), Item::Line(right)) => push_items(&mut pending, &left.items, &right.items),
			(Item::Block(left), Item::Block(right)) => push_lines(&mut pending, &left.lines, &right.lines),
			_ => false,
		};

		if !matches {
			return false;
		}
	}

	true
}

/// A single leaf of the grammar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Item {
	/// A bare token, e.g. `name` or `42`.
	Scalar(String),
	/// A bracketed list, e.g. `[1 2 3]`.
	Line(Line),
	/// A braced record, e.g. `{ x 1; y 2; }`.
	Block(Block),
}

/// The active variant of an [`Item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
	Scalar,
	Line,
	Block,
}

impl Item {
	pub fn scalar(text: impl Into<String>) -> Self {
		Self::Scalar(text.into())
	}

	pub fn kind(&self) -> ItemKind {
		match self {
			Item::Scalar(_) => ItemKind::Scalar,
			Item::Line(_) => ItemKind::Line,
			Item::Block(_) => ItemKind::Block,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			Item::Scalar(text) => Some(text.as_str()),
			_ => None,
		}
	}

	pub fn as_line(&self) -> Option<&Line> {
		match self {
			Item::Line(line) => Some(line),
			_ => None,
		}
	}

	pub fn as_block(&self) -> Option<&Block> {
		match self {
			Item::Block(block) => Some(block),
			_ => None,
		}
	}

	/// First byte of a scalar.
	pub fn as_byte(&self) -> Option<u8> {
		self.as_str()?.bytes().next()
	}

	/// Convert this item into a `T`. Returns `None` when the item is the wrong
	/// shape for `T`.
	pub fn value<'a, T: FromItem<'a>>(&'a self) -> Option<T> {
		T::from_item(self)
	}
}

impl From<Line> for Item {
	fn from(line: Line) -> Self {
		Self::Line(line)
	}
}

impl From<Block> for Item {
	fn from(block: Block) -> Self {
		Self::Block(block)
	}
}

use crate::Block;
use crate::Item;
use crate::Line;
use crate::ParseOptions;

pub const SETTINGS: &str = "name demo;
size 640 480;
tags [red green blue];
window {
	title main;
	visible true;
};
";

pub fn scalar(text: &str) -> Item {
	Item::scalar(text)
}

pub fn line(items: Vec<Item>) -> Line {
	Line::new(items)
}

pub fn list(items: Vec<Item>) -> Item {
	Item::Line(Line::new(items))
}

pub fn record(lines: Vec<Line>) -> Item {
	Item::Block(Block::new(lines))
}

pub fn settings_block() -> Block {
	Block::new(vec![
		line(vec![scalar("name"), scalar("demo")]),
		line(vec![scalar("size"), scalar("640"), scalar("480")]),
		line(vec![
			scalar("tags"),
			list(vec![scalar("red"), scalar("green"), scalar("blue")]),
		]),
		line(vec![
			scalar("window"),
			record(vec![
				line(vec![scalar("title"), scalar("main")]),
				line(vec![scalar("visible"), scalar("true")]),
			]),
		]),
	])
}

pub fn quoted_options() -> ParseOptions {
	ParseOptions::default().with_quoted_scalars(true)
}

/// `k [[[ ... x ... ]]];` with `depth` levels of brackets.
pub fn nested_lists(depth: usize) -> String {
	format!("k {}x{};", "[".repeat(depth), "]".repeat(depth))
}

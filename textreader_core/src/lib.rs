//! `textreader_core` parses a small, whitespace separated text format made of
//! statements, lists and nested records into an immutable tree, and reads
//! typed values out of its leaves.
//!
//! ## Format
//!
//! ```text
//! name demo;
//! size 640 480;
//! tags [red green blue];
//! window {
//! 	title main;
//! 	visible true;
//! };
//! ```
//!
//! - A document is a [`Block`]: zero or more statements, each terminated by
//!   `;`.
//! - A statement is a [`Line`]: one or more whitespace separated [`Item`]s.
//! - An item is a scalar token, a `[ ... ]` list (a nested line) or a
//!   `{ ... }` record (a nested block).
//!
//! ## Processing Pipeline
//!
//! ```text
//! Source text
//!   → Scanner (skips whitespace, classifies the next significant character)
//!   → Parser (explicit symbol stack, fills block and line builders)
//!   → Block / Line / Item tree
//!   → FromItem conversions (on demand, per leaf)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use textreader_core::Reader;
//!
//! let reader = Reader::new("size 640 480; tags [red green];").unwrap();
//!
//! assert_eq!(reader.value::<u32>("size", 2), Some(480));
//! let tags = reader.value::<&textreader_core::Line>("tags", 1).unwrap();
//! assert_eq!(tags.len(), 2);
//! ```

pub use config::*;
pub use error::*;
pub use parser::*;
pub use position::*;
pub use reader::*;
pub use symbols::Expected;
pub use symbols::Punct;
pub use tree::*;
pub use value::FromItem;

pub mod config;
#[allow(unused_assignments)]
mod error;
mod parser;
mod position;
mod reader;
pub(crate) mod scanner;
pub(crate) mod symbols;
mod tree;
pub mod value;

#[cfg(test)]
mod __fixtures;

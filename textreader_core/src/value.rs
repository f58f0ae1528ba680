//! Conversions from parsed [`Item`]s into concrete values.
//!
//! Every conversion returns `None` when the item has the wrong shape, e.g.
//! asking a bracketed list for an integer. Numeric conversions are lenient:
//! text that is not a number reads as zero, and text with a numeric prefix
//! (`12px`) reads as that prefix.

use crate::Block;
use crate::Item;
use crate::Line;

/// Types that can be read out of an [`Item`].
pub trait FromItem<'a>: Sized {
	fn from_item(item: &'a Item) -> Option<Self>;
}

impl<'a> FromItem<'a> for &'a Block {
	fn from_item(item: &'a Item) -> Option<Self> {
		item.as_block()
	}
}

impl<'a> FromItem<'a> for &'a Line {
	fn from_item(item: &'a Item) -> Option<Self> {
		item.as_line()
	}
}

impl<'a> FromItem<'a> for &'a str {
	fn from_item(item: &'a Item) -> Option<Self> {
		item.as_str()
	}
}

impl FromItem<'_> for String {
	fn from_item(item: &Item) -> Option<Self> {
		item.as_str().map(ToOwned::to_owned)
	}
}

impl FromItem<'_> for bool {
	fn from_item(item: &Item) -> Option<Self> {
		let value = match item.as_str()? {
			"true" => true,
			"false" => false,
			text => parse_int(text) != 0,
		};

		Some(value)
	}
}

impl FromItem<'_> for char {
	fn from_item(item: &Item) -> Option<Self> {
		item.as_str()?.chars().next()
	}
}

macro_rules! impl_from_item_int {
	($($ty:ty),* $(,)?) => {
		$(
			impl FromItem<'_> for $ty {
				fn from_item(item: &Item) -> Option<Self> {
					let value = parse_int(item.as_str()?);
					Some(<$ty>::try_from(value).unwrap_or(if value < 0 { <$ty>::MIN } else { <$ty>::MAX }))
				}
			}
		)*
	};
}

impl_from_item_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl FromItem<'_> for f32 {
	fn from_item(item: &Item) -> Option<Self> {
		Some(float_prefix(item.as_str()?).parse().unwrap_or(0.0))
	}
}

impl FromItem<'_> for f64 {
	fn from_item(item: &Item) -> Option<Self> {
		Some(float_prefix(item.as_str()?).parse().unwrap_or(0.0))
	}
}

/// Leading whitespace accepted before a number, matching C's `isspace`.
fn is_number_space(ch: char) -> bool {
	matches!(ch, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

/// Split an optional leading sign off `text`.
fn split_sign(text: &str) -> (bool, &str) {
	if let Some(rest) = text.strip_prefix('-') {
		(true, rest)
	} else {
		(false, text.strip_prefix('+').unwrap_or(text))
	}
}

fn digit_count(text: &str) -> usize {
	text.bytes().take_while(u8::is_ascii_digit).count()
}

/// Parse the leading integer of `text`. Returns `0` when there are no digits
/// and saturates at the bounds of `i128`.
pub fn parse_int(text: &str) -> i128 {
	let (negative, rest) = split_sign(text.trim_start_matches(is_number_space));
	let magnitude = rest
		.bytes()
		.take_while(u8::is_ascii_digit)
		.fold(0_i128, |acc, digit| {
			acc.saturating_mul(10).saturating_add(i128::from(digit - b'0'))
		});

	if negative { -magnitude } else { magnitude }
}

/// The longest prefix of `text` that reads as a decimal float, after leading
/// whitespace. `inf`, `infinity` and `nan` are recognised in any case. Returns
/// an empty string when no prefix is numeric.
pub fn float_prefix(text: &str) -> &str {
	let text = text.trim_start_matches(is_number_space);
	let (_, unsigned) = split_sign(text);
	let sign_len = text.len() - unsigned.len();

	for word in ["infinity", "inf", "nan"] {
		let matches_word = unsigned
			.get(..word.len())
			.is_some_and(|head| head.eq_ignore_ascii_case(word));

		if matches_word {
			return &text[..sign_len + word.len()];
		}
	}

	let integer = digit_count(unsigned);
	let mut end = integer;
	let mut fraction = 0;

	if unsigned[end..].starts_with('.') {
		fraction = digit_count(&unsigned[end + 1..]);
		if integer > 0 || fraction > 0 {
			end += 1 + fraction;
		}
	}

	if integer == 0 && fraction == 0 {
		return "";
	}

	let exponent = &unsigned[end..];
	if exponent.starts_with(['e', 'E']) {
		let (_, digits) = split_sign(&exponent[1..]);
		let exponent_digits = digit_count(digits);
		if exponent_digits > 0 {
			end += exponent.len() - digits.len() + exponent_digits;
		}
	}

	&text[..sign_len + end]
}

/// Returns `true` for characters allowed inside a token.
///
/// Letters, the digits `0-9` and `_` are kept, everything else ends the token.
/// Letter-like numerals (`Ⅻ`) are alphabetic and numeric at once and are
/// refused, as are superscripts and fractions (`²`, `½`).
fn is_token_char(c: char) -> bool {
	c == '_' || c.is_ascii_digit() || (c.is_alphabetic() && !c.is_numeric())
}

/// Case-folds a raw word the same way corpus chunks are folded.
///
/// Only the case changes: punctuation is kept, so `"Hello!"` becomes `"hello!"`.
pub fn fold_case(word: &str) -> String {
	word.to_lowercase()
}

/// Normalizes one space-delimited chunk into a token.
///
/// - Lowercases the chunk.
/// - Returns `None` if the first character is not a letter, digit or `_`.
/// - Otherwise keeps the longest leading run of token characters.
///
/// Examples:
/// - `"Hello,"` → `Some("hello")`
/// - `"don't"` → `Some("don")`
/// - `"(quoted)"` → `None`
fn normalize_chunk(chunk: &str) -> Option<String> {
	let token: String = fold_case(chunk).chars().take_while(|c| is_token_char(*c)).collect();
	if token.is_empty() { None } else { Some(token) }
}

/// Splits one line of raw text into normalized tokens.
///
/// Only the literal space character separates chunks; consecutive spaces
/// collapse. Tabs and carriage returns are ordinary content and therefore
/// end a token like any other punctuation.
///
/// The returned iterator borrows the line and can be recreated at will.
pub fn tokenize(line: &str) -> impl Iterator<Item = String> + '_ {
	line.split(' ')
		.filter(|chunk| !chunk.is_empty())
		.filter_map(normalize_chunk)
}

/// Builds the corpus token stream: the tokens of every line, in order.
pub fn tokenize_lines<I, S>(lines: I) -> impl Iterator<Item = String>
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	lines
		.into_iter()
		.flat_map(|line| tokenize(line.as_ref()).collect::<Vec<_>>())
}

//! # Spelling bee
//!
//! Herein is the subset search: enumerate every dictionary word built solely
//! from an optional letter set, where every letter of a smaller required
//! subset must appear at least once. Letters may repeat, so the search is
//! bounded only by the trie's depth.

use std::collections::BTreeSet;

use crate::{
	dictionary::{decode, Token},
	trie::{NodeId, Trie}
};

////////////////////////////////////////////////////////////////////////////////
//                                  Scoring.                                  //
////////////////////////////////////////////////////////////////////////////////

/// The bonus for a pangram, i.e., a word using every optional letter.
pub const PANGRAM_BONUS: u32 = 7;

/// Compute the score of a word. Words shorter than 4 letters score nothing;
/// otherwise a word scores one point per letter beyond its first three, plus
/// the pangram bonus if it uses every optional letter.
///
/// # Arguments
///
/// * `word` - The word to score.
/// * `optional` - The full optional letter set.
///
/// # Returns
///
/// The score.
#[must_use]
pub fn score(word: &str, optional: &BTreeSet<Token>) -> u32
{
	let length = word.chars().count();
	if length < 4
	{
		return 0
	}
	let used = crate::dictionary::letters(word);
	let mut points = (length - 3) as u32;
	if optional.is_subset(&used)
	{
		points += PANGRAM_BONUS;
	}
	points
}

////////////////////////////////////////////////////////////////////////////////
//                                  Search.                                   //
////////////////////////////////////////////////////////////////////////////////

/// A single solution: a word and its score. Words shorter than 4 letters are
/// emitted with a zero score; filtering them out is the caller's business.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct Find
{
	/// The word.
	pub word: String,

	/// The score of the word, per [`score`].
	pub score: u32
}

/// The complete context of a subset search. Lazy, with an explicit stack
/// frontier like the grid engines.
#[must_use]
pub struct Search<'a>
{
	/// The dictionary trie.
	trie: &'a Trie<Token>,

	/// The optional letters, including the required ones.
	optional: BTreeSet<Token>,

	/// The required letters.
	required: BTreeSet<Token>,

	/// The frontier of partial words, each paired with the trie node reached
	/// by its letters.
	frontier: Vec<(Vec<Token>, NodeId)>
}

/// Search for every dictionary word built solely from the optional letters
/// and containing every required letter.
///
/// # Arguments
///
/// * `trie` - The dictionary trie.
/// * `optional` - The optional letters. The required letters are included
///   automatically.
/// * `required` - The required letters.
///
/// # Returns
///
/// A lazy iterator of solutions.
pub fn solve<'a>(
	trie: &'a Trie<Token>,
	optional: BTreeSet<Token>,
	required: BTreeSet<Token>
) -> Search<'a>
{
	let mut optional = optional;
	optional.extend(required.iter().copied());

	// Seed the search with every optional letter that begins a word.
	let mut frontier = Vec::new();
	for &letter in &optional
	{
		if let Some(node) = trie.child(trie.root(), letter)
		{
			frontier.push((vec![letter], node));
		}
	}
	Search
	{
		trie,
		optional,
		required,
		frontier
	}
}

impl Iterator for Search<'_>
{
	type Item = Find;

	fn next(&mut self) -> Option<Find>
	{
		while let Some((letters, node)) = self.frontier.pop()
		{
			// Extend with any optional letter that has a matching trie
			// child; letters may repeat, unlike the grid engines.
			for &letter in &self.optional
			{
				if let Some(child) = self.trie.child(node, letter)
				{
					let mut extended = letters.clone();
					extended.push(letter);
					self.frontier.push((extended, child));
				}
			}

			if self.trie.is_terminal(node)
				&& self
					.required
					.iter()
					.all(|letter| letters.contains(letter))
			{
				let word = decode(&letters);
				let score = score(&word, &self.optional);
				return Some(Find { word, score })
			}
		}
		None
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use std::collections::HashMap;

	use crate::{
		dictionary::{letters, Dictionary, Tokenizer},
		spellingbee::solve
	};

	/// Run a search and collect its results into a word → score map.
	fn run(
		words: &[&str],
		optional: &str,
		required: &str
	) -> HashMap<String, u32>
	{
		let dictionary =
			Dictionary::from_lines(words.iter().copied(), Tokenizer::Letters);
		solve(dictionary.trie(), letters(optional), letters(required))
			.map(|find| (find.word, find.score))
			.collect()
	}

	/// With every letter optional, only the required letter discriminates.
	#[test]
	fn test_all_required()
	{
		let got = run(&["do", "dog", "dig"], "dogi", "g");
		let expected =
			HashMap::from([("dog".to_string(), 0), ("dig".to_string(), 0)]);
		assert_eq!(got, expected);
	}

	/// With no required letters, the optional subset alone discriminates.
	#[test]
	fn test_only_optional()
	{
		let got = run(&["do", "dog", "dig"], "dog", "");
		let expected =
			HashMap::from([("do".to_string(), 0), ("dog".to_string(), 0)]);
		assert_eq!(got, expected);
	}

	/// Both constraints together: only `dog` survives.
	#[test]
	fn test_optional_and_required()
	{
		let got = run(&["do", "dog", "dig"], "dog", "g");
		let expected = HashMap::from([("dog".to_string(), 0)]);
		assert_eq!(got, expected);
	}

	/// One point per letter beyond three, and the pangram bonus for using
	/// the whole optional set.
	#[test]
	fn test_scoring()
	{
		let got = run(
			&["a", "ab", "abc", "abcd", "abcde", "abcdef"],
			"abcdef",
			"a"
		);
		let expected = HashMap::from([
			("a".to_string(), 0),
			("ab".to_string(), 0),
			("abc".to_string(), 0),
			("abcd".to_string(), 1),
			("abcde".to_string(), 2),
			("abcdef".to_string(), 10)
		]);
		assert_eq!(got, expected);
	}

	/// Letters may repeat within a word. `noon` also happens to use the
	/// whole optional set, earning the pangram bonus.
	#[test]
	fn test_repeats()
	{
		let got = run(&["noon", "moon"], "no", "o");
		let expected = HashMap::from([("noon".to_string(), 8)]);
		assert_eq!(got, expected);
	}
}

//! # Wordiply
//!
//! Herein is the stem-containment solver: given a starter stem, find the
//! longest dictionary words containing it. The heavy lifting is the trie's
//! infix [`search`](crate::trie::Trie::search), which locates the stem at
//! every position inside stored words.

use crate::{
	dictionary::{decode, Token},
	trie::Trie
};

////////////////////////////////////////////////////////////////////////////////
//                                  Search.                                   //
////////////////////////////////////////////////////////////////////////////////

/// Enumerate every dictionary word containing the given stem, in unspecified
/// order. A word containing the stem more than once appears once per
/// occurrence; callers wanting distinct words should deduplicate.
///
/// # Arguments
///
/// * `trie` - The dictionary trie.
/// * `stem` - The stem to locate.
///
/// # Returns
///
/// A lazy iterator of containing words.
pub fn containing<'a>(
	trie: &'a Trie<Token>,
	stem: &'a [Token]
) -> impl Iterator<Item = String> + 'a
{
	trie.search(stem).flat_map(move |(prefix, node)| {
		// A word ending exactly at the stem has an empty suffix.
		let exact = if trie.is_terminal(node)
		{
			Some(assemble(&prefix, stem, &[]))
		}
		else
		{
			None
		};
		let longer = trie
			.prefixes_from(node)
			.filter(move |&(_, descendant)| trie.is_terminal(descendant))
			.map(move |(suffix, _)| assemble(&prefix, stem, &suffix));
		exact.into_iter().chain(longer)
	})
}

/// Stitch a containing word back together from its parts.
fn assemble(prefix: &[Token], stem: &[Token], suffix: &[Token]) -> String
{
	let mut word = decode(prefix);
	word.push_str(&decode(stem));
	word.push_str(&decode(suffix));
	word
}

/// Find the longest dictionary words containing the given stem.
///
/// # Arguments
///
/// * `trie` - The dictionary trie.
/// * `stem` - The stem to locate.
/// * `count` - The maximum number of words to answer.
///
/// # Returns
///
/// Up to `count` distinct words, longest first, ties broken alphabetically.
#[must_use]
pub fn solve(trie: &Trie<Token>, stem: &[Token], count: usize)
	-> Vec<String>
{
	let mut words = containing(trie, stem).collect::<Vec<_>>();
	words.sort();
	words.dedup();
	words.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
	words.truncate(count);
	words
}

/// Total the letters across the answered words. This is the secondary score
/// of a Wordiply round.
///
/// # Arguments
///
/// * `words` - The answered words.
///
/// # Returns
///
/// The letter total.
#[inline]
#[must_use]
pub fn letters(words: &[String]) -> usize
{
	words.iter().map(|word| word.chars().count()).sum()
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use std::collections::HashSet;

	use crate::{
		dictionary::{Dictionary, Tokenizer},
		wordiply::{containing, letters, solve}
	};

	/// Build the test dictionary and tokenize the stem.
	fn fixture() -> Dictionary
	{
		Dictionary::from_lines(
			["play", "playful", "display", "misplay", "lay", "plays"],
			Tokenizer::Letters
		)
	}

	/// Containment finds the stem at the start, in the middle, and as the
	/// entire word.
	#[test]
	fn test_containing()
	{
		let dictionary = fixture();
		let stem = Tokenizer::Letters.tokenize("play").unwrap();
		let got = containing(dictionary.trie(), &stem)
			.collect::<HashSet<_>>();
		let expected = ["play", "playful", "display", "misplay", "plays"]
			.map(String::from);
		assert_eq!(got, HashSet::from_iter(expected));
	}

	/// The longest words come first, ties alphabetically, capped at the
	/// requested count.
	#[test]
	fn test_solve()
	{
		let dictionary = fixture();
		let stem = Tokenizer::Letters.tokenize("play").unwrap();
		let got = solve(dictionary.trie(), &stem, 3);
		assert_eq!(
			got,
			vec![
				"display".to_string(),
				"misplay".to_string(),
				"playful".to_string()
			]
		);
		assert_eq!(letters(&got), 21);

		let all = solve(dictionary.trie(), &stem, 10);
		assert_eq!(
			all,
			vec![
				"display".to_string(),
				"misplay".to_string(),
				"playful".to_string(),
				"plays".to_string(),
				"play".to_string()
			]
		);
	}
}

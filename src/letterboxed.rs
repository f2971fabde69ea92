//! # Letter boxed
//!
//! Herein is the edge-chain solver. The puzzle supplies a handful of edges
//! (sides of a box, each a set of letters); a playable word draws consecutive
//! letters from different edges, and a winning chain of words collectively
//! uses every letter of every edge, with each word starting on the letter the
//! previous word ended with.
//!
//! The solver runs in three stages: extract every playable word by a
//! trie-guided traversal of the edge symbols, arrange the words into a
//! directed last-letter/first-letter adjacency graph, and then search chains
//! shortest-first over a priority-ordered frontier, pruning chains longer
//! than the best solution found so far.

use std::{
	cmp::{Ordering, Reverse},
	collections::{BTreeSet, BinaryHeap, HashSet}
};

use log::{debug, trace};

use crate::{
	dictionary::{decode, Token},
	trie::{NodeId, Trie}
};

////////////////////////////////////////////////////////////////////////////////
//                                 Edge sets.                                 //
////////////////////////////////////////////////////////////////////////////////

/// A playable word, as the sequence of (edge index, symbol) pairs that spell
/// it. Consecutive entries never share an edge.
pub type EdgeWord = Vec<(usize, Token)>;

/// Decode an [`EdgeWord`] into its literal word.
///
/// # Arguments
///
/// * `word` - The edge word.
///
/// # Returns
///
/// The decoded word.
#[must_use]
pub fn decode_word(word: &EdgeWord) -> String
{
	let tokens = word.iter().map(|&(_, token)| token).collect::<Vec<_>>();
	decode(&tokens)
}

/// The edges of a puzzle instance, indexed by position. Fixed for the
/// lifetime of a search.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct EdgeSet
{
	/// The edges, each a set of symbols.
	edges: Vec<BTreeSet<Token>>
}

impl EdgeSet
{
	/// Construct an edge set from the given edges.
	pub fn new(edges: Vec<BTreeSet<Token>>) -> Self
	{
		Self { edges }
	}

	/// Construct an edge set from groups of letters, one group per edge.
	///
	/// # Arguments
	///
	/// * `groups` - The letter groups.
	///
	/// # Returns
	///
	/// The edge set.
	pub fn from_groups<T: AsRef<str>>(groups: &[T]) -> Self
	{
		Self
		{
			edges: groups
				.iter()
				.map(|group| crate::dictionary::letters(group.as_ref()))
				.collect()
		}
	}

	/// Get the number of edges.
	#[inline]
	#[must_use]
	pub fn len(&self) -> usize { self.edges.len() }

	/// Check if the edge set has no edges.
	#[inline]
	#[must_use]
	pub fn is_empty(&self) -> bool { self.edges.is_empty() }

	/// Extract every trie key playable on this edge set: a key is playable
	/// iff each of its symbols appears on some edge and no two consecutive
	/// symbols use the same edge.
	///
	/// # Arguments
	///
	/// * `trie` - The dictionary trie.
	///
	/// # Returns
	///
	/// A lazy iterator of playable words.
	pub fn words<'a>(&'a self, trie: &'a Trie<Token>) -> Words<'a>
	{
		let mut frontier = Vec::new();
		for (edge, symbols) in self.edges.iter().enumerate()
		{
			for &symbol in symbols
			{
				if let Some(node) = trie.child(trie.root(), symbol)
				{
					frontier.push((vec![(edge, symbol)], node));
				}
			}
		}
		Words
		{
			trie,
			edges: self,
			frontier
		}
	}

	/// Check whether the given words collectively use every symbol of every
	/// edge.
	///
	/// # Arguments
	///
	/// * `words` - The words of a candidate chain.
	///
	/// # Returns
	///
	/// `true` iff the per-edge sets of used symbols equal the edges
	/// themselves.
	fn covers<'a, I>(&self, words: I) -> bool
	where
		I: IntoIterator<Item = &'a EdgeWord>
	{
		let mut used = vec![BTreeSet::new(); self.edges.len()];
		for word in words
		{
			for &(edge, token) in word
			{
				used[edge].insert(token);
			}
		}
		used == self.edges
	}
}

/// The lazy word-extraction traversal created by [`EdgeSet::words`]. The
/// frontier is an explicit stack over the edge symbols, pruned by the trie.
#[must_use]
pub struct Words<'a>
{
	/// The dictionary trie.
	trie: &'a Trie<Token>,

	/// The edge set under traversal.
	edges: &'a EdgeSet,

	/// The frontier of partial words, each paired with the trie node reached
	/// by its symbols.
	frontier: Vec<(EdgeWord, NodeId)>
}

impl Iterator for Words<'_>
{
	type Item = EdgeWord;

	fn next(&mut self) -> Option<EdgeWord>
	{
		while let Some((word, node)) = self.frontier.pop()
		{
			// The frontier never carries an empty word.
			let (last_edge, _) = *word.last().unwrap();

			// Extend with every symbol of every other edge that has a
			// matching trie child. The same edge may not be used twice in a
			// row.
			for (edge, symbols) in self.edges.edges.iter().enumerate()
			{
				if edge == last_edge
				{
					continue
				}
				for &symbol in symbols
				{
					if let Some(child) = self.trie.child(node, symbol)
					{
						let mut extended = word.clone();
						extended.push((edge, symbol));
						self.frontier.push((extended, child));
					}
				}
			}

			if self.trie.is_terminal(node)
			{
				return Some(word)
			}
		}
		None
	}
}

////////////////////////////////////////////////////////////////////////////////
//                               Chain search.                                //
////////////////////////////////////////////////////////////////////////////////

/// A frontier entry of the chain search. Ordered by chain length, ties broken
/// by insertion sequence, so the frontier dequeues shortest chains first in
/// first-in-first-out order.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Pending
{
	/// The chain length, in words.
	depth: usize,

	/// The insertion sequence number.
	sequence: u64,

	/// The chain, as indices into the extracted word list.
	chain: Vec<usize>
}

impl Ord for Pending
{
	fn cmp(&self, other: &Self) -> Ordering
	{
		(self.depth, self.sequence).cmp(&(other.depth, other.sequence))
	}
}

impl PartialOrd for Pending
{
	#[inline]
	fn partial_cmp(&self, other: &Self) -> Option<Ordering>
	{
		Some(self.cmp(other))
	}
}

/// The complete context of a chain search. Lazy: solutions are produced in
/// discovery order as the caller iterates, and dropping the search abandons
/// the remaining frontier.
#[must_use]
pub struct ChainSearch<'a>
{
	/// The edge set under search.
	edges: &'a EdgeSet,

	/// The extracted playable words. One-symbol words are excluded, as they
	/// cannot advance a chain.
	words: Vec<EdgeWord>,

	/// The adjacency lists: `adjacent[i]` holds every `j` such that word `j`
	/// starts with the symbol word `i` ends with.
	adjacent: Vec<Vec<usize>>,

	/// The frontier, a min-heap keyed by chain length.
	frontier: BinaryHeap<Reverse<Pending>>,

	/// The next insertion sequence number.
	sequence: u64,

	/// The length of the best solution found so far, in words.
	best: Option<usize>,

	/// The decoded chains already emitted.
	seen: HashSet<Vec<String>>,

	/// How many solutions have been emitted.
	emitted: usize,

	/// The maximum chain length, in words. Non-positive means unbounded.
	max_words: i32,

	/// The maximum number of solutions to emit. Non-positive means
	/// unbounded.
	max_solutions: i32
}

/// Search for minimal-length chains of playable words that collectively use
/// every symbol of every edge.
///
/// # Arguments
///
/// * `trie` - The dictionary trie.
/// * `edges` - The puzzle's edge set.
/// * `max_words` - The maximum chain length, in words. Non-positive means
///   unbounded.
/// * `max_solutions` - The maximum number of solutions to emit. Non-positive
///   means unbounded.
///
/// # Returns
///
/// A lazy iterator of solution chains, each decoded to its literal words, in
/// discovery order. Chains that decode identically are emitted once.
pub fn solve<'a>(
	trie: &Trie<Token>,
	edges: &'a EdgeSet,
	max_words: i32,
	max_solutions: i32
) -> ChainSearch<'a>
{
	// One-symbol words cannot advance a chain, so they are excluded from the
	// graph entirely.
	let words = edges
		.words(trie)
		.filter(|word| word.len() > 1)
		.collect::<Vec<_>>();
	debug!("extracted {} playable words", words.len());

	let adjacent = words
		.iter()
		.map(|prev| {
			// Word indices are never empty, checked by the filter above.
			let (_, last) = *prev.last().unwrap();
			words
				.iter()
				.enumerate()
				.filter(|(_, next)| next[0].1 == last)
				.map(|(index, _)| index)
				.collect()
		})
		.collect::<Vec<Vec<usize>>>();

	let mut frontier = BinaryHeap::new();
	let mut sequence = 0;
	for index in 0..words.len()
	{
		frontier.push(Reverse(Pending {
			depth: 1,
			sequence,
			chain: vec![index]
		}));
		sequence += 1;
	}

	ChainSearch
	{
		edges,
		words,
		adjacent,
		frontier,
		sequence,
		best: None,
		seen: HashSet::new(),
		emitted: 0,
		max_words,
		max_solutions
	}
}

impl Iterator for ChainSearch<'_>
{
	type Item = Vec<String>;

	fn next(&mut self) -> Option<Vec<String>>
	{
		if self.max_solutions > 0
			&& self.emitted >= self.max_solutions as usize
		{
			return None
		}
		while let Some(Reverse(pending)) = self.frontier.pop()
		{
			let chain = pending.chain;

			// Never search beyond the best solution length found so far.
			// Chains of equal length remain eligible, as the word list may
			// admit several minimal solutions.
			if let Some(best) = self.best
			{
				if chain.len() > best
				{
					continue
				}
			}

			let solved =
				self.edges.covers(chain.iter().map(|&i| &self.words[i]));

			// Extend the chain unless it has reached the length cap.
			if !(self.max_words > 0
				&& chain.len() >= self.max_words as usize)
			{
				// Chains on the frontier are never empty.
				let &last = chain.last().unwrap();
				for &next in &self.adjacent[last]
				{
					let mut extended = chain.clone();
					extended.push(next);
					self.frontier.push(Reverse(Pending {
						depth: extended.len(),
						sequence: self.sequence,
						chain: extended
					}));
					self.sequence += 1;
				}
			}

			if solved
			{
				self.best = Some(chain.len());
				let decoded = chain
					.iter()
					.map(|&i| decode_word(&self.words[i]))
					.collect::<Vec<_>>();
				trace!("solution: {:?}", decoded);
				if self.seen.insert(decoded.clone())
				{
					self.emitted += 1;
					return Some(decoded)
				}
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
	use std::collections::HashSet;

	use crate::{
		dictionary::{Dictionary, Token, Tokenizer},
		letterboxed::{solve, EdgeSet, EdgeWord}
	};

	/// Shorthand for an edge-word literal.
	fn word(pairs: &[(usize, &str)]) -> EdgeWord
	{
		pairs
			.iter()
			.map(|&(edge, symbol)| (edge, Token::from(symbol)))
			.collect()
	}

	/// Word extraction honors both the edge membership rule and the
	/// no-consecutive-same-edge rule. `twit` is unplayable because `w`
	/// appears on no edge; `tat` is playable only one way.
	#[test]
	fn test_words()
	{
		let dictionary = Dictionary::from_lines(
			["it", "hit", "at", "hat", "tat", "twit"],
			Tokenizer::Letters
		);
		let edges = EdgeSet::from_groups(&["hti", "iat"]);
		let got =
			edges.words(dictionary.trie()).collect::<HashSet<_>>();
		let expected = [
			word(&[(0, "i"), (1, "t")]),
			word(&[(1, "i"), (0, "t")]),
			word(&[(0, "h"), (1, "i"), (0, "t")]),
			word(&[(1, "a"), (0, "t")]),
			word(&[(0, "h"), (1, "a"), (0, "t")]),
			word(&[(0, "t"), (1, "a"), (0, "t")])
		];
		assert_eq!(got, HashSet::from_iter(expected));
	}

	/// The reference fixture: both minimal 3-word chains are found, chains
	/// longer than the minimum are pruned, and nothing else is emitted.
	#[test]
	fn test_solve()
	{
		let dictionary = Dictionary::from_lines(
			["hit", "ton", "none", "hi", "it", "on", "to", "non", "one"],
			Tokenizer::Letters
		);
		let edges = EdgeSet::from_groups(&["htn", "ioe"]);
		let got = solve(dictionary.trie(), &edges, 5, -1)
			.collect::<HashSet<_>>();
		let expected = [
			vec![
				"hit".to_string(),
				"to".to_string(),
				"one".to_string()
			],
			vec![
				"hit".to_string(),
				"ton".to_string(),
				"none".to_string()
			]
		];
		assert_eq!(got, HashSet::from_iter(expected));
	}

	/// A positive solution cap stops the search early.
	#[test]
	fn test_max_solutions()
	{
		let dictionary = Dictionary::from_lines(
			["hit", "ton", "none", "hi", "it", "on", "to", "non", "one"],
			Tokenizer::Letters
		);
		let edges = EdgeSet::from_groups(&["htn", "ioe"]);
		let got =
			solve(dictionary.trie(), &edges, 5, 1).collect::<Vec<_>>();
		assert_eq!(got.len(), 1);
		assert_eq!(got[0].len(), 3);
	}
}

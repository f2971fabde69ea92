//! # Boggle
//!
//! Herein is the free-roaming grid word search. A solution is a self-avoiding
//! walk over 8-adjacent cells whose concatenated tokens spell a dictionary
//! word. The search is an explicit-stack depth-first traversal guided by the
//! trie: a branch dies the instant the next cell has no matching trie child.
//!
//! The same word found along different paths is emitted once per path, by
//! design; merging duplicates is the caller's business.

use log::debug;

use crate::{
	dictionary::{decode, Token},
	grid::{Coord, Grid},
	trie::{NodeId, Trie}
};

////////////////////////////////////////////////////////////////////////////////
//                                  Search.                                   //
////////////////////////////////////////////////////////////////////////////////

/// A single solution: a word, the path that spells it, and its score.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct Find
{
	/// The decoded word.
	pub word: String,

	/// The path that spells the word, in order.
	pub path: Vec<Coord>,

	/// The score of the word, per [`score`].
	pub score: u32
}

/// Compute the score of a word by its character length. Words shorter than 3
/// characters score nothing.
///
/// # Arguments
///
/// * `word` - The word to score.
///
/// # Returns
///
/// The score.
#[must_use]
pub fn score(word: &str) -> u32
{
	match word.chars().count()
	{
		0..=2 => 0,
		3 | 4 => 1,
		5 => 2,
		6 => 3,
		7 => 5,
		_ => 11
	}
}

/// The complete context of a Boggle search. The frontier is explicit, so the
/// search is lazy: results are produced one at a time as the caller iterates,
/// and dropping the search abandons the remaining frontier.
#[must_use]
pub struct Search<'a>
{
	/// The dictionary trie.
	trie: &'a Trie<Token>,

	/// The puzzle grid.
	grid: &'a Grid,

	/// The frontier of partial paths, each paired with the trie node reached
	/// by its tokens.
	frontier: Vec<(Vec<Coord>, NodeId)>
}

/// Search the given grid for every (word, path) pair.
///
/// # Arguments
///
/// * `trie` - The dictionary trie. Its alphabet must be tokenized
///   consistently with the grid.
/// * `grid` - The puzzle grid.
///
/// # Returns
///
/// A lazy iterator of solutions.
pub fn solve<'a>(trie: &'a Trie<Token>, grid: &'a Grid) -> Search<'a>
{
	// Seed the search with one entry per cell whose token begins a word.
	let mut frontier = Vec::new();
	for coord in grid.coords()
	{
		if let Some(token) = grid.get(coord)
		{
			if let Some(node) = trie.child(trie.root(), token)
			{
				frontier.push((vec![coord], node));
			}
		}
	}
	Search { trie, grid, frontier }
}

impl Search<'_>
{
	/// Decode the word spelled by the given path.
	fn word(&self, path: &[Coord]) -> String
	{
		let tokens = path
			.iter()
			.filter_map(|&coord| self.grid.get(coord))
			.collect::<Vec<_>>();
		decode(&tokens)
	}
}

impl Iterator for Search<'_>
{
	type Item = Find;

	fn next(&mut self) -> Option<Find>
	{
		while let Some((path, node)) = self.frontier.pop()
		{
			// The frontier never carries an empty path.
			let last = *path.last().unwrap();

			// Extend the search with every unused adjacent cell whose token
			// has a matching trie child. Emission does not terminate the
			// branch: a word may be the prefix of a longer word.
			for (coord, token) in self.grid.adjacent(last)
			{
				if path.contains(&coord)
				{
					continue
				}
				if let Some(child) = self.trie.child(node, token)
				{
					let mut extended = path.clone();
					extended.push(coord);
					self.frontier.push((extended, child));
				}
			}

			if self.trie.is_terminal(node)
			{
				let word = self.word(&path);
				let score = score(&word);
				debug!("found word: {}", word);
				return Some(Find { word, path, score })
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
		boggle::{score, solve},
		dictionary::{Dictionary, Tokenizer},
		grid::{Coord, Grid}
	};

	/// Shorthand for a path literal.
	fn path(coords: &[(usize, usize)]) -> Vec<Coord>
	{
		coords.iter().map(|&(x, y)| Coord::new(x, y)).collect()
	}

	/// The reference fixture: `{dog, dig, dug}` against a 4×4 grid must
	/// yield exactly 7 (word, path) pairs, including the same word along
	/// different paths.
	#[test]
	fn test_solve()
	{
		let dictionary =
			Dictionary::from_lines(["dog", "dig", "dug"], Tokenizer::Letters);
		let grid = Grid::from_rows(
			&["dogi", "iugi", "iiii", "dgii"],
			Tokenizer::Letters
		)
		.unwrap();
		let found = solve(dictionary.trie(), &grid)
			.map(|find| (find.word, find.path))
			.collect::<HashSet<_>>();
		let expected = [
			("dog".to_string(), path(&[(0, 0), (1, 0), (2, 0)])),
			("dog".to_string(), path(&[(0, 0), (1, 0), (2, 1)])),
			("dug".to_string(), path(&[(0, 0), (1, 1), (2, 1)])),
			("dug".to_string(), path(&[(0, 0), (1, 1), (2, 0)])),
			("dig".to_string(), path(&[(0, 3), (0, 2), (1, 3)])),
			("dig".to_string(), path(&[(0, 3), (1, 2), (1, 3)])),
			("dig".to_string(), path(&[(0, 3), (1, 2), (2, 1)]))
		];
		assert_eq!(found, HashSet::from_iter(expected));
	}

	/// No emitted path ever revisits a cell, even on a board where every
	/// cell extends every other.
	#[test]
	fn test_no_repeated_coordinate()
	{
		let dictionary = Dictionary::from_lines(
			["aaa", "aaaa", "aaaaa"],
			Tokenizer::Letters
		);
		let grid =
			Grid::from_rows(&["aaa", "aaa", "aaa"], Tokenizer::Letters)
				.unwrap();
		let mut emitted = 0;
		for find in solve(dictionary.trie(), &grid)
		{
			let distinct = find.path.iter().collect::<HashSet<_>>();
			assert_eq!(distinct.len(), find.path.len(), "{:?}", find.path);
			emitted += 1;
		}
		assert!(emitted > 0);
	}

	/// A `qu` die face matches as one atomic symbol but scores as two
	/// characters.
	#[test]
	fn test_qu_tile()
	{
		let dictionary =
			Dictionary::from_lines(["quiz"], Tokenizer::QuTile);
		let grid = Grid::from_rows(&["qui", "zk"], Tokenizer::QuTile)
			.unwrap();
		let found = solve(dictionary.trie(), &grid).collect::<Vec<_>>();
		assert_eq!(found.len(), 1);
		assert_eq!(found[0].word, "quiz");
		assert_eq!(found[0].path, path(&[(0, 0), (1, 0), (0, 1)]));
		assert_eq!(found[0].score, 1);
	}

	/// The scoring table.
	#[test]
	fn test_score()
	{
		assert_eq!(score(""), 0);
		assert_eq!(score("at"), 0);
		assert_eq!(score("cat"), 1);
		assert_eq!(score("cart"), 1);
		assert_eq!(score("carts"), 2);
		assert_eq!(score("devout"), 3);
		assert_eq!(score("devours"), 5);
		assert_eq!(score("devoured"), 11);
		assert_eq!(score("razzmatazz"), 11);
	}
}

//! # Word search
//!
//! Herein is the straight-line grid word search. Unlike [Boggle](crate::boggle),
//! each path commits to one of the 8 compass directions at its first step and
//! holds it for the rest of the word, modeling classic word-search puzzles.
//!
//! The same physical placement of a word can be reached redundantly from
//! several seeds, so results are deduplicated by path; distinct placements of
//! the same word remain distinct solutions.

use std::collections::HashSet;

use log::debug;

use crate::{
	dictionary::{decode, Token},
	grid::{Coord, Grid, DIRECTIONS},
	trie::{NodeId, Trie}
};

////////////////////////////////////////////////////////////////////////////////
//                                  Search.                                   //
////////////////////////////////////////////////////////////////////////////////

/// A single solution: a word and the straight path that spells it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct Find
{
	/// The decoded word.
	pub word: String,

	/// The path that spells the word, in order.
	pub path: Vec<Coord>
}

/// The complete context of a straight-line word search. Lazy, like every
/// engine in this crate: the frontier is an explicit stack consumed as the
/// caller iterates.
#[must_use]
pub struct Search<'a>
{
	/// The dictionary trie.
	trie: &'a Trie<Token>,

	/// The puzzle grid.
	grid: &'a Grid,

	/// The frontier of partial paths, each paired with its fixed direction
	/// and the trie node reached by its tokens.
	frontier: Vec<(Vec<Coord>, (i32, i32), NodeId)>,

	/// The paths already emitted.
	seen: HashSet<Vec<Coord>>
}

/// Search the given grid for every word placed along a straight line.
///
/// # Arguments
///
/// * `trie` - The dictionary trie.
/// * `grid` - The puzzle grid.
///
/// # Returns
///
/// A lazy iterator of solutions, deduplicated by path.
pub fn solve<'a>(trie: &'a Trie<Token>, grid: &'a Grid) -> Search<'a>
{
	// Seed the search with one entry per (cell, direction) pair whose token
	// begins a word.
	let mut frontier = Vec::new();
	for coord in grid.coords()
	{
		if let Some(token) = grid.get(coord)
		{
			if let Some(node) = trie.child(trie.root(), token)
			{
				for direction in DIRECTIONS
				{
					frontier.push((vec![coord], direction, node));
				}
			}
		}
	}
	Search
	{
		trie,
		grid,
		frontier,
		seen: HashSet::new()
	}
}

impl Iterator for Search<'_>
{
	type Item = Find;

	fn next(&mut self) -> Option<Find>
	{
		while let Some((path, direction, node)) = self.frontier.pop()
		{
			// The frontier never carries an empty path.
			let last = *path.last().unwrap();

			// The branch continues only in its own direction, and ends at the
			// grid boundary or on a trie miss.
			if let Some(coord) = self.grid.step(last, direction)
			{
				if let Some(token) = self.grid.get(coord)
				{
					if let Some(child) = self.trie.child(node, token)
					{
						let mut extended = path.clone();
						extended.push(coord);
						self.frontier.push((extended, direction, child));
					}
				}
			}

			if self.trie.is_terminal(node) && self.seen.insert(path.clone())
			{
				let tokens = path
					.iter()
					.filter_map(|&coord| self.grid.get(coord))
					.collect::<Vec<_>>();
				let word = decode(&tokens);
				debug!("found word: {} at {:?}", word, path);
				return Some(Find { word, path })
			}
		}
		None
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

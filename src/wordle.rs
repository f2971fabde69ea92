//! # Wordle
//!
//! Herein is the guess evaluator and the accumulated-knowledge filter for
//! Wordle-style puzzles. The evaluator is a pure function from an (answer,
//! guess) pair to per-position marks; it does not use the trie.

use std::{
	collections::{HashMap, HashSet},
	error::Error,
	fmt::{self, Display, Formatter}
};

////////////////////////////////////////////////////////////////////////////////
//                                Evaluation.                                 //
////////////////////////////////////////////////////////////////////////////////

/// The verdict for one guess position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark
{
	/// The symbol does not occur in the answer (or every occurrence is
	/// already accounted for).
	No,

	/// The symbol occurs in the answer, but at a different position.
	Present,

	/// The symbol occurs in the answer at exactly this position.
	Exact
}

impl Display for Mark
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		match self
		{
			Self::No => write!(f, "."),
			Self::Present => write!(f, "?"),
			Self::Exact => write!(f, "!")
		}
	}
}

/// The guess and the answer differ in length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizeMismatchError
{
	/// The length of the answer.
	pub answer: usize,

	/// The length of the guess.
	pub guess: usize
}

impl Display for SizeMismatchError
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		write!(
			f,
			"guess size {} != answer size {}",
			self.guess, self.answer
		)
	}
}

impl Error for SizeMismatchError {}

/// Evaluate a guess against an answer, producing one [`Mark`] per position.
///
/// A single left-to-right pass over the guess consumes a multiset of the
/// answer's symbols: an exact match always consumes its own symbol, and a
/// misplaced symbol earns [`Present`](Mark::Present) only while unconsumed
/// occurrences remain. Guessing a doubled letter against an answer holding
/// one occurrence therefore marks only one of the pair.
///
/// # Arguments
///
/// * `answer` - The hidden answer.
/// * `guess` - The guess.
///
/// # Returns
///
/// The marks, one per position.
///
/// # Errors
///
/// [`SizeMismatchError`] if the guess and answer differ in length.
pub fn evaluate(
	answer: &str,
	guess: &str
) -> Result<Vec<Mark>, SizeMismatchError>
{
	let answer = answer.chars().collect::<Vec<_>>();
	let guess = guess.chars().collect::<Vec<_>>();
	if answer.len() != guess.len()
	{
		return Err(SizeMismatchError {
			answer: answer.len(),
			guess: guess.len()
		})
	}
	let mut remaining = HashMap::<char, usize>::new();
	for &c in &answer
	{
		*remaining.entry(c).or_insert(0) += 1;
	}
	let mut marks = Vec::with_capacity(guess.len());
	for (i, &c) in guess.iter().enumerate()
	{
		let count = remaining.entry(c).or_insert(0);
		let available = *count > 0;
		if available
		{
			*count -= 1;
		}
		marks.push(
			if c == answer[i] { Mark::Exact }
			else if available { Mark::Present }
			else { Mark::No }
		);
	}
	Ok(marks)
}

////////////////////////////////////////////////////////////////////////////////
//                                   Facts.                                   //
////////////////////////////////////////////////////////////////////////////////

/// Accumulated knowledge about the answer, usable as an immutable filter
/// predicate over candidate words.
#[derive(Clone, Debug, Default)]
#[must_use]
pub struct Facts
{
	/// The minimum required occurrence count per symbol.
	pub pos: HashMap<char, usize>,

	/// The symbols forbidden at each position.
	pub no: HashMap<usize, HashSet<char>>
}

impl Facts
{
	/// Check whether the given word is still a possible answer.
	///
	/// # Arguments
	///
	/// * `word` - The candidate word.
	///
	/// # Returns
	///
	/// `false` if any forbidden symbol appears at its forbidden position, or
	/// if any required minimum occurrence count is not met; `true` otherwise.
	#[must_use]
	pub fn possible(&self, word: &str) -> bool
	{
		for (i, c) in word.chars().enumerate()
		{
			if self.no.get(&i).is_some_and(|symbols| symbols.contains(&c))
			{
				return false
			}
		}
		let mut counts = HashMap::<char, usize>::new();
		for c in word.chars()
		{
			*counts.entry(c).or_insert(0) += 1;
		}
		self.pos
			.iter()
			.all(|(c, &minimum)| {
				counts.get(c).copied().unwrap_or(0) >= minimum
			})
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use std::collections::{HashMap, HashSet};

	use crate::wordle::{evaluate, Facts, Mark, SizeMismatchError};

	use Mark::{Exact, No, Present};

	/// A correct guess is all exact.
	#[test]
	fn test_correct()
	{
		assert_eq!(
			evaluate("hello", "hello").unwrap(),
			vec![Exact; 5]
		);
	}

	/// Repeated guess letters consume answer occurrences left to right: only
	/// one of the doubled `e`s in `wheel` is present in `latte`.
	#[test]
	fn test_repeat_present()
	{
		assert_eq!(
			evaluate("latte", "wheel").unwrap(),
			vec![No, No, Present, No, Present]
		);
	}

	/// A guess sharing no letters with the answer is all no.
	#[test]
	fn test_none()
	{
		assert_eq!(
			evaluate("youth", "earls").unwrap(),
			vec![No; 5]
		);
	}

	/// Misplaced letters are present.
	#[test]
	fn test_present()
	{
		assert_eq!(
			evaluate("solar", "rails").unwrap(),
			vec![Present, Present, No, Present, Present]
		);
	}

	/// A guess of the wrong length is a size mismatch, not a partial
	/// evaluation.
	#[test]
	fn test_size_mismatch()
	{
		assert_eq!(
			evaluate("hello", "he"),
			Err(SizeMismatchError { answer: 5, guess: 2 })
		);
	}

	/// `pos` is a minimum occurrence requirement: a word meeting or
	/// exceeding the minimum passes, a word short of it fails.
	#[test]
	fn test_facts_minimum_counts()
	{
		let facts = Facts
		{
			pos: HashMap::from([('s', 2)]),
			..Default::default()
		};
		assert!(facts.possible("soups"));
		assert!(facts.possible("sassy"));
		assert!(!facts.possible("sound"));
	}

	/// A symbol forbidden at a position rules out any word carrying it
	/// there, but not elsewhere.
	#[test]
	fn test_facts_forbidden_positions()
	{
		let facts = Facts
		{
			no: HashMap::from([(4, HashSet::from(['s']))]),
			..Default::default()
		};
		assert!(!facts.possible("soups"));
		assert!(facts.possible("spout"));
	}

	/// With no knowledge, everything is possible.
	#[test]
	fn test_facts_empty()
	{
		assert!(Facts::default().possible("soups"));
	}
}

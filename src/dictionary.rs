//! # Dictionary
//!
//! Herein is support for dictionary construction. A dictionary is built once,
//! fully, before any search begins: lines are trimmed, lowercased, tokenized
//! into [`Token`] sequences, and bulk-inserted into a [`Trie`]. Entries that
//! cannot be tokenized are skipped and counted, never fatal.

use std::{
	collections::BTreeSet,
	error::Error,
	fmt::{self, Display, Formatter},
	fs::File,
	io::{self, BufRead, BufReader},
	path::Path
};

use fixedstr::str8;
use log::warn;

use crate::trie::Trie;

////////////////////////////////////////////////////////////////////////////////
//                                  Tokens.                                   //
////////////////////////////////////////////////////////////////////////////////

/// The atomic symbol of every puzzle alphabet: a short fixed string, which
/// accommodates multi-letter tokens such as `qu` while remaining `Copy`.
pub type Token = str8;

/// Make a single-character token.
///
/// # Arguments
///
/// * `c` - The character.
///
/// # Returns
///
/// The corresponding token.
#[inline]
#[must_use]
pub fn token(c: char) -> Token
{
	let mut buffer = [0u8; 4];
	Token::from(&*c.encode_utf8(&mut buffer))
}

/// Concatenate a token sequence back into a word.
///
/// # Arguments
///
/// * `tokens` - The token sequence.
///
/// # Returns
///
/// The decoded word.
#[must_use]
pub fn decode(tokens: &[Token]) -> String
{
	let mut word = String::new();
	for token in tokens
	{
		word.push_str(token.as_str());
	}
	word
}

/// Collect the distinct single-character tokens of a word, e.g., for use as a
/// spelling-bee letter set.
///
/// # Arguments
///
/// * `word` - The word.
///
/// # Returns
///
/// The set of distinct tokens.
#[must_use]
pub fn letters(word: &str) -> BTreeSet<Token>
{
	word.chars().map(token).collect()
}

////////////////////////////////////////////////////////////////////////////////
//                                Tokenizers.                                 //
////////////////////////////////////////////////////////////////////////////////

/// A policy for splitting a word into [`Token`]s. The trie's alphabet must be
/// pre-normalized consistently with the puzzle's alphabet, so the same
/// tokenizer must be used for the dictionary and the puzzle definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tokenizer
{
	/// Every character is its own token.
	Letters,

	/// Like [`Letters`](Self::Letters), except that `q` consumes the
	/// following `u` into a single `qu` token, matching the Boggle die face.
	/// A `q` not followed by `u` cannot be represented on the board.
	QuTile
}

impl Tokenizer
{
	/// Split the given word into tokens.
	///
	/// # Arguments
	///
	/// * `word` - The word to tokenize.
	///
	/// # Returns
	///
	/// The token sequence.
	///
	/// # Errors
	///
	/// [`InvalidTokenError`] if the word contains a character combination
	/// that this tokenizer cannot represent.
	pub fn tokenize(&self, word: &str) -> Result<Vec<Token>, InvalidTokenError>
	{
		match self
		{
			Self::Letters => Ok(word.chars().map(token).collect()),
			Self::QuTile =>
			{
				let mut tokens = Vec::new();
				let mut chars = word.chars();
				while let Some(c) = chars.next()
				{
					if c == 'q'
					{
						match chars.next()
						{
							Some('u') => tokens.push(Token::from("qu")),
							_ => return Err(InvalidTokenError {
								word: word.to_string()
							})
						}
					}
					else
					{
						tokens.push(token(c));
					}
				}
				Ok(tokens)
			}
		}
	}
}

/// A word contains a character combination that the tokenizer cannot
/// represent, e.g., a `q` not followed by `u` under the Qu-tile rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidTokenError
{
	/// The offending word.
	pub word: String
}

impl Display for InvalidTokenError
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		write!(f, "impossible token in {:?}: 'q' without 'u'", self.word)
	}
}

impl Error for InvalidTokenError {}

////////////////////////////////////////////////////////////////////////////////
//                                Dictionary.                                 //
////////////////////////////////////////////////////////////////////////////////

/// A dictionary is a [`Trie`] of tokenized words, together with a count of
/// source entries that had to be skipped during loading.
#[derive(Clone, Debug)]
#[must_use]
pub struct Dictionary
{
	/// The trie of tokenized words.
	trie: Trie<Token>,

	/// How many source entries were skipped as untokenizable.
	skipped: usize
}

impl Dictionary
{
	/// Build a dictionary from the given lines, one candidate word per line.
	/// Lines are trimmed and lowercased; blank lines are ignored; lines that
	/// cannot be tokenized are skipped and counted.
	///
	/// # Arguments
	///
	/// * `lines` - The candidate words.
	/// * `tokenizer` - The tokenization policy.
	///
	/// # Returns
	///
	/// The populated dictionary.
	pub fn from_lines<I, T>(lines: I, tokenizer: Tokenizer) -> Self
	where
		I: IntoIterator<Item = T>,
		T: AsRef<str>
	{
		let mut trie = Trie::new();
		let mut skipped = 0;
		for line in lines
		{
			let word = line.as_ref().trim().to_lowercase();
			if word.is_empty()
			{
				continue
			}
			match tokenizer.tokenize(&word)
			{
				Ok(tokens) => trie.insert(&tokens),
				Err(e) =>
				{
					warn!("skipping dictionary entry: {}", e);
					skipped += 1;
				}
			}
		}
		Self { trie, skipped }
	}

	/// Build a dictionary from the contents of the given file, one candidate
	/// word per line.
	///
	/// # Arguments
	///
	/// * `path` - The target file.
	/// * `tokenizer` - The tokenization policy.
	///
	/// # Returns
	///
	/// The populated dictionary.
	///
	/// # Errors
	///
	/// If the file cannot be opened or read, an error is returned.
	pub fn read_from_file<T: AsRef<Path>>(
		path: T,
		tokenizer: Tokenizer
	) -> Result<Self, io::Error>
	{
		let file = File::open(path)?;
		let reader = BufReader::new(file);
		let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
		Ok(Self::from_lines(lines, tokenizer))
	}

	/// Get the underlying trie.
	#[inline]
	pub fn trie(&self) -> &Trie<Token> { &self.trie }

	/// Get the number of stored words.
	#[inline]
	#[must_use]
	pub fn words(&self) -> usize { self.trie.count() }

	/// Get the number of trie nodes.
	#[inline]
	#[must_use]
	pub fn nodes(&self) -> usize { self.trie.size() }

	/// Get the number of source entries skipped as untokenizable.
	#[inline]
	#[must_use]
	pub fn skipped(&self) -> usize { self.skipped }

	/// Check if the dictionary is empty.
	#[inline]
	#[must_use]
	pub fn is_empty(&self) -> bool { self.trie.is_empty() }

	/// Check if the dictionary contains the given word, under the tokenizer
	/// used to build it.
	///
	/// # Arguments
	///
	/// * `word` - The word to check.
	/// * `tokenizer` - The tokenization policy.
	///
	/// # Returns
	///
	/// `true` if the dictionary contains the word, `false` otherwise.
	#[must_use]
	pub fn contains(&self, word: &str, tokenizer: Tokenizer) -> bool
	{
		match tokenizer.tokenize(word)
		{
			Ok(tokens) => self.trie.contains(&tokens),
			Err(_) => false
		}
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

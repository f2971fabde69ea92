//! # Wordplay
//!
//! A command line front end for the word-puzzle solvers: Boggle-style grid
//! search, straight-line word search, letter-boxed chains, spelling bee,
//! Wordle guess evaluation, and Wordiply stem containment.
//!
//! Every puzzle but Wordle loads a dictionary (one word per line) into a
//! trie before solving. Loading progress and skipped-entry counts go to
//! standard error; solutions go to standard output.

use clap::{Parser, Subcommand};
use log::debug;

use wordplay::{
	boggle,
	dictionary::{Dictionary, Tokenizer},
	grid::{Coord, Grid},
	letterboxed::{self, EdgeSet},
	spellingbee,
	wordiply,
	wordle,
	wordsearch
};

////////////////////////////////////////////////////////////////////////////////
//                           Command line options.                            //
////////////////////////////////////////////////////////////////////////////////

/// CLI for solving word puzzles.
#[derive(Clone, Debug, Parser)]
#[command(version = "1.0")]
struct Opts
{
	/// The path to the dictionary file, one word per line.
	#[arg(short = 'd', long, default_value = "dict/english.txt")]
	dictionary: String,

	#[command(subcommand)]
	command: Command
}

/// The subcommands of the CLI, one per puzzle.
#[derive(Clone, Debug, Subcommand)]
enum Command
{
	/// Find every word on a Boggle board, one result per (word, path) pair,
	/// highest scores first. Rows are equal-length strings; a `qu` counts as
	/// one cell.
	Boggle
	{
		/// The rows of the board, top to bottom.
		#[arg(required = true)]
		rows: Vec<String>
	},

	/// Find every straight-line word placement on a word-search board, each
	/// physical placement reported once.
	Wordsearch
	{
		/// The rows of the board, top to bottom.
		#[arg(required = true)]
		rows: Vec<String>
	},

	/// Find minimal chains of words covering every letter of every edge,
	/// where each word starts with the letter the previous word ended with.
	Letterboxed
	{
		/// The maximum chain length, in words. Non-positive means unbounded.
		#[arg(short = 'w', long, default_value = "0")]
		max_words: i32,

		/// The maximum number of solutions. Non-positive means unbounded.
		#[arg(short = 'o', long, default_value = "1")]
		max_solutions: i32,

		/// The edges, one group of letters per side.
		#[arg(required = true)]
		edges: Vec<String>
	},

	/// Find every word spellable from the optional letters that uses every
	/// required letter, highest scores first.
	Spellingbee
	{
		/// The optional letters.
		optional: String,

		/// The required letters.
		#[arg(default_value = "")]
		required: String
	},

	/// Evaluate a Wordle guess against an answer. Prints one mark per
	/// position: `!` exact, `?` present, `.` no.
	Wordle
	{
		/// The hidden answer.
		answer: String,

		/// The guess.
		guess: String
	},

	/// Find the longest dictionary words containing a starter stem.
	Wordiply
	{
		/// The maximum number of words to report.
		#[arg(short = 'c', long, default_value = "5")]
		count: usize,

		/// The starter stem.
		stem: String
	}
}

////////////////////////////////////////////////////////////////////////////////
//                               Main program.                                //
////////////////////////////////////////////////////////////////////////////////

/// Parse the command line options and execute the appropriate subcommand.
fn main()
{
	env_logger::init();
	let opts = Opts::parse();
	debug!("Command line options: {:?}", opts);

	match opts.command
	{
		Command::Boggle { rows } =>
		{
			let dictionary = load(&opts.dictionary, Tokenizer::QuTile);
			let grid = Grid::from_rows(&rows, Tokenizer::QuTile)
				.unwrap_or_else(|e| panic!("Bad board: {}", e));
			let mut finds =
				boggle::solve(dictionary.trie(), &grid).collect::<Vec<_>>();
			finds.sort_by(|a, b| b.score.cmp(&a.score));
			for find in finds
			{
				println!(
					"{} {} {}",
					find.word,
					format_path(&find.path),
					find.score
				);
			}
		},
		Command::Wordsearch { rows } =>
		{
			let dictionary = load(&opts.dictionary, Tokenizer::Letters);
			let grid = Grid::from_rows(&rows, Tokenizer::Letters)
				.unwrap_or_else(|e| panic!("Bad board: {}", e));
			for find in wordsearch::solve(dictionary.trie(), &grid)
			{
				println!("{} {}", find.word, format_path(&find.path));
			}
		},
		Command::Letterboxed { max_words, max_solutions, edges } =>
		{
			let dictionary = load(&opts.dictionary, Tokenizer::Letters);
			let edges = EdgeSet::from_groups(&edges);
			let chains = letterboxed::solve(
				dictionary.trie(),
				&edges,
				max_words,
				max_solutions
			);
			for chain in chains
			{
				println!("{}", chain.join(" "));
			}
		},
		Command::Spellingbee { optional, required } =>
		{
			let dictionary = load(&opts.dictionary, Tokenizer::Letters);
			let mut finds = spellingbee::solve(
				dictionary.trie(),
				wordplay::dictionary::letters(&optional),
				wordplay::dictionary::letters(&required)
			)
			.collect::<Vec<_>>();
			finds.sort_by(|a, b| b.score.cmp(&a.score));
			for find in finds
			{
				println!("{} {}", find.word, find.score);
			}
		},
		Command::Wordle { answer, guess } =>
		{
			let marks = wordle::evaluate(&answer, &guess)
				.unwrap_or_else(|e| panic!("Bad guess: {}", e));
			let line = marks
				.iter()
				.map(ToString::to_string)
				.collect::<String>();
			println!("{}", line);
		},
		Command::Wordiply { count, stem } =>
		{
			let dictionary = load(&opts.dictionary, Tokenizer::Letters);
			let stem = Tokenizer::Letters
				.tokenize(&stem.trim().to_lowercase())
				.unwrap_or_else(|e| panic!("Bad stem: {}", e));
			let words = wordiply::solve(dictionary.trie(), &stem, count);
			for word in &words
			{
				println!("{} {}", word, word.chars().count());
			}
			println!("({})", wordiply::letters(&words));
		}
	}
}

/// Load the dictionary, reporting progress and data-quality statistics to
/// standard error.
///
/// # Arguments
///
/// * `path` - The path to the dictionary file.
/// * `tokenizer` - The tokenization policy for the target puzzle.
///
/// # Returns
///
/// The populated dictionary.
fn load(path: &str, tokenizer: Tokenizer) -> Dictionary
{
	eprint!("loading dictionary...");
	let dictionary = Dictionary::read_from_file(path, tokenizer)
		.unwrap_or_else(|e| panic!("Failed to read dictionary {}: {}", path, e));
	eprintln!(
		" ok ({} words, {} nodes, {} skipped)",
		dictionary.words(),
		dictionary.nodes(),
		dictionary.skipped()
	);
	dictionary
}

/// Render a path as a space-separated list of coordinates.
///
/// # Arguments
///
/// * `path` - The path to render.
///
/// # Returns
///
/// The rendered path.
fn format_path(path: &[Coord]) -> String
{
	path.iter()
		.map(ToString::to_string)
		.collect::<Vec<_>>()
		.join(" ")
}

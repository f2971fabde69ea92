//! # Wordplay
//!
//! A family of word-puzzle solvers sharing one foundation: a prefix tree
//! ([`trie`]) answering membership and prefix queries over opaque symbol
//! sequences. Each solver is a trie-guided backtracking search over its
//! puzzle's combinatorial space, driven by an explicit iterative frontier
//! rather than call-stack recursion, and surfaced as a lazy iterator the
//! caller consumes at its own pace.
//!
//! The solvers:
//!
//! * [`boggle`] - free-roaming 8-adjacent grid search, one emission per
//!   (word, path) pair.
//! * [`wordsearch`] - straight-line grid search with a fixed direction per
//!   path, deduplicated by path.
//! * [`letterboxed`] - edge-chain search for minimal word chains covering
//!   every letter of every edge.
//! * [`spellingbee`] - subset search over optional/required letter sets.
//! * [`wordle`] - guess evaluation and candidate filtering; the one solver
//!   that needs no trie.
//! * [`wordiply`] - longest words containing a starter stem.
//!
//! Dictionaries are loaded once, fully, before any search begins; see
//! [`dictionary`].

pub mod boggle;
pub mod dictionary;
pub mod grid;
pub mod letterboxed;
pub mod spellingbee;
pub mod trie;
pub mod wordiply;
pub mod wordle;
pub mod wordsearch;

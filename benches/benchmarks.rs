use criterion::{measurement::Measurement, BenchmarkGroup, Criterion};

use wordplay::{
	boggle,
	dictionary::{Dictionary, Tokenizer},
	grid::Grid,
	letterboxed::{self, EdgeSet}
};

/// A small but branchy word list, enough to exercise the trie and the
/// engines without external files.
#[inline]
#[must_use]
const fn words() -> &'static [&'static str]
{
	&[
		"be", "bed", "bet", "dig", "dog", "dug", "easy", "hi", "hit", "it",
		"non", "none", "okay", "on", "one", "queen", "quiz", "should",
		"this", "to", "ton", "toned", "tone", "net", "ten", "tend", "node",
		"done", "dent", "send", "end", "ends", "dose", "nose", "note",
		"notes", "stone", "onset", "tenon", "tenet"
	]
}

/// Benchmark building a dictionary trie from lines.
///
/// # Arguments
///
/// * `g` - The benchmark group.
fn bench_build_dictionary<M: Measurement>(g: &mut BenchmarkGroup<M>)
{
	g.bench_function("build_dictionary", |b| {
		b.iter(|| Dictionary::from_lines(words(), Tokenizer::Letters));
	});
}

/// Benchmark solving a Boggle board.
///
/// # Arguments
///
/// * `g` - The benchmark group.
fn bench_boggle<M: Measurement>(g: &mut BenchmarkGroup<M>)
{
	let dictionary = Dictionary::from_lines(words(), Tokenizer::Letters);
	let grid = Grid::from_rows(
		&["dons", "etoe", "ndns", "seot"],
		Tokenizer::Letters
	)
	.unwrap();
	g.bench_function("boggle", |b| {
		b.iter(|| boggle::solve(dictionary.trie(), &grid).count());
	});
}

/// Benchmark solving a letter-boxed puzzle.
///
/// # Arguments
///
/// * `g` - The benchmark group.
fn bench_letterboxed<M: Measurement>(g: &mut BenchmarkGroup<M>)
{
	let dictionary = Dictionary::from_lines(words(), Tokenizer::Letters);
	let edges = EdgeSet::from_groups(&["htn", "ioe"]);
	g.bench_function("letterboxed", |b| {
		b.iter(|| {
			letterboxed::solve(dictionary.trie(), &edges, 5, -1).count()
		});
	});
}

/// Run all of the benchmarks.
fn main()
{
	let mut criterion = Criterion::default().configure_from_args();
	let mut group = criterion.benchmark_group("benchmarks");
	bench_build_dictionary(&mut group);
	bench_boggle(&mut group);
	bench_letterboxed(&mut group);
	group.finish();
	criterion.final_summary();
}

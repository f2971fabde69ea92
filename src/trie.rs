//! # Trie
//!
//! Herein is the prefix tree that underpins every solver in the crate. The
//! trie stores keys as sequences of opaque symbols and answers membership and
//! prefix queries in O(depth). The search engines use [`Trie::child`] as
//! their pruning primitive: a search branch is abandoned the instant the next
//! symbol has no corresponding child.
//!
//! The nodes live in an arena indexed by [`NodeId`], so the structure is a
//! strict tree without shared ownership or cycles, and size queries are
//! trivial.

use std::{collections::HashMap, hash::Hash};

////////////////////////////////////////////////////////////////////////////////
//                                   Trie.                                    //
////////////////////////////////////////////////////////////////////////////////

/// A handle to a node of a [`Trie`]. Handles are only meaningful to the trie
/// that issued them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct NodeId(usize);

/// One node of a [`Trie`], representing a single prefix. The node is terminal
/// iff the prefix ending here is itself a complete stored key.
#[derive(Clone, Debug)]
struct Node<S>
{
	/// Whether the prefix ending at this node is a complete stored key.
	terminal: bool,

	/// The children of this node, keyed by symbol.
	children: HashMap<S, NodeId>
}

impl<S> Node<S>
{
	/// Construct an empty nonterminal node.
	#[inline]
	fn empty() -> Self
	{
		Self
		{
			terminal: false,
			children: HashMap::new()
		}
	}
}

/// A prefix tree over sequences of opaque symbols. The empty root always
/// exists; every other node is created on demand by [`insert`](Self::insert).
/// [`remove`](Self::remove) only clears the terminal flag, so the node count
/// grows monotonically over the lifetime of the trie.
#[derive(Clone, Debug)]
#[must_use]
pub struct Trie<S>
{
	/// The node arena. The root is always `nodes[0]`.
	nodes: Vec<Node<S>>
}

impl<S> Trie<S>
where
	S: Copy + Eq + Hash
{
	/// Construct an empty trie, comprising just the root node.
	///
	/// # Returns
	///
	/// An empty trie.
	pub fn new() -> Self
	{
		Self
		{
			nodes: vec![Node::empty()]
		}
	}

	/// Get the handle of the root node.
	#[inline]
	pub fn root(&self) -> NodeId { NodeId(0) }

	/// Insert the given key, creating any missing nodes along the way and
	/// marking the final node terminal. Insertion is idempotent and cannot
	/// fail.
	///
	/// # Arguments
	///
	/// * `key` - The key to insert.
	pub fn insert(&mut self, key: &[S])
	{
		let mut node = self.root();
		for &symbol in key
		{
			node = match self.nodes[node.0].children.get(&symbol)
			{
				Some(&child) => child,
				None =>
				{
					let child = NodeId(self.nodes.len());
					self.nodes.push(Node::empty());
					self.nodes[node.0].children.insert(symbol, child);
					child
				}
			};
		}
		self.nodes[node.0].terminal = true;
	}

	/// Remove the given key by clearing the terminal flag of its final node.
	/// Removal of an absent key is a legal no-op. Nodes are never physically
	/// removed, so [`size`](Self::size) is unaffected.
	///
	/// # Arguments
	///
	/// * `key` - The key to remove.
	pub fn remove(&mut self, key: &[S])
	{
		if let Some(node) = self.descend(key)
		{
			self.nodes[node.0].terminal = false;
		}
	}

	/// Check whether the given key is stored in the trie.
	///
	/// # Arguments
	///
	/// * `key` - The key to check.
	///
	/// # Returns
	///
	/// `true` iff the node reached by following `key` exists and is terminal.
	#[must_use]
	pub fn contains(&self, key: &[S]) -> bool
	{
		match self.descend(key)
		{
			Some(node) => self.is_terminal(node),
			None => false
		}
	}

	/// Follow a single symbol from the given node.
	///
	/// # Arguments
	///
	/// * `from` - The node to descend from.
	/// * `symbol` - The symbol to follow.
	///
	/// # Returns
	///
	/// The child node, or `None` if `from` has no child for `symbol`. A miss
	/// is a normal negative search result, not an error.
	#[inline]
	#[must_use]
	pub fn child(&self, from: NodeId, symbol: S) -> Option<NodeId>
	{
		self.nodes[from.0].children.get(&symbol).copied()
	}

	/// Follow every symbol of `key` from the given node.
	///
	/// # Arguments
	///
	/// * `from` - The node to descend from.
	/// * `key` - The symbols to follow.
	///
	/// # Returns
	///
	/// The node reached by following `key`, or `None` if any step is missing.
	#[must_use]
	pub fn descend_from(&self, from: NodeId, key: &[S]) -> Option<NodeId>
	{
		let mut node = from;
		for &symbol in key
		{
			node = self.child(node, symbol)?;
		}
		Some(node)
	}

	/// Follow every symbol of `key` from the root.
	///
	/// # Arguments
	///
	/// * `key` - The symbols to follow.
	///
	/// # Returns
	///
	/// The node reached by following `key`, or `None` if any step is missing.
	#[inline]
	#[must_use]
	pub fn descend(&self, key: &[S]) -> Option<NodeId>
	{
		self.descend_from(self.root(), key)
	}

	/// Check whether the given node is terminal.
	#[inline]
	#[must_use]
	pub fn is_terminal(&self, node: NodeId) -> bool
	{
		self.nodes[node.0].terminal
	}

	/// Get a lazy iterator over every stored prefix reachable from the given
	/// node, paired with the node that ends it. The starting node itself is
	/// not produced. Order is unspecified.
	///
	/// # Arguments
	///
	/// * `from` - The node whose descendants should be enumerated.
	///
	/// # Returns
	///
	/// An iterator of `(prefix, node)` pairs.
	pub fn prefixes_from(&self, from: NodeId) -> Prefixes<'_, S>
	{
		let stack = self.nodes[from.0]
			.children
			.iter()
			.map(|(&symbol, &child)| (vec![symbol], child))
			.collect();
		Prefixes { trie: self, stack }
	}

	/// Get a lazy iterator over every stored prefix in the trie, paired with
	/// the node that ends it. The empty root prefix is not produced. Order is
	/// unspecified.
	///
	/// # Returns
	///
	/// An iterator of `(prefix, node)` pairs.
	#[inline]
	pub fn prefixes(&self) -> Prefixes<'_, S>
	{
		self.prefixes_from(self.root())
	}

	/// Get a lazy iterator over every stored key.
	///
	/// # Returns
	///
	/// An iterator of keys, in unspecified order.
	pub fn keys(&self) -> impl Iterator<Item = Vec<S>> + '_
	{
		self.prefixes()
			.filter(|&(_, node)| self.is_terminal(node))
			.map(|(prefix, _)| prefix)
	}

	/// For every stored prefix, attempt to descend `key` from the node that
	/// ends it. This finds every occurrence of `key` strictly inside stored
	/// keys; the empty prefix (i.e., the root) is included, so occurrences at
	/// the start of a key are found as well.
	///
	/// # Arguments
	///
	/// * `key` - The infix to locate.
	///
	/// # Returns
	///
	/// An iterator of `(prefix, node)` pairs, where `node` is the node
	/// reached by following `key` from the end of `prefix`.
	pub fn search<'a>(
		&'a self,
		key: &'a [S]
	) -> impl Iterator<Item = (Vec<S>, NodeId)> + 'a
	{
		std::iter::once((Vec::new(), self.root()))
			.chain(self.prefixes())
			.filter_map(move |(prefix, node)| {
				self.descend_from(node, key).map(|landed| (prefix, landed))
			})
	}

	/// Get the total number of nodes, excluding the root. Removal never
	/// shrinks this figure, as dead branches are not compacted.
	///
	/// # Returns
	///
	/// The node count.
	#[inline]
	#[must_use]
	pub fn size(&self) -> usize
	{
		self.nodes.len() - 1
	}

	/// Get the number of stored keys, i.e., the number of terminal nodes.
	///
	/// # Returns
	///
	/// The key count.
	#[must_use]
	pub fn count(&self) -> usize
	{
		self.nodes.iter().filter(|node| node.terminal).count()
	}

	/// Check if the trie stores no keys.
	#[inline]
	#[must_use]
	pub fn is_empty(&self) -> bool
	{
		self.count() == 0
	}

	/// Bulk-construct a trie from the given keys.
	///
	/// # Arguments
	///
	/// * `keys` - The intended content of the trie.
	///
	/// # Returns
	///
	/// A trie containing exactly the given keys, duplicates collapsed.
	pub fn from_keys<I, K>(keys: I) -> Self
	where
		I: IntoIterator<Item = K>,
		K: AsRef<[S]>
	{
		let mut trie = Self::new();
		for key in keys
		{
			trie.insert(key.as_ref());
		}
		trie
	}
}

impl<S> Default for Trie<S>
where
	S: Copy + Eq + Hash
{
	#[inline]
	fn default() -> Self { Self::new() }
}

////////////////////////////////////////////////////////////////////////////////
//                             Prefix iteration.                              //
////////////////////////////////////////////////////////////////////////////////

/// A lazy depth-first traversal of a [`Trie`], carrying an explicit stack of
/// `(prefix, node)` pairs. Created by [`Trie::prefixes`].
#[must_use]
pub struct Prefixes<'a, S>
{
	/// The trie under traversal.
	trie: &'a Trie<S>,

	/// The traversal frontier.
	stack: Vec<(Vec<S>, NodeId)>
}

impl<S> Iterator for Prefixes<'_, S>
where
	S: Copy + Eq + Hash
{
	type Item = (Vec<S>, NodeId);

	fn next(&mut self) -> Option<Self::Item>
	{
		let (prefix, node) = self.stack.pop()?;
		for (&symbol, &child) in &self.trie.nodes[node.0].children
		{
			let mut extended = prefix.clone();
			extended.push(symbol);
			self.stack.push((extended, child));
		}
		Some((prefix, node))
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

//! In-memory dictionary trie.
//!
//! The correction engine walks the dictionary one character edge at a time,
//! keeping a sibling cursor per depth. To make that cursor a bare index,
//! the trie is stored as a flat arena in which every node's children occupy
//! a contiguous run:
//!
//! - [`trie`] -- arena node layout, builder, exact lookup
//! - [`wordlist`] -- plain-text `word<TAB>freq` parsing

pub mod trie;
pub mod wordlist;

pub use trie::{TrieDict, TrieNode};
pub use wordlist::WordlistError;

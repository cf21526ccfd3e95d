// Arena trie with contiguous sibling runs.
//
// Nodes are laid out breadth-first so that the children of any node form a
// contiguous index range [first_child, first_child + child_count). The
// traversal protocol of the correction engine relies on this: a depth's
// sibling cursor is a single index that is incremented across the run.

use std::collections::VecDeque;

use hashbrown::HashMap;

use tapkey_core::enums::MAX_WORD_LENGTH;

/// One character edge of the dictionary trie.
#[derive(Debug, Clone)]
pub struct TrieNode {
    /// The character this edge outputs.
    pub ch: char,
    /// Word frequency when this edge terminates an in-dictionary word.
    pub freq: Option<i32>,
    /// Arena index of the first child, meaningful when `child_count > 0`.
    pub first_child: usize,
    /// Number of children in the contiguous run starting at `first_child`.
    pub child_count: usize,
}

impl TrieNode {
    /// Whether this edge ends an in-dictionary word.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.freq.is_some()
    }
}

// Builder-side node. Children keep insertion order in `children`; the map
// only accelerates the per-character lookup during insertion.
struct BuildNode {
    ch: char,
    freq: Option<i32>,
    children: Vec<usize>,
    child_map: HashMap<char, usize>,
}

impl BuildNode {
    fn new(ch: char) -> Self {
        Self {
            ch,
            freq: None,
            children: Vec::new(),
            child_map: HashMap::new(),
        }
    }
}

/// A dictionary of words with frequencies, stored as a flat arena trie.
#[derive(Debug)]
pub struct TrieDict {
    nodes: Vec<TrieNode>,
    root_count: usize,
    word_count: usize,
}

impl TrieDict {
    /// Build a dictionary from `(word, frequency)` entries.
    ///
    /// Sibling order follows first-insertion order. Empty words and words
    /// longer than [`MAX_WORD_LENGTH`] are skipped; a word inserted twice
    /// keeps the higher frequency.
    pub fn from_entries(entries: &[(&str, i32)]) -> Self {
        let mut arena: Vec<BuildNode> = Vec::new();
        let mut roots: Vec<usize> = Vec::new();
        let mut root_map: HashMap<char, usize> = HashMap::new();
        let mut word_count = 0usize;

        for &(word, freq) in entries {
            let chars: Vec<char> = word.chars().collect();
            if chars.is_empty() || chars.len() > MAX_WORD_LENGTH {
                continue;
            }
            let mut current: Option<usize> = None;
            for &c in &chars {
                let existing = match current {
                    None => root_map.get(&c).copied(),
                    Some(id) => arena[id].child_map.get(&c).copied(),
                };
                let next = match existing {
                    Some(id) => id,
                    None => {
                        let id = arena.len();
                        arena.push(BuildNode::new(c));
                        match current {
                            None => {
                                roots.push(id);
                                root_map.insert(c, id);
                            }
                            Some(p) => {
                                let parent = &mut arena[p];
                                parent.children.push(id);
                                parent.child_map.insert(c, id);
                            }
                        }
                        id
                    }
                };
                current = Some(next);
            }
            let last = current.expect("non-empty word has a final node");
            let node = &mut arena[last];
            if node.freq.is_none() {
                word_count += 1;
            }
            node.freq = Some(node.freq.unwrap_or(i32::MIN).max(freq));
        }

        let (nodes, root_count) = flatten(&arena, &roots);
        Self {
            nodes,
            root_count,
            word_count,
        }
    }

    /// The root sibling run: `(first_child, child_count)`.
    ///
    /// The run always starts at arena index 0.
    #[inline]
    pub fn root(&self) -> (usize, usize) {
        (0, self.root_count)
    }

    /// Access one node by arena index.
    #[inline]
    pub fn node(&self, pos: usize) -> &TrieNode {
        &self.nodes[pos]
    }

    /// Number of distinct words in the dictionary.
    #[inline]
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Total number of trie edges.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Exact lookup of a word, returning its frequency.
    ///
    /// Comparison is exact (no folding); folding is the engine's concern.
    pub fn lookup(&self, word: &[char]) -> Option<i32> {
        if word.is_empty() {
            return None;
        }
        let (mut first, mut count) = self.root();
        let mut found: Option<&TrieNode> = None;
        for &c in word {
            let run = &self.nodes[first..first + count];
            let node = run.iter().find(|n| n.ch == c)?;
            found = Some(node);
            first = node.first_child;
            count = node.child_count;
        }
        found.and_then(|n| n.freq)
    }
}

// Breadth-first flattening: reserve one contiguous run per parent, in queue
// order. The root run lands at the start of the arena.
fn flatten(arena: &[BuildNode], roots: &[usize]) -> (Vec<TrieNode>, usize) {
    let mut nodes: Vec<TrieNode> = Vec::with_capacity(arena.len());
    let mut queue: VecDeque<(usize, usize)> = VecDeque::new();

    for &b in roots {
        let slot = nodes.len();
        nodes.push(placeholder(&arena[b]));
        queue.push_back((b, slot));
    }
    while let Some((b, slot)) = queue.pop_front() {
        let children = &arena[b].children;
        if children.is_empty() {
            continue;
        }
        let first = nodes.len();
        for &k in children {
            let kslot = nodes.len();
            nodes.push(placeholder(&arena[k]));
            queue.push_back((k, kslot));
        }
        nodes[slot].first_child = first;
        nodes[slot].child_count = children.len();
    }
    (nodes, roots.len())
}

fn placeholder(b: &BuildNode) -> TrieNode {
    TrieNode {
        ch: b.ch,
        freq: b.freq,
        first_child: 0,
        child_count: 0,
    }
}

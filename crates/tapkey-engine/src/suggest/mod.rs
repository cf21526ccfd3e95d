// Suggestion driver: walks the dictionary trie with a correction session.
//
// One session per input runs several passes over the trie, each with a
// different correction hint, and feeds every accepted terminal into the
// pool. The walk itself is an explicit-stack DFS: the session's per-depth
// frames hold the trie cursor, so the driver only decides when to descend,
// when to move to a sibling, and when to back up.

mod pool;

pub use pool::{Suggestion, SuggestionPool};

use tapkey_core::enums::MAX_WORD_LENGTH;
use tapkey_trie::TrieDict;

use crate::corrector::Corrector;
use crate::editdist::table_len;
use crate::proximity::ProximityInfo;
use crate::tuning::Tuning;

/// Candidates may grow this factor longer than the input before the depth
/// bound cuts the walk.
const MAX_DEPTH_MULTIPLIER: usize = 2;

/// Generates ranked corrections for a tap sequence from a dictionary.
pub struct Suggester<'d> {
    dict: &'d TrieDict,
    tuning: Tuning,
}

impl<'d> Suggester<'d> {
    pub fn new(dict: &'d TrieDict) -> Self {
        Self::with_tuning(dict, Tuning::default())
    }

    pub fn with_tuning(dict: &'d TrieDict, tuning: Tuning) -> Self {
        Self { dict, tuning }
    }

    /// Produce up to `max_suggestions` corrections for `input`, best first.
    pub fn suggest(
        &self,
        input: &dyn ProximityInfo,
        max_suggestions: usize,
    ) -> Vec<Suggestion> {
        let input_length = input.input_length();
        if input_length == 0 || input_length > MAX_WORD_LENGTH || max_suggestions == 0 {
            return Vec::new();
        }
        let max_depth = (input_length * MAX_DEPTH_MULTIPLIER).min(MAX_WORD_LENGTH - 2);

        let mut corrector = Corrector::new(input, self.tuning);
        corrector.init_correction(input_length, max_depth);
        let mut table = vec![0i32; table_len(input_length, MAX_WORD_LENGTH)];
        let mut pool = SuggestionPool::new(max_suggestions);

        // Unperturbed pass: exact, accent/case, proximity and completion.
        self.run_pass(&mut corrector, &mut table, &mut pool, -1, -1, -1);

        // One pass per hinted single-character correction.
        for i in 0..input_length as i32 {
            self.run_pass(&mut corrector, &mut table, &mut pool, i, -1, -1);
        }
        if input_length >= 2 {
            for i in 0..input_length as i32 - 1 {
                self.run_pass(&mut corrector, &mut table, &mut pool, -1, i, -1);
            }
            for i in 0..input_length as i32 - 1 {
                self.run_pass(&mut corrector, &mut table, &mut pool, -1, -1, i);
            }
        }

        self.add_split_words(&mut corrector, input, &mut pool);

        pool.into_sorted()
    }

    // One correction pass: a full DFS over the trie under the given hints.
    fn run_pass(
        &self,
        corrector: &mut Corrector<'_>,
        table: &mut [i32],
        pool: &mut SuggestionPool,
        skip_pos: i32,
        excessive_pos: i32,
        transposed_pos: i32,
    ) {
        let (root_first, root_count) = self.dict.root();
        if root_count == 0 {
            return;
        }
        corrector.set_correction_params(skip_pos, excessive_pos, transposed_pos, -1, -1);
        corrector.init_correction_state(root_first as i32, root_count as i32, false);

        let mut depth: i32 = 0;
        while depth >= 0 {
            if !corrector.init_process_state(depth as usize) {
                // Siblings exhausted; resume at the parent depth.
                depth = corrector.tree_parent_index(depth as usize);
                continue;
            }
            let pos = corrector.tree_sibling_pos(depth as usize);
            corrector.set_tree_sibling_pos(depth as usize, pos + 1);
            let node = self.dict.node(pos as usize);

            let outcome = corrector.process_char_and_calc_state(node.ch, node.is_terminal());
            if outcome == crate::corrector::EdgeResult::Unrelated {
                continue;
            }
            if outcome.is_terminal_hit() {
                let base_freq = node.freq.unwrap_or(0);
                if let Some(candidate) = corrector.get_final_freq(base_freq, table) {
                    pool.add(candidate.word, candidate.freq);
                }
            }
            if node.child_count > 0 && !corrector.needs_to_prune() {
                depth = corrector.go_down_tree(
                    depth,
                    node.child_count as i32,
                    node.first_child as i32,
                ) as i32;
            }
        }
    }

    // Missing-space candidates: both halves must be words; the split score
    // combines their frequencies.
    fn add_split_words(
        &self,
        corrector: &mut Corrector<'_>,
        input: &dyn ProximityInfo,
        pool: &mut SuggestionPool,
    ) {
        let input_length = input.input_length();
        if input_length < 2 {
            return;
        }
        let typed = input.primary_input_word();
        for split in 1..input_length {
            let first = &typed[..split];
            let second = &typed[split..];
            let (Some(first_freq), Some(second_freq)) =
                (self.dict.lookup(first), self.dict.lookup(second))
            else {
                continue;
            };
            corrector.set_correction_params(-1, -1, -1, -1, split as i32);
            let score = corrector.get_freq_for_split_two_words(first_freq, second_freq);
            if score > 0 {
                let mut pair: Vec<char> = Vec::with_capacity(input_length + 1);
                pair.extend_from_slice(first);
                pair.push(' ');
                pair.extend_from_slice(second);
                pool.add(&pair, score);
            }
        }
    }
}

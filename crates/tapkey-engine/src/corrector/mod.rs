// Traversal co-evaluator.
// Origin: native/src/correction.cpp (Correction)
//
// A `Corrector` walks in lockstep with the dictionary trie. For every edge
// the walker offers (one candidate character), the engine decides whether
// the edge matches a tap, matches a neighboring key, completes or reverts a
// transposition, absorbs an extra tap, or skips a candidate character, and
// classifies the edge accordingly. `Unrelated` tells the walker to abandon
// the branch. State is kept per output depth so the walker can resume at
// any depth without recursion.

mod rank;
mod state;

use tapkey_core::character::QUOTE;
use tapkey_core::enums::{ProximityClass, MAX_WORD_LENGTH, MIN_SUGGEST_DEPTH};

use crate::proximity::ProximityInfo;
use crate::tuning::Tuning;

use state::CorrectionState;

/// Classification of one processed trie edge.
///
/// Origin: correction.cpp (Correction::CorrectionType)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeResult {
    /// The edge cannot explain the input; abandon the subtree.
    Unrelated,
    /// The edge was consumed; no terminal reached.
    NotOnTerminal,
    /// Terminal edge reached with the input fully consumed.
    OnTerminal,
    /// Terminal edge reached while appending completion characters.
    TraverseAllOnTerminal,
    /// Completion character appended; no terminal reached.
    TraverseAllNotOnTerminal,
}

impl EdgeResult {
    /// Whether the walker should score the candidate at this edge.
    #[inline]
    pub fn is_terminal_hit(self) -> bool {
        matches!(self, EdgeResult::OnTerminal | EdgeResult::TraverseAllOnTerminal)
    }
}

/// A scored candidate returned by [`Corrector::get_final_freq`].
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'w> {
    pub word: &'w [char],
    pub freq: i32,
}

/// One correction session: the per-depth frame stack, the candidate buffer
/// and the working state of the current trie branch.
///
/// Origin: correction.cpp (Correction)
pub struct Corrector<'a> {
    pub(crate) proximity: &'a dyn ProximityInfo,
    pub(crate) tuning: Tuning,

    pub(crate) input_length: usize,
    max_depth: usize,
    max_edit_distance: u32,

    // Two-word split hints; session-level only.
    pub(crate) space_proximity_pos: i32,
    pub(crate) missing_space_pos: i32,

    // Working fields of the branch being explored, restored from the frame
    // stack by `init_process_state`.
    input_index: usize,
    output_index: usize,
    needs_to_traverse_all_nodes: bool,
    pub(crate) proximity_count: u32,
    pub(crate) transposed_count: u32,
    pub(crate) excessive_count: u32,
    pub(crate) skipped_count: u32,
    pub(crate) skip_pos: i32,
    pub(crate) excessive_pos: i32,
    pub(crate) transposed_pos: i32,
    pub(crate) last_char_exceeded: bool,
    matching: bool,
    proximity_matching: bool,
    transposing: bool,
    exceeding: bool,
    skipping: bool,

    terminal_input_index: usize,
    terminal_output_index: usize,

    pub(crate) word: [char; MAX_WORD_LENGTH],
    frames: Vec<CorrectionState>,
}

impl<'a> Corrector<'a> {
    /// Origin: correction.cpp:43-45
    pub fn new(proximity: &'a dyn ProximityInfo, tuning: Tuning) -> Self {
        Self {
            proximity,
            tuning,
            input_length: 0,
            max_depth: 0,
            max_edit_distance: 0,
            space_proximity_pos: -1,
            missing_space_pos: -1,
            input_index: 0,
            output_index: 0,
            needs_to_traverse_all_nodes: false,
            proximity_count: 0,
            transposed_count: 0,
            excessive_count: 0,
            skipped_count: 0,
            skip_pos: -1,
            excessive_pos: -1,
            transposed_pos: -1,
            last_char_exceeded: false,
            matching: false,
            proximity_matching: false,
            transposing: false,
            exceeding: false,
            skipping: false,
            terminal_input_index: 0,
            terminal_output_index: 0,
            word: ['\0'; MAX_WORD_LENGTH],
            frames: vec![CorrectionState::default(); MAX_WORD_LENGTH],
        }
    }

    /// Reset the session for a new input.
    ///
    /// `max_depth` bounds the candidate length and must leave one spare
    /// frame, i.e. stay below `MAX_WORD_LENGTH - 1`.
    ///
    /// Origin: correction.cpp:47-53
    pub fn init_correction(&mut self, input_length: usize, max_depth: usize) {
        debug_assert!(max_depth < MAX_WORD_LENGTH - 1);
        self.input_length = input_length;
        self.max_depth = max_depth;
        self.max_edit_distance = if input_length < 5 {
            2
        } else {
            (input_length / 2) as u32
        };
    }

    /// Choose which single-character correction (if any) this walk attempts,
    /// and which split position (if any) split scoring uses.
    ///
    /// At most one of `skip_pos`/`excessive_pos`/`transposed_pos` and at
    /// most one of `space_proximity_pos`/`missing_space_pos` may be set.
    ///
    /// Origin: correction.cpp:64-77
    pub fn set_correction_params(
        &mut self,
        skip_pos: i32,
        excessive_pos: i32,
        transposed_pos: i32,
        space_proximity_pos: i32,
        missing_space_pos: i32,
    ) {
        debug_assert!(
            [skip_pos, excessive_pos, transposed_pos]
                .iter()
                .filter(|&&p| p >= 0)
                .count()
                <= 1
        );
        debug_assert!(!(space_proximity_pos >= 0 && missing_space_pos >= 0));
        self.skip_pos = skip_pos;
        self.excessive_pos = excessive_pos;
        self.transposed_pos = transposed_pos;
        self.frames[0].skip_pos = skip_pos;
        self.frames[0].excessive_pos = excessive_pos;
        self.frames[0].transposed_pos = transposed_pos;
        self.space_proximity_pos = space_proximity_pos;
        self.missing_space_pos = missing_space_pos;
    }

    /// Seed frame 0 with the trie root for a new walk.
    ///
    /// Origin: correction.cpp:55-62
    pub fn init_correction_state(&mut self, root_pos: i32, child_count: i32, traverse_all: bool) {
        self.frames[0].init(root_pos, child_count, traverse_all);
        self.frames[0].skip_pos = self.skip_pos;
        self.frames[0].excessive_pos = self.excessive_pos;
        self.frames[0].transposed_pos = self.transposed_pos;
    }

    /// Prepare to visit the next sibling at `output_index`.
    ///
    /// Returns false when no siblings remain at that depth. Otherwise
    /// consumes one sibling slot, restores the working fields from the
    /// frame and clears the per-edge classification flags.
    ///
    /// Origin: correction.cpp:107-133
    pub fn init_process_state(&mut self, output_index: usize) -> bool {
        if self.frames[output_index].child_count <= 0 {
            return false;
        }
        self.output_index = output_index;
        self.frames[output_index].child_count -= 1;

        let frame = self.frames[output_index];
        self.input_index = frame.input_index;
        self.needs_to_traverse_all_nodes = frame.needs_to_traverse_all_nodes;
        self.proximity_count = frame.proximity_count;
        self.transposed_count = frame.transposed_count;
        self.excessive_count = frame.excessive_count;
        self.skipped_count = frame.skipped_count;
        self.last_char_exceeded = frame.last_char_exceeded;
        self.skip_pos = frame.skip_pos;
        self.excessive_pos = frame.excessive_pos;
        self.transposed_pos = frame.transposed_pos;

        self.matching = false;
        self.proximity_matching = false;
        self.transposing = false;
        self.exceeding = false;
        self.skipping = false;
        true
    }

    /// Record descent bookkeeping in the current frame; returns the new
    /// walk depth.
    ///
    /// Origin: correction.cpp:135-141
    pub fn go_down_tree(&mut self, parent_index: i32, child_count: i32, first_child_pos: i32) -> usize {
        let frame = &mut self.frames[self.output_index];
        frame.parent_index = parent_index;
        frame.child_count = child_count;
        frame.sibling_pos = first_child_pos;
        self.output_index
    }

    /// Trie cursor stored at `depth`.
    #[inline]
    pub fn tree_sibling_pos(&self, depth: usize) -> i32 {
        self.frames[depth].sibling_pos
    }

    /// Advance the trie cursor stored at `depth`.
    #[inline]
    pub fn set_tree_sibling_pos(&mut self, depth: usize, pos: i32) {
        self.frames[depth].sibling_pos = pos;
    }

    /// Depth to resume at once `depth` is exhausted (-1 at the root).
    #[inline]
    pub fn tree_parent_index(&self, depth: usize) -> i32 {
        self.frames[depth].parent_index
    }

    /// Current output depth.
    #[inline]
    pub fn output_index(&self) -> usize {
        self.output_index
    }

    /// Switch the current branch to completion mode: remaining characters
    /// are appended without consuming taps.
    ///
    /// Origin: correction.cpp:188-190
    pub fn start_to_traverse_all_nodes(&mut self) {
        self.needs_to_traverse_all_nodes = true;
    }

    /// Pruning hint for the walker: true once the candidate cannot grow
    /// into an acceptable suggestion (depth bound hit, or too many
    /// proximity substitutions).
    ///
    /// Origin: correction.cpp:192-195
    pub fn needs_to_prune(&self) -> bool {
        let depth_bound = if self.transposed_pos >= 0 {
            self.input_length as i32 - 1
        } else {
            self.max_depth as i32
        };
        self.output_index as i32 - 1 >= depth_bound
            || self.proximity_count > self.max_edit_distance
    }

    // Origin: correction.cpp:34-37
    fn is_quote(&self, c: char) -> bool {
        c == QUOTE && self.proximity.primary_char_at(self.input_index) != QUOTE
    }

    // Origin: correction.cpp:158-160
    fn increment_input_index(&mut self) {
        self.input_index += 1;
    }

    // Publish the working fields into the next frame and move down one
    // depth. The trie bookkeeping carries over until go_down_tree replaces
    // it.
    // Origin: correction.cpp:162-186
    fn increment_output_index(&mut self) {
        self.output_index += 1;
        let prev = self.frames[self.output_index - 1];
        let frame = &mut self.frames[self.output_index];
        frame.parent_index = prev.parent_index;
        frame.child_count = prev.child_count;
        frame.sibling_pos = prev.sibling_pos;
        frame.input_index = self.input_index;
        frame.needs_to_traverse_all_nodes = self.needs_to_traverse_all_nodes;
        frame.proximity_count = self.proximity_count;
        frame.transposed_count = self.transposed_count;
        frame.excessive_count = self.excessive_count;
        frame.skipped_count = self.skipped_count;
        frame.skip_pos = self.skip_pos;
        frame.transposed_pos = self.transposed_pos;
        frame.excessive_pos = self.excessive_pos;
        frame.last_char_exceeded = self.last_char_exceeded;
        frame.matching = self.matching;
        frame.proximity_matching = self.proximity_matching;
        frame.transposing = self.transposing;
        frame.exceeding = self.exceeding;
        frame.skipping = self.skipping;
    }

    /// Emit `c` without consuming a tap.
    ///
    /// Used for apostrophes the user did not type and for completion mode.
    ///
    /// Origin: correction.cpp:197-209
    pub fn process_skip_char(&mut self, c: char, is_terminal: bool) -> EdgeResult {
        self.word[self.output_index] = c;
        if self.needs_to_traverse_all_nodes && is_terminal {
            self.terminal_input_index = self.input_index;
            self.terminal_output_index = self.output_index;
            self.increment_output_index();
            EdgeResult::TraverseAllOnTerminal
        } else {
            self.increment_output_index();
            EdgeResult::TraverseAllNotOnTerminal
        }
    }

    /// Process one trie edge: classify candidate character `c` against the
    /// current tap and update the branch state.
    ///
    /// Origin: correction.cpp:211-340
    pub fn process_char_and_calc_state(&mut self, c: char, is_terminal: bool) -> EdgeResult {
        let mut current_state = EdgeResult::NotOnTerminal;

        // Positional drift: an unused hint that has fallen behind the
        // output catches up one step, staying aligned with the depth the
        // correction would apply at.
        if self.excessive_pos >= 0 {
            if self.excessive_count == 0 && self.excessive_pos < self.output_index as i32 {
                self.excessive_pos += 1;
            }
            if self.excessive_pos < self.input_length as i32 - 1 {
                self.exceeding = self.excessive_pos == self.input_index as i32;
            }
        }

        if self.skip_pos >= 0 {
            if self.skipped_count == 0 && self.skip_pos < self.output_index as i32 {
                debug_assert_eq!(self.skip_pos, self.output_index as i32 - 1);
                self.skip_pos += 1;
            }
            self.skipping = self.skip_pos == self.output_index as i32;
        }

        if self.transposed_pos >= 0 {
            if self.transposed_count == 0 && self.transposed_pos < self.output_index as i32 {
                self.transposed_pos += 1;
            }
            if self.transposed_pos < self.input_length as i32 - 1 {
                self.transposing = self.input_index as i32 == self.transposed_pos;
            }
        }

        if self.needs_to_traverse_all_nodes || self.is_quote(c) {
            return self.process_skip_char(c, is_terminal);
        }

        // Second half of a transposition: the previous edge consumed the
        // next tap, so this edge must produce the tap it stepped over.
        let mut second_transposing = false;
        if self.transposed_count % 2 == 1 {
            if self.proximity.matched_proximity_id(self.input_index - 1, c, false)
                == ProximityClass::Equivalent
            {
                self.transposed_count += 1;
                second_transposing = true;
            } else if self.frames[self.output_index].exceeding {
                // The failed swap re-reads as an extra inserted character.
                self.transposed_count -= 1;
                self.excessive_count += 1;
                self.increment_input_index();
            } else {
                self.transposed_count -= 1;
                return EdgeResult::Unrelated;
            }
        }

        // Near-neighbor matching is only allowed on the otherwise
        // unperturbed branch.
        let check_proximity_chars =
            !(self.skipped_count > 0 || self.excessive_pos >= 0 || self.transposed_pos >= 0);
        let matched_proximity_id =
            self.proximity
                .matched_proximity_id(self.input_index, c, check_proximity_chars);

        if !second_transposing && matched_proximity_id == ProximityClass::Unrelated {
            if (self.exceeding || self.transposing)
                && self.proximity.matched_proximity_id(self.input_index + 1, c, false)
                    == ProximityClass::Equivalent
            {
                // The next tap explains this character: either the swap
                // begins here, or the current tap is the extra one.
                if self.transposing {
                    self.transposed_count += 1;
                } else {
                    self.excessive_count += 1;
                    self.increment_input_index();
                }
            } else if self.skipping && self.proximity_count == 0 {
                // Skip this candidate character and continue deeper.
                self.skipped_count += 1;
                return self.process_skip_char(c, is_terminal);
            } else if check_proximity_chars
                && self.input_index > 0
                && self.frames[self.output_index].proximity_matching
                && self.frames[self.output_index].skipping
                && self.proximity.matched_proximity_id(self.input_index - 1, c, false)
                    == ProximityClass::Equivalent
            {
                // The previous edge took a tap as a proximity hit where a
                // skip reads better, e.g. "contrst" -> "contrast": the "a"
                // neighbors "s" on the grid, but treating it as a skipped
                // letter leaves the "s" to match exactly.
                self.skipped_count += 1;
                self.proximity_count -= 1;
                return self.process_skip_char(c, is_terminal);
            } else {
                return EdgeResult::Unrelated;
            }
        } else if second_transposing || matched_proximity_id == ProximityClass::Equivalent {
            self.matching = true;
        } else if matched_proximity_id == ProximityClass::Near {
            self.proximity_matching = true;
            self.proximity_count += 1;
        }

        self.word[self.output_index] = c;

        self.last_char_exceeded = self.excessive_count == 0
            && self.skipped_count == 0
            && self.proximity_count == 0
            && self.transposed_count == 0
            && self.excessive_pos >= 0
            && self.input_index as i32 == self.input_length as i32 - 2;
        let is_same_as_typed_length =
            self.input_length == self.input_index + 1 || self.last_char_exceeded;
        if self.last_char_exceeded {
            self.excessive_count += 1;
        }
        if is_same_as_typed_length && is_terminal {
            self.terminal_input_index = self.input_index;
            self.terminal_output_index = self.output_index;
            current_state = EdgeResult::OnTerminal;
        }
        // Everything after the last tap is a completion.
        if is_same_as_typed_length {
            self.start_to_traverse_all_nodes();
        }

        self.increment_input_index();
        self.increment_output_index();

        current_state
    }

    /// Score the candidate accepted at the last terminal edge.
    ///
    /// Returns the candidate word and its final frequency, or `None` when
    /// the candidate is rejected (identical to the typed word, too short,
    /// or the branch state fails the ranking preconditions).
    ///
    /// Origin: correction.cpp:94-105
    pub fn get_final_freq<'s>(&'s self, base_freq: i32, table: &mut [i32]) -> Option<Candidate<'s>> {
        let output_index = self.terminal_output_index;
        let input_index = self.terminal_input_index;
        let word = &self.word[..output_index + 1];
        if self.proximity.same_as_typed(word) || (output_index as i32) < MIN_SUGGEST_DEPTH {
            return None;
        }
        let freq = rank::calculate_final_freq(input_index, output_index, base_freq, table, self);
        if freq < 0 {
            None
        } else {
            Some(Candidate { word, freq })
        }
    }

    /// Score a two-word split candidate from the two words' frequencies.
    ///
    /// Reads the session's split position; returns 0 when either half
    /// would be empty.
    ///
    /// Origin: correction.cpp:90-92
    pub fn get_freq_for_split_two_words(&self, first_freq: i32, second_freq: i32) -> i32 {
        rank::calc_freq_for_split_two_words(first_freq, second_freq, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editdist::table_len;

    /// Proximity info with an explicit neighbor list, independent of any
    /// keyboard geometry.
    struct FakeInput {
        typed: Vec<char>,
        near: Vec<(char, char)>,
    }

    impl FakeInput {
        fn new(typed: &str, near: &[(char, char)]) -> Self {
            Self {
                typed: typed.chars().collect(),
                near: near.to_vec(),
            }
        }
    }

    impl ProximityInfo for FakeInput {
        fn input_length(&self) -> usize {
            self.typed.len()
        }

        fn primary_char_at(&self, index: usize) -> char {
            self.typed[index]
        }

        fn primary_input_word(&self) -> &[char] {
            &self.typed
        }

        fn matched_proximity_id(
            &self,
            index: usize,
            c: char,
            check_proximity: bool,
        ) -> ProximityClass {
            use tapkey_core::character::to_base_lower;
            let Some(&primary) = self.typed.get(index) else {
                return ProximityClass::Unrelated;
            };
            if to_base_lower(primary) == to_base_lower(c) {
                ProximityClass::Equivalent
            } else if check_proximity
                && self
                    .near
                    .iter()
                    .any(|&(a, b)| (a == primary && b == c) || (a == c && b == primary))
            {
                ProximityClass::Near
            } else {
                ProximityClass::Unrelated
            }
        }

        fn exists_adjacent_proximity_chars(&self, index: usize) -> bool {
            self.typed
                .get(index)
                .is_some_and(|&p| self.near.iter().any(|&(a, b)| a == p || b == p))
        }

        fn same_as_typed(&self, word: &[char]) -> bool {
            word == self.typed.as_slice()
        }
    }

    fn session<'a>(input: &'a FakeInput) -> Corrector<'a> {
        let mut corr = Corrector::new(input, Tuning::default());
        corr.init_correction(input.input_length(), MAX_WORD_LENGTH - 2);
        corr
    }

    /// Walk one candidate as a chain of single-child edges, the last one
    /// terminal, following the same protocol as the trie walker.
    fn walk(corr: &mut Corrector<'_>, candidate: &str) -> EdgeResult {
        corr.init_correction_state(0, 1, false);
        let chars: Vec<char> = candidate.chars().collect();
        let mut depth = 0usize;
        let mut last = EdgeResult::NotOnTerminal;
        for (i, &c) in chars.iter().enumerate() {
            assert!(corr.init_process_state(depth), "ran out of siblings");
            last = corr.process_char_and_calc_state(c, i == chars.len() - 1);
            if last == EdgeResult::Unrelated {
                return last;
            }
            if i < chars.len() - 1 {
                depth = corr.go_down_tree(depth as i32, 1, 0);
            }
        }
        last
    }

    fn score(corr: &Corrector<'_>, base_freq: i32) -> Option<i32> {
        let mut table = vec![0i32; table_len(corr.input_length, MAX_WORD_LENGTH)];
        corr.get_final_freq(base_freq, &mut table).map(|c| c.freq)
    }

    // -- Protocol mechanics --

    #[test]
    fn init_process_state_consumes_siblings() {
        let input = FakeInput::new("ab", &[]);
        let mut corr = session(&input);
        corr.init_correction_state(0, 2, false);
        assert!(corr.init_process_state(0));
        assert!(corr.init_process_state(0));
        assert!(!corr.init_process_state(0));
    }

    #[test]
    fn matching_edge_publishes_the_next_frame() {
        let input = FakeInput::new("ab", &[]);
        let mut corr = session(&input);
        corr.init_correction_state(7, 1, false);
        assert!(corr.init_process_state(0));
        let r = corr.process_char_and_calc_state('a', false);
        assert_eq!(r, EdgeResult::NotOnTerminal);
        assert_eq!(corr.output_index(), 1);
        let f = &corr.frames[1];
        assert_eq!(f.input_index, 1);
        assert!(f.matching);
        assert!(!f.proximity_matching);
        // Trie bookkeeping carries over from the parent frame.
        assert_eq!(f.sibling_pos, 7);
        assert_eq!(f.child_count, 0);
    }

    #[test]
    fn restored_frame_matches_published_state() {
        let input = FakeInput::new("abc", &[]);
        let mut corr = session(&input);
        corr.init_correction_state(0, 1, false);
        assert!(corr.init_process_state(0));
        corr.process_char_and_calc_state('a', false);
        corr.go_down_tree(0, 3, 11);
        let published = corr.frames[1];
        assert!(corr.init_process_state(1));
        assert_eq!(corr.input_index, published.input_index);
        assert_eq!(corr.proximity_count, published.proximity_count);
        assert_eq!(corr.skip_pos, published.skip_pos);
        // The per-edge flags start cleared even though the frame kept them.
        assert!(!corr.matching && !corr.skipping && !corr.exceeding);
    }

    #[test]
    fn unrelated_edge_leaves_depth_unchanged() {
        let input = FakeInput::new("abc", &[]);
        let mut corr = session(&input);
        corr.init_correction_state(0, 2, false);
        assert!(corr.init_process_state(0));
        let r = corr.process_char_and_calc_state('z', false);
        assert_eq!(r, EdgeResult::Unrelated);
        assert_eq!(corr.output_index(), 0);
        // The sibling slot was still consumed.
        assert!(corr.init_process_state(0));
        assert!(!corr.init_process_state(0));
    }

    // -- Per-edge classification --

    #[test]
    fn exact_walk_reaches_terminal() {
        let input = FakeInput::new("cat", &[]);
        let mut corr = session(&input);
        assert_eq!(walk(&mut corr, "cat"), EdgeResult::OnTerminal);
        // Identical to the typed word: rejected at scoring time.
        assert_eq!(score(&corr, 100), None);
    }

    #[test]
    fn capitalized_variant_scores() {
        let input = FakeInput::new("cat", &[]);
        let mut corr = session(&input);
        assert_eq!(walk(&mut corr, "Cat"), EdgeResult::OnTerminal);
        let freq = score(&corr, 100).expect("accepted");
        assert!(freq > 0);
    }

    #[test]
    fn proximity_edge_counts_and_scores() {
        // "car" -> "cat" with r/t adjacent.
        let input = FakeInput::new("car", &[('r', 't')]);
        let mut corr = session(&input);
        assert_eq!(walk(&mut corr, "cat"), EdgeResult::OnTerminal);
        assert_eq!(corr.proximity_count, 1);
        // 100 * 2^(3-1), one proximity step (x2 then 50%), error demotion
        // 85%, full-word x2.
        assert_eq!(score(&corr, 100), Some(680));
    }

    #[test]
    fn proximity_is_suppressed_on_hinted_branches() {
        let input = FakeInput::new("car", &[('r', 't')]);
        let mut corr = session(&input);
        corr.set_correction_params(-1, -1, 0, -1, -1);
        assert_eq!(walk(&mut corr, "cat"), EdgeResult::Unrelated);
    }

    #[test]
    fn completion_after_input_consumed() {
        let input = FakeInput::new("shel", &[]);
        let mut corr = session(&input);
        assert_eq!(walk(&mut corr, "shell"), EdgeResult::TraverseAllOnTerminal);
        // 80 * 2^4, no-correction promotion 120%, doubled-letter promotion
        // 105%, no full-word bonus.
        assert_eq!(score(&corr, 80), Some(1612));
    }

    #[test]
    fn quote_in_candidate_is_a_free_skip() {
        let input = FakeInput::new("dont", &[]);
        let mut corr = session(&input);
        assert_eq!(walk(&mut corr, "don't"), EdgeResult::OnTerminal);
        assert_eq!(corr.skipped_count, 0);
        assert_eq!(score(&corr, 100), Some(3840));
    }

    #[test]
    fn transposition_walk() {
        let input = FakeInput::new("hte", &[]);
        let mut corr = session(&input);
        corr.set_correction_params(-1, -1, 0, -1, -1);
        assert_eq!(walk(&mut corr, "the"), EdgeResult::OnTerminal);
        assert_eq!(corr.transposed_count, 2);
        // 100 * 2^3, transposition demotion 60%, full-word x2.
        assert_eq!(score(&corr, 100), Some(960));
    }

    #[test]
    fn failed_second_transposition_reverts() {
        let input = FakeInput::new("hte", &[]);
        let mut corr = session(&input);
        corr.set_correction_params(-1, -1, 0, -1, -1);
        assert_eq!(walk(&mut corr, "tx"), EdgeResult::Unrelated);
        assert_eq!(corr.transposed_count, 0);
    }

    #[test]
    fn excessive_character_mid_word() {
        let input = FakeInput::new("woord", &[('d', 's')]);
        let mut corr = session(&input);
        corr.set_correction_params(-1, 1, -1, -1, -1);
        assert_eq!(walk(&mut corr, "word"), EdgeResult::OnTerminal);
        assert_eq!(corr.excessive_count, 1);
        // 100 * 2^4, excessive demotion 75%, full-word x2; the extra tap
        // neighbors 'd', so no out-of-proximity demotion.
        assert_eq!(score(&corr, 100), Some(2400));
    }

    #[test]
    fn excessive_last_char() {
        let input = FakeInput::new("catt", &[('t', 'r')]);
        let mut corr = session(&input);
        corr.set_correction_params(-1, 2, -1, -1, -1);
        assert_eq!(walk(&mut corr, "cat"), EdgeResult::OnTerminal);
        assert!(corr.last_char_exceeded);
        assert_eq!(score(&corr, 100), Some(1200));
    }

    #[test]
    fn excessive_out_of_proximity_demotes_further() {
        let input = FakeInput::new("catt", &[]);
        let mut corr = session(&input);
        corr.set_correction_params(-1, 2, -1, -1, -1);
        assert_eq!(walk(&mut corr, "cat"), EdgeResult::OnTerminal);
        assert_eq!(score(&corr, 100), Some(900));
    }

    #[test]
    fn skip_pass_reclassifies_proximity_hit_as_skip() {
        // "contrst" -> "contrast": the grid reads 's' as a neighbor of 'a'
        // first, then the next edge converts it to a skipped letter.
        let input = FakeInput::new("contrst", &[('s', 'a')]);
        let mut corr = session(&input);
        corr.set_correction_params(5, -1, -1, -1, -1);
        assert_eq!(walk(&mut corr, "contrast"), EdgeResult::OnTerminal);
        assert_eq!(corr.skipped_count, 1);
        assert_eq!(corr.proximity_count, 0);
        assert_eq!(score(&corr, 100), Some(9714));
    }

    #[test]
    fn skip_consumes_an_unmatched_candidate_letter() {
        let input = FakeInput::new("wrd", &[]);
        let mut corr = session(&input);
        corr.set_correction_params(1, -1, -1, -1, -1);
        assert_eq!(walk(&mut corr, "word"), EdgeResult::OnTerminal);
        assert_eq!(corr.skipped_count, 1);
        assert!(score(&corr, 100).is_some());
    }

    // -- Pruning --

    #[test]
    fn prunes_past_the_depth_bound() {
        let input = FakeInput::new("ab", &[]);
        let mut corr = Corrector::new(&input, Tuning::default());
        corr.init_correction(2, 3);
        walk(&mut corr, "abba");
        assert!(corr.needs_to_prune());
    }

    #[test]
    fn prunes_when_proximity_budget_is_spent() {
        let input = FakeInput::new("abc", &[('a', 'q'), ('b', 'w'), ('c', 'e')]);
        let mut corr = session(&input);
        assert_eq!(walk(&mut corr, "qwe"), EdgeResult::OnTerminal);
        assert_eq!(corr.proximity_count, 3);
        assert!(corr.needs_to_prune());
    }

    #[test]
    fn transposed_branch_tightens_the_depth_bound() {
        let input = FakeInput::new("abcd", &[]);
        let mut corr = session(&input);
        corr.set_correction_params(-1, -1, 0, -1, -1);
        walk(&mut corr, "bacd");
        // Depth bound is L-1 on transposed branches.
        assert!(corr.needs_to_prune());
    }

    // -- Scoring rejections --

    #[test]
    fn single_character_candidate_is_too_shallow() {
        let input = FakeInput::new("b", &[('b', 'a')]);
        let mut corr = session(&input);
        assert_eq!(walk(&mut corr, "a"), EdgeResult::OnTerminal);
        assert_eq!(score(&corr, 100), None);
    }

    #[test]
    fn all_taps_skipped_is_rejected() {
        let input = FakeInput::new("a", &[]);
        let mut corr = session(&input);
        corr.set_correction_params(0, -1, -1, -1, -1);
        assert_eq!(walk(&mut corr, "ba"), EdgeResult::OnTerminal);
        assert_eq!(corr.skipped_count, 1);
        assert_eq!(score(&corr, 100), None);
    }

    #[test]
    fn unused_transposition_hint_is_rejected() {
        let input = FakeInput::new("ab", &[]);
        let mut corr = session(&input);
        corr.set_correction_params(-1, -1, 0, -1, -1);
        assert_eq!(walk(&mut corr, "aB"), EdgeResult::OnTerminal);
        assert_eq!(corr.transposed_count, 0);
        assert_eq!(score(&corr, 100), None);
    }

    #[test]
    fn unused_excessive_hint_is_rejected() {
        // White-box: the walk itself converts the hint via the last-char
        // path, so force the counter back to zero.
        let input = FakeInput::new("abc", &[]);
        let mut corr = session(&input);
        corr.set_correction_params(-1, 1, -1, -1, -1);
        assert_eq!(walk(&mut corr, "ab"), EdgeResult::OnTerminal);
        corr.excessive_count = 0;
        assert_eq!(score(&corr, 100), None);
    }

    #[test]
    fn zero_length_input_is_rejected() {
        let input = FakeInput::new("", &[]);
        let mut corr = session(&input);
        corr.terminal_output_index = 1;
        corr.word[0] = 'a';
        corr.word[1] = 'b';
        assert_eq!(score(&corr, 100), None);
    }

    // -- Split scoring --

    #[test]
    fn missing_space_split_score() {
        let input = FakeInput::new("helloworld", &[]);
        let mut corr = session(&input);
        corr.set_correction_params(-1, -1, -1, -1, 5);
        assert_eq!(corr.get_freq_for_split_two_words(1000, 1000), 1_086_398);
    }

    #[test]
    fn space_proximity_split_score() {
        let input = FakeInput::new("abcab", &[]);
        let mut corr = session(&input);
        corr.set_correction_params(-1, -1, -1, 2, -1);
        assert_eq!(corr.get_freq_for_split_two_words(1000, 1000), 14_604);
    }

    #[test]
    fn split_with_empty_half_scores_zero() {
        let input = FakeInput::new("abc", &[]);
        let mut corr = session(&input);
        corr.set_correction_params(-1, -1, -1, -1, 0);
        assert_eq!(corr.get_freq_for_split_two_words(1000, 1000), 0);
        corr.set_correction_params(-1, -1, -1, -1, 3);
        assert_eq!(corr.get_freq_for_split_two_words(1000, 1000), 0);
    }

    #[test]
    fn split_scores_are_deterministic() {
        let input = FakeInput::new("helloworld", &[]);
        let mut corr = session(&input);
        corr.set_correction_params(-1, -1, -1, -1, 5);
        let a = corr.get_freq_for_split_two_words(250, 250);
        let b = corr.get_freq_for_split_two_words(250, 250);
        assert_eq!(a, b);
        assert!(a > 0);
    }
}


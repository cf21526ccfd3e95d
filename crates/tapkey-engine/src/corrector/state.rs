// Per-depth correction frames.
// Origin: correction.cpp:107-186 (the fields restored by initProcessState
// and published by incrementOutputIndex)
//
// The engine explores the trie without recursion: one frame per output
// depth snapshots everything the walk needs to resume at that depth after
// exploring a subtree. `Corrector::init_process_state` restores the working
// fields from a frame; `Corrector::increment_output_index` publishes them
// into the next one.

/// Snapshot of the correction walk at one output depth.
///
/// Origin: correction.cpp:107-186
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CorrectionState {
    /// Depth to resume at once this depth's siblings are exhausted.
    pub parent_index: i32,
    /// Trie cursor: arena index of the next sibling to visit.
    pub sibling_pos: i32,
    /// Remaining siblings to visit at this depth.
    pub child_count: i32,
    /// Taps consumed on entry to this depth.
    pub input_index: usize,
    /// Completion mode: append suffix characters without consuming taps.
    pub needs_to_traverse_all_nodes: bool,

    pub proximity_count: u32,
    pub transposed_count: u32,
    pub excessive_count: u32,
    pub skipped_count: u32,

    // Positional hints; -1 when the correction is not attempted on this
    // branch. These drift forward as the output outruns them.
    pub skip_pos: i32,
    pub excessive_pos: i32,
    pub transposed_pos: i32,

    pub last_char_exceeded: bool,

    // Classification flags of the edge that led to this depth.
    pub matching: bool,
    pub proximity_matching: bool,
    pub transposing: bool,
    pub exceeding: bool,
    pub skipping: bool,
}

impl Default for CorrectionState {
    fn default() -> Self {
        Self {
            parent_index: -1,
            sibling_pos: -1,
            child_count: 0,
            input_index: 0,
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
        }
    }
}

impl CorrectionState {
    /// Reset this frame as the root of a new walk.
    ///
    /// Origin: correction.cpp:55-62
    pub fn init(&mut self, root_pos: i32, child_count: i32, traverse_all: bool) {
        *self = Self {
            sibling_pos: root_pos,
            child_count,
            needs_to_traverse_all_nodes: traverse_all,
            ..Self::default()
        };
    }
}

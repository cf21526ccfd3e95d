// Proximity-info collaborator.

pub mod grid;

use tapkey_core::enums::ProximityClass;

/// Per-session view of the user's tap sequence and its keyboard geometry.
///
/// The engine borrows an implementation for the lifetime of one correction
/// session. All methods are pure functions of `(tap index, character)`
/// within a session, and classification queries are total: a tap index at
/// or past [`input_length`](Self::input_length) classifies as
/// [`ProximityClass::Unrelated`].
pub trait ProximityInfo {
    /// Number of taps in the input.
    fn input_length(&self) -> usize;

    /// The primary (intended) character of tap `index`.
    ///
    /// `index` must be below [`input_length`](Self::input_length).
    fn primary_char_at(&self, index: usize) -> char;

    /// The sequence of primary characters, one per tap.
    fn primary_input_word(&self) -> &[char];

    /// Classify candidate character `c` against tap `index`.
    ///
    /// With `check_proximity` false only `Equivalent` or `Unrelated` is
    /// returned; near-neighbor matching is suppressed.
    fn matched_proximity_id(
        &self,
        index: usize,
        c: char,
        check_proximity: bool,
    ) -> ProximityClass;

    /// Whether tap `index` has any near neighbor on the keyboard.
    fn exists_adjacent_proximity_chars(&self, index: usize) -> bool;

    /// Whether `word` is exactly what the user typed (no folding).
    fn same_as_typed(&self, word: &[char]) -> bool;
}

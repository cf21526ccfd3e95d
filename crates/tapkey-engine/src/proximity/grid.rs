// Keyboard grid geometry and the tap-sequence view over it.
//
// Keys sit on staggered rows with unit spacing; two keys are near
// neighbors when their center distance is below NEIGHBOR_RADIUS. Neighbor
// sets are precomputed at construction, so per-tap queries are one map
// lookup.

use hashbrown::HashMap;

use tapkey_core::character::to_base_lower;
use tapkey_core::enums::ProximityClass;

use super::ProximityInfo;

/// Center distance below which two keys count as near neighbors. Covers
/// same-row adjacency (1.0) and the diagonal pairs of staggered rows
/// (~1.12), but not keys two columns apart.
const NEIGHBOR_RADIUS: f32 = 1.2;

/// A keyboard layout with precomputed key adjacency.
pub struct KeyGrid {
    neighbors: HashMap<char, Vec<char>>,
}

impl KeyGrid {
    /// Build a grid from rows of keys. Each row is a string of key
    /// characters plus the horizontal offset of its first key; vertical
    /// spacing between rows is one key unit.
    pub fn from_rows(rows: &[(&str, f32)]) -> Self {
        let mut keys: Vec<(char, f32, f32)> = Vec::new();
        for (row_index, (chars, offset)) in rows.iter().enumerate() {
            for (col, c) in chars.chars().enumerate() {
                keys.push((to_base_lower(c), offset + col as f32, row_index as f32));
            }
        }

        let mut neighbors: HashMap<char, Vec<char>> = HashMap::new();
        for &(a, ax, ay) in &keys {
            let near: Vec<char> = keys
                .iter()
                .filter(|&&(b, bx, by)| {
                    let (dx, dy) = (ax - bx, ay - by);
                    b != a && (dx * dx + dy * dy).sqrt() < NEIGHBOR_RADIUS
                })
                .map(|&(b, _, _)| b)
                .collect();
            neighbors.insert(a, near);
        }
        Self { neighbors }
    }

    /// The standard QWERTY soft-keyboard layout.
    pub fn qwerty() -> Self {
        Self::from_rows(&[("qwertyuiop", 0.0), ("asdfghjkl", 0.5), ("zxcvbnm", 1.0)])
    }

    /// Whether `a` and `b` fold to near-neighbor keys.
    pub fn are_near(&self, a: char, b: char) -> bool {
        let (fa, fb) = (to_base_lower(a), to_base_lower(b));
        self.neighbors
            .get(&fa)
            .is_some_and(|near| near.contains(&fb))
    }

    /// Whether `c` folds to a key that has any near neighbor.
    pub fn has_neighbors(&self, c: char) -> bool {
        self.neighbors
            .get(&to_base_lower(c))
            .is_some_and(|near| !near.is_empty())
    }
}

/// One typed tap sequence bound to a keyboard grid.
pub struct GridInput<'g> {
    grid: &'g KeyGrid,
    typed: Vec<char>,
}

impl<'g> GridInput<'g> {
    pub fn new(grid: &'g KeyGrid, typed: &str) -> Self {
        Self {
            grid,
            typed: typed.chars().collect(),
        }
    }
}

impl ProximityInfo for GridInput<'_> {
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
        let Some(&primary) = self.typed.get(index) else {
            return ProximityClass::Unrelated;
        };
        if to_base_lower(primary) == to_base_lower(c) {
            ProximityClass::Equivalent
        } else if check_proximity && self.grid.are_near(primary, c) {
            ProximityClass::Near
        } else {
            ProximityClass::Unrelated
        }
    }

    fn exists_adjacent_proximity_chars(&self, index: usize) -> bool {
        index < self.typed.len() && self.grid.has_neighbors(self.typed[index])
    }

    fn same_as_typed(&self, word: &[char]) -> bool {
        word == self.typed.as_slice()
    }
}

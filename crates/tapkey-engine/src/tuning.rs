// Promotion and demotion rates used by the ranking algorithm.
//
// Rates are percentages applied through `intmath::mul_rate`; multipliers
// are plain capped factors. The defaults are the reference tuning; they are
// policy, not contract, and may change between releases.

/// Ranking configuration for one correction session.
#[derive(Debug, Clone, Copy)]
pub struct Tuning {
    /// Weight of one typed letter explained by the candidate.
    pub typed_letter_multiplier: i32,
    /// Bonus factor for candidates that consume the whole input.
    pub full_word_multiplier: i32,
    /// Demotion for words with one character missing from the input.
    pub missing_char_demotion_rate: i32,
    /// Start position (times 10) from which the missing-character demotion
    /// eases off for longer inputs.
    pub missing_char_demotion_start_pos_10x: i32,
    /// Demotion for words with two adjacent taps swapped.
    pub transposed_chars_demotion_rate: i32,
    /// Demotion for words typed with one extra character.
    pub excessive_char_demotion_rate: i32,
    /// Extra demotion when the excessive character is not adjacent to its
    /// neighbors on the keyboard.
    pub excessive_char_out_of_proximity_demotion_rate: i32,
    /// Demotion applied once per proximity-substituted character.
    pub proximity_char_demotion_rate: i32,
    /// Per-error demotion slope, scaled by error count over input length.
    pub correction_count_demotion_rate_base: i32,
    /// Promotion for candidates needing no correction at all.
    pub full_matched_words_promotion_rate: i32,
    /// Promotion for candidates exactly one edit away from the input.
    pub just_one_correction_promotion_rate: i32,
    /// Promotion for the doubled-letter completion pattern, where the last
    /// typed letter equals the next candidate letter.
    pub match_skip_promotion_rate: i32,
    /// Demotion for two-word candidates replacing a missing space.
    pub missing_space_demotion_rate: i32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            typed_letter_multiplier: 2,
            full_word_multiplier: 2,
            missing_char_demotion_rate: 80,
            missing_char_demotion_start_pos_10x: 12,
            transposed_chars_demotion_rate: 60,
            excessive_char_demotion_rate: 75,
            excessive_char_out_of_proximity_demotion_rate: 75,
            proximity_char_demotion_rate: 50,
            correction_count_demotion_rate_base: 45,
            full_matched_words_promotion_rate: 120,
            just_one_correction_promotion_rate: 60,
            match_skip_promotion_rate: 105,
            missing_space_demotion_rate: 58,
        }
    }
}

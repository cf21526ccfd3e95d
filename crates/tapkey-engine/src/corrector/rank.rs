// Ranking: from branch state and base dictionary frequency to the final
// comparable score.
// Origin: native/src/correction.cpp (Correction::RankingAlgorithm)
//
// The promotion/demotion pipeline is order-sensitive and runs entirely on
// the saturating primitives, so scores reproduce bit for bit.

use tapkey_core::character::quote_count;
use tapkey_core::intmath::{cap255_for_full_match, mul_capped, mul_rate, pow_capped};

use crate::editdist::edit_distance;

use super::Corrector;

/// Compute the final frequency of a single-word candidate, or -1 when the
/// branch state rejects it.
///
/// Origin: correction.cpp:448-597 (RankingAlgorithm::calculateFinalFreq)
pub(crate) fn calculate_final_freq(
    input_index: usize,
    output_index: usize,
    freq: i32,
    table: &mut [i32],
    corr: &Corrector<'_>,
) -> i32 {
    let excessive_pos = corr.excessive_pos;
    let transposed_pos = corr.transposed_pos;
    let input_length = corr.input_length as i32;
    let tuning = &corr.tuning;
    let typed_letter_multiplier = tuning.typed_letter_multiplier;
    let skipped_count = corr.skipped_count as i32;
    let transposed_count = corr.transposed_count as i32;
    let excessive_count = corr.excessive_count as i32;
    let proximity_matched_count = corr.proximity_count as i32;
    let last_char_exceeded = corr.last_char_exceeded;

    if skipped_count >= input_length || input_length == 0 {
        return -1;
    }
    // A hinted correction that the branch never used scores as if the hint
    // pass had not run; the unperturbed pass already covers the candidate.
    if transposed_pos >= 0 && transposed_count == 0 {
        return -1;
    }
    if excessive_pos >= 0 && excessive_count == 0 {
        return -1;
    }

    let same_length = if last_char_exceeded {
        input_length == input_index as i32 + 2
    } else {
        input_length == input_index as i32 + 1
    };

    let mut match_count =
        input_length - proximity_matched_count - i32::from(excessive_pos >= 0);
    if match_count < 0 {
        // Unreachable while proximity matching stays disabled on excessive
        // branches; clamp instead of feeding a negative weight exponent.
        tracing::warn!(match_count, "negative match count clamped to zero");
        match_count = 0;
    }

    let word = &corr.word;
    let skipped = skipped_count > 0;

    let primary = corr.proximity.primary_input_word();
    let quote_diff_count =
        0.max(quote_count(&word[..output_index + 1]) - quote_count(primary));

    let mut match_weight;
    let mut adjusted_proximity_count = proximity_matched_count;

    if excessive_pos < 0 && transposed_pos < 0 && (proximity_matched_count > 0 || skipped) {
        // Weight by how much of the candidate the input actually explains.
        let mut ed = edit_distance(table, primary, &word[..output_index + 1]);
        match_weight = pow_capped(typed_letter_multiplier, output_index as i32 + 1 - ed);
        if ed == 1 && input_length as usize == output_index {
            // One clean edit against a one-longer candidate.
            match_weight = mul_rate(tuning.just_one_correction_promotion_rate, match_weight);
        }
        ed = 0.max(ed - quote_diff_count);
        adjusted_proximity_count = 0
            .max(ed - (output_index as i32 + 1 - input_length))
            .min(proximity_matched_count);
    } else {
        match_weight = pow_capped(typed_letter_multiplier, match_count);
    }

    let mut final_freq = mul_capped(freq, match_weight);

    // Demotion for a word with a missing character, easing off for longer
    // inputs.
    if skipped {
        let demotion_rate = tuning.missing_char_demotion_rate
            * (10 * input_length - tuning.missing_char_demotion_start_pos_10x)
            / (10 * input_length - tuning.missing_char_demotion_start_pos_10x + 10);
        final_freq = mul_rate(demotion_rate, final_freq);
    }

    // Demotion for a word with transposed characters.
    if transposed_pos >= 0 {
        final_freq = mul_rate(tuning.transposed_chars_demotion_rate, final_freq);
    }

    // Demotion for a word with an excessive character; harsher when the
    // extra tap is not even adjacent on the keyboard.
    if excessive_pos >= 0 {
        final_freq = mul_rate(tuning.excessive_char_demotion_rate, final_freq);
        if !corr.proximity.exists_adjacent_proximity_chars(input_index) {
            final_freq = mul_rate(
                tuning.excessive_char_out_of_proximity_demotion_rate,
                final_freq,
            );
        }
    }

    // Each proximity substitution trades the typed-letter weight for the
    // proximity demotion.
    for _ in 0..adjusted_proximity_count {
        final_freq = mul_capped(typed_letter_multiplier, final_freq);
        final_freq = mul_rate(tuning.proximity_char_demotion_rate, final_freq);
    }

    let error_count = proximity_matched_count + skipped_count;
    final_freq = mul_rate(
        100 - tuning.correction_count_demotion_rate_base * error_count / input_length,
        final_freq,
    );

    // Full exact match up to accents/capitalization.
    if match_count == output_index as i32 + 1
        && same_length
        && transposed_pos < 0
        && !skipped
        && excessive_pos < 0
    {
        final_freq = cap255_for_full_match(final_freq);
    }

    // A word needing no correction at all.
    if proximity_matched_count == 0 && transposed_pos < 0 && !skipped && excessive_pos < 0 {
        final_freq = mul_rate(tuning.full_matched_words_promotion_rate, final_freq);
    }

    // Doubled-letter completion: every tap matched and the next candidate
    // character repeats the last matched one ("shel" -> "shell"). Reading
    // the run as skip-then-match instead of match-then-complete deserves a
    // nudge.
    if match_count == input_length
        && match_count >= 2
        && !skipped
        && (match_count as usize) < word.len()
        && word[match_count as usize] == word[match_count as usize - 1]
    {
        final_freq = mul_rate(tuning.match_skip_promotion_rate, final_freq);
    }

    if same_length {
        final_freq = mul_capped(tuning.full_word_multiplier, final_freq);
    }

    final_freq
}

/// Combine two word frequencies into a score for a "missing space" or
/// "space proximity" pair, pre-compensating the downstream normalizer.
///
/// Origin: correction.cpp:600-668 (RankingAlgorithm::calcFreqForSplitTwoWords)
pub(crate) fn calc_freq_for_split_two_words(
    first_freq: i32,
    second_freq: i32,
    corr: &Corrector<'_>,
) -> i32 {
    let space_proximity_pos = corr.space_proximity_pos;
    let missing_space_pos = corr.missing_space_pos;
    debug_assert!(!(space_proximity_pos >= 0 && missing_space_pos >= 0));

    let is_space_proximity = space_proximity_pos >= 0;
    let input_length = corr.input_length as i32;
    let first_word_length = if is_space_proximity {
        space_proximity_pos
    } else {
        missing_space_pos
    };
    let second_word_length = if is_space_proximity {
        input_length - space_proximity_pos - 1
    } else {
        input_length - missing_space_pos
    };
    let typed_letter_multiplier = corr.tuning.typed_letter_multiplier;

    if first_word_length <= 0 || second_word_length <= 0 {
        return 0;
    }

    // Each half is demoted by (100 - 100 / (len + 1)) rather than
    // (100 - 100 / len); the downstream normalizer demotes by the latter,
    // and the adjustments below bridge the difference.
    let first_demotion_rate = 100 - 100 / (first_word_length + 1);
    let temp_first_freq = mul_rate(first_demotion_rate, first_freq);

    let second_demotion_rate = 100 - 100 / (second_word_length + 1);
    let temp_second_freq = mul_rate(second_demotion_rate, second_freq);

    let total_length = first_word_length + second_word_length;
    let mut total_freq = temp_first_freq.saturating_add(temp_second_freq);

    let not_enough_demotion_adjustment = 100 - 100 / (total_length * total_length);
    total_freq = mul_rate(not_enough_demotion_adjustment, total_freq);

    total_freq = mul_capped(
        pow_capped(typed_letter_multiplier, total_length),
        total_freq,
    );

    let demotion_rate_offset = 100 + 100 / total_length;
    total_freq = mul_rate(demotion_rate_offset, total_freq);

    if is_space_proximity {
        total_freq = mul_capped(typed_letter_multiplier, total_freq);
        total_freq = mul_rate(corr.tuning.proximity_char_demotion_rate, total_freq);
    }

    total_freq = mul_rate(corr.tuning.missing_space_demotion_rate, total_freq);
    total_freq
}

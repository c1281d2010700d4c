//! Guess scoring
//!
//! Each letter of a guess is classified against the answer:
//! - Correct: same letter at the same position
//! - Misplaced: letter occurs elsewhere in the answer and an unmatched copy remains
//! - Incorrect: letter absent, or every copy already accounted for

use super::word::{ALPHABET_SIZE, Word, letter_index};
use std::fmt;

/// Status of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterStatus {
    Correct,
    Misplaced,
    Incorrect,
}

impl LetterStatus {
    /// Emoji tile for this status
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Misplaced => '🟨',
            Self::Incorrect => '⬜',
        }
    }
}

/// A guessed letter paired with its status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterResult {
    pub letter: char,
    pub status: LetterStatus,
}

/// Scored guess, one result per position of the guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScoredGuess {
    letters: Vec<LetterResult>,
}

impl ScoredGuess {
    /// Per-position results, in guess order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[LetterResult] {
        &self.letters
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// The guessed word that produced this score
    #[must_use]
    pub fn word(&self) -> String {
        self.letters.iter().map(|l| l.letter).collect()
    }

    /// Check whether this score was produced by `word`, letter for letter
    #[must_use]
    pub fn spells(&self, word: &Word) -> bool {
        self.letters.len() == word.len()
            && self
                .letters
                .iter()
                .zip(word.bytes())
                .all(|(result, &b)| result.letter == char::from(b))
    }

    /// Check if every letter is Correct
    #[must_use]
    pub fn is_all_correct(&self) -> bool {
        self.letters
            .iter()
            .all(|l| l.status == LetterStatus::Correct)
    }

    /// Count the letters with the given status
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.letters.iter().filter(|l| l.status == status).count()
    }

    /// Convert to an emoji string like "⬜🟩🟩🟨🟩"
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Word, score};
    ///
    /// let guess = Word::new("trace").unwrap();
    /// let answer = Word::new("crane").unwrap();
    /// assert_eq!(score(&guess, &answer).to_emoji(), "⬜🟩🟩🟨🟩");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.letters.iter().map(|l| l.status.to_emoji()).collect()
    }
}

impl fmt::Display for ScoredGuess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji())
    }
}

/// Score `guess` against `answer`
///
/// Both words must have the same length.
///
/// # Algorithm
/// 1. First pass: mark exact position matches Correct and flag both sides consumed
/// 2. Count the unconsumed answer letters per alphabet slot
/// 3. Second pass, left to right over unconsumed guess positions: Misplaced while
///    the letter's count is above zero (decrementing it), Incorrect otherwise
///
/// # Examples
/// ```
/// use wordle_game::core::{LetterStatus::*, Word, score};
///
/// let guess = Word::new("speed").unwrap();
/// let answer = Word::new("erase").unwrap();
/// let statuses: Vec<_> = score(&guess, &answer)
///     .letters()
///     .iter()
///     .map(|l| l.status)
///     .collect();
///
/// assert_eq!(statuses, [Misplaced, Incorrect, Misplaced, Misplaced, Incorrect]);
/// ```
#[must_use]
pub fn score(guess: &Word, answer: &Word) -> ScoredGuess {
    debug_assert_eq!(guess.len(), answer.len(), "guess and answer lengths differ");

    let guess_bytes = guess.bytes();
    let answer_bytes = answer.bytes();

    let mut statuses = vec![LetterStatus::Incorrect; guess_bytes.len()];
    let mut consumed = vec![false; guess_bytes.len()];

    // First pass: Correct
    for (i, (g, a)) in guess_bytes.iter().zip(answer_bytes).enumerate() {
        if g == a {
            statuses[i] = LetterStatus::Correct;
            consumed[i] = true;
        }
    }

    let mut remaining = [0usize; ALPHABET_SIZE];
    for (&a, _) in answer_bytes
        .iter()
        .zip(&consumed)
        .filter(|&(_, &used)| !used)
    {
        remaining[letter_index(a)] += 1;
    }

    // Second pass: Misplaced, limited by what remains of each letter
    for (i, &g) in guess_bytes.iter().enumerate() {
        if consumed[i] {
            continue;
        }
        let count = &mut remaining[letter_index(g)];
        if *count > 0 {
            statuses[i] = LetterStatus::Misplaced;
            *count -= 1;
        }
    }

    ScoredGuess {
        letters: guess_bytes
            .iter()
            .zip(statuses)
            .map(|(&b, status)| LetterResult {
                letter: char::from(b),
                status,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::LetterStatus::{Correct, Incorrect, Misplaced};
    use super::*;

    fn statuses(guess: &str, answer: &str) -> Vec<LetterStatus> {
        let guess = Word::new(guess).unwrap();
        let answer = Word::new(answer).unwrap();
        score(&guess, &answer)
            .letters()
            .iter()
            .map(|l| l.status)
            .collect()
    }

    #[test]
    fn score_all_correct() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa"] {
            let w = Word::new(word).unwrap();
            let scored = score(&w, &w);
            assert!(scored.is_all_correct());
            assert_eq!(scored.count(Correct), 5);
        }
    }

    #[test]
    fn score_all_incorrect() {
        assert_eq!(statuses("abcde", "fghij"), [Incorrect; 5]);
    }

    #[test]
    fn score_trace_against_crane() {
        assert_eq!(
            statuses("trace", "crane"),
            [Incorrect, Correct, Correct, Misplaced, Correct]
        );
    }

    #[test]
    fn score_duplicate_letters_limited_by_answer() {
        // ERASE has two E's and one S, all unmatched
        assert_eq!(
            statuses("speed", "erase"),
            [Misplaced, Incorrect, Misplaced, Misplaced, Incorrect]
        );
    }

    #[test]
    fn score_duplicate_letters_correct_consumes_first() {
        // Second O of ROBOT is Correct; only one O remains for the first
        assert_eq!(
            statuses("robot", "floor"),
            [Misplaced, Misplaced, Incorrect, Correct, Incorrect]
        );
    }

    #[test]
    fn score_excess_duplicates_marked_incorrect() {
        // CREEP keeps one unmatched E after the Correct one at position 2
        assert_eq!(
            statuses("geese", "creep"),
            [Incorrect, Misplaced, Correct, Incorrect, Incorrect]
        );
    }

    #[test]
    fn score_leftmost_duplicate_gets_misplaced() {
        // ANGEL has one L and one A: only the leftmost copy of each is Misplaced
        assert_eq!(
            statuses("llama", "angel"),
            [Misplaced, Incorrect, Misplaced, Incorrect, Incorrect]
        );
    }

    #[test]
    fn score_preserves_letters_and_positions() {
        let guess = Word::new("trace").unwrap();
        let answer = Word::new("crane").unwrap();
        let scored = score(&guess, &answer);

        assert_eq!(scored.word(), "trace");
        assert!(scored.spells(&guess));
        assert!(!scored.spells(&answer));
        assert_eq!(scored.letters()[3].letter, 'c');
    }

    #[test]
    fn score_other_lengths() {
        assert_eq!(statuses("ab", "ba"), [Misplaced, Misplaced]);
        assert_eq!(
            statuses("letters", "settler"),
            [Misplaced, Correct, Correct, Correct, Misplaced, Misplaced, Misplaced]
        );
    }

    #[test]
    fn scored_guess_to_emoji() {
        let guess = Word::new("speed").unwrap();
        let answer = Word::new("erase").unwrap();
        let scored = score(&guess, &answer);
        assert_eq!(scored.to_emoji(), "🟨⬜🟨🟨⬜");
        assert_eq!(format!("{scored}"), "🟨⬜🟨🟨⬜");
        assert_eq!(scored.count(Misplaced), 3);
    }
}

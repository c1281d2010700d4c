//! Dictionary of valid words
//!
//! Immutable after construction. Answers are picked from it and guesses are
//! validated against it.

use crate::core::Word;
use crate::error::ConfigError;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;
use tracing::debug;

/// Set of same-length words, kept in first-seen order
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    /// Word text to its position in `words`
    index: FxHashMap<String, usize>,
    word_length: usize,
}

impl Dictionary {
    /// Build a dictionary where every word has `word_length` letters
    ///
    /// Entries are trimmed and lowercased. Repeated entries keep their first
    /// position so random selection is uniform over distinct words.
    ///
    /// # Errors
    /// Returns `ConfigError` if the source is empty, an entry is not a valid
    /// word, or an entry does not have `word_length` letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::new(["crane", "slate", "CRANE"], 5).unwrap();
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.contains("slate"));
    ///
    /// assert!(Dictionary::new(["crane", "toolong"], 5).is_err());
    /// ```
    pub fn new<I, S>(words: I, word_length: usize) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut unique = Vec::new();
        let mut index = FxHashMap::default();

        for entry in words {
            let entry = entry.as_ref().trim();
            let word = Word::new(entry).map_err(|source| ConfigError::InvalidWord {
                word: entry.to_string(),
                source,
            })?;

            if word.len() != word_length {
                return Err(ConfigError::InconsistentLength {
                    word: word.text().to_string(),
                    expected: word_length,
                    actual: word.len(),
                });
            }

            if let Entry::Vacant(slot) = index.entry(word.text().to_string()) {
                slot.insert(unique.len());
                unique.push(word);
            }
        }

        if unique.is_empty() {
            return Err(ConfigError::EmptyDictionary);
        }

        debug!(words = unique.len(), word_length, "dictionary loaded");

        Ok(Self {
            words: unique,
            index,
            word_length,
        })
    }

    /// Exact membership test
    ///
    /// Case-insensitive; anything that is not a valid word is absent.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    /// Uniformly pick one word
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        // Construction guarantees at least one word
        self.words.choose(rng).unwrap_or(&self.words[0])
    }

    /// Look up the stored word equal to `word`
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&Word> {
        let position = match self.index.get(word) {
            Some(&position) => position,
            None => *self.index.get(Word::new(word).ok()?.text())?,
        };
        self.words.get(position)
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: construction rejects empty sources
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Letters per word
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Words in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordError;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn dictionary_rejects_empty_source() {
        let empty: [&str; 0] = [];
        assert_eq!(
            Dictionary::new(empty, 5).unwrap_err(),
            ConfigError::EmptyDictionary
        );
    }

    #[test]
    fn dictionary_rejects_inconsistent_length() {
        let err = Dictionary::new(["crane", "cranes"], 5).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InconsistentLength {
                word: "cranes".to_string(),
                expected: 5,
                actual: 6,
            }
        );
    }

    #[test]
    fn dictionary_rejects_invalid_word() {
        let err = Dictionary::new(["crane", "cr4ne"], 5).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidWord { ref word, .. } if word == "cr4ne"));

        // Blank entries are not words either
        assert!(Dictionary::new(["crane", "  "], 5).is_err());
    }

    #[test]
    fn dictionary_normalizes_and_dedupes() {
        let dictionary = Dictionary::new([" Crane ", "slate", "crane"], 5).unwrap();

        assert_eq!(dictionary.len(), 2);
        let texts: Vec<_> = dictionary.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "slate"]);
    }

    #[test]
    fn dictionary_contains() {
        let dictionary = Dictionary::new(["crane", "slate"], 5).unwrap();

        assert!(dictionary.contains("crane"));
        assert!(dictionary.contains("SLATE"));
        assert!(!dictionary.contains("irate"));
        assert!(!dictionary.contains("cran"));
        assert!(!dictionary.contains("cr@ne"));
        assert!(!dictionary.contains(""));
    }

    #[test]
    fn dictionary_rejects_non_ascii_lookalikes() {
        let dictionary = Dictionary::new(["kayak", "crane"], 5).unwrap();
        assert!(!dictionary.contains("\u{212A}ayak"));
        assert!(dictionary.get("\u{212A}ayak").is_none());

        let err = Dictionary::new(["crane", "\u{212A}ayak"], 5).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidWord {
                source: WordError::NonAscii,
                ..
            }
        ));
    }

    #[test]
    fn dictionary_get_returns_stored_word() {
        let dictionary = Dictionary::new(["crane", "slate"], 5).unwrap();
        assert_eq!(dictionary.get("Slate").map(Word::text), Some("slate"));
        assert_eq!(dictionary.get("crane").map(Word::text), Some("crane"));
        assert!(dictionary.get("irate").is_none());

        // Positions stay aligned after a duplicate is dropped
        let dictionary = Dictionary::new(["crane", "CRANE", "slate", "irate"], 5).unwrap();
        assert_eq!(dictionary.get("irate").map(Word::text), Some("irate"));
    }

    #[test]
    fn pick_random_is_deterministic_with_seed() {
        let dictionary = Dictionary::new(["crane", "slate", "irate", "audio"], 5).unwrap();

        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(dictionary.pick_random(&mut a), dictionary.pick_random(&mut b));
        }
    }

    #[test]
    fn pick_random_reaches_every_word() {
        let dictionary = Dictionary::new(["crane", "slate", "irate", "audio"], 5).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let mut seen = rustc_hash::FxHashSet::default();
        for _ in 0..400 {
            seen.insert(dictionary.pick_random(&mut rng).text().to_string());
        }
        assert_eq!(seen.len(), dictionary.len());
    }

    #[test]
    fn pick_random_single_word() {
        let dictionary = Dictionary::new(["crane"], 5).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(dictionary.pick_random(&mut rng).text(), "crane");
    }
}

//! In-process win/loss tally

use super::GuessOutcome;

/// Results of the games played since the process started
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index `n` counts games won in `n + 1` guesses
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    #[must_use]
    pub fn new(max_guesses: usize) -> Self {
        Self {
            total_games: 0,
            games_won: 0,
            guess_distribution: vec![0; max_guesses],
        }
    }

    /// Record a terminal outcome reached after `attempts` scored guesses
    ///
    /// Non-terminal outcomes are ignored.
    pub fn record(&mut self, outcome: &GuessOutcome, attempts: usize) {
        match outcome {
            GuessOutcome::Won(_) => {
                self.total_games += 1;
                self.games_won += 1;
                if attempts > 0 {
                    if self.guess_distribution.len() < attempts {
                        self.guess_distribution.resize(attempts, 0);
                    }
                    self.guess_distribution[attempts - 1] += 1;
                }
            }
            GuessOutcome::Lost(_) => self.total_games += 1,
            GuessOutcome::WrongWord | GuessOutcome::TryAgain(_) => {}
        }
    }

    /// Percentage of games won, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, score};

    fn scored(guess: &str, answer: &str) -> crate::core::ScoredGuess {
        score(&Word::new(guess).unwrap(), &Word::new(answer).unwrap())
    }

    #[test]
    fn record_wins_and_losses() {
        let mut stats = Statistics::new(6);

        stats.record(&GuessOutcome::Won(scored("crane", "crane")), 3);
        stats.record(&GuessOutcome::Lost(scored("slate", "crane")), 6);
        stats.record(&GuessOutcome::TryAgain(scored("slate", "crane")), 1);
        stats.record(&GuessOutcome::WrongWord, 1);

        assert_eq!(stats.total_games, 2);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.guess_distribution, [0, 0, 1, 0, 0, 0]);
        assert!((stats.win_rate() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn win_rate_without_games() {
        assert!(Statistics::default().win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn distribution_grows_when_needed() {
        let mut stats = Statistics::default();
        stats.record(&GuessOutcome::Won(scored("crane", "crane")), 2);
        assert_eq!(stats.guess_distribution, [0, 1]);
    }
}

//! Interactive flashcard and quiz sessions over any reader/writer pair.
//!
//! The learner reads a question, presses enter to reveal the answer, then
//! grades themselves with `y` or `n`.
//!
//! - **Flashcards** repeat the entries not yet answered correctly, round
//!   after round, until none are left.
//! - **Quiz** runs one full pass in random order and reports a percentage,
//!   then offers to start over.

use std::collections::HashSet;
use std::io::{BufRead, Write};

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::study_engine::Entry;

/// Unusable replies tolerated by [`Session::yes_or_no`] before giving up.
const MAX_TRIES: usize = 10;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("too many tries")]
    TooManyTries,
}

/// Result of one quiz pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizScore {
    pub correct: usize,
    pub total: usize,
}

impl QuizScore {
    /// Whole-number percentage, rounded down.
    pub fn percent(self) -> usize {
        if self.total == 0 {
            0
        } else {
            self.correct * 100 / self.total
        }
    }
}

pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Session { input, output }
    }

    /// Hand back the writer, e.g. to inspect captured output.
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run_flashcards<G: Rng>(&mut self, entries: &[Entry], rng: &mut G) -> Result<(), SessionError> {
        let mut unfinished: HashSet<usize> = (0..entries.len()).collect();
        while !unfinished.is_empty() {
            writeln!(self.output, "{} items to study.", unfinished.len())?;
            let mut round: Vec<usize> = unfinished.iter().copied().collect();
            round.sort_unstable();
            round.shuffle(rng);
            for idx in round {
                if self.present("", &entries[idx])? {
                    unfinished.remove(&idx);
                }
            }
            writeln!(self.output)?;
        }
        Ok(())
    }

    /// Run quiz passes until the learner declines another; one score per pass.
    pub fn run_quiz<G: Rng>(&mut self, entries: &[Entry], rng: &mut G) -> Result<Vec<QuizScore>, SessionError> {
        if entries.is_empty() {
            writeln!(self.output, "Nothing to quiz on.")?;
            return Ok(Vec::new());
        }
        writeln!(self.output, "A quiz with {} questions. Let's begin!", entries.len())?;
        let mut scores = Vec::new();
        loop {
            let mut order: Vec<&Entry> = entries.iter().collect();
            order.shuffle(rng);
            let mut score = QuizScore { correct: 0, total: entries.len() };
            for (i, entry) in order.into_iter().enumerate() {
                if self.present(&format!("{}: ", i + 1), entry)? {
                    score.correct += 1;
                }
            }
            writeln!(
                self.output,
                "You got {} out of {}, which is {}%.",
                score.correct,
                score.total,
                score.percent()
            )?;
            scores.push(score);
            if !self.yes_or_no("Take it again? ")? {
                return Ok(scores);
            }
        }
    }

    /// Show the question, wait for enter, show the answer and ask for a grade.
    pub fn present(&mut self, prefix: &str, entry: &Entry) -> Result<bool, SessionError> {
        write!(self.output, "{prefix}{:<30} ", entry.question)?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        write!(self.output, "{:<30} ", entry.answer)?;
        self.yes_or_no("y/n? ")
    }

    pub fn yes_or_no(&mut self, prompt: &str) -> Result<bool, SessionError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        for _ in 0..MAX_TRIES {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            match line.trim_start().chars().next() {
                Some('y' | 'Y') => return Ok(true),
                Some('n' | 'N') => return Ok(false),
                _ => continue,
            }
        }
        Err(SessionError::TooManyTries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Cursor;

    fn entries(n: usize) -> Vec<Entry> {
        (0..n)
            .map(|i| Entry { question: format!("q{i}"), answer: format!("a{i}") })
            .collect()
    }

    fn session(script: &str) -> Session<Cursor<Vec<u8>>, Vec<u8>> {
        Session::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn yes_or_no_skips_unusable_lines() {
        let mut s = session("\nmaybe\n  Yes\n");
        assert!(s.yes_or_no("? ").unwrap());
        let mut s = session("N\n");
        assert!(!s.yes_or_no("? ").unwrap());
    }

    #[test]
    fn yes_or_no_gives_up() {
        let mut s = session(&"?\n".repeat(MAX_TRIES));
        assert!(matches!(s.yes_or_no("? "), Err(SessionError::TooManyTries)));
        let mut s = session("");
        assert!(matches!(s.yes_or_no("? "), Err(SessionError::TooManyTries)));
    }

    #[test]
    fn present_pads_question_and_answer() {
        let mut s = session("\ny\n");
        let e = Entry { question: "Hello you".into(), answer: "Ni hao ni".into() };
        assert!(s.present("1: ", &e).unwrap());
        let out = String::from_utf8(s.into_output()).unwrap();
        assert_eq!(out, format!("1: {:<30} {:<30} y/n? ", "Hello you", "Ni hao ni"));
    }

    #[test]
    fn flashcards_repeat_until_all_known() {
        // Round 1: first card missed, second known. Round 2: remaining card known.
        let mut s = session("\nn\n\ny\n\ny\n");
        let mut rng = StdRng::seed_from_u64(5);
        s.run_flashcards(&entries(2), &mut rng).unwrap();
        let out = String::from_utf8(s.into_output()).unwrap();
        assert!(out.starts_with("2 items to study.\n"));
        assert!(out.contains("1 items to study.\n"));
    }

    #[test]
    fn flashcards_with_no_entries_do_nothing() {
        let mut s = session("");
        let mut rng = StdRng::seed_from_u64(5);
        s.run_flashcards(&[], &mut rng).unwrap();
        assert!(s.into_output().is_empty());
    }

    #[test]
    fn quiz_scores_each_pass() {
        // Pass 1: 2 of 3, retake. Pass 2: 3 of 3, stop.
        let script = "\ny\n\nn\n\ny\ny\n\ny\n\ny\n\ny\nn\n";
        let mut s = session(script);
        let mut rng = StdRng::seed_from_u64(9);
        let scores = s.run_quiz(&entries(3), &mut rng).unwrap();
        assert_eq!(
            scores,
            vec![QuizScore { correct: 2, total: 3 }, QuizScore { correct: 3, total: 3 }]
        );
        let out = String::from_utf8(s.into_output()).unwrap();
        assert!(out.starts_with("A quiz with 3 questions. Let's begin!\n"));
        assert!(out.contains("You got 2 out of 3, which is 66%."));
        assert!(out.contains("You got 3 out of 3, which is 100%."));
        assert!(out.contains("3: "));
    }

    #[test]
    fn quiz_with_no_entries_reports_nothing() {
        let mut s = session("");
        let mut rng = StdRng::seed_from_u64(9);
        assert!(s.run_quiz(&[], &mut rng).unwrap().is_empty());
    }
}

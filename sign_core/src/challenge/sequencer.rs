use log::info;
use sign_schema::{ChallengeRound, Difficulty, RoundKind, RoundOutcome, RoundResult};

use super::catalog;
use crate::gameplay::check_typed_answer;

/// What the challenge does after a round resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerStep {
    /// Move to round `index`.
    Advance { index: usize },
    /// Every round passed.
    Completed,
    /// The whole challenge ends without credit.
    Aborted(RoundOutcome),
}

/// Walks an ordered list of rounds. Any failed round aborts the challenge.
#[derive(Debug, Clone)]
pub struct ChallengeSequencer {
    difficulty: Difficulty,
    rounds: Vec<ChallengeRound>,
    index: usize,
    results: Vec<RoundResult>,
    finished: bool,
}

impl ChallengeSequencer {
    pub fn new(difficulty: Difficulty, rounds: Vec<ChallengeRound>) -> Self {
        let finished = rounds.is_empty();
        Self {
            difficulty,
            rounds,
            index: 0,
            results: Vec::new(),
            finished,
        }
    }

    pub fn standard(difficulty: Difficulty) -> Self {
        Self::new(difficulty, catalog::rounds(difficulty))
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn rounds(&self) -> &[ChallengeRound] {
        &self.rounds
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// None once the challenge has completed or aborted.
    pub fn current(&self) -> Option<&ChallengeRound> {
        if self.finished {
            None
        } else {
            self.rounds.get(self.index)
        }
    }

    pub fn results(&self) -> &[RoundResult] {
        &self.results
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Check a typed answer against the current round. Returns None when the
    /// current round does not take typed answers.
    pub fn submit_answer(&mut self, answer: &str) -> Option<SequencerStep> {
        let round = self.current()?;
        if round.kind != RoundKind::Typed {
            return None;
        }
        if check_typed_answer(round.target, answer) {
            self.round_succeeded()
        } else {
            self.round_failed(RoundOutcome::WrongAnswer)
        }
    }

    pub fn round_succeeded(&mut self) -> Option<SequencerStep> {
        self.record(RoundOutcome::Succeeded)?;
        if self.index + 1 < self.rounds.len() {
            self.index += 1;
            Some(SequencerStep::Advance { index: self.index })
        } else {
            self.finished = true;
            info!("{} challenge: all rounds passed", self.difficulty.display_name());
            Some(SequencerStep::Completed)
        }
    }

    pub fn round_failed(&mut self, outcome: RoundOutcome) -> Option<SequencerStep> {
        self.record(outcome)?;
        self.finished = true;
        info!(
            "{} challenge aborted at round {}: {:?}",
            self.difficulty.display_name(),
            self.index + 1,
            outcome
        );
        Some(SequencerStep::Aborted(outcome))
    }

    fn record(&mut self, outcome: RoundOutcome) -> Option<()> {
        let target = self.current()?.target;
        self.results.push(RoundResult {
            round_index: self.index,
            target,
            outcome,
        });
        Some(())
    }
}

//! Tournament aggregate, TournamentStatus, BracketError and round arithmetic.

use crate::models::bracket::BracketMatch;
use crate::models::participant::{Participant, ParticipantId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned by the bracket builder and advancer. No call mutates anything when it fails.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum BracketError {
    /// Malformed construction request (too few participants, bad seeds, duplicate ids).
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// No match at this index.
    #[error("Match {0} not found")]
    NotFound(usize),
    /// The match already has a winner; decisions are final.
    #[error("Match {0} has already been decided")]
    AlreadyDecided(usize),
    /// The winner is not in either slot, or the match is not yet playable.
    #[error("Winner {winner_id} is not a participant in match {match_index}")]
    InvalidParticipant {
        match_index: usize,
        winner_id: ParticipantId,
    },
}

/// Lifecycle of a tournament. Only ever moves forward.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentStatus {
    /// Built; no result recorded yet.
    #[default]
    Pending,
    /// At least one result recorded; final not decided.
    InProgress,
    /// The final has a winner.
    Completed,
}

/// Smallest power of two that fits `participants` (at least 1).
pub fn bracket_size_for(participants: usize) -> usize {
    participants.max(1).next_power_of_two()
}

/// Number of rounds for a power-of-two bracket size.
pub fn rounds_for(bracket_size: usize) -> u32 {
    bracket_size.trailing_zeros()
}

/// Flat index of the first match of `round` (1-based).
pub fn round_offset(bracket_size: usize, round: u32) -> usize {
    bracket_size - (bracket_size >> (round - 1))
}

/// Number of matches in `round` (1-based).
pub fn matches_in_round(bracket_size: usize, round: u32) -> usize {
    bracket_size >> round
}

/// The bracket as the caller persists it. Shape (`rounds`, bracket length, indices) is fixed at build.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub rounds: u32,
    /// Ordered by round, then by position within the round.
    pub bracket: Vec<BracketMatch>,
    pub status: TournamentStatus,
}

impl Tournament {
    /// Allocate an empty arena of `2^rounds - 1` matches in `Pending` state.
    pub(crate) fn with_rounds(rounds: u32) -> Self {
        let size = 1usize << rounds;
        let bracket = (1..=rounds)
            .flat_map(|round| std::iter::repeat(round).take(matches_in_round(size, round)))
            .enumerate()
            .map(|(idx, round)| BracketMatch::new(idx, round))
            .collect();
        Self {
            rounds,
            bracket,
            status: TournamentStatus::Pending,
        }
    }

    pub fn bracket_size(&self) -> usize {
        1usize << self.rounds
    }

    pub fn round_offset(&self, round: u32) -> usize {
        round_offset(self.bracket_size(), round)
    }

    pub fn matches_in_round(&self, round: u32) -> usize {
        matches_in_round(self.bracket_size(), round)
    }

    /// All matches of one round. Empty for rounds outside `1..=rounds`.
    pub fn round_matches(&self, round: u32) -> &[BracketMatch] {
        if round == 0 || round > self.rounds {
            return &[];
        }
        let start = self.round_offset(round);
        let end = start + self.matches_in_round(round);
        self.bracket.get(start..end).unwrap_or(&[])
    }

    pub fn final_match(&self) -> Option<&BracketMatch> {
        self.bracket.last()
    }

    /// Matches that currently need a result from the caller.
    pub fn playable_matches(&self) -> impl Iterator<Item = &BracketMatch> {
        self.bracket.iter().filter(|m| m.is_playable())
    }

    pub fn is_completed(&self) -> bool {
        self.status == TournamentStatus::Completed
    }

    pub fn champion(&self) -> Option<&Participant> {
        crate::logic::champion(self)
    }

    pub fn runner_up(&self) -> Option<&Participant> {
        crate::logic::runner_up(self)
    }
}

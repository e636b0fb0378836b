//! Data structures for the bracket: participants, matches, tournament aggregate.

mod bracket;
mod participant;
mod tournament;

pub use bracket::{BracketMatch, Slot};
pub use participant::{Participant, ParticipantId};
pub use tournament::{
    bracket_size_for, matches_in_round, round_offset, rounds_for, BracketError, Tournament,
    TournamentStatus,
};

//! Single-elimination bracket engine: library with models and bracket logic.

pub mod logic;
pub mod models;

pub use logic::{
    build_bracket, champion, destination, record_result, round_of, runner_up, seeding_order,
};
pub use models::{
    bracket_size_for, matches_in_round, round_offset, rounds_for, BracketError, BracketMatch,
    Participant, ParticipantId, Slot, Tournament, TournamentStatus,
};

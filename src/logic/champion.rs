//! Read-only lookups on a finished bracket.

use crate::models::{Participant, Tournament, TournamentStatus};

/// The final's winner, once the tournament is completed.
pub fn champion(tournament: &Tournament) -> Option<&Participant> {
    if tournament.status != TournamentStatus::Completed {
        return None;
    }
    tournament.final_match()?.winner()
}

/// The losing finalist, once the tournament is completed.
pub fn runner_up(tournament: &Tournament) -> Option<&Participant> {
    if tournament.status != TournamentStatus::Completed {
        return None;
    }
    tournament.final_match()?.loser()
}

//! Bracket construction: seeded round-1 placement plus automatic bye resolution.

use crate::logic::advancer::{advance_from, final_decided};
use crate::logic::seeding::seeding_order;
use crate::models::{
    bracket_size_for, rounds_for, BracketError, Participant, Tournament, TournamentStatus,
};
use std::collections::HashSet;

/// Build a bracket from an ordered, seeded participant list.
///
/// 1. `bracket_size` = smallest power of two >= N; `rounds = log2(bracket_size)`.
/// 2. Allocate all `bracket_size - 1` matches up front, ordered by round.
/// 3. Place seeds using the standard table; missing seeds leave empty slots (byes).
/// 4. Resolve every round-1 bye and carry its winner forward.
///
/// Seeds must be exactly `1..=N` in the supplied order and ids must be unique.
pub fn build_bracket(participants: &[Participant]) -> Result<Tournament, BracketError> {
    validate_participants(participants)?;

    let n = participants.len();
    let size = bracket_size_for(n);
    let mut tournament = Tournament::with_rounds(rounds_for(size));

    let order = seeding_order(size);
    for (m, pair) in tournament.bracket.iter_mut().zip(order.chunks_exact(2)) {
        m.participant1 = seat(participants, pair[0]);
        m.participant2 = seat(participants, pair[1]);
    }

    let mut byes = 0usize;
    for idx in 0..size / 2 {
        let m = &mut tournament.bracket[idx];
        if !m.is_bye() {
            continue;
        }
        let winner = m
            .participant1
            .as_ref()
            .or(m.participant2.as_ref())
            .map(|p| p.id.clone());
        m.winner_id = winner;
        byes += 1;
        advance_from(&mut tournament, idx);
    }

    if final_decided(&tournament) {
        tournament.status = TournamentStatus::Completed;
    }

    log::debug!(
        "Built bracket: {} participants, size {}, {} rounds, {} byes",
        n,
        size,
        tournament.rounds,
        byes
    );
    Ok(tournament)
}

/// Participant holding `seed`, if that seed is in the field.
fn seat(participants: &[Participant], seed: u32) -> Option<Participant> {
    participants.get(seed as usize - 1).cloned()
}

fn validate_participants(participants: &[Participant]) -> Result<(), BracketError> {
    if participants.len() < 2 {
        return Err(BracketError::InvalidInput(format!(
            "need at least 2 participants, got {}",
            participants.len()
        )));
    }
    let mut ids = HashSet::with_capacity(participants.len());
    for (pos, p) in participants.iter().enumerate() {
        if p.id.trim().is_empty() {
            return Err(BracketError::InvalidInput(format!(
                "participant at position {} has an empty id",
                pos + 1
            )));
        }
        if p.seed as usize != pos + 1 {
            return Err(BracketError::InvalidInput(format!(
                "participant {} has seed {}, expected {}",
                p.id,
                p.seed,
                pos + 1
            )));
        }
        if !ids.insert(p.id.as_str()) {
            return Err(BracketError::InvalidInput(format!(
                "duplicate participant id {}",
                p.id
            )));
        }
    }
    Ok(())
}

//! Result recording: validate, decide, propagate the winner forward, update status.

use crate::models::{
    matches_in_round, round_offset, BracketError, Slot, Tournament, TournamentStatus,
};

/// Where the winner of `match_index` goes: next-round match index and slot.
///
/// Returns None for the final and for indices outside the bracket. Position `p` within the
/// round feeds position `p / 2` of the next round; even `p` fills participant1, odd fills
/// participant2.
pub fn destination(bracket_size: usize, rounds: u32, match_index: usize) -> Option<(usize, Slot)> {
    let round = round_of(bracket_size, rounds, match_index)?;
    if round >= rounds {
        return None;
    }
    let p = match_index - round_offset(bracket_size, round);
    let slot = if p % 2 == 0 { Slot::One } else { Slot::Two };
    Some((round_offset(bracket_size, round + 1) + p / 2, slot))
}

/// Round (1-based) containing `match_index`.
pub fn round_of(bracket_size: usize, rounds: u32, match_index: usize) -> Option<u32> {
    (1..=rounds).find(|&r| {
        let start = round_offset(bracket_size, r);
        match_index >= start && match_index < start + matches_in_round(bracket_size, r)
    })
}

/// Record `winner_id` as the winner of `match_index`.
///
/// Fails without touching the tournament when the index is out of range, the match is already
/// decided, or `winner_id` is not one of the two occupied slots. Authorization is the caller's job.
pub fn record_result(
    tournament: &mut Tournament,
    match_index: usize,
    winner_id: &str,
) -> Result<(), BracketError> {
    check_shape(tournament)?;

    let m = tournament
        .bracket
        .get(match_index)
        .ok_or(BracketError::NotFound(match_index))?;
    if m.is_decided() {
        return Err(BracketError::AlreadyDecided(match_index));
    }
    let both_seated = m.participant1.is_some() && m.participant2.is_some();
    if !both_seated || m.slot_of(winner_id).is_none() {
        return Err(BracketError::InvalidParticipant {
            match_index,
            winner_id: winner_id.to_string(),
        });
    }

    tournament.bracket[match_index].winner_id = Some(winner_id.to_string());
    log::debug!(
        "Recorded winner {} for match {} (round {})",
        winner_id,
        match_index,
        tournament.bracket[match_index].round
    );
    advance_from(tournament, match_index);

    tournament.status = if final_decided(tournament) {
        TournamentStatus::Completed
    } else if tournament.status == TournamentStatus::Pending {
        TournamentStatus::InProgress
    } else {
        tournament.status
    };
    if tournament.status == TournamentStatus::Completed {
        log::info!("Tournament completed, champion {}", winner_id);
    }
    Ok(())
}

/// Rejects aggregates whose bracket length does not match `rounds`.
pub(crate) fn check_shape(tournament: &Tournament) -> Result<(), BracketError> {
    if tournament.rounds == 0 || tournament.rounds >= usize::BITS {
        return Err(BracketError::InvalidInput(format!(
            "unsupported round count {}",
            tournament.rounds
        )));
    }
    let expected = tournament.bracket_size() - 1;
    if tournament.bracket.len() != expected {
        return Err(BracketError::InvalidInput(format!(
            "bracket has {} matches, expected {}",
            tournament.bracket.len(),
            expected
        )));
    }
    Ok(())
}

pub(crate) fn final_decided(tournament: &Tournament) -> bool {
    tournament.final_match().is_some_and(|m| m.is_decided())
}

/// Carry the winner of `from` forward, resolving byes round after round.
///
/// Each step copies the decided winner into its destination slot. If the destination's other
/// feeder can never produce anyone, the destination is itself a bye and the loop moves on to it.
pub(crate) fn advance_from(tournament: &mut Tournament, from: usize) {
    let size = tournament.bracket_size();
    let rounds = tournament.rounds;
    let mut current = from;
    loop {
        let Some(winner) = tournament.bracket[current].winner().cloned() else {
            break;
        };
        let Some((dest, slot)) = destination(size, rounds, current) else {
            break;
        };
        let sibling = match slot {
            Slot::One => current + 1,
            Slot::Two => current - 1,
        };
        *tournament.bracket[dest].slot_mut(slot) = Some(winner.clone());
        if !is_void(tournament, sibling) {
            break;
        }
        log::debug!("Match {} is a bye, advancing {}", dest, winner.name);
        tournament.bracket[dest].winner_id = Some(winner.id);
        current = dest;
    }
}

/// A match is void when every round-1 match under it has two empty slots.
fn is_void(tournament: &Tournament, match_index: usize) -> bool {
    let size = tournament.bracket_size();
    let Some(round) = round_of(size, tournament.rounds, match_index) else {
        return false;
    };
    let p = match_index - round_offset(size, round);
    let span = 1usize << (round - 1);
    tournament.bracket[p * span..(p + 1) * span]
        .iter()
        .all(|m| m.participant1.is_none() && m.participant2.is_none())
}

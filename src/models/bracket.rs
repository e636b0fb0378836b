//! BracketMatch and Slot: one fixture of the flat bracket arena.

use crate::models::participant::{Participant, ParticipantId};
use serde::{Deserialize, Serialize};

/// Which side of a match a participant occupies.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    One,
    Two,
}

/// A single match. `match_index` and `round` never change after the bracket is built.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BracketMatch {
    /// 0-based position in the flat match list; the addressing key for results.
    pub match_index: usize,
    /// 1-based round; the final has `round == rounds`.
    pub round: u32,
    /// None while undetermined, or when the slot is a bye.
    pub participant1: Option<Participant>,
    pub participant2: Option<Participant>,
    /// None until decided. Once set, equals one of the two slot ids.
    pub winner_id: Option<ParticipantId>,
}

impl BracketMatch {
    pub fn new(match_index: usize, round: u32) -> Self {
        Self {
            match_index,
            round,
            participant1: None,
            participant2: None,
            winner_id: None,
        }
    }

    pub fn slot(&self, slot: Slot) -> Option<&Participant> {
        match slot {
            Slot::One => self.participant1.as_ref(),
            Slot::Two => self.participant2.as_ref(),
        }
    }

    pub(crate) fn slot_mut(&mut self, slot: Slot) -> &mut Option<Participant> {
        match slot {
            Slot::One => &mut self.participant1,
            Slot::Two => &mut self.participant2,
        }
    }

    /// Both slots in order (participant1, participant2).
    pub fn slots(&self) -> [Option<&Participant>; 2] {
        [self.participant1.as_ref(), self.participant2.as_ref()]
    }

    pub fn is_decided(&self) -> bool {
        self.winner_id.is_some()
    }

    /// Exactly one slot populated.
    pub fn is_bye(&self) -> bool {
        self.participant1.is_some() != self.participant2.is_some()
    }

    /// Both slots populated and no winner yet: needs a human decision.
    pub fn is_playable(&self) -> bool {
        self.participant1.is_some() && self.participant2.is_some() && !self.is_decided()
    }

    /// Which slot holds the participant with this id, if any.
    pub fn slot_of(&self, id: &str) -> Option<Slot> {
        if self.participant1.as_ref().is_some_and(|p| p.id == id) {
            Some(Slot::One)
        } else if self.participant2.as_ref().is_some_and(|p| p.id == id) {
            Some(Slot::Two)
        } else {
            None
        }
    }

    pub fn winner(&self) -> Option<&Participant> {
        let id = self.winner_id.as_deref()?;
        self.slot_of(id).and_then(|s| self.slot(s))
    }

    /// The other side of a decided match. None for byes and undecided matches.
    pub fn loser(&self) -> Option<&Participant> {
        let id = self.winner_id.as_deref()?;
        match self.slot_of(id)? {
            Slot::One => self.participant2.as_ref(),
            Slot::Two => self.participant1.as_ref(),
        }
    }
}

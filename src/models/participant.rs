//! Participant: an entrant as supplied by the caller, and the slot tuple copied into matches.

use serde::{Deserialize, Serialize};

/// Opaque participant identifier, owned by the caller.
pub type ParticipantId = String;

/// An entrant in the bracket. Seeds are positional (1-based), never a skill rating.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    pub seed: u32,
}

impl Participant {
    pub fn new(id: impl Into<ParticipantId>, name: impl Into<String>, seed: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            seed,
        }
    }

    /// Seed an ordered list of `(id, name)` pairs: seed = 1-based position.
    pub fn seeded<I, S, N>(entries: I) -> Vec<Participant>
    where
        I: IntoIterator<Item = (S, N)>,
        S: Into<ParticipantId>,
        N: Into<String>,
    {
        entries
            .into_iter()
            .zip(1u32..)
            .map(|((id, name), seed)| Participant::new(id, name, seed))
            .collect()
    }
}

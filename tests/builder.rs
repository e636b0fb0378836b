//! Integration tests for bracket construction: shape, seeding, byes.

use bracket_engine::{build_bracket, BracketError, Participant, Tournament, TournamentStatus};

fn field(n: usize) -> Vec<Participant> {
    Participant::seeded((1..=n).map(|i| (format!("p{i}"), format!("Player {i}"))))
}

fn seeds_in(t: &Tournament, idx: usize) -> (Option<u32>, Option<u32>) {
    let m = &t.bracket[idx];
    (
        m.participant1.as_ref().map(|p| p.seed),
        m.participant2.as_ref().map(|p| p.seed),
    )
}

#[test]
fn build_requires_at_least_2_participants() {
    assert!(matches!(build_bracket(&[]), Err(BracketError::InvalidInput(_))));
    assert!(matches!(build_bracket(&field(1)), Err(BracketError::InvalidInput(_))));
}

#[test]
fn build_rejects_duplicate_ids() {
    let mut players = field(4);
    players[3].id = "p1".to_string();
    assert!(matches!(build_bracket(&players), Err(BracketError::InvalidInput(_))));
}

#[test]
fn build_rejects_out_of_order_seeds() {
    let mut players = field(4);
    players.swap(0, 1);
    assert!(matches!(build_bracket(&players), Err(BracketError::InvalidInput(_))));
}

#[test]
fn four_participants_no_byes() {
    let t = build_bracket(&field(4)).unwrap();
    assert_eq!(t.rounds, 2);
    assert_eq!(t.bracket.len(), 3);
    assert_eq!(t.round_matches(1).len(), 2);
    assert_eq!(t.round_matches(2).len(), 1);
    assert!(t.bracket.iter().all(|m| m.winner_id.is_none()));
    assert_eq!(seeds_in(&t, 0), (Some(1), Some(4)));
    assert_eq!(seeds_in(&t, 1), (Some(2), Some(3)));
    assert_eq!(seeds_in(&t, 2), (None, None));
    assert_eq!(t.status, TournamentStatus::Pending);
}

#[test]
fn five_participants_three_byes_resolved() {
    let t = build_bracket(&field(5)).unwrap();
    assert_eq!(t.rounds, 3);
    assert_eq!(t.bracket.len(), 7);
    let per_round: Vec<usize> = (1..=3).map(|r| t.round_matches(r).len()).collect();
    assert_eq!(per_round, vec![4, 2, 1]);

    let byes: Vec<_> = t.round_matches(1).iter().filter(|m| m.is_bye()).collect();
    assert_eq!(byes.len(), 3);
    assert!(byes.iter().all(|m| m.winner_id.is_some()));

    // Byes go to the top three seeds; 4 vs 5 is the only real first-round match.
    let bye_seeds: Vec<u32> = byes.iter().filter_map(|m| m.winner()).map(|p| p.seed).collect();
    assert_eq!(bye_seeds, vec![1, 2, 3]);
    assert_eq!(seeds_in(&t, 1), (Some(4), Some(5)));

    // Seed 1 waits in the semi for the 4/5 winner; seeds 2 and 3 already meet.
    assert_eq!(seeds_in(&t, 4), (Some(1), None));
    assert_eq!(seeds_in(&t, 5), (Some(2), Some(3)));
    assert!(t.bracket[4].winner_id.is_none());
    assert_eq!(t.status, TournamentStatus::Pending);
}

#[test]
fn three_participants_top_seed_reaches_final() {
    let t = build_bracket(&field(3)).unwrap();
    assert_eq!(t.rounds, 2);
    assert_eq!(t.bracket[0].winner_id.as_deref(), Some("p1"));
    assert_eq!(seeds_in(&t, 2), (Some(1), None));
    assert_eq!(t.playable_matches().count(), 1);
}

#[test]
fn two_participants_single_final() {
    let t = build_bracket(&field(2)).unwrap();
    assert_eq!(t.rounds, 1);
    assert_eq!(t.bracket.len(), 1);
    assert_eq!(seeds_in(&t, 0), (Some(1), Some(2)));
    assert_eq!(t.status, TournamentStatus::Pending);
}

#[test]
fn slot_copies_carry_name_and_seed() {
    let t = build_bracket(&field(6)).unwrap();
    let p = t.bracket[0].participant1.as_ref().unwrap();
    assert_eq!(p.id, "p1");
    assert_eq!(p.name, "Player 1");
    assert_eq!(p.seed, 1);
}

//! Property tests: bracket shape for any field size, and full random playthroughs.

use bracket_engine::{
    bracket_size_for, build_bracket, record_result, Participant, TournamentStatus,
};
use proptest::prelude::*;

fn field(n: usize) -> Vec<Participant> {
    Participant::seeded((1..=n).map(|i| (format!("p{i}"), format!("Player {i}"))))
}

proptest! {
    #[test]
    fn shape_matches_field_size(n in 2usize..200) {
        let t = build_bracket(&field(n)).unwrap();
        let size = bracket_size_for(n);
        prop_assert!(size.is_power_of_two() && size >= n && size / 2 < n);
        prop_assert_eq!(t.bracket_size(), size);
        prop_assert_eq!(t.bracket.len(), size - 1);
        prop_assert_eq!(1usize << t.rounds, size);

        let byes: Vec<_> = t.round_matches(1).iter().filter(|m| m.is_bye()).collect();
        prop_assert_eq!(byes.len(), size - n);
        prop_assert!(byes.iter().all(|m| m.winner_id.is_some()));

        // Top seeds get the byes.
        let mut bye_seeds: Vec<u32> = byes.iter().filter_map(|m| m.winner()).map(|p| p.seed).collect();
        bye_seeds.sort_unstable();
        prop_assert_eq!(bye_seeds, (1..=(size - n) as u32).collect::<Vec<_>>());

        prop_assert_eq!(t.status, TournamentStatus::Pending);
        prop_assert!(t.final_match().is_some_and(|m| m.round == t.rounds));
    }

    #[test]
    fn random_playthrough_completes(n in 2usize..70, picks in proptest::collection::vec(any::<bool>(), 70)) {
        let mut t = build_bracket(&field(n)).unwrap();
        let mut decisions = 0usize;
        loop {
            let Some(idx) = t.playable_matches().next().map(|m| m.match_index) else {
                break;
            };
            let m = &t.bracket[idx];
            let winner = if picks[decisions % picks.len()] {
                m.participant1.as_ref().unwrap().id.clone()
            } else {
                m.participant2.as_ref().unwrap().id.clone()
            };
            prop_assert!(t.status != TournamentStatus::Completed);
            record_result(&mut t, idx, &winner).unwrap();
            decisions += 1;
        }
        // Every decision eliminates exactly one entrant.
        prop_assert_eq!(decisions, n - 1);
        prop_assert_eq!(t.status, TournamentStatus::Completed);
        prop_assert!(t.champion().is_some());
        prop_assert!(t.bracket.iter().all(|m| m.winner_id.is_some()));
    }
}

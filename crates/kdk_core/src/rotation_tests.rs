use super::*;
use crate::types::Gender;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn roster(n: usize) -> Vec<Player> {
    (0..n)
        .map(|i| Player::new(format!("p{}", i), format!("Player {}", i), Gender::Male))
        .collect()
}

#[test]
fn test_priority_puts_fewest_played_first() {
    let players = roster(6);
    let refs: Vec<&Player> = players.iter().collect();
    let mut counts = PlayCounts::new();
    counts.record(&Match::new(
        "m".into(),
        1,
        1,
        ["p0".into(), "p1".into()],
        ["p2".into(), "p3".into()],
    ));
    let mut rng = StdRng::seed_from_u64(7);

    let order = priority_order(&refs, &counts, &mut rng);

    let front: HashSet<&str> = order[..2].iter().map(|p| p.id.as_str()).collect();
    assert_eq!(front, HashSet::from(["p4", "p5"]));
    assert!(order.windows(2).all(|w| counts.get(&w[0].id) <= counts.get(&w[1].id)));
}

#[test]
fn test_remainder_sits_out() {
    let players = roster(10);
    let refs: Vec<&Player> = players.iter().collect();
    let mut rng = StdRng::seed_from_u64(1);

    let (matches, counts) = rotating_rounds(&refs, 2, 1, 1, PlayCounts::new(), &mut rng);

    assert_eq!(matches.len(), 2);
    let total: u32 = players.iter().map(|p| counts.get(&p.id)).sum();
    assert_eq!(total, 8);
}

#[test]
fn test_play_counts_stay_even() {
    // 10 players, 5 rounds: 40 slots, so everyone plays exactly 4 times
    let players = roster(10);
    let refs: Vec<&Player> = players.iter().collect();
    let mut rng = StdRng::seed_from_u64(42);

    let (matches, counts) = rotating_rounds(&refs, 2, 1, 5, PlayCounts::new(), &mut rng);

    assert_eq!(matches.len(), 10);
    for p in &players {
        assert_eq!(counts.get(&p.id), 4, "{} played {}", p.id, counts.get(&p.id));
    }
    assert_eq!(counts, PlayCounts::from_matches(&matches));
}

#[test]
fn test_round_numbers_and_courts() {
    let players = roster(12);
    let refs: Vec<&Player> = players.iter().collect();
    let mut rng = StdRng::seed_from_u64(3);

    let (matches, _) = rotating_rounds(&refs, 2, 5, 2, PlayCounts::new(), &mut rng);

    let rounds: Vec<u32> = matches.iter().map(|m| m.round).collect();
    assert_eq!(rounds, vec![5, 5, 5, 6, 6, 6]);
    let courts: Vec<u32> = matches.iter().map(|m| m.court).collect();
    assert_eq!(courts, vec![1, 2, 1, 1, 2, 1]);
}

#[test]
fn test_no_player_twice_in_a_round() {
    let players = roster(13);
    let refs: Vec<&Player> = players.iter().collect();
    let mut rng = StdRng::seed_from_u64(99);

    let (matches, _) = rotating_rounds(&refs, 3, 1, 4, PlayCounts::new(), &mut rng);

    for round in 1..=4 {
        let ids: Vec<&String> = matches
            .iter()
            .filter(|m| m.round == round)
            .flat_map(|m| m.players())
            .collect();
        let unique: HashSet<&&String> = ids.iter().collect();
        assert_eq!(ids.len(), 12);
        assert_eq!(unique.len(), ids.len());
    }
}

#[test]
fn test_round_range_does_not_overflow() {
    let players = roster(4);
    let refs: Vec<&Player> = players.iter().collect();
    let mut rng = StdRng::seed_from_u64(6);

    let (matches, _) = rotating_rounds(&refs, 1, u32::MAX - 1, 5, PlayCounts::new(), &mut rng);

    let rounds: Vec<u32> = matches.iter().map(|m| m.round).collect();
    assert_eq!(rounds, vec![u32::MAX - 1]);
}

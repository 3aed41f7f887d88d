//! Properties every generated schedule must hold, across roster sizes and
//! modes.

use kdk_core::{
    compute_standings, generate_matches_with, Gender, Match, MatchScore, Player,
    TournamentConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn roster(n: usize) -> Vec<Player> {
    (0..n)
        .map(|i| {
            let gender = if i % 3 == 0 { Gender::Female } else { Gender::Male };
            Player::new(format!("p{}", i), format!("Player {}", i), gender)
                .with_rating(2.5 + (i % 5) as f64 * 0.5)
        })
        .collect()
}

fn configs() -> Vec<TournamentConfig> {
    let base = TournamentConfig {
        courts: 2,
        rounds: 6,
        ..Default::default()
    };
    vec![
        base,
        TournamentConfig {
            mixed_doubles: true,
            ..base
        },
        TournamentConfig {
            strict_gender: true,
            ..base
        },
    ]
}

fn check_round_uniqueness(matches: &[Match]) {
    let rounds: HashSet<u32> = matches.iter().map(|m| m.round).collect();
    for round in rounds {
        let ids: Vec<&String> = matches
            .iter()
            .filter(|m| m.round == round)
            .flat_map(|m| m.players())
            .collect();
        let unique: HashSet<&&String> = ids.iter().collect();
        assert_eq!(ids.len(), unique.len(), "player twice in round {}", round);
    }
}

// =============================================================================
// Generation
// =============================================================================

#[test]
fn test_matches_only_reference_active_players() {
    for n in 4..=17 {
        let mut players = roster(n + 1);
        players[n].active = false;
        let active: HashSet<&str> = players[..n].iter().map(|p| p.id.as_str()).collect();

        for (seed, config) in configs().iter().enumerate() {
            let mut rng = StdRng::seed_from_u64(seed as u64 + n as u64);
            let matches = generate_matches_with(&players, config, &mut rng);

            assert!(!matches.is_empty(), "{} players, {:?}", n, config);
            for m in &matches {
                assert!(m.players().all(|id| active.contains(id.as_str())));
                assert!(m.score.is_none());
                assert!(m.court >= 1 && m.court <= config.courts);
                assert!(m.round >= 1 && m.round <= config.rounds);
            }
            check_round_uniqueness(&matches);

            let ids: HashSet<&str> = matches.iter().map(|m| m.id.as_str()).collect();
            assert_eq!(ids.len(), matches.len());
        }
    }
}

#[test]
fn test_fixed_pattern_for_eight_players() {
    let players = roster(8);
    let config = TournamentConfig {
        courts: 1,
        rounds: 4,
        ..Default::default()
    };
    let mut rng = StdRng::seed_from_u64(0);

    let matches = generate_matches_with(&players, &config, &mut rng);

    let expected: [[[usize; 2]; 2]; 8] = [
        [[0, 1], [2, 3]],
        [[4, 5], [6, 7]],
        [[0, 4], [2, 6]],
        [[1, 5], [3, 7]],
        [[0, 2], [5, 7]],
        [[1, 3], [4, 6]],
        [[0, 7], [3, 6]],
        [[1, 4], [2, 5]],
    ];
    for (i, (m, [t1, t2])) in matches.iter().zip(expected.iter()).enumerate() {
        assert_eq!(m.round as usize, i / 2 + 1);
        assert_eq!(m.team1, [players[t1[0]].id.clone(), players[t1[1]].id.clone()]);
        assert_eq!(m.team2, [players[t2[0]].id.clone(), players[t2[1]].id.clone()]);
    }
}

// =============================================================================
// Standings
// =============================================================================

#[test]
fn test_completed_schedule_standings_balance() {
    let players = roster(10);
    let config = TournamentConfig {
        courts: 2,
        rounds: 5,
        ..Default::default()
    };
    let mut rng = StdRng::seed_from_u64(21);
    let mut matches = generate_matches_with(&players, &config, &mut rng);
    for (i, m) in matches.iter_mut().enumerate() {
        m.score = Some(MatchScore::new((i % 7) as u32, 3));
    }

    let standings = compute_standings(&players, &matches);

    let total_for: u64 = standings.iter().map(|s| s.points_for).sum();
    let total_against: u64 = standings.iter().map(|s| s.points_against).sum();
    assert_eq!(total_for, total_against);

    let total_wins: u32 = standings.iter().map(|s| s.wins).sum();
    let total_losses: u32 = standings.iter().map(|s| s.losses).sum();
    assert_eq!(total_wins, total_losses);

    for s in &standings {
        assert_eq!(s.wins + s.losses + s.draws, s.matches_played);
    }
    for pair in standings.windows(2) {
        let key = |s: &kdk_core::PlayerStats| (s.wins, s.point_diff, s.points_for);
        assert!(key(&pair[0]) >= key(&pair[1]));
    }
}

use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn session_with(n: usize) -> TournamentSession {
    (0..n).fold(TournamentSession::default(), |s, i| {
        s.add_player(&format!("Player {}", i), Gender::Male, None)
            .unwrap()
    })
}

#[test]
fn test_add_player_assigns_unique_ids() {
    let session = session_with(3);

    assert_eq!(session.players.len(), 3);
    assert!(session.players.iter().all(|p| p.active));
    assert_ne!(session.players[0].id, session.players[1].id);
}

#[test]
fn test_add_player_validation() {
    let session = session_with(1);

    assert_eq!(
        session.add_player("   ", Gender::Male, None),
        Err(SessionError::EmptyName)
    );
    assert_eq!(
        session.add_player("player 0", Gender::Female, None),
        Err(SessionError::DuplicateName("player 0".into()))
    );
    assert_eq!(
        session.add_player("New", Gender::Female, Some(0.0)),
        Err(SessionError::InvalidRating(0.0))
    );

    let next = session.add_player("  Kim ", Gender::Female, Some(3.5)).unwrap();
    let kim = next.players.last().unwrap();
    assert_eq!(kim.name, "Kim");
    assert_eq!(kim.rating, Some(3.5));
}

#[test]
fn test_duplicate_names_fold_accents() {
    let session = TournamentSession::default()
        .add_player("Åsa Öberg", Gender::Female, None)
        .unwrap();

    assert_eq!(
        session.add_player("åsa öBERG", Gender::Female, None),
        Err(SessionError::DuplicateName("åsa öBERG".into()))
    );
}

#[test]
fn test_operations_leave_previous_value_untouched() {
    let before = session_with(4);
    let id = before.players[0].id.clone();

    let after = before.toggle_active(&id).unwrap();

    assert!(before.players[0].active);
    assert!(!after.players[0].active);
    assert_eq!(after.active_count(), 3);
}

#[test]
fn test_unknown_player_errors() {
    let session = session_with(2);

    assert_eq!(
        session.remove_player("nope"),
        Err(SessionError::UnknownPlayer("nope".into()))
    );
    assert!(session.toggle_active("nope").is_err());
}

#[test]
fn test_remove_player_keeps_matches() {
    let mut rng = StdRng::seed_from_u64(1);
    let session = session_with(8).generate(&mut rng);
    let id = session.players[0].id.clone();

    let next = session.remove_player(&id).unwrap();

    assert_eq!(next.players.len(), 7);
    assert_eq!(next.matches, session.matches);
}

#[test]
fn test_config_locked_once_generated() {
    let mut rng = StdRng::seed_from_u64(2);
    let config = TournamentConfig {
        courts: 2,
        rounds: 5,
        ..Default::default()
    };
    let session = session_with(8).set_config(config);
    assert_eq!(session.config, config);

    let session = session.generate(&mut rng);
    let locked = session.set_config(TournamentConfig::default());
    assert_eq!(locked.config, config);

    let unlocked = locked.reset_matches().set_config(TournamentConfig::default());
    assert_eq!(unlocked.config, TournamentConfig::default());
}

#[test]
fn test_record_and_clear_score() {
    let mut rng = StdRng::seed_from_u64(3);
    let session = session_with(8).generate(&mut rng);
    let id = session.matches[0].id.clone();

    let scored = session.record_score(&id, 6, 2);
    assert_eq!(scored.matches[0].score, Some(MatchScore::new(6, 2)));
    assert_eq!(scored.standings().iter().filter(|s| s.wins == 1).count(), 2);

    let cleared = scored.clear_score(&id);
    assert_eq!(cleared.matches[0].score, None);

    assert_eq!(session.record_score("missing", 1, 0), session);
}

#[test]
fn test_reset_and_clear() {
    let mut rng = StdRng::seed_from_u64(4);
    let session = session_with(5).generate(&mut rng);
    assert!(!session.matches.is_empty());

    let reset = session.reset_matches();
    assert!(reset.matches.is_empty());
    assert_eq!(reset.players, session.players);

    assert_eq!(session.clear_all(), TournamentSession::default());
}

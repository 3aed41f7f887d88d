use super::*;
use crate::session::TournamentSession;
use kdk_core::{start_bracket, BracketFormat, BracketState, Gender};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("kdk_store_{}_{}.json", std::process::id(), name))
}

#[test]
fn test_missing_file_loads_default() {
    let path = temp_path("missing");
    let _ = std::fs::remove_file(&path);

    let session: TournamentSession = load_or_default(&path).unwrap();

    assert_eq!(session, TournamentSession::default());
}

#[test]
fn test_session_snapshot_roundtrip() {
    let path = temp_path("session");
    let mut rng = StdRng::seed_from_u64(9);
    let session = (0..6)
        .fold(TournamentSession::default(), |s, i| {
            s.add_player(&format!("P{}", i), Gender::Female, Some(3.0))
                .unwrap()
        })
        .generate(&mut rng);
    let session = session.record_score(&session.matches[0].id.clone(), 6, 4);

    save(&path, &session).unwrap();
    let loaded: TournamentSession = load(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded, session);
}

#[test]
fn test_bracket_snapshot_roundtrip() {
    let path = temp_path("bracket");
    let state = start_bracket(4, BracketFormat::Singles, &[]).unwrap();

    save(&path, &state).unwrap();
    let loaded: BracketState = load_or_default(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded, state);
}

#[test]
fn test_corrupt_file_reports_path() {
    let path = temp_path("corrupt");
    std::fs::write(&path, "{ not json").unwrap();

    let err = load::<TournamentSession>(&path).unwrap_err();
    let _ = std::fs::remove_file(&path);

    assert!(matches!(err, StoreError::Parse { .. }));
    assert!(err.to_string().contains("kdk_store_"));
}

//! Plain-text rendering of rosters, schedules, standings and brackets

use kdk_core::{completed_count, rounds_of, BracketState, BracketTeam, MatchScore, Player};

use crate::session::TournamentSession;

/// Display name for an id, falling back to the id itself for players that
/// were removed after the schedule was made
fn name_of<'a>(players: &'a [Player], id: &'a str) -> &'a str {
    players
        .iter()
        .find(|p| p.id == id)
        .map(|p| p.name.as_str())
        .unwrap_or(id)
}

fn team_names(players: &[Player], team: &[String; 2]) -> String {
    format!("{} / {}", name_of(players, &team[0]), name_of(players, &team[1]))
}

fn score_text(score: Option<MatchScore>) -> String {
    match score {
        Some(s) => format!("{:>2} - {:<2}", s.team1, s.team2),
        None => "  vs   ".to_string(),
    }
}

pub fn roster_report(session: &TournamentSession) -> String {
    let mut report = String::new();
    report.push_str(&format!(
        "=== Players ({} active / {}) ===\n",
        session.active_count(),
        session.players.len()
    ));
    report.push_str(&format!(
        "{:<38} {:<20} {:>3} {:>6} {:>7}\n",
        "Id", "Name", "G", "Rating", "Active"
    ));
    report.push_str(&"-".repeat(78));
    report.push('\n');

    for p in &session.players {
        let rating = p
            .rating
            .map(|r| format!("{:.1}", r))
            .unwrap_or_else(|| "-".to_string());
        report.push_str(&format!(
            "{:<38} {:<20} {:>3} {:>6} {:>7}\n",
            p.id,
            p.name,
            p.gender.as_str(),
            rating,
            if p.active { "yes" } else { "no" }
        ));
    }
    report
}

pub fn schedule_report(session: &TournamentSession) -> String {
    let mut report = String::new();
    let c = &session.config;
    report.push_str(&format!(
        "=== Schedule: {} courts, {} rounds{}{} ===\n",
        c.courts,
        c.rounds,
        if c.mixed_doubles { ", mixed doubles" } else { "" },
        if c.strict_gender { ", strict gender" } else { "" },
    ));

    if session.matches.is_empty() {
        report.push_str("No matches generated yet.\n");
        return report;
    }

    for (round, matches) in rounds_of(&session.matches) {
        report.push_str(&format!("\nRound {}\n", round));
        for m in matches {
            report.push_str(&format!(
                "  [{:<16}] court {:<2} {:>32}  {}  {}\n",
                m.id,
                m.court,
                team_names(&session.players, &m.team1),
                score_text(m.score),
                team_names(&session.players, &m.team2)
            ));
        }
    }

    report.push_str(&format!(
        "\n{}/{} matches completed\n",
        completed_count(&session.matches),
        session.matches.len()
    ));
    report
}

pub fn standings_report(session: &TournamentSession) -> String {
    let mut report = String::new();
    report.push_str("=== Standings ===\n");
    report.push_str(&format!(
        "{:>3} {:<20} {:>3} {:>3} {:>3} {:>3} {:>5} {:>5} {:>5} {:>6}\n",
        "#", "Player", "P", "W", "L", "D", "PF", "PA", "Diff", "Win%"
    ));
    report.push_str(&"-".repeat(66));
    report.push('\n');

    for (rank, s) in session.standings().iter().enumerate() {
        report.push_str(&format!(
            "{:>3} {:<20} {:>3} {:>3} {:>3} {:>3} {:>5} {:>5} {:>+5} {:>5.1}%\n",
            rank + 1,
            name_of(&session.players, &s.player_id),
            s.matches_played,
            s.wins,
            s.losses,
            s.draws,
            s.points_for,
            s.points_against,
            s.point_diff,
            s.win_rate * 100.0
        ));
    }
    report
}

fn bracket_team(team: &BracketTeam) -> String {
    if team.is_empty() {
        return "TBD".to_string();
    }
    team.iter()
        .map(|e| e.name.as_str())
        .collect::<Vec<_>>()
        .join(" / ")
}

pub fn bracket_report(state: &BracketState) -> String {
    let mut report = String::new();
    report.push_str(&format!(
        "=== Bracket: round of {} ({:?}, {:?}) ===\n",
        state.size, state.format, state.status
    ));

    for (index, round) in state.rounds.iter().enumerate() {
        let title = if round.round_of == 2 {
            "Final".to_string()
        } else {
            format!("Round of {}", round.round_of)
        };
        report.push_str(&format!("\n{} (round index {})\n", title, index));

        for m in &round.matches {
            report.push_str(&format!(
                "  [{:<6}] {:>32}  {}  {}\n",
                m.id,
                bracket_team(&m.team1),
                score_text(m.score),
                bracket_team(&m.team2)
            ));
        }
    }

    if let Some(champion) = state.final_winner() {
        report.push_str(&format!("\nChampion: {}\n", bracket_team(champion)));
    }
    report
}

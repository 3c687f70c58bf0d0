//! Plain-text rendering of scoreboards, standings and news.

use crate::models::{Game, GameStatus, StandingsRow, TeamRegistry};

/// Render a division's games with their edit index.
///
/// ```text
///  #  Home      Away      Score  Status
///  0  Eagles    Hawks     21-14  Final
/// ```
pub fn render_games(games: &[Game]) -> String {
    render_game_rows(&games.iter().enumerate().collect::<Vec<_>>(), "No games yet.\n")
}

/// Render only the games in `status`, keeping each game's index in the full list.
pub fn render_games_with_status(games: &[Game], status: GameStatus) -> String {
    let rows: Vec<(usize, &Game)> = games
        .iter()
        .enumerate()
        .filter(|(_, game)| game.status == status)
        .collect();
    render_game_rows(&rows, &format!("No {} games.\n", status))
}

fn render_game_rows(rows: &[(usize, &Game)], placeholder: &str) -> String {
    let Some((last_index, _)) = rows.last() else {
        return placeholder.to_string();
    };

    let home_width = column_width("Home", rows.iter().map(|(_, g)| g.home.as_str()));
    let away_width = column_width("Away", rows.iter().map(|(_, g)| g.away.as_str()));
    let scores: Vec<String> = rows
        .iter()
        .map(|(_, g)| format!("{}-{}", g.home_score, g.away_score))
        .collect();
    let score_width = column_width("Score", scores.iter().map(String::as_str));
    let index_width = last_index.to_string().len();

    let mut output = format!(
        "{:>iw$}  {:<hw$}  {:<aw$}  {:<sw$}  Status\n",
        "#",
        "Home",
        "Away",
        "Score",
        iw = index_width,
        hw = home_width,
        aw = away_width,
        sw = score_width,
    );
    for ((index, game), score) in rows.iter().zip(&scores) {
        output.push_str(&format!(
            "{:>iw$}  {:<hw$}  {:<aw$}  {:<sw$}  {}\n",
            index,
            game.home,
            game.away,
            score,
            game.status,
            iw = index_width,
            hw = home_width,
            aw = away_width,
            sw = score_width,
        ));
    }
    output
}

/// Render a ranked table.
pub fn render_standings(rows: &[StandingsRow]) -> String {
    if rows.is_empty() {
        return "No rankings yet.\n".to_string();
    }

    let team_width = column_width("Team", rows.iter().map(|r| r.record.team.as_str()));
    let rank_width = rows.len().to_string().len();

    let mut output = format!(
        "{:>rw$}  {:<tw$}  {:>3}  {:>3}  {:>5}  {:>5}  {:>5}\n",
        "#",
        "Team",
        "W",
        "L",
        "PF",
        "PA",
        "Diff",
        rw = rank_width,
        tw = team_width,
    );
    for row in rows {
        let r = &row.record;
        output.push_str(&format!(
            "{:>rw$}  {:<tw$}  {:>3}  {:>3}  {:>5}  {:>5}  {:>+5}\n",
            row.rank,
            r.team,
            r.wins,
            r.losses,
            r.points_for,
            r.points_against,
            r.diff,
            rw = rank_width,
            tw = team_width,
        ));
    }
    output
}

/// Render news items, one bullet per line, in the order given.
pub fn render_news<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
    let output: String = items
        .into_iter()
        .map(|item| format!("- {}\n", item))
        .collect();
    if output.is_empty() {
        "No news yet.\n".to_string()
    } else {
        output
    }
}

/// Render each division's teams, in registry order.
pub fn render_teams(registry: &TeamRegistry) -> String {
    let mut output = String::new();
    for (division, teams) in registry.divisions() {
        output.push_str(&format!("{}\n", division));
        if teams.is_empty() {
            output.push_str("  (no teams)\n");
        }
        for team in teams {
            output.push_str(&format!("  - {}\n", team));
        }
    }
    if output.is_empty() {
        "No teams yet.\n".to_string()
    } else {
        output
    }
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.chars().count())
        .max()
        .unwrap_or(0)
        .max(header.len())
}

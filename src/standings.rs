//! Standings computation.
//!
//! Points always accumulate, whatever the game status. Wins and losses only
//! come from [`GameStatus::Final`] games, and a final tie credits neither
//! team. The table is ordered by wins, then point differential, with teams
//! level on both left in the order they first appear in the game list.
//!
//! Scores are unbounded integers, so totals saturate at the `i64` limits
//! rather than overflow.

use std::collections::HashMap;

use crate::models::{Game, GameStatus, StandingsRow, TeamRecord};

/// Compute the division table for `games`, best team first.
pub fn compute(games: &[Game]) -> Vec<TeamRecord> {
    let mut records: Vec<TeamRecord> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();

    for game in games {
        let home = slot(&mut records, &mut slots, &game.home);
        let away = slot(&mut records, &mut slots, &game.away);

        records[home].add_points(game.home_score, game.away_score);
        records[away].add_points(game.away_score, game.home_score);

        if game.status != GameStatus::Final {
            continue;
        }
        if game.home_score > game.away_score {
            records[home].wins = records[home].wins.saturating_add(1);
            records[away].losses = records[away].losses.saturating_add(1);
        } else if game.away_score > game.home_score {
            records[away].wins = records[away].wins.saturating_add(1);
            records[home].losses = records[home].losses.saturating_add(1);
        }
    }

    for record in &mut records {
        record.diff = record.points_for.saturating_sub(record.points_against);
    }

    // sort_by is stable, so first-seen order breaks remaining ties
    records.sort_by(|a, b| b.wins.cmp(&a.wins).then_with(|| b.diff.cmp(&a.diff)));
    records
}

/// Number an already sorted table from 1.
pub fn rank(records: Vec<TeamRecord>) -> Vec<StandingsRow> {
    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| StandingsRow {
            rank: i + 1,
            record,
        })
        .collect()
}

fn slot<'a>(
    records: &mut Vec<TeamRecord>,
    slots: &mut HashMap<&'a str, usize>,
    team: &'a str,
) -> usize {
    *slots.entry(team).or_insert_with(|| {
        records.push(TeamRecord::new(team));
        records.len() - 1
    })
}

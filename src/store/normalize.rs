use crate::config::LeagueDefaults;
use crate::models::{empty_season, League, TeamRegistry};

/// Bring freshly loaded data up to the structural invariants.
///
/// - the default season exists;
/// - every season has every default division (appended empty when missing);
/// - the team registry has a list for every default division.
///
/// Existing seasons, divisions, games and teams are never removed or reordered,
/// so applying this twice is the same as applying it once.
pub fn normalize(league: &mut League, teams: &mut TeamRegistry, defaults: &LeagueDefaults) {
    league.get_or_insert_season(&defaults.season, || empty_season(&defaults.divisions));

    for season in league.seasons_mut() {
        for division in &defaults.divisions {
            season.get_or_insert_with(division, Vec::new);
        }
    }

    for division in &defaults.divisions {
        teams.ensure_division(division);
    }
}

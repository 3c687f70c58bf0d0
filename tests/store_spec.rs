use scorekeeper::auth::AdminSession;
use scorekeeper::config::LeagueDefaults;
use scorekeeper::db::Database;
use scorekeeper::error::LeagueError;
use scorekeeper::models::*;
use scorekeeper::store::LeagueStore;
use speculate2::speculate;

fn fresh_store() -> LeagueStore<Database> {
    let db = Database::open_memory().expect("Failed to create in-memory database");
    db.migrate().expect("Failed to run migrations");
    LeagueStore::load(db, LeagueDefaults::default())
}

fn final_game(home: &str, away: &str, home_score: i64, away_score: i64) -> Game {
    Game::new(home, away, home_score, away_score, GameStatus::Final)
}

speculate! {
    before {
        let mut store = fresh_store();
        let admin = AdminSession::admin();
        let guest = AdminSession::guest();
    }

    describe "load" {
        it "creates the default season with empty default divisions" {
            assert_eq!(store.season_names(), vec!["2025 Spring"]);
            assert_eq!(
                store.division_names("2025 Spring").expect("season exists"),
                vec!["Division A", "Division B"]
            );
            assert!(store.games("2025 Spring", "Division A").expect("division exists").is_empty());
            assert!(store.load_warnings().is_empty());
        }

        it "gives every default division an empty team list" {
            assert!(store.teams("Division A").expect("division exists").is_empty());
            assert!(store.teams("Division B").expect("division exists").is_empty());
        }

        it "starts with an empty news feed" {
            assert!(store.news().is_empty());
        }
    }

    describe "add_season" {
        it "adds a season with every default division" {
            store.add_season(&admin, "2026 Season").expect("Failed to add season");

            assert_eq!(store.season_names(), vec!["2025 Spring", "2026 Season"]);
            assert_eq!(
                store.division_names("2026 Season").expect("season exists"),
                vec!["Division A", "Division B"]
            );
        }

        it "stores the trimmed name" {
            store.add_season(&admin, "  2026 Fall  ").expect("Failed to add season");
            assert!(store.league().contains_season("2026 Fall"));
        }

        it "rejects an empty name without changing seasons" {
            let result = store.add_season(&admin, "");
            assert!(matches!(result, Err(LeagueError::Empty { .. })));

            let result = store.add_season(&admin, "   ");
            assert!(matches!(result, Err(LeagueError::Empty { .. })));

            assert_eq!(store.season_names().len(), 1);
        }

        it "rejects a duplicate name" {
            store.add_season(&admin, "2026 Season").expect("Failed to add season");

            let result = store.add_season(&admin, "2026 Season");
            assert!(matches!(result, Err(LeagueError::AlreadyExists { kind: "season", .. })));

            let result = store.add_season(&admin, " 2026 Season ");
            assert!(matches!(result, Err(LeagueError::AlreadyExists { .. })));

            assert_eq!(store.season_names().len(), 2);
        }

        it "requires an admin session" {
            let result = store.add_season(&guest, "2026 Season");
            assert!(matches!(result, Err(LeagueError::Unauthorized)));
            assert_eq!(store.season_names().len(), 1);
        }
    }

    describe "add_team" {
        it "appends teams in insertion order" {
            store.add_team(&admin, "Division A", "Eagles").expect("Failed to add team");
            store.add_team(&admin, "Division A", " Hawks ").expect("Failed to add team");

            assert_eq!(store.teams("Division A").expect("division exists"), ["Eagles", "Hawks"]);
            assert!(store.teams("Division B").expect("division exists").is_empty());
        }

        it "rejects a duplicate team in the same division" {
            store.add_team(&admin, "Division A", "Eagles").expect("Failed to add team");

            let result = store.add_team(&admin, "Division A", "Eagles ");
            assert!(matches!(result, Err(LeagueError::AlreadyExists { kind: "team", .. })));
            assert_eq!(store.teams("Division A").expect("division exists").len(), 1);
        }

        it "allows the same team name in another division" {
            store.add_team(&admin, "Division A", "Eagles").expect("Failed to add team");
            store.add_team(&admin, "Division B", "Eagles").expect("Failed to add team");

            assert_eq!(store.teams("Division B").expect("division exists"), ["Eagles"]);
        }

        it "rejects an empty name" {
            let result = store.add_team(&admin, "Division A", " ");
            assert!(matches!(result, Err(LeagueError::Empty { .. })));
            assert!(store.teams("Division A").expect("division exists").is_empty());
        }

        it "rejects an unknown division" {
            let result = store.add_team(&admin, "Division Z", "Eagles");
            assert!(matches!(result, Err(LeagueError::UnknownDivision(_))));
        }

        it "requires an admin session" {
            let result = store.add_team(&guest, "Division A", "Eagles");
            assert!(matches!(result, Err(LeagueError::Unauthorized)));
        }
    }

    describe "add_game" {
        it "appends to the selected division only" {
            let first = store
                .add_game(&admin, "2025 Spring", "Division A", final_game("A", "B", 10, 7))
                .expect("Failed to add game");
            let second = store
                .add_game(&admin, "2025 Spring", "Division A", final_game("C", "D", 1, 2))
                .expect("Failed to add game");

            assert_eq!((first, second), (0, 1));
            let games = store.games("2025 Spring", "Division A").expect("division exists");
            assert_eq!(games.len(), 2);
            assert_eq!(games[0].home, "A");
            assert_eq!(games[1].home, "C");
            assert!(store.games("2025 Spring", "Division B").expect("division exists").is_empty());
        }

        it "accepts negative scores as entered" {
            store
                .add_game(&admin, "2025 Spring", "Division A", final_game("A", "B", -3, 0))
                .expect("Failed to add game");

            let games = store.games("2025 Spring", "Division A").expect("division exists");
            assert_eq!(games[0].home_score, -3);
        }

        it "rejects an unknown season or division" {
            let result = store.add_game(&admin, "1999", "Division A", final_game("A", "B", 1, 0));
            assert!(matches!(result, Err(LeagueError::UnknownSeason(_))));

            let result = store.add_game(&admin, "2025 Spring", "Division Z", final_game("A", "B", 1, 0));
            assert!(matches!(result, Err(LeagueError::UnknownDivision(_))));
        }

        it "requires an admin session" {
            let result = store.add_game(&guest, "2025 Spring", "Division A", final_game("A", "B", 1, 0));
            assert!(matches!(result, Err(LeagueError::Unauthorized)));
            assert!(store.games("2025 Spring", "Division A").expect("division exists").is_empty());
        }
    }

    describe "update_game" {
        before {
            for (home, away) in [("A", "B"), ("C", "D"), ("E", "F")] {
                store
                    .add_game(&admin, "2025 Spring", "Division A", Game::new(home, away, 0, 0, GameStatus::Upcoming))
                    .expect("Failed to add game");
            }
        }

        it "replaces exactly the addressed game" {
            store
                .update_game(&admin, "2025 Spring", "Division A", 1, final_game("C", "D", 4, 2))
                .expect("Failed to update game");

            let games = store.games("2025 Spring", "Division A").expect("division exists");
            assert_eq!(games.len(), 3);
            assert_eq!(games[0], Game::new("A", "B", 0, 0, GameStatus::Upcoming));
            assert_eq!(games[1], final_game("C", "D", 4, 2));
            assert_eq!(games[2], Game::new("E", "F", 0, 0, GameStatus::Upcoming));
        }

        it "rejects an index past the end" {
            let result = store.update_game(&admin, "2025 Spring", "Division A", 3, final_game("X", "Y", 1, 0));
            assert!(matches!(result, Err(LeagueError::IndexOutOfRange { index: 3, len: 3 })));
            assert_eq!(store.games("2025 Spring", "Division A").expect("division exists")[2].home, "E");
        }

        it "requires an admin session" {
            let result = store.update_game(&guest, "2025 Spring", "Division A", 0, final_game("X", "Y", 1, 0));
            assert!(matches!(result, Err(LeagueError::Unauthorized)));
        }
    }

    describe "post_news" {
        it "appends trimmed text and lists latest first" {
            store.post_news(&admin, "  Season opens Saturday ").expect("Failed to post");
            store.post_news(&admin, "Eagles win opener").expect("Failed to post");

            assert_eq!(store.news(), ["Season opens Saturday", "Eagles win opener"]);
            assert_eq!(
                store.news_latest_first().collect::<Vec<_>>(),
                vec!["Eagles win opener", "Season opens Saturday"]
            );
        }

        it "rejects blank text" {
            let result = store.post_news(&admin, " \n ");
            assert!(matches!(result, Err(LeagueError::Empty { .. })));
            assert!(store.news().is_empty());
        }

        it "requires an admin session" {
            let result = store.post_news(&guest, "hello");
            assert!(matches!(result, Err(LeagueError::Unauthorized)));
        }
    }

    describe "standings" {
        it "ranks the division's games" {
            for game in [
                final_game("A", "B", 10, 7),
                final_game("B", "A", 3, 3),
                Game::new("A", "B", 0, 0, GameStatus::Upcoming),
            ] {
                store.add_game(&admin, "2025 Spring", "Division A", game).expect("Failed to add game");
            }

            let table = store.standings("2025 Spring", "Division A").expect("division exists");

            assert_eq!(table.len(), 2);
            assert_eq!(table[0].team, "A");
            assert_eq!((table[0].wins, table[0].losses), (1, 0));
            assert_eq!(table[1].team, "B");
            assert_eq!((table[1].wins, table[1].losses), (0, 1));
        }

        it "is empty for a division without games" {
            assert!(store.standings("2025 Spring", "Division B").expect("division exists").is_empty());
        }
    }
}

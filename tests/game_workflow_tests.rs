mod utils;
use utils::{RosterBuilder, TestSetupBuilder};

use courtstats::game::ClockTick;
use courtstats::insights::recommendations;
use courtstats::store::StateRepository;
use courtstats::{
    game_history, game_summary, known_players, player_analysis, player_trends, team_analysis,
    team_trends, GameStatus, GameStore, ScoreSide, StatKind, StatsError, StoreError,
    TrackerConfig,
};
use std::sync::Arc;

#[test]
fn fresh_game_starts_clean() {
    let setup = TestSetupBuilder::new().build();
    let game = setup
        .store
        .get_game(setup.game_id)
        .expect("game should exist after creation");

    assert_eq!(game.quarter, 1);
    assert_eq!(game.time_remaining.to_string(), "12:00");
    assert_eq!(game.status, GameStatus::InProgress);
    assert_eq!((game.score.team, game.score.opponent), (0, 0));
    assert!(game.insights.is_empty());

    let saved = setup
        .repository
        .load()
        .expect("load should succeed")
        .expect("creating a game should persist");
    assert_eq!(saved.current_game.map(|g| g.id), Some(setup.game_id));

    for player in &game.players {
        assert_eq!(
            setup.store.player_efficiency(setup.game_id, &player.id),
            Some(0),
            "{} should start at zero efficiency",
            player.name
        );
    }
}

#[test]
fn made_three_counts_three_points() {
    let mut setup = TestSetupBuilder::new().build();

    let insight = setup
        .store
        .record_stat(setup.game_id, "p1", StatKind::ThreePointMade, 1)
        .expect("stat should record");
    assert_eq!(insight, None, "a single make should not trigger any rule");

    let stats = setup.store.player_stats(setup.game_id, "p1").unwrap();
    assert_eq!(stats.points, 3);
    assert_eq!(stats.three_point_made, 1);
    assert_eq!(setup.store.player_efficiency(setup.game_id, "p1"), Some(3));
}

#[test]
fn points_always_match_made_shots() {
    let mut setup = TestSetupBuilder::new().build();
    let events = [
        ("twoPointMade", 3),
        ("2PT_MISS", 2),
        ("3PT_MADE", 2),
        ("freeThrowMade", 4),
        ("FT_MISS", 1),
        ("reboundOffense", 2),
    ];
    for (key, delta) in events {
        setup
            .store
            .record_stat_key(setup.game_id, "p2", key, delta)
            .unwrap();
    }

    let stats = setup.store.player_stats(setup.game_id, "p2").unwrap();
    assert_eq!(stats.points, 2 * 3 + 3 * 2 + 4);
    assert_eq!(stats.scored_points(), stats.points);
    // 16 points + 2 rebounds - 3 misses
    assert_eq!(setup.store.player_efficiency(setup.game_id, "p2"), Some(15));
}

#[test]
fn hot_shooter_is_called_out() {
    let mut setup = TestSetupBuilder::new().build();
    let id = setup.game_id;

    setup.store.record_stat(id, "p3", StatKind::ThreePointMade, 1).unwrap();
    setup.store.record_stat(id, "p3", StatKind::ThreePointMade, 1).unwrap();
    let insight = setup
        .store
        .record_stat(id, "p3", StatKind::ThreePointMiss, 1)
        .unwrap()
        .expect("2 of 3 from deep should fire");

    assert_eq!(
        insight,
        "Cy Moreno is hot from 3PT range (66.7%). Look for more opportunities beyond the arc."
    );
    assert_eq!(
        setup.store.get_game(id).unwrap().insights.latest(),
        Some(insight.as_str())
    );
}

#[test]
fn insight_log_keeps_the_five_newest() {
    let mut setup = TestSetupBuilder::new().build();
    let id = setup.game_id;

    for _ in 0..3 {
        setup.store.record_stat(id, "p4", StatKind::Foul, 1).unwrap();
    }
    for n in 0..7 {
        setup.store.add_insight(id, &format!("note {n}")).unwrap();
    }

    let game = setup.store.get_game(id).unwrap();
    let log: Vec<&str> = game.insights.iter().collect();
    assert_eq!(log, vec!["note 2", "note 3", "note 4", "note 5", "note 6"]);
}

#[test]
fn configured_log_capacity_applies() {
    let config = TrackerConfig {
        insight_log_capacity: 2,
        ..TrackerConfig::default()
    };
    let mut setup = TestSetupBuilder::new().with_config(config).build();
    for n in 0..4 {
        setup.store.add_insight(setup.game_id, &format!("note {n}")).unwrap();
    }

    let game = setup.store.get_game(setup.game_id).unwrap();
    assert_eq!(game.insights.capacity(), 2);
    assert_eq!(game.insights.iter().collect::<Vec<_>>(), vec!["note 2", "note 3"]);
}

#[test]
fn bad_input_is_rejected_without_side_effects() {
    let mut setup = TestSetupBuilder::new().build();
    let id = setup.game_id;
    let before = setup.store.snapshot();

    assert!(matches!(
        setup.store.record_stat_key(id, "p1", "dunk", 1),
        Err(StoreError::Stats(StatsError::InvalidStatKind(_)))
    ));
    assert!(matches!(
        setup.store.record_stat_key(id, "p1", "points", 1),
        Err(StoreError::Stats(StatsError::InvalidStatKind(_)))
    ));
    assert!(matches!(
        setup.store.record_stat(id, "p1", StatKind::Assist, -2),
        Err(StoreError::Stats(StatsError::InvalidDelta(-2)))
    ));
    assert!(matches!(
        setup.store.record_stat(id, "nobody", StatKind::Assist, 1),
        Err(StoreError::PlayerNotFound { .. })
    ));
    assert!(matches!(
        setup.store.record_stat(uuid::Uuid::new_v4(), "p1", StatKind::Assist, 1),
        Err(StoreError::GameNotFound(_))
    ));

    assert_eq!(setup.store.snapshot(), before);
}

#[test]
fn overflowing_delta_is_rejected_and_not_saved() {
    let mut setup = TestSetupBuilder::new().build();
    let id = setup.game_id;
    setup.store.record_stat(id, "p1", StatKind::TwoPointMade, 2).unwrap();
    let before = setup.store.snapshot();

    assert!(matches!(
        setup.store.record_stat(id, "p1", StatKind::TwoPointMade, 3_000_000_000),
        Err(StoreError::Stats(StatsError::InvalidDelta(3_000_000_000)))
    ));

    assert_eq!(setup.store.snapshot(), before);
    let stats = setup.store.player_stats(id, "p1").unwrap();
    assert_eq!(stats.points, 4);
    assert_eq!(stats.scored_points(), stats.points);
}

#[test]
fn game_lifecycle_through_the_store() {
    let mut setup = TestSetupBuilder::new()
        .with_roster(RosterBuilder::new().with_starting_five().with_bench_player("p6", "Fay Ruiz"))
        .build();
    let id = setup.game_id;

    assert_eq!(setup.store.get_game(id).unwrap().bench_players().count(), 1);
    assert!(setup.store.toggle_player_active(id, "p6").unwrap());
    assert!(!setup.store.toggle_player_active(id, "p1").unwrap());

    setup.store.update_score(id, ScoreSide::Team, 2).unwrap();
    setup.store.update_score(id, ScoreSide::Opponent, 3).unwrap();
    setup.store.update_time(id, "00:01").unwrap();
    assert_eq!(
        setup.store.tick_clock(id).unwrap(),
        ClockTick::Running("00:00".parse().unwrap())
    );
    assert_eq!(setup.store.tick_clock(id).unwrap(), ClockTick::Expired);

    assert_eq!(setup.store.change_quarter(id, 1).unwrap(), 2);
    assert_eq!(
        setup.store.get_game(id).unwrap().time_remaining.to_string(),
        "12:00"
    );

    setup.store.update_status(id, GameStatus::Completed).unwrap();
    assert!(matches!(
        setup.store.update_status(id, GameStatus::InProgress),
        Err(StoreError::GameCompleted(_))
    ));
}

#[test]
fn state_survives_a_restart_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let game_id = {
        let mut setup = TestSetupBuilder::new().with_json_file(dir.path()).build();
        setup
            .store
            .record_stat(setup.game_id, "p5", StatKind::ReboundDefense, 4)
            .unwrap();
        setup.store.update_score(setup.game_id, ScoreSide::Team, 10).unwrap();
        setup.game_id
    };

    let path = dir.path().join("basketball-data-storage.json");
    assert!(path.exists());

    let repository = Arc::new(courtstats::JsonFileStateRepository::new(path));
    let store = GameStore::builder(repository).open().unwrap();
    let game = store.current_game().expect("current game should be restored");

    assert_eq!(game.id, game_id);
    assert_eq!(game.score.team, 10);
    assert_eq!(store.player_stats(game_id, "p5").unwrap().rebound_defense, 4);
}

#[test]
fn trends_and_dashboard_across_games() {
    let mut setup = TestSetupBuilder::new().with_game_name("Game 1").build();
    let mut ids = vec![setup.game_id];
    for n in 2..=4 {
        let roster = RosterBuilder::new().with_starting_five().build();
        ids.push(
            setup
                .store
                .create_game(&format!("Game {n}"), "Hawks", "Owls", roster)
                .unwrap(),
        );
    }

    for (n, id) in ids.iter().enumerate() {
        let makes = n as i64 + 1;
        setup.store.record_stat(*id, "p1", StatKind::TwoPointMade, makes).unwrap();
        setup.store.record_stat(*id, "p2", StatKind::Steal, 1).unwrap();
        setup
            .store
            .update_score(*id, ScoreSide::Team, 50 + n as u32)
            .unwrap();
        setup.store.update_score(*id, ScoreSide::Opponent, 51).unwrap();
        setup.store.complete_game(*id).unwrap();
    }

    let games = setup.store.games();
    let trends = player_trends(games, "p1", 3);
    assert_eq!(trends.scoring, vec![4.0, 6.0, 8.0]);
    assert_eq!(trends.efficiency, vec![100.0, 100.0, 100.0]);
    assert_eq!(player_trends(games, "p2", 3).defense, vec![1.0, 1.0, 1.0]);

    let team = team_trends(games, 3);
    assert_eq!(team.scoring, vec![51.0, 52.0, 53.0]);
    assert_eq!(team.points_allowed, vec![51.0, 51.0, 51.0]);

    let reading = player_analysis("Ada Park", &trends).unwrap();
    assert!(!reading.scoring_improving, "rising scores read as varying");
    assert!(reading.efficient);
    let reading = team_analysis(&team).unwrap();
    assert!(reading.defense_consistent);
    assert!(!reading.strong_ball_movement);
    assert_eq!(
        reading.recommendation,
        "Maintain defensive intensity while looking for opportunities to increase scoring efficiency."
    );

    let history = game_history(games);
    assert_eq!(history.len(), 4);
    let results: Vec<&str> = history.iter().map(|row| row.result.letter()).collect();
    assert_eq!(results.iter().filter(|r| **r == "W").count(), 2);

    assert_eq!(known_players(games).len(), 5);

    let summary = game_summary(setup.store.current_game().unwrap());
    assert_eq!(summary.players.len(), 5);
    assert_eq!(summary.recommendations, recommendations(setup.store.current_game().unwrap()));
}

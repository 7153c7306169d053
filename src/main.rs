use std::path::Path;
use std::sync::Arc;

use courtstats::dashboard::{game_history, game_summary_with, player_analysis, team_analysis};
use courtstats::game::{ClockEvent, ClockRunner};
use courtstats::{GameStore, JsonFileStateRepository, TrackerConfig};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const CONFIG_FILE: &str = "courtstats.json";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "courtstats=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(err) = run().await {
        error!("{err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let dir = std::env::current_dir()?;
    let config = TrackerConfig::load_or_default(&dir.join(CONFIG_FILE))?;
    let store = open_store(&dir, config)?;

    match std::env::args().nth(1).as_deref() {
        Some("clock") => run_clock(store).await,
        None | Some("report") => {
            print_report(&store);
            Ok(())
        }
        Some(other) => Err(format!("unknown command `{other}`, expected `report` or `clock`").into()),
    }
}

fn open_store(dir: &Path, config: TrackerConfig) -> Result<GameStore, Box<dyn std::error::Error>> {
    let repository = Arc::new(JsonFileStateRepository::in_dir(dir, &config.storage_key));
    info!(path = %repository.path().display(), "Opening game store");
    Ok(GameStore::builder(repository).with_config(config).open()?)
}

fn print_report(store: &GameStore) {
    let history = game_history(store.games());
    if history.is_empty() {
        println!("No games recorded yet.");
        return;
    }

    println!("Game history");
    for row in &history {
        println!(
            "  {}  {:<20} {} vs {:<16} {:>9}  {}",
            row.date,
            row.name,
            row.team,
            row.opponent,
            row.score_line(),
            row.result.letter()
        );
    }

    let featured = store
        .current_game()
        .or_else(|| store.games().iter().max_by_key(|g| g.created_at));
    if let Some(game) = featured {
        let summary = game_summary_with(game, &store.config().recommendations);
        println!();
        println!("{} (Q{} {})", game.name, game.quarter, game.time_remaining);
        println!(
            "  FG {}/{}  3PT {}/{}  FT {}/{}",
            summary.field_goals.made,
            summary.field_goals.attempted,
            summary.three_point.made,
            summary.three_point.attempted,
            summary.free_throw.made,
            summary.free_throw.attempted
        );
        for line in &summary.players {
            println!(
                "  #{:<3} {:<20} {:>3} pts  eff {:>3}",
                line.number, line.name, line.stats.points, line.efficiency
            );
        }
        for insight in game.insights.iter() {
            println!("  ! {insight}");
        }
        for recommendation in &summary.recommendations {
            println!("  - {recommendation}");
        }
        for player in &game.players {
            let trends = courtstats::player_trends(store.games(), &player.id, store.config().trend_window);
            if let Some(analysis) = player_analysis(&player.name, &trends) {
                println!("  * {} {}", analysis.summary, analysis.recommendation);
            }
        }
    }

    let trends = courtstats::team_trends(store.games(), store.config().trend_window);
    println!();
    println!("Recent scoring: {:?}", trends.scoring);
    println!("Points allowed: {:?}", trends.points_allowed);
    if let Some(analysis) = team_analysis(&trends) {
        println!("{}", analysis.summary);
        println!("{}", analysis.ball_movement);
        println!("{}", analysis.recommendation);
    }
}

/// Runs the current game's clock until it expires or Ctrl-C is pressed.
async fn run_clock(mut store: GameStore) -> Result<(), Box<dyn std::error::Error>> {
    let Some(game) = store.current_game() else {
        return Err("no current game to run the clock for".into());
    };
    let (game_id, from) = (game.id, game.time_remaining);

    let (mut runner, mut events) = ClockRunner::start(from);
    loop {
        tokio::select! {
            event = events.recv() => match event {
                Some(ClockEvent::Tick(time)) => {
                    store.set_clock(game_id, time)?;
                    println!("{time}");
                }
                Some(ClockEvent::Expired) | None => {
                    info!("End of quarter");
                    break;
                }
            },
            _ = tokio::signal::ctrl_c() => {
                warn!("Clock stopped");
                runner.stop();
                break;
            }
        }
    }
    Ok(())
}

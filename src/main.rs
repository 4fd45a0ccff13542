//! Headless demo driver
//!
//! Runs the simulation with the idle-mode autopilot at display cadence and
//! prints an end-of-run summary. Useful for eyeballing pacing and for
//! profiling the tick without any frontend attached.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use rand::SeedableRng;
use rand_pcg::Pcg32;

use nova_strike::audio::{NullSound, SoundSink};
use nova_strike::render::{self, NullRenderer};
use nova_strike::sim::{Field, GameEvent, GamePhase, TickInput, World, tick};
use nova_strike::{Achievements, HighScores, Settings};

/// Wall-clock cap on the demo run
const DEMO_RUN_MS: f64 = 30_000.0;
/// Sleep between frames (~60 Hz)
const FRAME_SLEEP: Duration = Duration::from_millis(16);

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    let mut rng = Pcg32::seed_from_u64(seed);
    log::info!("demo seed: {seed}");

    let mut achievements = Achievements::new();
    let mut highscores = HighScores::new();
    let settings = Settings::default();
    let mut sound = NullSound;
    // no draw target in a headless run; present() skips the frame
    let mut renderer: Option<NullRenderer> = None;

    let started = Instant::now();
    let now_ms = |started: Instant| started.elapsed().as_secs_f64() * 1000.0;

    let mut world = World::new(Field::default(), 0.0);
    let begin = TickInput {
        start: true,
        ..TickInput::default()
    };
    let _ = tick(&mut world, &begin, &mut achievements, &mut rng, now_ms(started));

    let autopilot = TickInput {
        idle_mode: true,
        ..TickInput::default()
    };

    while world.phase == GamePhase::Playing {
        let now = now_ms(started);
        if now >= DEMO_RUN_MS {
            break;
        }

        for event in tick(&mut world, &autopilot, &mut achievements, &mut rng, now) {
            match event {
                GameEvent::LevelUp { level } => println!("reached level {level}"),
                GameEvent::Achievement(id) => println!("achievement unlocked: {}", id.key()),
                GameEvent::Sound(cue) if !settings.muted => {
                    log::debug!("cue: {}", cue.name());
                    sound.play(cue);
                }
                _ => {}
            }
        }
        render::present(renderer.as_mut(), &world);

        std::thread::sleep(FRAME_SLEEP);
    }

    let duration_ms = now_ms(started) - world.session_start_ms;
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * 1000.0)
        .unwrap_or(0.0);
    let rank = highscores.add_score(world.score(), world.level(), duration_ms, timestamp);

    println!();
    println!("=== run over ===");
    println!("score:  {}", world.score());
    println!("level:  {}", world.level());
    println!("kills:  {}", world.kills);
    println!("time:   {:.1}s", duration_ms / 1000.0);
    if let Some(rank) = rank {
        println!("rank:   #{rank}");
    }
    println!(
        "unlocked {}/{} achievements:",
        achievements.unlocked_count(),
        achievements.len()
    );
    for achievement in achievements.iter() {
        let mark = if achievement.unlocked { "x" } else { " " };
        println!("  [{mark}] {}: {}", achievement.name, achievement.description);
    }
}

//! Jetrunner headless driver.
//!
//! Runs the side-scroller simulation without a window:
//! - **bevy_ecs** world and schedule from the `jetrunner` library
//! - a random "pilot" or a replayed input script standing in for the keyboard
//! - a renderer that logs what would be drawn
//!
//! The run ends at the tick limit, on game over, or when the pilot quits.
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=debug cargo run --release -- --ticks 3600 --seed 7 --realtime
//! ```

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use log::{debug, error, info, trace};

use jetrunner::events::input::InputAction;
use jetrunner::game::Simulation;
use jetrunner::resources::assets::ManifestAssets;
use jetrunner::resources::gameconfig::GameConfig;
use jetrunner::resources::input::{InputProvider, ScriptedInput};
use jetrunner::systems::render::{RenderItem, Renderer};

/// Headless jetpack runner
#[derive(Parser)]
#[command(version, about = "Runs the jetpack runner simulation headless with a random pilot.")]
struct Cli {
    /// INI configuration file (default: ./config.ini when present).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// JSON asset manifest (default: the built-in manifest).
    #[arg(long, value_name = "PATH")]
    manifest: Option<PathBuf>,

    /// Maximum number of ticks to run.
    #[arg(long, default_value_t = 3600)]
    ticks: u64,

    /// Seed for hazards and the pilot; overrides the config file.
    #[arg(long)]
    seed: Option<u64>,

    /// Sleep between ticks to hold the configured target fps.
    #[arg(long)]
    realtime: bool,

    /// Chance per tick that the pilot toggles the jetpack.
    #[arg(long, default_value_t = 0.05)]
    fly_chance: f64,

    /// Replay `<tick> <action>` lines instead of the random pilot.
    #[arg(long, value_name = "PATH")]
    script: Option<PathBuf>,

    /// Write the effective configuration to this INI file and exit.
    #[arg(long, value_name = "PATH")]
    save_config: Option<PathBuf>,
}

/// Presses and releases the jetpack at random.
struct RandomPilot {
    rng: fastrand::Rng,
    chance: f64,
    flying: bool,
}

impl RandomPilot {
    fn new(seed: u64, chance: f64) -> Self {
        Self {
            // Offset so the pilot does not mirror the hazard spawner.
            rng: fastrand::Rng::with_seed(seed.wrapping_add(1)),
            chance: chance.clamp(0.0, 1.0),
            flying: false,
        }
    }
}

impl InputProvider for RandomPilot {
    fn poll(&mut self, _frame: u64) -> Vec<InputAction> {
        if self.rng.f64() >= self.chance {
            return Vec::new();
        }
        self.flying = !self.flying;
        vec![if self.flying {
            InputAction::FlyStart
        } else {
            InputAction::FlyStop
        }]
    }
}

/// Logs draw calls instead of drawing.
#[derive(Default)]
struct LogRenderer {
    frame: u64,
    drawn: usize,
    hud: Vec<String>,
    last_hud: Vec<String>,
}

impl Renderer for LogRenderer {
    fn begin_frame(&mut self) {
        self.frame += 1;
        self.drawn = 0;
        self.hud.clear();
    }

    fn draw(&mut self, item: &RenderItem) {
        self.drawn += 1;
        trace!(
            "frame {}: {} at {} (layer {})",
            self.frame,
            item.frame.name(),
            item.position,
            item.layer
        );
    }

    fn draw_text(&mut self, text: &str) {
        self.hud.push(text.to_string());
    }

    fn end_frame(&mut self) {
        if self.hud != self.last_hud {
            debug!("frame {}: {}", self.frame, self.hud.join(" | "));
            self.last_hud = self.hud.clone();
        }
        trace!("frame {}: {} sprites", self.frame, self.drawn);
    }
}

fn load_config(cli: &Cli) -> Result<GameConfig, String> {
    let mut config = match &cli.config {
        Some(path) => {
            let mut config = GameConfig::with_path(path);
            config.load_from_file()?;
            config
        }
        None => {
            let mut config = GameConfig::new();
            config.load_from_file().ok(); // ignore errors, use defaults
            config
        }
    };
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    Ok(config)
}

fn save_config(cli: &Cli, path: &Path) -> Result<(), String> {
    let mut config = load_config(cli)?;
    config.config_path = path.to_path_buf();
    config.save_to_file()
}

fn run(cli: &Cli) -> Result<u64, String> {
    let config = load_config(cli)?;
    let assets = match &cli.manifest {
        Some(path) => ManifestAssets::from_path(path)?,
        None => ManifestAssets::builtin()?,
    };

    let mut sim = Simulation::new(&config, &assets)?;
    let mut pilot: Box<dyn InputProvider> = match &cli.script {
        Some(path) => Box::new(ScriptedInput::from_path(path)?),
        None => Box::new(RandomPilot::new(config.seed, cli.fly_chance)),
    };
    let mut renderer = LogRenderer::default();
    let frame_budget = if cli.realtime {
        config.frame_duration()
    } else {
        None
    };

    info!(
        "Running up to {} ticks on a {}x{} screen, seed {}",
        cli.ticks, config.screen_width, config.screen_height, config.seed
    );

    for _ in 0..cli.ticks {
        let started = Instant::now();

        let mut keep_going = true;
        for action in pilot.poll(sim.frame_count()) {
            keep_going &= sim.apply_input(action);
        }
        if !keep_going {
            break;
        }

        sim.tick();
        sim.render(&mut renderer);

        if sim.is_game_over() {
            break;
        }

        if let Some(rest) = frame_budget.and_then(|budget| budget.checked_sub(started.elapsed())) {
            std::thread::sleep(rest);
        }
    }

    let stats = sim.collision_stats();
    info!(
        "Stopped after {} ticks ({:?}); collisions: {} box hits, {} mask tests, {} confirmed",
        sim.frame_count(),
        sim.status(),
        stats.broad_phase_hits,
        stats.mask_tests,
        stats.collisions
    );
    Ok(sim.distance())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Some(path) = &cli.save_config {
        if let Err(e) = save_config(&cli, path) {
            error!("{e}");
            std::process::exit(1);
        }
        return;
    }

    match run(&cli) {
        Ok(distance) => info!("Distance: {}", distance),
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    }
}

//! Lava Leap headless driver
//!
//! Runs one level without a display: a simple autopilot supplies input, the
//! simulation advances at a fixed timestep, and the outcome is logged.
//!
//! Usage: lava-leap [PLAN_FILE | --level N] [--tuning FILE] [--seed S]
//!                  [--seconds T] [--json]

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::error::Error;
    use std::path::PathBuf;
    use std::sync::Arc;

    use glam::Vec2;

    use lava_leap::consts::*;
    use lava_leap::sim::{ActorKind, GameState, GameStatus, LevelGrid, TickInput, Tile};
    use lava_leap::{Tuning, levels};

    /// Where the level plan comes from
    enum PlanSource {
        File(PathBuf),
        Builtin(usize),
    }

    struct Options {
        plan: PlanSource,
        tuning: Option<PathBuf>,
        seed: u64,
        seconds: f32,
        json: bool,
    }

    impl Default for Options {
        fn default() -> Self {
            Self {
                plan: PlanSource::Builtin(0),
                tuning: None,
                seed: 1,
                seconds: 60.0,
                json: false,
            }
        }
    }

    fn parse_args() -> Result<Options, Box<dyn Error>> {
        let mut options = Options::default();
        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            let mut value = |name: &str| {
                args.next()
                    .ok_or_else(|| format!("missing value for {name}"))
            };
            match arg.as_str() {
                "--level" => options.plan = PlanSource::Builtin(value("--level")?.parse()?),
                "--tuning" => options.tuning = Some(PathBuf::from(value("--tuning")?)),
                "--seed" => options.seed = value("--seed")?.parse()?,
                "--seconds" => options.seconds = value("--seconds")?.parse()?,
                "--json" => options.json = true,
                flag if flag.starts_with("--") => return Err(format!("unknown flag {flag}").into()),
                path => options.plan = PlanSource::File(PathBuf::from(path)),
            }
        }
        Ok(options)
    }

    fn load_level(source: &PlanSource) -> Result<LevelGrid, Box<dyn Error>> {
        match source {
            PlanSource::File(path) => Ok(LevelGrid::parse(&std::fs::read_to_string(path)?)?),
            PlanSource::Builtin(index) => match levels::load(*index) {
                Some(level) => Ok(level?),
                None => Err(format!(
                    "no built-in level {index} (have {})",
                    levels::GAME_LEVELS.len()
                )
                .into()),
            },
        }
    }

    /// Walk toward the nearest coin; jump when it is above or a wall is ahead
    fn autopilot(state: &GameState) -> TickInput {
        let Some(player) = state.player() else {
            return TickInput::default();
        };
        let center = player.pos + PLAYER_SIZE * 0.5;

        let target = state
            .actors()
            .iter()
            .filter(|a| a.kind() == ActorKind::Collectible)
            .map(|a| a.pos() + a.size() * 0.5)
            .min_by(|a, b| a.distance_squared(center).total_cmp(&b.distance_squared(center)));

        let Some(target) = target else {
            return TickInput::default();
        };

        let dx = target.x - center.x;
        let direction = if dx < -0.1 {
            -1.0
        } else if dx > 0.1 {
            1.0
        } else {
            0.0
        };
        let ahead = player.pos + Vec2::new(direction * 0.2, 0.0);
        let blocked = direction != 0.0 && state.level().touches(ahead, PLAYER_SIZE, Tile::Wall);

        TickInput {
            move_left: direction < 0.0,
            move_right: direction > 0.0,
            jump: blocked || target.y < player.pos.y,
        }
    }

    /// Fixed-step loop with an ending delay after the outcome is decided
    struct Driver {
        state: GameState,
        accumulator: f32,
        ending_delay: f32,
        ticks: u64,
    }

    impl Driver {
        fn new(state: GameState) -> Self {
            Self {
                state,
                accumulator: 0.0,
                ending_delay: ENDING_DELAY,
                ticks: 0,
            }
        }

        /// Feed one frame of elapsed time; false once the level is over
        fn frame(&mut self, frame_dt: f32) -> bool {
            self.accumulator += frame_dt.min(MAX_FRAME_DT);
            while self.accumulator >= DRIVER_DT {
                let input = autopilot(&self.state);
                self.state = self.state.update(DRIVER_DT, &input);
                self.accumulator -= DRIVER_DT;
                self.ticks += 1;

                if self.state.status().is_terminal() {
                    self.ending_delay -= DRIVER_DT;
                    if self.ending_delay <= 0.0 {
                        return false;
                    }
                }
            }
            true
        }
    }

    pub fn run() -> Result<(), Box<dyn Error>> {
        let options = parse_args()?;
        let tuning = match &options.tuning {
            Some(path) => Tuning::load(path)?,
            None => Tuning::default(),
        };
        let level = Arc::new(load_level(&options.plan)?);
        log::info!(
            "Level {}x{} with {} actors, seed {}",
            level.width(),
            level.height(),
            level.spawns().len(),
            options.seed
        );

        let mut rng = <rand_pcg::Pcg32 as rand::SeedableRng>::seed_from_u64(options.seed);
        let mut driver = Driver::new(GameState::start_with(level, tuning, &mut rng));

        let frames = (options.seconds / DRIVER_DT).ceil() as u64;
        for _ in 0..frames {
            if !driver.frame(DRIVER_DT) {
                break;
            }
        }

        let status = driver.state.status();
        let seconds = driver.ticks as f32 * DRIVER_DT;
        match status {
            GameStatus::Playing => log::warn!("Level still running after {seconds:.1}s"),
            _ => log::info!("Level {} after {seconds:.1}s", status.as_str()),
        }
        println!("{} ({} ticks)", status.as_str(), driver.ticks);

        if options.json {
            println!("{}", driver.state.frame().to_json()?);
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Lava Leap (headless) starting...");

    if let Err(e) = native::run() {
        log::error!("{e}");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // A wasm host drives the simulation through the library directly
}

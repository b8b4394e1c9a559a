//! Velocity Shift headless runner
//!
//! Drives the simulation the way a frame loop would, one fixed step per
//! frame, then prints the final run state as JSON. Useful for replaying a
//! daily seed or pinning a regression trace.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use anyhow::{Context, Result, bail};
    use clap::Parser;

    use velocity_shift::consts::TICK_DT;
    use velocity_shift::session::{self, GameMode};
    use velocity_shift::{Difficulty, Engine, InputVector};

    #[derive(Parser, Debug)]
    #[command(name = "velocity-shift", version, about = "Run a seeded endless-runner simulation headlessly")]
    struct Args {
        /// Seed string (defaults to a daily or wall-clock practice seed)
        #[arg(long)]
        seed: Option<String>,

        /// Daily challenge rules (hard, shared seed)
        #[arg(long)]
        daily: bool,

        /// Override the mode's difficulty (easy|hard)
        #[arg(long)]
        difficulty: Option<Difficulty>,

        /// Speed multiplier
        #[arg(long, default_value_t = 1.0)]
        speed: f64,

        /// Maximum ticks to simulate
        #[arg(long, default_value_t = 3600)]
        ticks: u64,

        /// Comma-separated held keys per tick, cycled: L R U D B, '-' for none
        #[arg(long)]
        trace: Option<String>,

        /// Print compact JSON instead of pretty
        #[arg(long)]
        compact: bool,
    }

    fn parse_trace(keys: &str) -> Result<Vec<InputVector>> {
        let mut trace = Vec::new();
        for group in keys.split(',') {
            let mut input = InputVector::default();
            for c in group.trim().chars() {
                match c.to_ascii_uppercase() {
                    'L' => input.left = true,
                    'R' => input.right = true,
                    'U' => input.up = true,
                    'D' => input.down = true,
                    'B' => input.boost = true,
                    '-' => {}
                    other => bail!("unknown key '{other}' in trace group '{group}'"),
                }
            }
            trace.push(input);
        }
        Ok(trace)
    }

    pub fn run() -> Result<()> {
        env_logger::init();
        let args = Args::parse();

        let mode = if args.daily {
            GameMode::Daily
        } else {
            GameMode::Standard
        };
        let seed = match args.seed {
            Some(seed) => seed,
            None if args.daily => format!("daily-{}", session::today_key()),
            None => session::practice_seed(chrono::Utc::now().timestamp_millis()),
        };

        let mut config = mode.config(seed);
        if let Some(difficulty) = args.difficulty {
            config.difficulty = difficulty;
        }
        config.speed_multiplier = args.speed;

        let trace = match args.trace.as_deref() {
            Some(keys) => parse_trace(keys)?,
            None => vec![InputVector::default()],
        };

        log::info!("Velocity Shift ({}) starting...", mode.label());
        let mut engine = Engine::new(config).context("invalid run configuration")?;

        for tick in 0..args.ticks {
            if engine.is_game_over() {
                break;
            }
            let input = &trace[(tick as usize) % trace.len()];
            engine.update(input, TICK_DT);
        }

        let state = engine.state();
        log::info!(
            "Finished: status={:?} score={} ticks={} distance={}",
            state.status,
            state.score,
            state.ticks,
            state.distance
        );

        let json = if args.compact {
            serde_json::to_string(state)?
        } else {
            serde_json::to_string_pretty(state)?
        };
        println!("{json}");
        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_parse_trace() {
            let trace = parse_trace("L, ur,-,B").unwrap();
            assert_eq!(trace.len(), 4);
            assert!(trace[0].left && !trace[0].right);
            assert!(trace[1].up && trace[1].right);
            assert_eq!(trace[2], InputVector::default());
            assert!(trace[3].boost);
            assert!(parse_trace("LX").is_err());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point lives in the library's `wasm` module
}

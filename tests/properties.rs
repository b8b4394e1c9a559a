//! Property tests over random seeds and input traces

use proptest::prelude::*;

use velocity_shift::consts::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH, TICK_DT};
use velocity_shift::{Difficulty, Engine, InputVector, RunConfig, RunStatus};

fn decode(bits: u8) -> InputVector {
    InputVector {
        left: bits & 1 != 0,
        right: bits & 2 != 0,
        up: bits & 4 != 0,
        down: bits & 8 != 0,
        boost: bits & 16 != 0,
    }
}

fn config_strategy() -> impl Strategy<Value = RunConfig> {
    (
        "[a-z0-9-]{1,16}",
        prop_oneof![Just(Difficulty::Easy), Just(Difficulty::Hard)],
        prop_oneof![Just(0.5), Just(1.0), Just(1.5), Just(3.0)],
    )
        .prop_map(|(seed, difficulty, speed)| RunConfig::new(seed, difficulty, speed))
}

fn trace_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..32, 1..40)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn identical_seed_and_trace_give_identical_runs(
        config in config_strategy(),
        trace in trace_strategy(),
    ) {
        let mut a = Engine::new(config.clone()).unwrap();
        let mut b = Engine::new(config).unwrap();
        for tick in 0..900 {
            let input = decode(trace[(tick / 10) % trace.len()]);
            let ea = a.update(&input, TICK_DT);
            // Reported frame time must not matter
            let eb = b.update(&input, TICK_DT * 3.0);
            prop_assert_eq!(ea, eb);
            prop_assert_eq!(&a.state().obstacles, &b.state().obstacles);
            prop_assert_eq!(&a.state().collectibles, &b.state().collectibles);
            prop_assert_eq!(&a.state().player, &b.state().player);
            prop_assert_eq!(a.state().score, b.state().score);
            prop_assert_eq!(a.status(), b.status());
        }
    }

    #[test]
    fn score_never_decreases_and_player_stays_in_bounds(
        config in config_strategy(),
        trace in trace_strategy(),
    ) {
        let mut engine = Engine::new(config).unwrap();
        let mut last_score = 0;
        for tick in 0..900 {
            let input = decode(trace[(tick / 7) % trace.len()]);
            engine.update(&input, TICK_DT);

            let state = engine.state();
            prop_assert!(state.score >= last_score);
            last_score = state.score;

            let p = &state.player;
            prop_assert!(p.pos.x >= p.radius && p.pos.x <= PLAYFIELD_WIDTH - p.radius);
            prop_assert!(p.pos.y >= p.radius && p.pos.y <= PLAYFIELD_HEIGHT - p.radius);
        }
    }

    #[test]
    fn at_most_one_spawn_of_each_kind_per_tick(
        seed in "[a-z]{1,8}",
        speed in 1.0f64..400.0,
    ) {
        let mut engine = Engine::new(RunConfig::new(seed, Difficulty::Hard, speed)).unwrap();
        for _ in 0..300 {
            let obstacles = engine.state().obstacles.len();
            let collectibles = engine.state().collectibles.len();
            let events = engine.update(&InputVector::default(), TICK_DT);
            if !events.advanced {
                break;
            }
            prop_assert!(engine.state().obstacles.len() <= obstacles + 1);
            prop_assert!(engine.state().collectibles.len() <= collectibles + 1);
        }
    }

    #[test]
    fn pause_twice_equals_pause_once(
        config in config_strategy(),
        warmup in 0usize..400,
    ) {
        let mut engine = Engine::new(config).unwrap();
        for _ in 0..warmup {
            engine.update(&InputVector::default(), TICK_DT);
        }

        engine.pause();
        let once = engine.state().clone();
        engine.pause();
        prop_assert_eq!(engine.state(), &once);

        engine.resume();
        let resumed = engine.state().clone();
        engine.resume();
        prop_assert_eq!(engine.state(), &resumed);

        if once.status == RunStatus::Paused {
            prop_assert_eq!(resumed.status, RunStatus::Playing);
        } else {
            // Already over: pause and resume are no-ops
            prop_assert_eq!(resumed, once);
        }
    }
}

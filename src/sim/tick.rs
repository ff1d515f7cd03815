//! Simulation tick
//!
//! `tick` maps (snapshot, input, elapsed seconds) to a new snapshot. It is a
//! pure function: the previous snapshot is only read.

use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::collision::Aabb;
use super::level::Tile;
use super::state::{GameState, GameStatus};
use crate::consts::PLAYER_SIZE;

/// Input held during a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
}

/// Advance the game state by `dt` seconds
pub fn tick(state: &GameState, input: &TickInput, dt: f32) -> GameState {
    // Negative or NaN deltas advance nothing
    let dt = if dt > 0.0 { dt } else { 0.0 };

    // Every actor sees the same pre-tick snapshot
    let actors = state
        .actors()
        .iter()
        .map(|actor| actor.update(dt, state, input))
        .collect();
    let next = state.with_actors(actors);

    // Finished levels keep animating but their outcome is frozen
    if state.status() != GameStatus::Playing {
        return next;
    }

    let Some(player) = next.player().copied() else {
        return next;
    };

    if next.level().touches(player.pos, PLAYER_SIZE, Tile::HazardField) {
        log::info!("Player touched a lava field");
        return next.finish(GameStatus::Lost);
    }

    let player_box = Aabb::new(player.pos, PLAYER_SIZE);
    let hits: Vec<Actor> = next
        .actors()
        .iter()
        .filter(|actor| actor.id() != player.id && actor.aabb().overlaps(&player_box))
        .copied()
        .collect();

    // Resolve in list order, each collision seeing the previous one's result
    hits.iter().fold(next, |state, actor| actor.collide(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::actor::ActorKind;
    use crate::sim::level::LevelGrid;
    use proptest::prelude::*;
    use std::sync::Arc;

    const DT: f32 = 1.0 / 60.0;

    fn start(plan: &str) -> GameState {
        GameState::start(Arc::new(LevelGrid::parse(plan).unwrap()), 12345)
    }

    fn right() -> TickInput {
        TickInput {
            move_right: true,
            ..Default::default()
        }
    }

    fn count(state: &GameState, kind: ActorKind) -> usize {
        state.actors().iter().filter(|a| a.kind() == kind).count()
    }

    #[test]
    fn test_free_fall_accelerates() {
        let mut state = start(".\n@\n.\n.\n.\n.\n.\n.\n#");
        let mut last_y = state.player().unwrap().pos.y;
        let mut last_step = 0.0;
        for _ in 0..10 {
            state = tick(&state, &TickInput::default(), DT);
            let y = state.player().unwrap().pos.y;
            assert!(y > last_y);
            assert!(y - last_y > last_step);
            last_step = y - last_y;
            last_y = y;
        }
    }

    #[test]
    fn test_player_comes_to_rest_on_floor() {
        let mut state = start(".\n@\n.\n#");
        for _ in 0..300 {
            state = tick(&state, &TickInput::default(), DT);
        }
        let player = *state.player().unwrap();
        assert_eq!(player.vel.y, 0.0);
        let bottom = player.pos.y + PLAYER_SIZE.y;
        assert!(bottom <= 3.0);
        assert!(3.0 - bottom < 0.01);
        assert!(!state.level().touches(player.pos, PLAYER_SIZE, Tile::Wall));

        // Stays put on further ticks
        let after = tick(&state, &TickInput::default(), DT);
        assert_eq!(after.player().unwrap().pos, player.pos);
        assert_eq!(after.player().unwrap().vel.y, 0.0);
    }

    #[test]
    fn test_spawn_against_top_edge_stays_put() {
        // Without a headroom row the player's head pokes above the grid,
        // which counts as wall, so vertical motion is blocked from the start
        let mut state = start("@\n.\n#");
        let spawn = state.player().unwrap().pos;
        for _ in 0..60 {
            state = tick(&state, &TickInput::default(), DT);
            assert_eq!(state.player().unwrap().vel.y, 0.0);
        }
        assert_eq!(state.player().unwrap().pos, spawn);
    }

    #[test]
    fn test_jump_from_floor() {
        let mut state = start("..\n..\n..\n@.\n##");
        for _ in 0..120 {
            state = tick(&state, &TickInput::default(), DT);
        }
        let jump = TickInput {
            jump: true,
            ..Default::default()
        };
        let state = tick(&state, &jump, DT);
        assert_eq!(state.player().unwrap().vel.y, -state.tuning().jump_speed);
        let rising = tick(&state, &TickInput::default(), DT);
        assert!(rising.player().unwrap().pos.y < state.player().unwrap().pos.y);
    }

    #[test]
    fn test_last_collectible_wins_on_that_tick() {
        let state = start(".....\n.@o..\n#####");
        let idle = tick(&state, &TickInput::default(), 0.05);
        assert_eq!(idle.status(), GameStatus::Playing);
        assert_eq!(count(&idle, ActorKind::Collectible), 1);

        let won = tick(&idle, &right(), 0.05);
        assert_eq!(won.status(), GameStatus::Won);
        assert_eq!(count(&won, ActorKind::Collectible), 0);
        // The previous snapshot is untouched
        assert_eq!(idle.status(), GameStatus::Playing);
        assert_eq!(count(&idle, ActorKind::Collectible), 1);
    }

    #[test]
    fn test_collecting_one_of_two_keeps_playing() {
        let state = start(".....\n.@o.o\n#####");
        let next = tick(&state, &right(), 0.05);
        assert_eq!(next.status(), GameStatus::Playing);
        assert_eq!(count(&next, ActorKind::Collectible), 1);
    }

    #[test]
    fn test_two_collectibles_in_one_tick() {
        let state = start(".....\n.@oo.\n#####");
        let next = tick(&state, &right(), 0.15);
        assert_eq!(count(&next, ActorKind::Collectible), 0);
        assert_eq!(next.status(), GameStatus::Won);
    }

    #[test]
    fn test_hazard_overlap_loses_and_stays_lost() {
        let state = start("......\n.@=...\n######");
        let lost = tick(&state, &right(), 0.05);
        assert_eq!(lost.status(), GameStatus::Lost);
        // The hazard is not removed
        assert_eq!(count(&lost, ActorKind::Hazard), 1);

        let mut after = lost.clone();
        for _ in 0..30 {
            after = tick(&after, &right(), DT);
            assert_eq!(after.status(), GameStatus::Lost);
        }
        // Actors keep moving after the outcome is decided
        assert_ne!(after.actors(), lost.actors());
    }

    #[test]
    fn test_hazard_field_loses() {
        let state = start("......\n.@+...\n######");
        let next = tick(&state, &TickInput::default(), DT);
        assert_eq!(next.status(), GameStatus::Playing);
        let lost = tick(&next, &right(), 0.05);
        assert_eq!(lost.status(), GameStatus::Lost);
    }

    #[test]
    fn test_loss_is_not_overridden_by_last_collectible() {
        // Player reaches the hazard and the only coin in the same tick
        let state = start("........\n.@=o....\n########");
        let next = tick(&state, &right(), 0.15);
        assert_eq!(count(&next, ActorKind::Collectible), 0);
        assert_eq!(next.status(), GameStatus::Lost);
    }

    #[test]
    fn test_enemy_stomp_removes_enemy() {
        let state = start(".....\n.@...\n.....\n.M...\n#####");
        let next = tick(&state, &TickInput::default(), 0.05);
        assert_eq!(count(&next, ActorKind::PatrollingEnemy), 0);
        assert_eq!(next.status(), GameStatus::Playing);
    }

    #[test]
    fn test_enemy_side_contact_loses() {
        let state = start("......\n.@.M..\n######");
        let next = tick(&state, &right(), 0.1);
        assert_eq!(count(&next, ActorKind::PatrollingEnemy), 1);
        assert_eq!(next.status(), GameStatus::Lost);
    }

    #[test]
    fn test_enemy_reads_pre_tick_player() {
        let state = start(".......\n..@....\n#######\n.......\n..M....\n#######");
        let left = TickInput {
            move_left: true,
            ..Default::default()
        };
        let next = tick(&state, &left, 0.05);
        assert!(next.player().unwrap().pos.x < 2.0);
        let enemy = next
            .actors()
            .iter()
            .find(|a| a.kind() == ActorKind::PatrollingEnemy)
            .unwrap();
        // Player started level with the enemy, so it heads right this tick
        assert!((enemy.pos().x - 2.15).abs() < 1e-5);
    }

    #[test]
    fn test_won_stays_won() {
        let state = start("......\n.@o|..\n######");
        let won = tick(&state, &right(), 0.05);
        assert_eq!(won.status(), GameStatus::Won);

        // Walk into the lava on the next tick
        let after = tick(&won, &right(), 0.1);
        let player_box = Aabb::new(after.player().unwrap().pos, PLAYER_SIZE);
        let lava = after
            .actors()
            .iter()
            .find(|a| a.kind() == ActorKind::Hazard)
            .unwrap();
        assert!(lava.aabb().overlaps(&player_box));
        assert_eq!(after.status(), GameStatus::Won);

        let mut later = after;
        for _ in 0..30 {
            later = tick(&later, &right(), DT);
            assert_eq!(later.status(), GameStatus::Won);
        }
    }

    fn enemy_x(state: &GameState) -> f32 {
        state
            .actors()
            .iter()
            .find(|a| a.kind() == ActorKind::PatrollingEnemy)
            .unwrap()
            .pos()
            .x
    }

    #[test]
    fn test_stalled_enemy_moves_once_player_crosses() {
        // Player walks along the upper floor; the enemy below is stuck at a wall stub
        let mut state = start("........\n..@.....\n########\n........\n..#.M...\n########");
        for _ in 0..40 {
            state = tick(&state, &TickInput::default(), DT);
        }
        let stalled = enemy_x(&state);
        assert!((3.0..3.1).contains(&stalled));
        state = tick(&state, &TickInput::default(), DT);
        assert_eq!(enemy_x(&state), stalled);

        while state.player().unwrap().pos.x <= stalled {
            state = tick(&state, &right(), DT);
        }
        let next = tick(&state, &TickInput::default(), DT);
        assert!(enemy_x(&next) > stalled);
    }

    #[test]
    fn test_zero_and_negative_dt_are_noops_for_motion() {
        let state = start("......\n.@=...\n######");
        for dt in [0.0, -1.0, f32::NAN] {
            let next = tick(&state, &right(), dt);
            assert_eq!(next.player().unwrap().pos, state.player().unwrap().pos);
            assert_eq!(next.status(), GameStatus::Playing);
        }
    }

    #[test]
    fn test_update_matches_tick() {
        let state = start(".....\n.@o..\n#####");
        assert_eq!(
            state.update(0.05, &right()).actors(),
            tick(&state, &right(), 0.05).actors()
        );
    }

    #[test]
    fn test_determinism() {
        let level = Arc::new(LevelGrid::parse(crate::levels::GAME_LEVELS[0]).unwrap());
        let mut a = GameState::start(Arc::clone(&level), 99999);
        let mut b = GameState::start(level, 99999);
        let inputs = [
            right(),
            TickInput {
                jump: true,
                move_right: true,
                ..Default::default()
            },
            TickInput::default(),
        ];
        for i in 0..600 {
            let input = inputs[i % inputs.len()];
            a = tick(&a, &input, DT);
            b = tick(&b, &input, DT);
        }
        assert_eq!(a.actors(), b.actors());
        assert_eq!(a.status(), b.status());
    }

    fn input_strategy() -> impl Strategy<Value = TickInput> {
        (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(move_left, move_right, jump)| {
            TickInput {
                move_left,
                move_right,
                jump,
            }
        })
    }

    proptest! {
        #[test]
        fn player_never_overlaps_walls(
            seed in 0u64..1000,
            steps in proptest::collection::vec((input_strategy(), 0.0f32..0.05), 1..200)
        ) {
            let level = Arc::new(LevelGrid::parse(crate::levels::GAME_LEVELS[0]).unwrap());
            let mut state = GameState::start(level, seed);
            for (input, dt) in steps {
                state = tick(&state, &input, dt);
                let player = state.player().unwrap();
                prop_assert!(!state.level().touches(player.pos, PLAYER_SIZE, Tile::Wall));
            }
        }

        #[test]
        fn status_never_leaves_terminal(
            steps in proptest::collection::vec((input_strategy(), 0.0f32..0.1), 1..200)
        ) {
            let level = Arc::new(LevelGrid::parse(crate::levels::GAME_LEVELS[1]).unwrap());
            let mut state = GameState::start(level, 7);
            let mut finished: Option<GameStatus> = None;
            for (input, dt) in steps {
                state = tick(&state, &input, dt);
                prop_assert!(state.player().is_some());
                match finished {
                    Some(status) => prop_assert_eq!(state.status(), status),
                    None if state.status().is_terminal() => finished = Some(state.status()),
                    None => {}
                }
            }
        }
    }
}

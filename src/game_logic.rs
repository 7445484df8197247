//! # Game logic
//! Primary rules:
//! * Player moves one step per tick for each held direction, staying on screen
//! * Obstacles move horizontally at a fixed speed, never changing lane
//! * Obstacles fully off-screen re-enter from the opposite side
//! * Player meets beneficial obstacle => score increases + obstacle destroyed
//! * Player meets harmful obstacle => Game Over

//! Other rules:
//! * Player reaching the top of the screen is sent back to the start (no score)
//! * Quit ends the run without moving anything

use crate::collision_system::resolve_collisions;
use crate::geometry::{direction_vector, scale, Rect};
use crate::input::{HeldKeys, TickInput};
use crate::shape::Shape;
use crate::world::{player_start, Player, World, HEIGHT, PLAYER_SPEED, WIDTH};

/// Lifecycle of a run, as seen by the loop driver
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GamePhase {
    Initializing,
    Playing,
    Over,
}

/// Result of a single tick
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RunState {
    Playing,
    Over,
}

fn is_on_screen(rect: &Rect) -> bool {
    rect.left() >= 0
        && rect.right() <= WIDTH as i32
        && rect.top() >= 0
        && rect.bottom() <= HEIGHT as i32
}

/// Moves the player one step in each held direction.
/// A step is skipped if it would take any part of the player off screen.
pub fn move_player(shape: &mut Shape, held: &HeldKeys) {
    for direction in held.held() {
        let step = scale(direction_vector(direction), PLAYER_SPEED);
        let moved = shape.bounds().translate(step);
        if is_on_screen(&moved) {
            shape.set_pos((moved.x, moved.y));
        }
    }
}

/// Moves an obstacle one tick, sending it to the opposite side once it is completely off screen.
/// Speed and lane are preserved.
pub fn update_obstacle(shape: &mut Shape) {
    shape.step();

    let bounds = shape.bounds();
    if bounds.right() < 0 || bounds.left() > WIDTH as i32 {
        let speed = shape.get_vel().0;
        let x = if speed > 0 {
            -(shape.width() as i32)
        } else {
            WIDTH as i32
        };
        shape.set_x(x);
    }
}

/// Sends the player back to the start once they reach the top.
/// Returns true if they crossed.
pub fn handle_crossing(player: &mut Player) -> bool {
    if player.bounds().top() <= 0 {
        player.shape.set_pos(player_start());
        log::debug!("Player crossed the road");
        true
    } else {
        false
    }
}

fn update_positions(world: &mut World, held: &HeldKeys) {
    move_player(&mut world.player.shape, held);
    for obstacle in world.obstacles_mut() {
        update_obstacle(&mut obstacle.shape);
    }
}

/// Advances the world one tick
pub fn update_world(world: &mut World, input: &TickInput) -> RunState {
    if input.quit {
        return RunState::Over;
    }

    update_positions(world, &input.held);

    let outcome = resolve_collisions(world);

    handle_crossing(&mut world.player);

    if outcome.is_fatal() {
        RunState::Over
    } else {
        RunState::Playing
    }
}

/// Game logic tests. Note: These are integration tests, rather than unit tests.
#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::ObstacleKind;
    use crate::road::build_road;
    use crate::world::{make_obstacle_at, OBSTACLE_WIDTH, PLAYER_SIZE, REWARD};
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn up() -> TickInput {
        TickInput::holding(HeldKeys {
            up: true,
            ..Default::default()
        })
    }

    #[test]
    fn obstacle_enters_from_left() {
        // Arrange
        let mut world = World::new();
        let obstacle = make_obstacle_at(world.ids(), ObstacleKind::Harmful, (-40, 150), 7);
        let id = obstacle.get_id();
        world.add(obstacle);

        // Act
        update_world(&mut world, &TickInput::default());

        // Assert
        assert_eq!(*world.get_obstacle(id).unwrap().shape.get_pos(), (-33, 150));
    }

    #[test]
    fn obstacle_partially_on_screen_not_wrapped() {
        let mut shape = Shape::new((795, 150), 40, 50, (5, 0));

        update_obstacle(&mut shape);

        assert_eq!(*shape.get_pos(), (800, 150));
    }

    #[test]
    fn obstacle_wraps_at_screen_edge_lr() {
        // Arrange - left edge at 800 is still touching the screen; next step leaves it
        let mut shape = Shape::new((800, 270), 40, 50, (5, 0));

        // Act
        update_obstacle(&mut shape);

        // Assert
        assert_eq!(*shape.get_pos(), (-(OBSTACLE_WIDTH as i32), 270));
        assert_eq!(*shape.get_vel(), (5, 0));
    }

    #[test]
    fn obstacle_wraps_at_screen_edge_rl() {
        let mut shape = Shape::new((-38, 390), 40, 50, (-6, 0));

        update_obstacle(&mut shape);

        assert_eq!(*shape.get_pos(), (WIDTH as i32, 390));
        assert_eq!(*shape.get_vel(), (-6, 0));
    }

    #[test]
    fn player_moves_diagonally() {
        let mut shape = Shape::new((380, 530), 40, 40, (0, 0));
        let held = HeldKeys {
            up: true,
            left: true,
            ..Default::default()
        };

        move_player(&mut shape, &held);

        assert_eq!(*shape.get_pos(), (370, 520));
    }

    #[test]
    fn player_stops_at_edges() {
        let mut shape = Shape::new((0, 560), 40, 40, (0, 0));
        let held = HeldKeys {
            down: true,
            left: true,
            ..Default::default()
        };

        move_player(&mut shape, &held);

        assert_eq!(*shape.get_pos(), (0, 560));
    }

    #[test]
    fn opposite_keys_cancel() {
        let mut shape = Shape::new((380, 300), 40, 40, (0, 0));
        let held = HeldKeys {
            up: true,
            down: true,
            left: true,
            right: true,
        };

        move_player(&mut shape, &held);

        assert_eq!(*shape.get_pos(), (380, 300));
    }

    #[test]
    fn crossing_resets_to_start() {
        // Arrange - empty road, hold up from the start
        let mut world = World::new();
        let (start_x, start_y) = player_start();

        // Act/Assert - climbs 10 per tick until the top edge hits 0, then is reset on that tick
        let ticks_to_top = start_y / PLAYER_SPEED;
        for tick in 1..ticks_to_top {
            assert_eq!(update_world(&mut world, &up()), RunState::Playing);
            assert_eq!(
                *world.player.shape.get_pos(),
                (start_x, start_y - tick * PLAYER_SPEED)
            );
        }
        update_world(&mut world, &up());
        assert_eq!(*world.player.shape.get_pos(), (start_x, start_y));
        assert_eq!(world.score, 0);
    }

    #[test]
    fn beneficial_collected_then_gone() {
        // Arrange - food one step to the right of the player, player moves right into it
        let mut world = World::new();
        world.player.shape.set_pos((380, 300));
        let food = make_obstacle_at(world.ids(), ObstacleKind::Beneficial, (429, 300), 0);
        let food_id = food.get_id();
        world.add(food);
        let right = TickInput::holding(HeldKeys {
            right: true,
            ..Default::default()
        });

        // Act
        let state = update_world(&mut world, &right);

        // Assert
        assert_eq!(state, RunState::Playing);
        assert_eq!(world.score, REWARD);
        assert!(world.get_obstacle(food_id).is_none());

        update_world(&mut world, &TickInput::default());
        assert!(world.get_obstacle(food_id).is_none());
        assert_eq!(world.score, REWARD);
    }

    #[test]
    fn gameover_on_harmful_collision() {
        let mut world = World::new();
        world.player.shape.set_pos((380, 300));
        let car = make_obstacle_at(world.ids(), ObstacleKind::Harmful, (335, 300), 10);
        world.add(car);

        let state = update_world(&mut world, &TickInput::default());

        assert_eq!(state, RunState::Over);
    }

    #[test]
    fn quit_stops_motion() {
        let mut world = World::new();
        let obstacle = make_obstacle_at(world.ids(), ObstacleKind::Harmful, (100, 150), 7);
        let id = obstacle.get_id();
        world.add(obstacle);
        let input = TickInput {
            quit: true,
            ..up()
        };

        let state = update_world(&mut world, &input);

        assert_eq!(state, RunState::Over);
        assert_eq!(*world.get_obstacle(id).unwrap().shape.get_pos(), (100, 150));
        assert_eq!(*world.player.shape.get_pos(), player_start());
    }

    fn held_keys() -> impl Strategy<Value = HeldKeys> {
        (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
            |(up, down, left, right)| HeldKeys {
                up,
                down,
                left,
                right,
            },
        )
    }

    proptest! {
        #[test]
        fn player_always_on_screen(
            x in 0..=(WIDTH - PLAYER_SIZE) as i32,
            y in 0..=(HEIGHT - PLAYER_SIZE) as i32,
            inputs in prop::collection::vec(held_keys(), 1..200),
        ) {
            let mut shape = Shape::new((x, y), PLAYER_SIZE, PLAYER_SIZE, (0, 0));
            for held in inputs.iter() {
                move_player(&mut shape, held);
                let (px, py) = *shape.get_pos();
                prop_assert!(px >= 0 && px <= (WIDTH - PLAYER_SIZE) as i32);
                prop_assert!(py >= 0 && py <= (HEIGHT - PLAYER_SIZE) as i32);
            }
        }

        #[test]
        fn obstacles_keep_lane_and_speed(seed in any::<u64>(), ticks in 1usize..600) {
            let mut world = build_road(&mut StdRng::seed_from_u64(seed));
            let initial: Vec<_> = world
                .obstacles()
                .iter()
                .map(|o| (o.get_id(), o.shape.get_pos().1, o.speed()))
                .collect();

            for _ in 0..ticks {
                for obstacle in world.obstacles_mut() {
                    update_obstacle(&mut obstacle.shape);
                    let bounds = obstacle.bounds();
                    // Never left fully off-screen after an update
                    prop_assert!(bounds.right() >= 0 && bounds.left() <= WIDTH as i32);
                }
            }

            for (id, y, speed) in initial {
                let obstacle = world.get_obstacle(id).unwrap();
                prop_assert_eq!(obstacle.shape.get_pos().1, y);
                prop_assert_eq!(obstacle.speed(), speed);
            }
        }

        #[test]
        fn score_moves_in_rewards(
            seed in any::<u64>(),
            inputs in prop::collection::vec(held_keys(), 1..300),
        ) {
            let mut world = build_road(&mut StdRng::seed_from_u64(seed));
            for held in inputs {
                let before_score = world.score;
                let before_count = world.obstacles().len() as u32;

                let state = update_world(&mut world, &TickInput::holding(held));

                let collected = before_count - world.obstacles().len() as u32;
                prop_assert!(world.score >= before_score);
                prop_assert_eq!(world.score - before_score, collected * REWARD);
                if state == RunState::Over {
                    break;
                }
            }
        }
    }
}

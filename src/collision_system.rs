//! Detects player/obstacle collisions and applies their effects.
//! * Player meets beneficial obstacle => score + REWARD, obstacle removed for the rest of the run
//! * Player meets harmful obstacle => run over
//!
//! Every overlap in a tick is handled before the outcome is reported, so food collected
//! in the same tick as a fatal hit still counts towards the final score.

use crate::entity::{EntityId, ObstacleKind};
use crate::geometry::{is_collision, Rect};
use crate::world::{Obstacle, World, REWARD};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CollisionOutcome {
    /// Beneficial obstacles collected (and removed) this tick
    pub collected: Vec<EntityId>,
    /// Harmful obstacles hit this tick
    pub harmful_hits: Vec<EntityId>,
    pub score_gained: u32,
}

impl CollisionOutcome {
    pub fn is_fatal(&self) -> bool {
        !self.harmful_hits.is_empty()
    }
}

/// Obstacles overlapping `player_box`, in active-set order
pub fn find_collisions(player_box: &Rect, obstacles: &[Obstacle]) -> Vec<EntityId> {
    obstacles
        .iter()
        .filter(|o| is_collision(player_box, &o.bounds()))
        .map(|o| o.get_id())
        .collect()
}

/// Detects collisions and runs the handler for each
pub fn resolve_collisions(world: &mut World) -> CollisionOutcome {
    let player_box = world.player.bounds();
    let mut outcome = CollisionOutcome::default();

    for id in find_collisions(&player_box, world.obstacles()) {
        let kind = match world.get_obstacle(id) {
            Some(obstacle) => obstacle.get_kind(),
            None => continue,
        };
        match kind {
            ObstacleKind::Beneficial => {
                world.remove(id);
                world.score += REWARD;
                outcome.score_gained += REWARD;
                outcome.collected.push(id);
                log::debug!("Collected {}, score now {}", id, world.score);
            }
            ObstacleKind::Harmful => {
                outcome.harmful_hits.push(id);
                log::debug!("Hit {}", id);
            }
        }
    }
    outcome
}

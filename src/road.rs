use crate::entity::ObstacleKind;
use crate::world::{make_obstacle, World, LANES, OBSTACLES_PER_LANE};
use itertools::iproduct;
use rand::Rng;

/// Builds the starting world: the player at its start position plus
/// `OBSTACLES_PER_LANE` obstacles in every lane, each one randomly beneficial or harmful.
pub fn build_road<R: Rng>(rng: &mut R) -> World {
    let mut world = World::new();
    for (lane_y, _) in iproduct!(LANES.iter(), 0..OBSTACLES_PER_LANE) {
        let kind = if rng.gen_bool(0.5) {
            ObstacleKind::Beneficial
        } else {
            ObstacleKind::Harmful
        };
        let obstacle = make_obstacle(world.ids(), rng, kind, Some(*lane_y));
        world.add(obstacle);
    }
    log::debug!(
        "Road built: {} obstacles, {} beneficial",
        world.obstacles().len(),
        world
            .obstacles()
            .iter()
            .filter(|o| o.get_kind().is_beneficial())
            .count()
    );
    world
}

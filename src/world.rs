use crate::entity::{EntityId, EntityKind, IdGenerator, ObstacleKind};
use crate::geometry::{Rect, P};
use crate::shape::Shape;
use rand::Rng;

// Screen coordinate bounds. The world uses screen coordinates directly.
pub const WIDTH: u32 = 800;
pub const HEIGHT: u32 = 600;

pub const PLAYER_SIZE: u32 = 40;
/// Units moved per tick, per held direction
pub const PLAYER_SPEED: i32 = 10;

pub const OBSTACLE_WIDTH: u32 = 40;
pub const OBSTACLE_HEIGHT: u32 = 50;
/// Obstacle speed magnitude range, inclusive, in units per tick
pub const OBSTACLE_SPEED_MIN: i32 = 5;
pub const OBSTACLE_SPEED_MAX: i32 = 10;
/// Number of sprite variants per obstacle kind
pub const OBSTACLE_VARIANTS: usize = 3;

/// Score awarded per beneficial obstacle collected
pub const REWARD: u32 = 5;

pub const OBSTACLES_PER_LANE: usize = 2;
/// Height of the road strip drawn for each lane
pub const ROAD_HEIGHT: u32 = 40;

/// Vertical coordinate of each lane
pub const LANES: [i32; 4] = [
    HEIGHT as i32 / 5 + 30,
    2 * HEIGHT as i32 / 5 + 30,
    3 * HEIGHT as i32 / 5 + 30,
    4 * HEIGHT as i32 / 5 + 30,
];

/// Centre of the player at the start of a run and after each crossing
pub const PLAYER_START_CENTER: P = (WIDTH as i32 / 2, HEIGHT as i32 - 50);

/// Top-left of the player's start position
pub fn player_start() -> P {
    let start = Rect::from_center(PLAYER_START_CENTER, PLAYER_SIZE, PLAYER_SIZE);
    (start.x, start.y)
}

pub struct Player {
    id: EntityId,
    pub shape: Shape,
}

impl Player {
    pub fn get_id(&self) -> EntityId {
        self.id
    }

    pub fn kind(&self) -> EntityKind {
        EntityKind::Player
    }

    pub fn bounds(&self) -> Rect {
        self.shape.bounds()
    }
}

pub struct Obstacle {
    id: EntityId,
    kind: ObstacleKind,
    /// Sprite index within the kind's variants. Not used by game logic.
    variant: usize,
    pub shape: Shape,
}

impl Obstacle {
    pub fn get_id(&self) -> EntityId {
        self.id
    }

    pub fn get_kind(&self) -> ObstacleKind {
        self.kind
    }

    pub fn entity_kind(&self) -> EntityKind {
        EntityKind::Obstacle(self.kind)
    }

    pub fn variant(&self) -> usize {
        self.variant
    }

    pub fn speed(&self) -> i32 {
        self.shape.get_vel().0
    }

    pub fn bounds(&self) -> Rect {
        self.shape.bounds()
    }
}

/// Creates the player at its start position
pub fn make_player(ids: &mut IdGenerator) -> Player {
    Player {
        id: ids.next_id(),
        shape: Shape::new(player_start(), PLAYER_SIZE, PLAYER_SIZE, (0, 0)),
    }
}

/// Creates an obstacle just off-screen, either side.
/// With no lane given, the vertical position is random within the play area.
/// Direction of travel follows from the side it starts on.
pub fn make_obstacle<R: Rng>(
    ids: &mut IdGenerator,
    rng: &mut R,
    kind: ObstacleKind,
    lane_y: Option<i32>,
) -> Obstacle {
    let variant = rng.gen_range(0..OBSTACLE_VARIANTS);
    let y = match lane_y {
        Some(y) => y,
        None => rng.gen_range(0..=(HEIGHT - OBSTACLE_HEIGHT) as i32),
    };
    let from_left = rng.gen_bool(0.5);
    let x = if from_left {
        -(OBSTACLE_WIDTH as i32)
    } else {
        WIDTH as i32
    };
    let magnitude = rng.gen_range(OBSTACLE_SPEED_MIN..=OBSTACLE_SPEED_MAX);
    let speed = if from_left { magnitude } else { -magnitude };

    Obstacle {
        id: ids.next_id(),
        kind,
        variant,
        shape: Shape::new((x, y), OBSTACLE_WIDTH, OBSTACLE_HEIGHT, (speed, 0)),
    }
}

/// Builds an obstacle in a known state, bypassing the random draw.
pub fn make_obstacle_at(
    ids: &mut IdGenerator,
    kind: ObstacleKind,
    pos: P,
    speed: i32,
) -> Obstacle {
    Obstacle {
        id: ids.next_id(),
        kind,
        variant: 0,
        shape: Shape::new(pos, OBSTACLE_WIDTH, OBSTACLE_HEIGHT, (speed, 0)),
    }
}

/// All state for one run
pub struct World {
    pub player: Player,
    obstacles: Vec<Obstacle>,
    pub score: u32,
    ids: IdGenerator,
}

impl World {
    /// A world with just the player, at its start position
    pub fn new() -> Self {
        let mut ids = IdGenerator::new();
        let player = make_player(&mut ids);
        Self {
            player,
            obstacles: Vec::new(),
            score: 0,
            ids,
        }
    }

    pub fn ids(&mut self) -> &mut IdGenerator {
        &mut self.ids
    }

    /// Adds the provided obstacle to the active set
    pub fn add(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    /// Removes the given obstacle from the active set. Returns it if it was present.
    pub fn remove(&mut self, id: EntityId) -> Option<Obstacle> {
        let index = self.obstacles.iter().position(|o| o.get_id() == id)?;
        Some(self.obstacles.remove(index))
    }

    pub fn get_obstacle(&self, id: EntityId) -> Option<&Obstacle> {
        self.obstacles.iter().find(|o| o.get_id() == id)
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn obstacles_mut(&mut self) -> &mut [Obstacle] {
        &mut self.obstacles
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

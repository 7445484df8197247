use std::fmt;

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, PartialOrd, Ord)]
pub struct EntityId(u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out entity IDs. One per world, so IDs are unique within a run.
#[derive(Default, Debug)]
pub struct IdGenerator {
    counter: u32,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> EntityId {
        self.counter += 1;
        EntityId(self.counter)
    }
}

/// What an obstacle does to the player on contact.
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum ObstacleKind {
    /// Good food: collected for score, then removed.
    Beneficial,
    /// Bad food: ends the run.
    Harmful,
}

impl ObstacleKind {
    pub fn is_beneficial(&self) -> bool {
        *self == ObstacleKind::Beneficial
    }
}

#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum EntityKind {
    Player,
    Obstacle(ObstacleKind),
}

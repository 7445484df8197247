//! Input state sampled once per tick

use crate::geometry::Direction;

/// Which directional keys are held down this tick. Any combination is allowed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldKeys {
    pub fn is_held(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// Held directions, in a fixed order
    pub fn held(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.iter().copied().filter(move |d| self.is_held(*d))
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Window closed or Escape pressed
    pub quit: bool,
    pub held: HeldKeys,
}

impl TickInput {
    pub fn holding(held: HeldKeys) -> Self {
        Self { quit: false, held }
    }

    pub fn quit() -> Self {
        Self {
            quit: true,
            ..Default::default()
        }
    }
}

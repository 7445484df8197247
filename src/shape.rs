use crate::geometry::{Rect, Vector, P};

/// Box spatial/world-state. Position is the top-left corner.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    pos: P,
    width: u32,
    height: u32,
    /// Velocity, in units per tick
    vel: Vector,
}

impl Shape {
    pub fn new(pos: P, width: u32, height: u32, vel: Vector) -> Self {
        assert!(width > 0 && height > 0);
        Self {
            pos,
            width,
            height,
            vel,
        }
    }

    pub fn get_pos(&self) -> &P {
        &self.pos
    }

    pub fn set_pos(&mut self, new_pos: P) {
        self.pos = new_pos;
    }

    pub fn set_x(&mut self, x: i32) {
        self.pos.0 = x;
    }

    pub fn get_vel(&self) -> &Vector {
        &self.vel
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Advance one tick of linear motion
    pub fn step(&mut self) {
        let (x, y) = self.pos;
        let (vx, vy) = self.vel;
        self.pos = (x + vx, y + vy);
    }

    pub fn bounds(&self) -> Rect {
        let (x, y) = self.pos;
        Rect::new(x, y, self.width, self.height)
    }
}

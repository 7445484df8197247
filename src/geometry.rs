//! Geometry and math operations

/// A vector of (x, y)
pub type Vector = (i32, i32);

/// A point of (x, y)
pub type P = Vector;

/// A half-open interval of [Min, Max)
pub type MinMax = (i32, i32);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: &'static [Direction] = &[
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

/// Axis-aligned box. (x, y) is the top-left corner, screen coordinates (y grows downwards).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Builds a box of the given size centred on `center`
    pub fn from_center(center: P, w: u32, h: u32) -> Self {
        let (cx, cy) = center;
        Self::new(cx - (w / 2) as i32, cy - (h / 2) as i32, w, h)
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w as i32
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h as i32
    }

    pub fn center(&self) -> P {
        (self.x + (self.w / 2) as i32, self.y + (self.h / 2) as i32)
    }

    /// Returns a copy moved by `v`
    pub fn translate(&self, v: Vector) -> Self {
        Self::new(self.x + v.0, self.y + v.1, self.w, self.h)
    }

    fn x_range(&self) -> MinMax {
        (self.left(), self.right())
    }

    fn y_range(&self) -> MinMax {
        (self.top(), self.bottom())
    }
}

/// Scale the vector `v` by constant `a`
pub fn scale(v: Vector, a: i32) -> Vector {
    (a * v.0, a * v.1)
}

pub fn direction_vector(direction: Direction) -> Vector {
    match direction {
        Direction::Up => (0, -1),
        Direction::Down => (0, 1),
        Direction::Left => (-1, 0),
        Direction::Right => (1, 0),
    }
}

/// Returns true if the given ranges overlap
/// Note: Exclusive at max i.e. returns false if range1 max = 3 and range2 min = 3
fn check_overlap(range1: MinMax, range2: MinMax) -> bool {
    let (r1min, r1max) = range1;
    let (r2min, r2max) = range2;

    r1min < r2max && r2min < r1max
}

/// Check whether there is a collision (i.e. non-empty intersection) between the given boxes.
/// Boxes that only share an edge don't collide.
pub fn is_collision(box1: &Rect, box2: &Rect) -> bool {
    check_overlap(box1.x_range(), box2.x_range()) && check_overlap(box1.y_range(), box2.y_range())
}

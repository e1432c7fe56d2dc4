//! Grid geometry: cells, extents, directions and rectangles
//!
//! Rectangles are half-open: a `Rect` at `(x, y)` of size `w × h` covers
//! cells `x..x + w` by `y..y + h`.

use serde::{Deserialize, Serialize};

/// A cell on the layout grid
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The adjacent cell in the given direction
    pub const fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Width and height of the grid every coordinate must fall inside
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct GridExtent {
    pub width: i32,
    pub height: i32,
}

impl Default for GridExtent {
    fn default() -> Self {
        Self::new(crate::DEFAULT_WIDTH, crate::DEFAULT_HEIGHT)
    }
}

impl GridExtent {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Check if a cell lies on the grid
    pub const fn contains(&self, pos: GridPos) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// Check if a cell lies inside the one-cell border reserved for walls
    pub const fn in_margin(&self, pos: GridPos) -> bool {
        pos.x >= 1 && pos.x <= self.width - 2 && pos.y >= 1 && pos.y <= self.height - 2
    }

    /// Clamp a cell onto the grid
    pub fn clamp(&self, pos: GridPos) -> GridPos {
        GridPos::new(
            pos.x.clamp(0, (self.width - 1).max(0)),
            pos.y.clamp(0, (self.height - 1).max(0)),
        )
    }
}

/// Cardinal direction, with `Up` pointing toward increasing `y`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Directions in the order neighbours are checked
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit offset `(dx, dy)`
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Yaw a piece of geometry guarding this side is rotated by
    pub const fn yaw_degrees(self) -> f32 {
        match self {
            Direction::Up => 0.0,
            Direction::Down => 180.0,
            Direction::Left => 270.0,
            Direction::Right => 90.0,
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// An axis-aligned, half-open integer rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn x_min(&self) -> i32 {
        self.x
    }

    pub const fn y_min(&self) -> i32 {
        self.y
    }

    /// One past the rightmost column
    pub const fn x_max(&self) -> i32 {
        self.x + self.width
    }

    /// One past the topmost row
    pub const fn y_max(&self) -> i32 {
        self.y + self.height
    }

    pub const fn area(&self) -> i32 {
        self.width * self.height
    }

    /// Geometric center
    pub fn center(&self) -> (f32, f32) {
        (
            self.x as f32 + self.width as f32 / 2.0,
            self.y as f32 + self.height as f32 / 2.0,
        )
    }

    /// Center rounded down to a cell
    pub const fn center_cell(&self) -> GridPos {
        GridPos::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Grow by `n` cells on every side
    pub const fn expanded(&self, n: i32) -> Self {
        Self::new(self.x - n, self.y - n, self.width + 2 * n, self.height + 2 * n)
    }

    /// Check if the two rectangles share at least one cell
    pub const fn overlaps(&self, other: &Rect) -> bool {
        other.x_min() < self.x_max()
            && other.x_max() > self.x_min()
            && other.y_min() < self.y_max()
            && other.y_max() > self.y_min()
    }

    /// Check if a cell is inside the rectangle
    pub const fn contains(&self, pos: GridPos) -> bool {
        pos.x >= self.x_min() && pos.x < self.x_max() && pos.y >= self.y_min() && pos.y < self.y_max()
    }

    /// All covered cells, column by column
    pub fn cells(&self) -> impl Iterator<Item = GridPos> + use<> {
        let Rect {
            x,
            y,
            width,
            height,
        } = *self;
        (x..x + width).flat_map(move |cx| (y..y + height).map(move |cy| GridPos::new(cx, cy)))
    }
}

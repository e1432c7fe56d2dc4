//! ASCII rendering of a generated layout
//!
//! Row `height - 1` is printed first so that `Up` points up on screen.

use std::io::{self, Write};

use crossterm::QueueableCommand as _;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use strum::IntoEnumIterator;

use dg_core::Layout;
use dg_core::dungeon::{GridPos, RoomRole};

pub const FLOOR: char = '.';
pub const WALL: char = '#';
pub const SPAWN: char = '@';
pub const COLLECTIBLE: char = '$';
pub const STONE: char = ' ';

/// Colour a floor cell is drawn with, by the role of the room it lies in
pub fn role_color(role: Option<RoomRole>) -> Color {
    match role {
        Some(RoomRole::Start) => Color::Green,
        Some(RoomRole::Exit) => Color::Red,
        Some(RoomRole::Treasure) => Color::Yellow,
        Some(RoomRole::Combat) => Color::Magenta,
        Some(RoomRole::Empty) => Color::White,
        // Corridors
        None => Color::DarkGrey,
    }
}

/// Character grid of a layout, top row first
pub struct Canvas {
    width: usize,
    height: usize,
    chars: Vec<char>,
}

impl Canvas {
    pub fn new(layout: &Layout) -> Self {
        let width = usize::try_from(layout.extent.width).unwrap_or(0);
        let height = usize::try_from(layout.extent.height).unwrap_or(0);
        let mut canvas = Self {
            width,
            height,
            chars: vec![STONE; width * height],
        };

        // Walls sit on the stone side of each boundary edge
        for wall in &layout.walls {
            canvas.set(wall.outside(), WALL);
        }
        for cell in layout.floor.iter() {
            canvas.set(cell, FLOOR);
        }
        for cell in layout.entities.collectible_cells() {
            canvas.set(cell, COLLECTIBLE);
        }
        if let Some(spawn) = layout.entities.spawn {
            canvas.set(spawn.cell, SPAWN);
        }
        canvas
    }

    fn index(&self, pos: GridPos) -> Option<usize> {
        let x = usize::try_from(pos.x).ok()?;
        let y = usize::try_from(pos.y).ok()?;
        if x >= self.width || y >= self.height {
            return None;
        }
        // Flip so the highest row comes first
        Some((self.height - 1 - y) * self.width + x)
    }

    fn set(&mut self, pos: GridPos, ch: char) {
        if let Some(i) = self.index(pos) {
            self.chars[i] = ch;
        }
    }

    #[cfg(test)]
    pub fn get(&self, pos: GridPos) -> Option<char> {
        self.index(pos).map(|i| self.chars[i])
    }

    /// Rows as printed, top first
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.chars.chunks(self.width.max(1)).take(self.height)
    }

    /// Grid position of a printed row and column
    fn grid_pos(&self, row: usize, col: usize) -> GridPos {
        GridPos::new(col as i32, (self.height - 1 - row) as i32)
    }
}

/// Render without colour, one line per row
pub fn render_plain(layout: &Layout) -> String {
    let canvas = Canvas::new(layout);
    let mut out = String::with_capacity((canvas.width + 1) * canvas.height);
    for row in canvas.rows() {
        out.extend(row.iter());
        out.push('\n');
    }
    out
}

/// Write the layout with floor cells coloured by room role
pub fn write_colored<W: Write>(out: &mut W, layout: &Layout) -> io::Result<()> {
    let canvas = Canvas::new(layout);
    let mut current = None;

    for (r, row) in canvas.rows().enumerate() {
        for (c, &ch) in row.iter().enumerate() {
            let color = match ch {
                FLOOR => Some(role_color(layout.role_at(canvas.grid_pos(r, c)))),
                SPAWN => Some(Color::Cyan),
                COLLECTIBLE => Some(Color::Yellow),
                WALL => Some(Color::Grey),
                _ => None,
            };
            if let Some(color) = color
                && current != Some(color)
            {
                out.queue(SetForegroundColor(color))?;
                current = Some(color);
            }
            out.queue(Print(ch))?;
        }
        out.queue(ResetColor)?;
        current = None;
        out.queue(Print('\n'))?;
    }
    out.flush()
}

/// One-line summary followed by the role legend
pub fn legend(layout: &Layout) -> String {
    let mut lines = vec![format!(
        "seed {}  {}x{}  rooms {}  corridors {}  floor {}  walls {}  collectibles {}",
        layout.seed,
        layout.extent.width,
        layout.extent.height,
        layout.rooms.len(),
        layout.corridor_count(),
        layout.floor.len(),
        layout.walls.len(),
        layout.collectible_count(),
    )];

    for role in RoomRole::iter() {
        let rooms: Vec<String> = layout
            .rooms
            .iter()
            .enumerate()
            .filter(|(_, r)| r.role == role)
            .map(|(i, _)| i.to_string())
            .collect();
        if !rooms.is_empty() {
            lines.push(format!(
                "  {} {:<9} rooms {}",
                role.tag(),
                role.to_string(),
                rooms.join(", ")
            ));
        }
    }
    lines.join("\n")
}

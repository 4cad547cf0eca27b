//! Text views of height grids and marked routes.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use ridgeway_core::{HeightGrid, MarkedGrid, OFF};

/// Shade ramp from lowest to highest terrain, one character per tenth.
const SHADES: &[u8; 10] = b" .-:=+*#%@";

/// How marked cells are drawn.
const PATH_CELL: &str = "()";
const PATH_COLOR: Color = Color::Red;

/// Shade character for a height in `[0, 99]`.
pub fn shade(height: i32) -> char {
    let i = (height.clamp(0, 99) * 10 / 100) as usize;
    SHADES[i] as char
}

/// Writes grids as text, optionally colouring path cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    pub color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// One `%2d ` column per height, rows north to south.
    pub fn heights<W: Write>(&self, out: &mut W, grid: &HeightGrid) -> io::Result<()> {
        for row in grid.rows() {
            for &h in row {
                write!(out, "{h:2} ")?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    /// Shaded view of a marked grid: each height is a doubled shade
    /// character, path cells print as `()`.
    pub fn shaded<W: Write>(&self, out: &mut W, grid: &MarkedGrid) -> io::Result<()> {
        for row in grid.rows() {
            for &h in row {
                if h == OFF {
                    self.path_cell(out)?;
                } else {
                    let c = shade(h);
                    write!(out, "{c}{c}")?;
                }
            }
            writeln!(out)?;
        }
        Ok(())
    }

    fn path_cell<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.color {
            queue!(out, SetForegroundColor(PATH_COLOR), Print(PATH_CELL), ResetColor)
        } else {
            write!(out, "{PATH_CELL}")
        }
    }
}

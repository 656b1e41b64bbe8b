//! Tile map consumed by every caster.
//!
//! Stored as one flat row-major buffer (`cells[y * width + x]`). `0` is
//! open floor; any other value is a solid wall and doubles as its wall-type
//! id for texture/palette selection downstream.

/// Tile code of open space.
pub const OPEN: i32 = 0;

/// Things that can go wrong when building a grid.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GridError {
    /// Row `row` has `found` cells, row 0 has `expected`.
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Flat buffer length does not match `width * height`.
    #[error("{found} cells supplied for a {width}x{height} grid")]
    CellCount {
        width: usize,
        height: usize,
        found: usize,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<i32>,
}

impl Grid {
    /// Wrap a row-major buffer of `width * height` tile codes.
    pub fn new(width: usize, height: usize, cells: Vec<i32>) -> Result<Self, GridError> {
        if cells.len() != width * height {
            return Err(GridError::CellCount {
                width,
                height,
                found: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Flatten nested rows (`rows[y][x]`).
    ///
    /// Zero rows, or rows of zero length, give an empty grid; rows of
    /// differing lengths are rejected.
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != width {
                return Err(GridError::Ragged {
                    row,
                    expected: width,
                    found: r.len(),
                });
            }
            cells.extend_from_slice(r);
        }
        if width == 0 {
            return Ok(Self::default());
        }
        Self::new(width, rows.len(), cells)
    }

    /// Parse an ASCII layout: `.` or space is open, digits are wall types,
    /// any other character is wall type 1. Lines are padded with open
    /// cells to the longest line.
    pub fn from_ascii(text: &str) -> Self {
        let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        if width == 0 {
            return Self::default();
        }
        let mut cells = vec![OPEN; width * lines.len()];
        for (y, line) in lines.iter().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                cells[y * width + x] = match ch {
                    '.' | ' ' => OPEN,
                    d if d.is_ascii_digit() => d as i32 - '0' as i32,
                    _ => 1,
                };
            }
        }
        Self {
            width,
            height: lines.len(),
            cells,
        }
    }

    #[inline(always)]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline(always)]
    pub fn height(&self) -> usize {
        self.height
    }

    /// No cells at all; every ray leaves such a grid immediately.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Tile code at `(x, y)`, `None` outside the grid.
    #[inline(always)]
    pub fn get(&self, x: i32, y: i32) -> Option<i32> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(self.cells[y as usize * self.width + x as usize])
    }

    /// Out-of-bounds cells count as solid.
    #[inline]
    pub fn is_solid(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_none_or(|c| c != OPEN)
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/

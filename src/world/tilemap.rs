/// Row-major grid of wall cells.
///
/// Cell code `0` is empty space; any positive code `c` is a wall drawn
/// with texture index `c - 1`. Cell `(x, y)` covers the world square
/// `[x, x+1) × [y, y+1)`.
///
/// The renderer assumes the outer border is solid so that every ray
/// cast from inside the grid terminates; maps violating that invariant
/// get whatever the grid walk runs into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tilemap {
    width: usize,
    height: usize,
    cells: Vec<u16>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TilemapError {
    /// Zero-area grids have no interior to cast rays from.
    #[error("tilemap dimensions {0}x{1} must both be at least 1")]
    Degenerate(usize, usize),

    /// The cell vector does not cover the grid exactly.
    #[error("cell count {got} does not match {width}x{height}")]
    SizeMismatch {
        width: usize,
        height: usize,
        got: usize,
    },
}

impl Tilemap {
    pub fn new(width: usize, height: usize, cells: Vec<u16>) -> Result<Self, TilemapError> {
        if width == 0 || height == 0 {
            return Err(TilemapError::Degenerate(width, height));
        }
        if cells.len() != width * height {
            return Err(TilemapError::SizeMismatch {
                width,
                height,
                got: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell code at `(x, y)`. Bounds stay with the caller; the solid
    /// border invariant keeps the grid walk inside the map.
    #[inline]
    pub fn cell(&self, x: i32, y: i32) -> u16 {
        debug_assert!(x >= 0 && (x as usize) < self.width);
        debug_assert!(y >= 0 && (y as usize) < self.height);
        self.cells[y as usize * self.width + x as usize]
    }

    #[inline]
    pub fn is_wall(&self, x: i32, y: i32) -> bool {
        self.cell(x, y) != 0
    }
}

/*======================================================================*/
/*                               Tests                                  */
/*======================================================================*/

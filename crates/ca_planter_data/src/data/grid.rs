use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::cell::is_binary;

/// Shape or content violations found while assembling a [`Grid`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid must have a non-zero width and height")]
    Empty,

    #[error("row {row} has {len} cells, expected {width}")]
    Ragged { row: usize, len: usize, width: usize },

    #[error("cell {index} holds {value}, expected 0 or 1")]
    NonBinary { index: usize, value: u8 },
}

/// Time evolution of a one-dimensional automaton.
///
/// Row 0 is the seed row and row `t` is the state after `t` steps. Cells are
/// stored row-major; every row has the same width and every cell is 0 or 1.
/// There are no mutators: a grid is assembled once and then only read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "GridRepr", try_from = "GridRepr")]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Builds a grid from row-major cells.
    ///
    /// `cells.len()` must be a non-zero multiple of `width`.
    pub fn from_cells(width: usize, cells: Vec<u8>) -> Result<Self, GridError> {
        if width == 0 || cells.is_empty() {
            return Err(GridError::Empty);
        }
        if cells.len() % width != 0 {
            let row = cells.len() / width;
            return Err(GridError::Ragged {
                row,
                len: cells.len() % width,
                width,
            });
        }
        if let Some((index, &value)) = cells.iter().enumerate().find(|(_, v)| !is_binary(**v)) {
            return Err(GridError::NonBinary { index, value });
        }
        Ok(Self {
            width,
            height: cells.len() / width,
            cells,
        })
    }

    /// Builds a grid from a list of rows, which must all have the same length.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != width {
                return Err(GridError::Ragged {
                    row,
                    len: r.len(),
                    width,
                });
            }
            cells.extend_from_slice(r);
        }
        Self::from_cells(width, cells)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns row `t`, or `None` past the last time step.
    pub fn row(&self, t: usize) -> Option<&[u8]> {
        if t >= self.height {
            return None;
        }
        let start = t * self.width;
        Some(&self.cells[start..start + self.width])
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[u8]> + '_ {
        self.cells.chunks_exact(self.width)
    }

    pub fn get(&self, t: usize, i: usize) -> Option<u8> {
        if i >= self.width {
            return None;
        }
        self.row(t).map(|r| r[i])
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }
}

/// Serialized form: explicit dimensions plus nested rows.
#[derive(Serialize, Deserialize)]
struct GridRepr {
    width: usize,
    height: usize,
    rows: Vec<Vec<u8>>,
}

impl From<Grid> for GridRepr {
    fn from(grid: Grid) -> Self {
        Self {
            width: grid.width,
            height: grid.height,
            rows: grid.rows().map(<[u8]>::to_vec).collect(),
        }
    }
}

impl TryFrom<GridRepr> for Grid {
    type Error = GridError;

    fn try_from(repr: GridRepr) -> Result<Self, Self::Error> {
        let grid = Grid::from_rows(&repr.rows)?;
        if grid.width != repr.width || grid.height != repr.height {
            return Err(GridError::Ragged {
                row: grid.height.min(repr.height),
                len: grid.width,
                width: repr.width,
            });
        }
        Ok(grid)
    }
}

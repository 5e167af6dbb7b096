use std::fmt::{Display, Formatter};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Cell {
    pub col: u32,
    pub row: u32,
}

impl Cell {
    pub const fn new(col: u32, row: u32) -> Self {
        Cell { col, row }
    }

    pub fn offset_by(&self, offset_col: u32, offset_row: u32) -> Cell {
        Cell {
            col: self.col + offset_col,
            row: self.row + offset_row,
        }
    }

    pub fn checked_offset_by(&self, offset_col: u32, offset_row: u32) -> Option<Cell> {
        Some(Cell {
            col: self.col.checked_add(offset_col)?,
            row: self.row.checked_add(offset_row)?,
        })
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

impl From<Cell> for (u32, u32) {
    fn from(cell: Cell) -> Self {
        (cell.col, cell.row)
    }
}

/// Handle of a block inside the caller's partition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct BlockId(pub usize);

impl Display for BlockId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A leaf of the partition tree. Blocks are handed over fully formed by the
/// partitioner and never change afterwards, so the geometry is read-only.
///
/// The parent is kept as a [BlockId] so that a block never owns, nor is owned
/// by, the rest of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Block {
    origin: Cell,
    width: u32,
    height: u32,
    parent: Option<BlockId>,
}

impl Block {
    pub fn new(x: u32, y: u32, width: u32, height: u32, parent: Option<BlockId>) -> Self {
        Block {
            origin: Cell::new(x, y),
            width,
            height,
            parent,
        }
    }

    pub fn x(&self) -> u32 {
        self.origin.col
    }

    pub fn y(&self) -> u32 {
        self.origin.row
    }

    pub fn origin(&self) -> Cell {
        self.origin
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn parent(&self) -> Option<BlockId> {
        self.parent
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.col >= self.origin.col
            && cell.row >= self.origin.row
            && cell.col - self.origin.col < self.width
            && cell.row - self.origin.row < self.height
    }
}

impl Display for Block {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({},{}):[{}x{}]",
            self.origin.col, self.origin.row, self.width, self.height
        )
    }
}

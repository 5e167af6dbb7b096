use crate::{
    constants::{MIN_ROOM_HEIGHT, MIN_ROOM_WIDTH, ROOM_MARGIN},
    error::{PlacementError, Result},
    sampler::SeededSampler,
    types::{Block, Cell},
};

use std::fmt::{Display, Formatter};

use tracing::event;

/// A rectangle anchored inside a [Block] through a relative offset.
///
/// The room borrows its block and the block knows nothing about the room.
/// Block and offset can be set in any order; the absolute position is always
/// derived from both and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room<'a> {
    width: u32,
    height: u32,
    relative: Option<Cell>,
    block: Option<&'a Block>,
}

impl<'a> Room<'a> {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width < MIN_ROOM_WIDTH || height < MIN_ROOM_HEIGHT {
            return Err(PlacementError::InvalidDimension { width, height });
        }

        Ok(Room {
            width,
            height,
            relative: None,
            block: None,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn block(&self) -> Option<&'a Block> {
        self.block
    }

    pub fn relative_x(&self) -> Option<u32> {
        self.relative.map(|cell| cell.col)
    }

    pub fn relative_y(&self) -> Option<u32> {
        self.relative.map(|cell| cell.row)
    }

    pub fn is_placed(&self) -> bool {
        self.block.is_some() && self.relative.is_some()
    }

    /// Anchors the room to `block`.
    ///
    /// An offset set beforehand must fit the envelope of the new block,
    /// otherwise the attach is rejected and the room keeps its previous block.
    pub fn attach(&mut self, block: &'a Block) -> Result<&'a Block> {
        if let Some(relative) = self.relative {
            let (x_max, y_max) = self.available_max_in(block);

            if !Self::fits(relative.col, x_max) || !Self::fits(relative.row, y_max) {
                event!(
                    tracing::Level::WARN,
                    "Rejected attaching room [{}x{}] at {} to block {}: envelope is [{}, {}]",
                    self.width,
                    self.height,
                    relative,
                    block,
                    x_max,
                    y_max
                );

                return Err(PlacementError::OutOfBounds {
                    x: relative.col,
                    y: relative.row,
                    x_max,
                    y_max,
                });
            }
        }

        self.block = Some(block);

        event!(
            tracing::Level::DEBUG,
            "Attached room [{}x{}] to block {}",
            self.width,
            self.height,
            block
        );

        Ok(block)
    }

    /// Sets the offset from the block origin as is. Nothing is checked here:
    /// validation happens when a block gets attached or an offset is sampled.
    pub fn set_relative(&mut self, x: u32, y: u32) {
        self.relative = Some(Cell::new(x, y));
    }

    pub fn available_x_max(&self) -> Result<i64> {
        let block = self.block.ok_or(PlacementError::NoBlock)?;

        Ok(self.available_max_in(block).0)
    }

    pub fn available_y_max(&self) -> Result<i64> {
        let block = self.block.ok_or(PlacementError::NoBlock)?;

        Ok(self.available_max_in(block).1)
    }

    /// Picks a legal offset from a sampler seeded with `seed`, stores it and
    /// returns it as `(relative_x, relative_y)`.
    pub fn set_random_coordinate(&mut self, seed: u64) -> Result<(u32, u32)> {
        self.set_random_coordinate_with(&mut SeededSampler::from_seed(seed))
    }

    /// Same as [Room::set_random_coordinate], drawing from a sampler owned by
    /// the caller. The x offset is always drawn before the y offset.
    pub fn set_random_coordinate_with(
        &mut self,
        sampler: &mut SeededSampler,
    ) -> Result<(u32, u32)> {
        let block = self.block.ok_or(PlacementError::NoBlock)?;
        let (x_max, y_max) = self.available_max_in(block);

        let min = ROOM_MARGIN as i64;
        if x_max < min || y_max < min {
            event!(
                tracing::Level::WARN,
                "No legal placement for room [{}x{}] in block {}: envelope is [{}, {}]",
                self.width,
                self.height,
                block,
                x_max,
                y_max
            );

            return Err(PlacementError::NoLegalPlacement { x_max, y_max });
        }

        // Both maxima are positive and bounded by the block size at this point
        let x = sampler.sample_inclusive(ROOM_MARGIN, x_max as u32);
        let y = sampler.sample_inclusive(ROOM_MARGIN, y_max as u32);

        self.set_relative(x, y);

        event!(
            tracing::Level::DEBUG,
            "Placed room [{}x{}] at ({}, {}) inside block {}",
            self.width,
            self.height,
            x,
            y,
            block
        );

        Ok((x, y))
    }

    /// Absolute column of the room's left edge, or `None` while the room has
    /// no block or no offset, or when the column does not fit in a `u32`.
    pub fn x(&self) -> Option<u32> {
        let block = self.block?;
        let relative = self.relative?;

        block.x().checked_add(relative.col)
    }

    /// Absolute row of the room's top edge, or `None` while the room has no
    /// block or no offset, or when the row does not fit in a `u32`.
    pub fn y(&self) -> Option<u32> {
        let block = self.block?;
        let relative = self.relative?;

        block.y().checked_add(relative.row)
    }

    pub fn absolute_origin(&self) -> Result<Cell> {
        let (block, relative) = self.anchor()?;

        block
            .origin()
            .checked_offset_by(relative.col, relative.row)
            .ok_or(PlacementError::CoordinateOverflow {
                x: relative.col,
                y: relative.row,
            })
    }

    /// Lazily walks the absolute cells covered by the room in row-major order.
    /// Fails when any covered cell lies past the `u32` grid.
    pub fn coordinates(&self) -> Result<RoomCells> {
        let (_, relative) = self.anchor()?;
        let origin = self.absolute_origin()?;

        // The far corner bounds every cell the iterator hands out
        if origin
            .checked_offset_by(self.width - 1, self.height - 1)
            .is_none()
        {
            return Err(PlacementError::CoordinateOverflow {
                x: relative.col,
                y: relative.row,
            });
        }

        Ok(RoomCells {
            origin,
            width: self.width,
            height: self.height,
            next: 0,
        })
    }

    /// Calls `callback` with `(col, row)` once for every covered cell, top to
    /// bottom and left to right within a row.
    pub fn each_coordinate<F>(&self, mut callback: F) -> Result<()>
    where
        F: FnMut(u32, u32),
    {
        for cell in self.coordinates()? {
            callback(cell.col, cell.row);
        }

        Ok(())
    }

    fn anchor(&self) -> Result<(&'a Block, Cell)> {
        let block = self.block.ok_or(PlacementError::NoBlock)?;
        let relative = self.relative.ok_or(PlacementError::NoCoordinate)?;

        Ok((block, relative))
    }

    // Largest legal relative offset on each axis for this room inside `block`.
    // Negative values mean the room does not fit at all.
    fn available_max_in(&self, block: &Block) -> (i64, i64) {
        let margin = ROOM_MARGIN as i64;

        (
            block.width() as i64 - self.width as i64 - margin,
            block.height() as i64 - self.height as i64 - margin,
        )
    }

    fn fits(offset: u32, max: i64) -> bool {
        (ROOM_MARGIN as i64..=max).contains(&(offset as i64))
    }
}

impl Display for Room<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}x{}]", self.width, self.height)?;

        if let Some(block) = self.block {
            write!(f, " @ {}", block)?;
        }

        if let Some(relative) = self.relative {
            write!(f, " + {}", relative)?;
        }

        Ok(())
    }
}

/// Restartable iterator over the absolute cells of a placed room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomCells {
    origin: Cell,
    width: u32,
    height: u32,
    next: usize,
}

impl RoomCells {
    fn len_total(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Iterator for RoomCells {
    type Item = Cell;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.len_total() {
            return None;
        }

        let width = self.width as usize;
        let col = (self.next % width) as u32;
        let row = (self.next / width) as u32;
        self.next += 1;

        Some(self.origin.offset_by(col, row))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len_total() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RoomCells {}

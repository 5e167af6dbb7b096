use crate::constants::{MIN_ROOM_HEIGHT, MIN_ROOM_WIDTH};

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error(
        "room dimensions [{width}x{height}] are below the minimum of [{}x{}]",
        MIN_ROOM_WIDTH,
        MIN_ROOM_HEIGHT
    )]
    InvalidDimension { width: u32, height: u32 },

    #[error("room is not attached to any block")]
    NoBlock,

    #[error("relative coordinate ({x}, {y}) is outside the legal range [1..={x_max}]x[1..={y_max}]")]
    OutOfBounds {
        x: u32,
        y: u32,
        x_max: i64,
        y_max: i64,
    },

    #[error("block leaves no legal placement for the room (available max: {x_max}, {y_max})")]
    NoLegalPlacement { x_max: i64, y_max: i64 },

    #[error("room has no relative coordinate set")]
    NoCoordinate,

    #[error("relative coordinate ({x}, {y}) puts the room past the end of the grid")]
    CoordinateOverflow { x: u32, y: u32 },
}

pub type Result<T> = std::result::Result<T, PlacementError>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_invalid_dimension_message() {
        let error = PlacementError::InvalidDimension {
            width: 2,
            height: 5,
        };

        assert_eq!(
            error.to_string(),
            format!(
                "room dimensions [2x5] are below the minimum of [{}x{}]",
                MIN_ROOM_WIDTH, MIN_ROOM_HEIGHT
            )
        );
    }
}

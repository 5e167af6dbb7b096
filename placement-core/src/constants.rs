pub(crate) const MIN_ROOM_WIDTH: u32 = 3;
pub(crate) const MIN_ROOM_HEIGHT: u32 = 3;

// Cells left free between a room and every edge of its block.
pub(crate) const ROOM_MARGIN: u32 = 1;

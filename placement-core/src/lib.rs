mod constants;
mod error;
mod room;
mod sampler;
mod types;

use tracing::{Level, span};

pub use error::{PlacementError, Result};
pub use room::{Room, RoomCells};
pub use sampler::{SeededSampler, derive_seed};
pub use types::{Block, BlockId, Cell};

/// Builds a `width`x`height` room, attaches it to `block` and gives it a
/// random legal offset derived from `seed`.
pub fn place_room(block: &Block, width: u32, height: u32, seed: u64) -> Result<Room<'_>> {
    let span = span!(Level::DEBUG, "place_room");
    let _guard = span.enter();

    let mut room = Room::new(width, height)?;
    room.attach(block)?;
    room.set_random_coordinate(seed)?;

    Ok(room)
}

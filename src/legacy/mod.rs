//! Conversion between the V11 appearance model and legacy flat items.

mod mapper;
mod reverse;

pub use mapper::{map_to_legacy, DanglingSpriteRef, MapOptions, MapOutput, STATIC_TYPE};
pub use reverse::{items_to_appearances, DEFAULT_ITEM_TYPE, IDLE_GROUP};

//! assetsuite - V11 ↔ legacy game asset conversion
//!
//! Codecs for V11 appearance documents and SPSH sprite sheets, the mapping
//! engine that flattens appearances into legacy items, and the file
//! pipeline and CLI built on top of them.

pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod legacy;
pub mod output;
pub mod pipeline;
pub mod types;
pub mod validation;

pub use codec::{
    encode_sheet, parse_appearances, read_appearances, read_items, read_sheet, write_appearances,
    write_items, write_sheet,
};
pub use config::Config;
pub use error::{AssetError, Result};
pub use legacy::{items_to_appearances, map_to_legacy, DanglingSpriteRef, MapOptions, MapOutput};
pub use pipeline::{convert_to_legacy, convert_to_v11, LegacyBundle, V11Bundle};
pub use types::{Appearance, Attributes, Frame, FrameGroup, ItemType, Sprite};
pub use validation::{validate_legacy_pair, Diagnostic, Severity, ValidationResult};

//! File format codecs.
//!
//! - `appearances` - V11 appearance JSON documents
//! - `sheet` - SPSH compressed sprite sheets
//! - `items` - legacy item lists as JSON
//! - `compress` - the compression primitive behind sheet payloads

pub mod compress;

mod appearances;
mod items;
mod sheet;

pub use appearances::{
    appearances_to_string, parse_appearances, read_appearances, read_appearances_file,
    write_appearances,
};
pub use items::{read_items, read_items_file, write_items};
pub use sheet::{
    encode_sheet, read_sheet, read_sheet_file, write_sheet, write_sheet_file, HEADER_LEN,
    SHEET_MAGIC,
};

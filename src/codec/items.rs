//! Legacy item list JSON.
//!
//! `[{ "clientId": 100, "serverId": 100, "attributes": { "Type": "Item", "Frame_1": "100" } }]`
//!
//! Attribute keys are written in insertion order and read back in document
//! order.

use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use crate::error::{AssetError, Result};
use crate::types::ItemType;

/// Read a legacy item list.
pub fn read_items<R: Read>(reader: R) -> Result<Vec<ItemType>> {
    serde_json::from_reader(reader).map_err(|e| AssetError::malformed(format!("item list: {}", e)))
}

/// Write a legacy item list as pretty-printed JSON.
pub fn write_items<W: Write>(items: &[ItemType], mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, items).map_err(|e| AssetError::IoError(e.into()))?;
    writer.flush()?;
    Ok(())
}

/// Read a legacy item list from disk.
pub fn read_items_file(path: &Path) -> Result<Vec<ItemType>> {
    let file = fs::File::open(path).map_err(|e| AssetError::io_at(path, "Failed to open item list", e))?;
    read_items(std::io::BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_round_trip_keeps_attribute_order() {
        let mut item = ItemType::new(100, 200);
        item.attributes.set("Type", "Item");
        item.attributes.set("Frame_1", "100");
        item.attributes.set("Frame_2", "150");
        let items = vec![item, ItemType::new(101, 201)];

        let mut buf = Vec::new();
        write_items(&items, &mut buf).unwrap();
        let decoded = read_items(buf.as_slice()).unwrap();

        assert_eq!(decoded, items);
        let keys: Vec<&str> = decoded[0].attributes.keys().collect();
        assert_eq!(keys, vec!["Type", "Frame_1", "Frame_2"]);
    }

    #[test]
    fn test_non_string_attribute_is_malformed() {
        let json = r#"[{"clientId":1,"serverId":1,"attributes":{"Frame_1":100}}]"#;
        let err = read_items(json.as_bytes()).unwrap_err();
        assert!(matches!(err, AssetError::MalformedDocument { .. }));
    }

    #[test]
    fn test_read_items_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.json");
        fs::write(&path, r#"[{"clientId":3,"serverId":4,"attributes":{"Type":"Static"}}]"#).unwrap();

        let items = read_items_file(&path).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].server_id, 4);
        assert_eq!(items[0].attributes.get("Type"), Some("Static"));
    }
}

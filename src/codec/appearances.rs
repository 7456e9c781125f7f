//! Appearance JSON codec.
//!
//! Documents look like:
//!
//! ```json
//! {
//!   "appearances": [
//!     {
//!       "id": 100,
//!       "type": "Item",
//!       "frameGroups": [
//!         { "groupType": "Idle", "defaultDuration": 100,
//!           "frames": [ { "duration": 120, "spriteIds": [1, 2] } ] }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! Missing frame durations take the group's resolved default at read time.

use std::fs;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{AssetError, Result};
use crate::types::{Appearance, Frame, FrameGroup, DEFAULT_FRAME_DURATION};

/// Read every appearance from a JSON document.
///
/// Any structural problem fails the whole read.
pub fn read_appearances<R: Read>(reader: R) -> Result<Vec<Appearance>> {
    let document: DocumentIn = serde_json::from_reader(reader)
        .map_err(|e| AssetError::malformed(format!("appearance document: {}", e)))?;

    document
        .appearances
        .into_iter()
        .map(AppearanceIn::resolve)
        .collect()
}

/// Parse appearances from a JSON string.
pub fn parse_appearances(source: &str) -> Result<Vec<Appearance>> {
    read_appearances(source.as_bytes())
}

/// Read an appearance document from disk.
pub fn read_appearances_file(path: &Path) -> Result<Vec<Appearance>> {
    let file = fs::File::open(path).map_err(|e| AssetError::io_at(path, "Failed to open appearances", e))?;
    read_appearances(BufReader::new(file))
}

/// Write appearances as a pretty-printed JSON document.
///
/// Empty `frameGroups` and `frames` arrays are always written.
pub fn write_appearances<W: Write>(appearances: &[Appearance], mut writer: W) -> Result<()> {
    let document = DocumentOut {
        appearances: appearances.iter().map(AppearanceOut::from).collect(),
    };
    serde_json::to_writer_pretty(&mut writer, &document)
        .map_err(|e| AssetError::IoError(e.into()))?;
    writer.flush()?;
    Ok(())
}

/// Serialize appearances to a pretty-printed JSON string.
pub fn appearances_to_string(appearances: &[Appearance]) -> Result<String> {
    let mut buf = Vec::new();
    write_appearances(appearances, &mut buf)?;
    String::from_utf8(buf).map_err(|e| AssetError::precondition(e.to_string()))
}

// --- wire types ---

#[derive(Deserialize)]
struct DocumentIn {
    appearances: Vec<AppearanceIn>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppearanceIn {
    id: i32,
    #[serde(rename = "type", deserialize_with = "nullable_string")]
    kind: String,
    #[serde(default)]
    frame_groups: Option<Vec<FrameGroupIn>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FrameGroupIn {
    #[serde(default, deserialize_with = "nullable_string")]
    group_type: String,
    default_duration: Option<i32>,
    #[serde(default)]
    frames: Option<Vec<FrameIn>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FrameIn {
    duration: Option<i32>,
    #[serde(default)]
    sprite_ids: Option<Vec<i32>>,
}

/// Accept `null` for a string field and read it as empty.
fn nullable_string<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl AppearanceIn {
    fn resolve(self) -> Result<Appearance> {
        let id = self.id;
        let frame_groups = self
            .frame_groups
            .unwrap_or_default()
            .into_iter()
            .map(|group| group.resolve(id))
            .collect::<Result<Vec<_>>>()?;

        Ok(Appearance {
            id,
            kind: self.kind,
            frame_groups,
        })
    }
}

impl FrameGroupIn {
    fn resolve(self, appearance_id: i32) -> Result<FrameGroup> {
        let default_duration = self.default_duration.unwrap_or(DEFAULT_FRAME_DURATION);
        if default_duration <= 0 {
            return Err(AssetError::malformed(format!(
                "appearance {} group '{}' has a non-positive defaultDuration",
                appearance_id, self.group_type
            )));
        }

        let frames = self
            .frames
            .unwrap_or_default()
            .into_iter()
            .map(|frame| Frame {
                duration: frame.duration.unwrap_or(default_duration),
                sprite_ids: frame.sprite_ids.unwrap_or_default(),
            })
            .collect();

        Ok(FrameGroup {
            group_type: self.group_type,
            default_duration,
            frames,
        })
    }
}

#[derive(Serialize)]
struct DocumentOut<'a> {
    appearances: Vec<AppearanceOut<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AppearanceOut<'a> {
    id: i32,
    #[serde(rename = "type")]
    kind: &'a str,
    frame_groups: Vec<FrameGroupOut<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FrameGroupOut<'a> {
    group_type: &'a str,
    default_duration: i32,
    frames: Vec<FrameOut<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FrameOut<'a> {
    duration: i32,
    sprite_ids: &'a [i32],
}

impl<'a> From<&'a Appearance> for AppearanceOut<'a> {
    fn from(appearance: &'a Appearance) -> Self {
        Self {
            id: appearance.id,
            kind: &appearance.kind,
            frame_groups: appearance
                .frame_groups
                .iter()
                .map(|group| FrameGroupOut {
                    group_type: &group.group_type,
                    default_duration: group.default_duration,
                    frames: group
                        .frames
                        .iter()
                        .map(|frame| FrameOut {
                            duration: frame.duration,
                            sprite_ids: &frame.sprite_ids,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<Appearance> {
        vec![
            Appearance::new(100, "Item").with_group(
                FrameGroup::new("Idle", 100)
                    .with_frame(Frame::new(100, vec![1, 2]))
                    .with_frame(Frame::new(250, vec![3])),
            ),
            Appearance::new(101, "Outfit")
                .with_group(FrameGroup::new("Idle", 200).with_frame(Frame::new(200, vec![4])))
                .with_group(FrameGroup::new("Moving", 80).with_frame(Frame::new(40, vec![]))),
            Appearance::new(102, ""),
        ]
    }

    #[test]
    fn test_round_trip_with_explicit_durations() {
        let appearances = sample();
        let json = appearances_to_string(&appearances).unwrap();
        let decoded = parse_appearances(&json).unwrap();
        assert_eq!(decoded, appearances);
    }

    #[test]
    fn test_defaults_are_resolved() {
        let json = r#"{
            "appearances": [
                { "id": 1, "type": "Item", "frameGroups": [
                    { "groupType": "Idle", "frames": [ {}, { "duration": 30 } ] },
                    { "defaultDuration": 250, "frames": [ { "spriteIds": [5] } ] }
                ] }
            ]
        }"#;

        let decoded = parse_appearances(json).unwrap();
        let groups = &decoded[0].frame_groups;

        assert_eq!(groups[0].default_duration, 100);
        assert_eq!(groups[0].frames[0], Frame::new(100, vec![]));
        assert_eq!(groups[0].frames[1].duration, 30);
        assert_eq!(groups[1].group_type, "");
        assert_eq!(groups[1].frames[0], Frame::new(250, vec![5]));
    }

    #[test]
    fn test_null_type_becomes_empty() {
        let decoded = parse_appearances(r#"{"appearances":[{"id":3,"type":null}]}"#).unwrap();
        assert_eq!(decoded, vec![Appearance::new(3, "")]);
    }

    #[test]
    fn test_missing_frame_groups_is_empty() {
        let decoded = parse_appearances(r#"{"appearances":[{"id":3,"type":"Effect"}]}"#).unwrap();
        assert!(decoded[0].frame_groups.is_empty());
    }

    #[test]
    fn test_missing_required_fields_fail() {
        for json in [
            r#"{"appearances":[{"type":"Item"}]}"#,
            r#"{"appearances":[{"id":1}]}"#,
            r#"{"items":[]}"#,
            r#"{"appearances":[{"id":"one","type":"Item"}]}"#,
            r#"{"appearances":[{"id":1,"type":"Item"},{"id":2}]}"#,
            r#"{"appearances": ["#,
        ] {
            let err = parse_appearances(json).unwrap_err();
            assert!(
                matches!(err, AssetError::MalformedDocument { .. }),
                "expected malformed document for {}",
                json
            );
        }
    }

    #[test]
    fn test_zero_default_duration_fails() {
        let json = r#"{"appearances":[{"id":1,"type":"Item","frameGroups":[{"defaultDuration":0}]}]}"#;
        assert!(matches!(
            parse_appearances(json).unwrap_err(),
            AssetError::MalformedDocument { .. }
        ));
    }

    #[test]
    fn test_negative_default_duration_fails() {
        let json = r#"{"appearances":[{"id":1,"type":"Item","frameGroups":[{"defaultDuration":-10}]}]}"#;
        assert!(matches!(
            parse_appearances(json).unwrap_err(),
            AssetError::MalformedDocument { .. }
        ));
    }

    #[test]
    fn test_negative_frame_duration_is_kept() {
        let json = r#"{"appearances":[{"id":1,"type":"Item","frameGroups":[{"frames":[{"duration":-5,"spriteIds":[1]}]}]}]}"#;
        let decoded = parse_appearances(json).unwrap();
        assert_eq!(decoded[0].frame_groups[0].frames[0].duration, -5);

        let out = crate::legacy::map_to_legacy(&decoded, &[], crate::legacy::MapOptions::default());
        assert_eq!(out.items[0].attributes.get("Frame_1"), Some("-5"));
    }

    #[test]
    fn test_inherited_duration_becomes_explicit() {
        let json = r#"{"appearances":[{"id":1,"type":"Item","frameGroups":[{"groupType":"Idle","defaultDuration":70,"frames":[{"spriteIds":[1]}]}]}]}"#;
        let decoded = parse_appearances(json).unwrap();
        let written = appearances_to_string(&decoded).unwrap();

        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["appearances"][0]["frameGroups"][0]["frames"][0]["duration"], 70);
    }

    #[test]
    fn test_writer_output_is_stable() {
        let appearances = vec![
            Appearance::new(7, "Item")
                .with_group(FrameGroup::new("Idle", 100).with_frame(Frame::new(120, vec![1, 2]))),
            Appearance::new(8, "Effect").with_group(FrameGroup::new("Idle", 100)),
        ];

        insta::assert_snapshot!(appearances_to_string(&appearances).unwrap(), @r###"
        {
          "appearances": [
            {
              "id": 7,
              "type": "Item",
              "frameGroups": [
                {
                  "groupType": "Idle",
                  "defaultDuration": 100,
                  "frames": [
                    {
                      "duration": 120,
                      "spriteIds": [
                        1,
                        2
                      ]
                    }
                  ]
                }
              ]
            },
            {
              "id": 8,
              "type": "Effect",
              "frameGroups": [
                {
                  "groupType": "Idle",
                  "defaultDuration": 100,
                  "frames": []
                }
              ]
            }
          ]
        }
        "###);
    }

    #[test]
    fn test_empty_collections_are_written() {
        let written = appearances_to_string(&[Appearance::new(1, "Item")]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["appearances"][0]["frameGroups"], serde_json::json!([]));
    }

    #[test]
    fn test_read_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("appearances.json");
        std::fs::write(&path, r#"{"appearances":[{"id":7,"type":"Item"}]}"#).unwrap();

        let appearances = read_appearances_file(&path).unwrap();
        assert_eq!(appearances, vec![Appearance::new(7, "Item")]);

        let err = read_appearances_file(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, AssetError::Io { .. }));
    }
}

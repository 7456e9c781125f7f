//! Structural checks for a legacy item list and its sprite archive.
//!
//! Each check returns its own `ValidationResult`.

use std::collections::HashSet;

use crate::types::{ItemType, Sprite, FRAME_ATTRIBUTE_PREFIX};

use super::diagnostic::{Diagnostic, ValidationResult};

pub fn check_sprites_present(sprites: &[Sprite]) -> ValidationResult {
    let mut result = ValidationResult::new();
    if sprites.is_empty() {
        result.push(Diagnostic::error(
            "assetsuite::validate::empty-sprites",
            "Sprite archive is empty",
        ));
    }
    result
}

pub fn check_items_present(items: &[ItemType]) -> ValidationResult {
    let mut result = ValidationResult::new();
    if items.is_empty() {
        result.push(Diagnostic::error(
            "assetsuite::validate::empty-items",
            "Item list is empty",
        ));
    }
    result
}

/// One diagnostic covers every sprite with a zero width or height.
pub fn check_sprite_dimensions(sprites: &[Sprite]) -> ValidationResult {
    let mut result = ValidationResult::new();
    let bad: Vec<String> = sprites
        .iter()
        .filter(|s| s.width() == 0 || s.height() == 0)
        .map(|s| s.id.to_string())
        .collect();

    if !bad.is_empty() {
        result.push(
            Diagnostic::error(
                "assetsuite::validate::sprite-dimensions",
                format!("Sprites with invalid dimensions: {}", bad.join(", ")),
            )
            .with_help("Every sprite needs a non-zero width and height"),
        );
    }
    result
}

/// `Frame_*` attributes (prefix matched case-insensitively) must hold integers.
pub fn check_frame_attributes(items: &[ItemType]) -> ValidationResult {
    let mut result = ValidationResult::new();
    let prefix_len = FRAME_ATTRIBUTE_PREFIX.len();

    for item in items {
        for (key, value) in item.attributes.iter() {
            let is_frame = key.len() >= prefix_len
                && key.is_char_boundary(prefix_len)
                && key[..prefix_len].eq_ignore_ascii_case(FRAME_ATTRIBUTE_PREFIX);

            if is_frame && value.trim().parse::<i32>().is_err() {
                result.push(Diagnostic::error(
                    "assetsuite::validate::frame-duration",
                    format!(
                        "Item {} frame attribute '{}' is not numeric ('{}')",
                        item.client_id, key, value
                    ),
                ));
            }
        }
    }
    result
}

pub fn check_client_ids(items: &[ItemType]) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut seen = HashSet::new();

    for item in items {
        if item.client_id <= 0 {
            result.push(Diagnostic::error(
                "assetsuite::validate::client-id",
                format!("Item {} has an invalid client identifier", item.server_id),
            ));
        } else if !seen.insert(item.client_id) {
            result.push(Diagnostic::warning(
                "assetsuite::validate::duplicate-client-id",
                format!("Client identifier {} is used by more than one item", item.client_id),
            ));
        }
    }
    result
}

/// Sprite ids must run `1..=n` without gaps, so the highest id equals the count.
pub fn check_sprite_sequence(sprites: &[Sprite]) -> ValidationResult {
    let mut result = ValidationResult::new();
    let highest = sprites.iter().map(|s| s.id as usize).max().unwrap_or(0);

    if highest != sprites.len() {
        result.push(
            Diagnostic::error(
                "assetsuite::validate::sprite-gap",
                format!(
                    "Sprite identifiers must be sequential without gaps (highest {}, count {})",
                    highest,
                    sprites.len()
                ),
            )
            .with_help("Renumber sprites 1..n in archive order"),
        );
    }
    result
}

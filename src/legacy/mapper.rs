//! V11 → legacy mapping.
//!
//! Each appearance becomes one legacy item. Frame durations become
//! positional `Frame_<n>` attributes, where `n` is the attribute count at the
//! moment of insertion, and every referenced sprite is copied into a flat
//! output list and renumbered from 1 in emission order across the whole call.

use crate::types::{Appearance, FrameGroup, ItemType, Sprite, FRAME_ATTRIBUTE_PREFIX, TYPE_ATTRIBUTE};

/// Type written for items that end up without any frame.
pub const STATIC_TYPE: &str = "Static";

/// Switches controlling how much animation data survives the mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapOptions {
    /// Use each frame's own duration instead of its group's default.
    pub enable_frame_durations: bool,
    /// Keep every frame of a group; when off only the first frame of each
    /// group is mapped.
    pub enable_frame_groups: bool,
    /// Rewrite `Type` to `Static` for items that received no frames.
    pub idle_animation_as_static: bool,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            enable_frame_durations: true,
            enable_frame_groups: true,
            idle_animation_as_static: false,
        }
    }
}

/// A sprite reference that pointed outside the sprite pool and was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DanglingSpriteRef {
    pub appearance_id: i32,
    pub group_index: usize,
    pub frame_index: usize,
    pub sprite_id: i32,
}

/// Result of a mapping run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapOutput {
    /// One item per input appearance, in input order.
    pub items: Vec<ItemType>,
    /// Renumbered sprites in emission order.
    pub sprites: Vec<Sprite>,
    /// References that were skipped because no sprite exists at that id.
    pub dangling: Vec<DanglingSpriteRef>,
}

/// Map appearances and a 1-based sprite pool to legacy items and sprites.
///
/// `sprites[i]` is the sprite referenced by id `i + 1`. Dangling references
/// never fail the call; they are skipped and listed in
/// [`MapOutput::dangling`].
pub fn map_to_legacy(appearances: &[Appearance], sprites: &[Sprite], options: MapOptions) -> MapOutput {
    let state = appearances.iter().fold(MapState::new(), |state, appearance| {
        state.push_appearance(appearance, sprites, &options)
    });
    state.output
}

/// Accumulator threaded through the fold.
struct MapState {
    next_sprite_id: u32,
    output: MapOutput,
}

impl MapState {
    fn new() -> Self {
        Self {
            next_sprite_id: 1,
            output: MapOutput::default(),
        }
    }

    fn push_appearance(mut self, appearance: &Appearance, pool: &[Sprite], options: &MapOptions) -> Self {
        let mut item = ItemType::new(appearance.id, appearance.id);
        item.attributes.set(TYPE_ATTRIBUTE, appearance.kind.as_str());

        for (group_index, group) in appearance.frame_groups.iter().enumerate() {
            let limit = if options.enable_frame_groups { group.frames.len() } else { 1 };

            for (frame_index, frame) in group.frames.iter().take(limit).enumerate() {
                let duration = effective_duration(group, frame.duration, options);
                let key = format!("{}{}", FRAME_ATTRIBUTE_PREFIX, item.attributes.len());
                item.attributes.set(key, duration.to_string());

                for &sprite_id in &frame.sprite_ids {
                    match lookup(pool, sprite_id) {
                        Some(sprite) => {
                            self.output.sprites.push(sprite.with_id(self.next_sprite_id));
                            self.next_sprite_id += 1;
                        }
                        None => self.output.dangling.push(DanglingSpriteRef {
                            appearance_id: appearance.id,
                            group_index,
                            frame_index,
                            sprite_id,
                        }),
                    }
                }
            }
        }

        if options.idle_animation_as_static && item.attributes.len() == 1 {
            item.attributes.set(TYPE_ATTRIBUTE, STATIC_TYPE);
        }

        self.output.items.push(item);
        self
    }
}

fn effective_duration(group: &FrameGroup, frame_duration: i32, options: &MapOptions) -> i32 {
    if options.enable_frame_durations {
        frame_duration
    } else {
        group.default_duration
    }
}

/// Resolve a 1-based sprite id against the pool.
fn lookup(pool: &[Sprite], sprite_id: i32) -> Option<&Sprite> {
    let index = usize::try_from(sprite_id).ok()?.checked_sub(1)?;
    pool.get(index)
}

//! Legacy → V11 mapping.
//!
//! Legacy items carry no frame structure, so every item becomes a single
//! idle frame showing the sprite whose id equals the item's client id.

use crate::types::{Appearance, FrameGroup, ItemType, DEFAULT_FRAME_DURATION, TYPE_ATTRIBUTE};

/// Type used when a legacy item has no `Type` attribute.
pub const DEFAULT_ITEM_TYPE: &str = "Item";

/// Group label given to the single frame group of a converted item.
pub const IDLE_GROUP: &str = "Idle";

/// Build one appearance per legacy item, in order.
pub fn items_to_appearances(items: &[ItemType]) -> Vec<Appearance> {
    items.iter().map(item_to_appearance).collect()
}

fn item_to_appearance(item: &ItemType) -> Appearance {
    let kind = item
        .attributes
        .get(TYPE_ATTRIBUTE)
        .unwrap_or(DEFAULT_ITEM_TYPE);

    Appearance::new(item.client_id, kind).with_group(
        FrameGroup::new(IDLE_GROUP, DEFAULT_FRAME_DURATION).with_default_frame(vec![item.client_id]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Frame;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_item_becomes_single_idle_frame() {
        let mut item = ItemType::new(12, 99);
        item.attributes.set("Type", "Outfit");

        let appearances = items_to_appearances(&[item]);

        assert_eq!(
            appearances,
            vec![Appearance::new(12, "Outfit").with_group(
                FrameGroup::new("Idle", 100).with_frame(Frame::new(100, vec![12]))
            )]
        );
    }

    #[test]
    fn test_missing_type_defaults_to_item() {
        let appearances = items_to_appearances(&[ItemType::new(3, 3)]);
        assert_eq!(appearances[0].kind, "Item");
    }
}

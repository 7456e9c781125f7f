//! Modern (V11) appearance model.
//!
//! An appearance owns an ordered list of frame groups, each group an ordered
//! list of frames, and each frame references sprites by 1-based id.

/// Duration in milliseconds used when a frame group omits `defaultDuration`.
pub const DEFAULT_FRAME_DURATION: i32 = 100;

/// A visual entity (item, outfit, effect, ...) with its animation tracks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Appearance {
    pub id: i32,
    /// Free-form category label, e.g. "Item" or "Outfit".
    pub kind: String,
    pub frame_groups: Vec<FrameGroup>,
}

impl Appearance {
    pub fn new(id: i32, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
            frame_groups: Vec::new(),
        }
    }

    /// Append a frame group.
    pub fn with_group(mut self, group: FrameGroup) -> Self {
        self.frame_groups.push(group);
        self
    }

    /// Total number of frames across all groups.
    pub fn frame_count(&self) -> usize {
        self.frame_groups.iter().map(|g| g.frames.len()).sum()
    }
}

/// A named animation track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameGroup {
    pub group_type: String,
    pub default_duration: i32,
    pub frames: Vec<Frame>,
}

impl Default for FrameGroup {
    fn default() -> Self {
        Self {
            group_type: String::new(),
            default_duration: DEFAULT_FRAME_DURATION,
            frames: Vec::new(),
        }
    }
}

impl FrameGroup {
    pub fn new(group_type: impl Into<String>, default_duration: i32) -> Self {
        Self {
            group_type: group_type.into(),
            default_duration,
            frames: Vec::new(),
        }
    }

    /// Append a frame.
    pub fn with_frame(mut self, frame: Frame) -> Self {
        self.frames.push(frame);
        self
    }

    /// Append a frame that takes the group's default duration.
    ///
    /// The duration is copied now; later changes to `default_duration` do
    /// not reach frames that were already added.
    pub fn with_default_frame(self, sprite_ids: Vec<i32>) -> Self {
        let duration = self.default_duration;
        self.with_frame(Frame::new(duration, sprite_ids))
    }
}

/// One animation frame: how long it shows and which sprites compose it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    /// Milliseconds; taken as-is from the document, so it may be negative.
    pub duration: i32,
    /// 1-based positions into a decoded sprite pool.
    pub sprite_ids: Vec<i32>,
}

impl Frame {
    pub fn new(duration: i32, sprite_ids: Vec<i32>) -> Self {
        Self {
            duration,
            sprite_ids,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_group_default_duration() {
        let group = FrameGroup::default();
        assert_eq!(group.default_duration, 100);
        assert!(group.group_type.is_empty());
        assert!(group.frames.is_empty());
    }

    #[test]
    fn test_default_frame_copies_duration() {
        let mut group = FrameGroup::new("Idle", 250).with_default_frame(vec![1]);
        group.default_duration = 50;

        assert_eq!(group.frames[0].duration, 250);
    }

    #[test]
    fn test_frame_count() {
        let appearance = Appearance::new(7, "Item")
            .with_group(
                FrameGroup::new("Idle", 100)
                    .with_frame(Frame::new(100, vec![1]))
                    .with_frame(Frame::new(100, vec![2])),
            )
            .with_group(FrameGroup::new("Moving", 100).with_frame(Frame::new(80, vec![3])));

        assert_eq!(appearance.frame_count(), 3);
        assert_eq!(Appearance::new(1, "Item").frame_count(), 0);
    }
}

use serde::{Deserialize, Serialize};

/// What a body part is doing in a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Hold,
    Neutral,
    Support,
    Gesture,
    Unknown,
}

/// Direction symbols. Each digit `0`-`9` names one variant, like a numeric keypad
/// seen from above with `5` as place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Airborne,
    BackLeft,
    Backward,
    BackRight,
    Left,
    Place,
    Right,
    FwdLeft,
    Forward,
    FwdRight,
    #[serde(rename = "none")]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    High,
    Middle,
    Low,
    #[serde(rename = "none")]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flexion {
    Flexed,
    Extended,
    Natural,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rotation {
    Outward,
    Inward,
    Natural,
}

/// The four positional attributes carried by support/gesture/unknown blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Posture {
    pub direction: Direction,
    pub level: Level,
    pub flexion: Flexion,
    pub rotation: Rotation,
}

impl Default for Posture {
    fn default() -> Self {
        Self {
            direction: Direction::Unspecified,
            level: Level::Unspecified,
            flexion: Flexion::Natural,
            rotation: Rotation::Natural,
        }
    }
}

/// Decoded state of one body part.
///
/// `hold` and `neutral` serialize as `{"action": ...}` alone; every other action
/// carries a flattened [`Posture`], giving exactly five keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BodyPartDescriptor {
    pub action: Action,
    #[serde(flatten)]
    pub posture: Option<Posture>,
}

impl BodyPartDescriptor {
    pub fn hold() -> Self {
        Self {
            action: Action::Hold,
            posture: None,
        }
    }

    pub fn neutral() -> Self {
        Self {
            action: Action::Neutral,
            posture: None,
        }
    }

    pub fn positioned(action: Action, posture: Posture) -> Self {
        match action {
            Action::Hold => Self::hold(),
            Action::Neutral => Self::neutral(),
            _ => Self {
                action,
                posture: Some(posture),
            },
        }
    }
}

/// The six tracked body parts, in score column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyPart {
    LeftArm,
    LeftLeg,
    Trunk,
    RightLeg,
    RightArm,
    Head,
}

impl BodyPart {
    pub const ALL: [BodyPart; 6] = [
        BodyPart::LeftArm,
        BodyPart::LeftLeg,
        BodyPart::Trunk,
        BodyPart::RightLeg,
        BodyPart::RightArm,
        BodyPart::Head,
    ];

    pub fn key(self) -> &'static str {
        match self {
            BodyPart::LeftArm => "left_arm",
            BodyPart::LeftLeg => "left_leg",
            BodyPart::Trunk => "trunk",
            BodyPart::RightLeg => "right_leg",
            BodyPart::RightArm => "right_arm",
            BodyPart::Head => "head",
        }
    }
}

/// One data line of a score: a timestamp and the state of every body part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub timestamp: String,
    pub left_arm: BodyPartDescriptor,
    pub left_leg: BodyPartDescriptor,
    pub trunk: BodyPartDescriptor,
    pub right_leg: BodyPartDescriptor,
    pub right_arm: BodyPartDescriptor,
    pub head: BodyPartDescriptor,
}

impl Frame {
    pub fn part(&self, part: BodyPart) -> &BodyPartDescriptor {
        match part {
            BodyPart::LeftArm => &self.left_arm,
            BodyPart::LeftLeg => &self.left_leg,
            BodyPart::Trunk => &self.trunk,
            BodyPart::RightLeg => &self.right_leg,
            BodyPart::RightArm => &self.right_arm,
            BodyPart::Head => &self.head,
        }
    }
}

/// Frames in input line order. Serializes as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score {
    frames: Vec<Frame>,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl From<Vec<Frame>> for Score {
    fn from(frames: Vec<Frame>) -> Self {
        Self { frames }
    }
}

/// A parsed score together with line counters from the read.
#[derive(Debug, Clone, Default)]
pub struct ScoreExtract {
    pub score: Score,
    pub lines_read: usize,
    pub ignored_lines: usize,
    pub malformed_lines: usize,
}

/// Summary of one finished conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub output_path: String,
    pub lines_read: usize,
    pub frames: usize,
    pub skipped_lines: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hold_serializes_action_only() {
        let value = serde_json::to_value(BodyPartDescriptor::hold()).unwrap();
        assert_eq!(value, serde_json::json!({"action": "hold"}));
    }

    #[test]
    fn test_positioned_serializes_five_keys_in_order() {
        let descriptor = BodyPartDescriptor::positioned(
            Action::Gesture,
            Posture {
                direction: Direction::FwdRight,
                level: Level::Unspecified,
                flexion: Flexion::Extended,
                rotation: Rotation::Natural,
            },
        );
        let json = serde_json::to_string(&descriptor).unwrap();
        assert_eq!(
            json,
            r#"{"action":"gesture","direction":"fwd_right","level":"none","flexion":"extended","rotation":"natural"}"#
        );
    }

    #[test]
    fn test_positioned_drops_posture_for_hold() {
        let descriptor = BodyPartDescriptor::positioned(Action::Hold, Posture::default());
        assert_eq!(descriptor, BodyPartDescriptor::hold());
    }

    #[test]
    fn test_score_is_bare_array() {
        let score = Score::new();
        assert_eq!(serde_json::to_string(&score).unwrap(), "[]");
    }

    #[test]
    fn test_frame_part_lookup_matches_keys() {
        let frame = Frame {
            timestamp: "00:00".to_string(),
            left_arm: BodyPartDescriptor::neutral(),
            left_leg: BodyPartDescriptor::hold(),
            trunk: BodyPartDescriptor::hold(),
            right_leg: BodyPartDescriptor::hold(),
            right_arm: BodyPartDescriptor::hold(),
            head: BodyPartDescriptor::neutral(),
        };
        let value = serde_json::to_value(&frame).unwrap();
        for part in BodyPart::ALL {
            assert_eq!(
                value[part.key()],
                serde_json::to_value(frame.part(part)).unwrap()
            );
        }
    }
}

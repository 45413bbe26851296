//! Block decoder: one 5-character body-part code to a [`BodyPartDescriptor`].
//!
//! Layout is `[mode][direction][level][flexion][rotation]`. Decoding never fails:
//! an unrecognized character, or a position missing from a short code, falls back
//! to that field's default (`unknown` / `none` / `natural`).

use crate::domain::model::{Action, BodyPartDescriptor, Direction, Flexion, Level, Posture, Rotation};

const HOLD_DOTS: &str = ".....";
const HOLD_SPACES: &str = "     ";
const NEUTRAL_MARK: char = 'X';

/// Indexed by the digit value of the direction character.
static DIRECTIONS: [Direction; 10] = [
    Direction::Airborne,
    Direction::BackLeft,
    Direction::Backward,
    Direction::BackRight,
    Direction::Left,
    Direction::Place,
    Direction::Right,
    Direction::FwdLeft,
    Direction::Forward,
    Direction::FwdRight,
];

impl Action {
    pub fn from_code(c: Option<char>) -> Self {
        match c {
            Some('s') => Action::Support,
            Some('g') => Action::Gesture,
            _ => Action::Unknown,
        }
    }
}

impl Direction {
    pub fn from_code(c: Option<char>) -> Self {
        c.and_then(|c| c.to_digit(10))
            .map(|d| DIRECTIONS[d as usize])
            .unwrap_or(Direction::Unspecified)
    }
}

impl Level {
    pub fn from_code(c: Option<char>) -> Self {
        match c {
            Some('^') => Level::High,
            Some('-') => Level::Middle,
            Some('_') => Level::Low,
            _ => Level::Unspecified,
        }
    }
}

impl Flexion {
    pub fn from_code(c: Option<char>) -> Self {
        match c {
            Some('v') => Flexion::Flexed,
            Some('!') => Flexion::Extended,
            _ => Flexion::Natural,
        }
    }
}

impl Rotation {
    pub fn from_code(c: Option<char>) -> Self {
        match c {
            Some('>') => Rotation::Outward,
            Some('<') => Rotation::Inward,
            _ => Rotation::Natural,
        }
    }
}

/// Decode a single block.
///
/// An empty block counts as a hold: a five-space block collapses to `""` once
/// the surrounding field whitespace is stripped.
pub fn decode_block(block: &str) -> BodyPartDescriptor {
    if block.is_empty() || block == HOLD_DOTS || block == HOLD_SPACES {
        return BodyPartDescriptor::hold();
    }
    if block.starts_with(NEUTRAL_MARK) {
        return BodyPartDescriptor::neutral();
    }

    let mut chars = block.chars();
    let action = Action::from_code(chars.next());
    let posture = Posture {
        direction: Direction::from_code(chars.next()),
        level: Level::from_code(chars.next()),
        flexion: Flexion::from_code(chars.next()),
        rotation: Rotation::from_code(chars.next()),
    };

    BodyPartDescriptor::positioned(action, posture)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const DIGITS: &str = "0123456789";
    const LEVELS: &str = "^-_";
    const FLEXIONS: &str = "v!.";
    const ROTATIONS: &str = "><.";

    #[test]
    fn test_hold_placeholders() {
        assert_eq!(decode_block(""), BodyPartDescriptor::hold());
        assert_eq!(decode_block("....."), BodyPartDescriptor::hold());
        assert_eq!(decode_block("     "), BodyPartDescriptor::hold());
    }

    #[test]
    fn test_neutral_ignores_rest() {
        for code in ["X----", "Xabcd", "X", "X8^v>"] {
            assert_eq!(decode_block(code), BodyPartDescriptor::neutral(), "{code}");
        }
    }

    #[test]
    fn test_unrecognized_positions_fall_back() {
        let d = decode_block("szzzz");
        assert_eq!(d.action, Action::Support);
        assert_eq!(d.posture, Some(Posture::default()));
    }

    #[test]
    fn test_unknown_mode_keeps_posture() {
        let d = decode_block("q8^v>");
        assert_eq!(d.action, Action::Unknown);
        assert_eq!(
            d.posture,
            Some(Posture {
                direction: Direction::Forward,
                level: Level::High,
                flexion: Flexion::Flexed,
                rotation: Rotation::Outward,
            })
        );
    }

    #[test]
    fn test_short_code_uses_defaults() {
        let d = decode_block("g4");
        assert_eq!(d.action, Action::Gesture);
        assert_eq!(
            d.posture,
            Some(Posture {
                direction: Direction::Left,
                ..Posture::default()
            })
        );
    }

    #[test]
    fn test_extra_characters_ignored() {
        assert_eq!(decode_block("s8-v>zzz"), decode_block("s8-v>"));
    }

    #[test]
    fn test_direction_table() {
        let expected = [
            "airborne", "back_left", "backward", "back_right", "left", "place", "right",
            "fwd_left", "forward", "fwd_right",
        ];
        for (digit, name) in DIGITS.chars().zip(expected) {
            let value = serde_json::to_value(Direction::from_code(Some(digit))).unwrap();
            assert_eq!(value, name);
        }
        assert_eq!(Direction::from_code(Some('a')), Direction::Unspecified);
    }

    #[test]
    fn test_every_support_and_gesture_code_is_total_and_injective() {
        let mut seen = HashSet::new();
        for mode in ['s', 'g'] {
            for dir in DIGITS.chars() {
                for level in LEVELS.chars() {
                    for flex in FLEXIONS.chars() {
                        for rot in ROTATIONS.chars() {
                            let code: String = [mode, dir, level, flex, rot].iter().collect();
                            let d = decode_block(&code);
                            let value = serde_json::to_value(d).unwrap();
                            assert_eq!(value.as_object().unwrap().len(), 5, "{code}");
                            assert!(seen.insert(d), "duplicate descriptor for {code}");
                        }
                    }
                }
            }
        }
        assert_eq!(seen.len(), 2 * 270);
    }
}

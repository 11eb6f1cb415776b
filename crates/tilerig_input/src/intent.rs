//! Intent resolution from named intensities

use tilerig_math::Vec2;

/// One frame of input intensities
///
/// Each field is a non-negative magnitude; zero means "not pressed".
/// Analog sources report fractional values, digital buttons 0 or 1.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputFrame {
    pub left: f32,
    pub right: f32,
    pub up: f32,
    pub down: f32,
    pub jump: f32,
}

impl InputFrame {
    /// Signed horizontal intent
    pub fn move_x(&self) -> f32 {
        resolve_axis(self.left, self.right)
    }

    /// Signed vertical intent (+y is down)
    pub fn move_y(&self) -> f32 {
        resolve_axis(self.up, self.down)
    }

    /// Both axis intents as a vector
    pub fn move_intent(&self) -> Vec2 {
        Vec2::new(self.move_x(), self.move_y())
    }
}

/// Resolve an opposing button pair into a signed intent
///
/// The larger magnitude wins and keeps its intensity; an exact tie means
/// no direction.
pub fn resolve_axis(neg: f32, pos: f32) -> f32 {
    if pos > neg {
        pos
    } else if neg > pos {
        -neg
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_direction() {
        assert_eq!(resolve_axis(0.0, 1.0), 1.0);
        assert_eq!(resolve_axis(1.0, 0.0), -1.0);
    }

    #[test]
    fn test_larger_magnitude_wins() {
        assert_eq!(resolve_axis(0.3, 0.8), 0.8);
        assert_eq!(resolve_axis(0.9, 0.2), -0.9);
    }

    #[test]
    fn test_exact_tie_is_neutral() {
        assert_eq!(resolve_axis(0.5, 0.5), 0.0);
        assert_eq!(resolve_axis(1.0, 1.0), 0.0);
        assert_eq!(resolve_axis(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_frame_axes() {
        let frame = InputFrame {
            left: 0.0,
            right: 1.0,
            up: 0.6,
            down: 0.2,
            jump: 0.0,
        };
        assert_eq!(frame.move_x(), 1.0);
        assert_eq!(frame.move_y(), -0.6);
        assert_eq!(frame.move_intent(), Vec2::new(1.0, -0.6));
    }
}

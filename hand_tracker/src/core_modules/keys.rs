// THEORY:
// Raw key codes from the window's key poll, folded into the handful of
// commands the viewer understands, plus the drawing toggles they control.

pub const ESC: i32 = 27;
pub const SPACE: i32 = 32;
pub const TAB: i32 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Exit,
    ToggleSkeleton,
    TogglePoints,
    Other,
}

impl Key {
    /// Maps a raw key code. "No key pressed" (`None`) maps to `Other`.
    pub fn from_code(code: Option<i32>) -> Self {
        match code {
            Some(ESC) => Key::Exit,
            Some(SPACE) => Key::ToggleSkeleton,
            Some(TAB) => Key::TogglePoints,
            _ => Key::Other,
        }
    }
}

/// What gets drawn on each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggles {
    pub draw_skeleton: bool,
    pub draw_points: bool,
}

impl Default for Toggles {
    fn default() -> Self {
        Self {
            draw_skeleton: true,
            draw_points: true,
        }
    }
}

impl Toggles {
    /// Applies a key. Returns `false` when the key asks the viewer to stop.
    pub fn apply(&mut self, key: Key) -> bool {
        match key {
            Key::Exit => return false,
            Key::ToggleSkeleton => self.draw_skeleton = !self.draw_skeleton,
            Key::TogglePoints => self.draw_points = !self.draw_points,
            Key::Other => {}
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_designated_codes() {
        assert_eq!(Key::from_code(Some(27)), Key::Exit);
        assert_eq!(Key::from_code(Some(32)), Key::ToggleSkeleton);
        assert_eq!(Key::from_code(Some(9)), Key::TogglePoints);
        assert_eq!(Key::from_code(Some(113)), Key::Other);
        assert_eq!(Key::from_code(None), Key::Other);
    }

    #[test]
    fn space_flips_only_the_skeleton() {
        let mut toggles = Toggles::default();
        assert!(toggles.apply(Key::ToggleSkeleton));
        assert_eq!(toggles, Toggles { draw_skeleton: false, draw_points: true });
    }

    #[test]
    fn tab_flips_only_the_points() {
        let mut toggles = Toggles::default();
        assert!(toggles.apply(Key::TogglePoints));
        assert!(toggles.apply(Key::TogglePoints));
        assert!(toggles.apply(Key::TogglePoints));
        assert_eq!(toggles, Toggles { draw_skeleton: true, draw_points: false });
    }

    #[test]
    fn esc_stops_without_touching_toggles() {
        let mut toggles = Toggles::default();
        assert!(!toggles.apply(Key::Exit));
        assert_eq!(toggles, Toggles::default());
    }
}

//! Input events that drive screen transitions

/// The six face buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    A,
    B,
    X,
    Y,
    /// Left shoulder: return to the root menu from anywhere
    L,
    /// Right shoulder: save the live reading on the scan screen
    R,
}

impl Button {
    /// All buttons, in the order pending presses are consumed
    pub const PRIORITY: [Button; 6] = [
        Button::L,
        Button::A,
        Button::B,
        Button::X,
        Button::Y,
        Button::R,
    ];

    /// Index into per-button tables
    pub const fn index(self) -> usize {
        match self {
            Button::A => 0,
            Button::B => 1,
            Button::X => 2,
            Button::Y => 3,
            Button::L => 4,
            Button::R => 5,
        }
    }
}

/// Joystick direction as reported by the analog stick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    North,
    South,
    East,
    West,
    #[default]
    Center,
}

/// A single input event, consumed once per scheduler cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// A latched button press
    ButtonPress(Button),
    /// A polled joystick deflection (never `Center`)
    Joystick(Direction),
}

impl InputEvent {
    /// Build a joystick event, dropping the resting position
    pub fn from_direction(direction: Direction) -> Option<Self> {
        match direction {
            Direction::Center => None,
            dir => Some(InputEvent::Joystick(dir)),
        }
    }
}

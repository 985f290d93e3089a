//! Traffic-light signal state.
//!
//! The enum lives here rather than in `gt-agent` because the map layer also
//! speaks it: a city map records each light's starting phase.

use std::fmt;

/// The two-phase signal of a traffic light.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LightState {
    Red,
    Green,
}

impl LightState {
    /// The opposite phase.
    #[inline]
    pub fn toggle(self) -> LightState {
        match self {
            LightState::Red => LightState::Green,
            LightState::Green => LightState::Red,
        }
    }

    /// `true` if a vehicle may enter the light's cell this tick.
    #[inline]
    pub fn permits_entry(self) -> bool {
        matches!(self, LightState::Green)
    }
}

impl fmt::Display for LightState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LightState::Red => write!(f, "red"),
            LightState::Green => write!(f, "green"),
        }
    }
}

//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Coarse session state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionState {
    #[default]
    Menu,
    Playing,
    GameOver,
    Victory,
}

impl SessionState {
    /// Whether the state machine allows moving from `self` to `to`.
    ///
    /// `Menu -> Menu` is the re-layout performed on a viewport resize.
    pub fn can_transition(self, to: SessionState) -> bool {
        use SessionState::*;
        matches!(
            (self, to),
            (Menu, Menu)
                | (Menu, Playing)
                | (Playing, GameOver)
                | (Playing, Victory)
                | (GameOver, Playing)
                | (Victory, Playing)
        )
    }

    /// True for the two end-of-session states.
    pub fn is_terminal(self) -> bool {
        matches!(self, SessionState::GameOver | SessionState::Victory)
    }
}

/// Whether an explosion is currently expanding or contracting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrowthDirection {
    #[default]
    Expanding,
    Contracting,
}

impl GrowthDirection {
    /// +1 while expanding, -1 while contracting.
    pub fn sign(self) -> f64 {
        match self {
            GrowthDirection::Expanding => 1.0,
            GrowthDirection::Contracting => -1.0,
        }
    }
}

/// Fixed emplacement slot of a battery. Ordering is the enumeration order
/// used when two batteries are equally good candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BatterySlot {
    Left,
    Center,
    Right,
}

impl BatterySlot {
    pub const ALL: [BatterySlot; 3] = [BatterySlot::Left, BatterySlot::Center, BatterySlot::Right];

    /// Horizontal position as a fraction of the viewport width.
    pub fn x_fraction(self) -> f64 {
        crate::constants::BATTERY_X_FRACTIONS[self as usize]
    }

    /// Ammo capacity. The center battery carries double the flanks.
    pub fn max_ammo(self) -> u32 {
        match self {
            BatterySlot::Center => crate::constants::CENTER_BATTERY_AMMO,
            BatterySlot::Left | BatterySlot::Right => crate::constants::FLANK_BATTERY_AMMO,
        }
    }
}

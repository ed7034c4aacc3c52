//! Discrete 4-way actuation commands
//!
//! The same command surface serves both a player's arrow keys and the bot
//! planner, so everything downstream of input is agnostic to who is driving.

/// Directional intent for one tick: thrust along the heading plus a turn.
///
/// Named fields instead of bit indices so the opposing-pair invariants are
/// visible at the type level. The planner's mapper never sets both members
/// of an opposing pair; a keyboard technically can, and the applicator then
/// cancels the forces out the same way opposing keys do.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectionCommand {
    /// Thrust along the current heading
    pub forward: bool,
    /// Thrust against the current heading
    pub backward: bool,
    /// Positive torque (clockwise in a y-down world)
    pub turn_right: bool,
    /// Negative torque
    pub turn_left: bool,
}

impl DirectionCommand {
    /// Command that issues no actuation at all
    pub const NONE: Self = Self {
        forward: false,
        backward: false,
        turn_right: false,
        turn_left: false,
    };

    /// True when no bit is set
    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }

    /// True when either turn bit is set
    pub fn has_turn(&self) -> bool {
        self.turn_right || self.turn_left
    }

    /// True when either thrust bit is set
    pub fn has_thrust(&self) -> bool {
        self.forward || self.backward
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let cmd = DirectionCommand::default();
        assert!(cmd.is_empty());
        assert!(!cmd.has_turn());
        assert!(!cmd.has_thrust());
        assert_eq!(cmd, DirectionCommand::NONE);
    }

    #[test]
    fn test_bit_queries() {
        let cmd = DirectionCommand {
            forward: true,
            turn_left: true,
            ..Default::default()
        };
        assert!(!cmd.is_empty());
        assert!(cmd.has_turn());
        assert!(cmd.has_thrust());
    }
}

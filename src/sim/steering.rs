//! Heuristic bearing/turn planning toward a moving target
//!
//! Closed-loop steering under a bounded turn rate: swing the heading toward
//! the target at up to `MAX_ANGULAR_SPEED_BOT` degrees per step, thrust by
//! default, and bleed speed off when the remaining turn is wide enough that
//! arriving fast would overshoot. The policy is a behavioral port of a
//! hand-tuned reference, not derived control theory; its quirks (see
//! `steer`'s threshold) are kept on purpose.

use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, PI};

use super::command::DirectionCommand;
use super::world::Pose;
use crate::consts::{MAX_ACCELERATION_BOT, MAX_ANGULAR_SPEED_BOT, MAX_SPEED_BOT};
use crate::normalize_angle;

/// Output of one planning step: how far to swing the heading this step
/// (radians, signed) and the signed thrust level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Steering {
    pub moving_angle: f32,
    pub acceleration: f32,
}

impl Steering {
    /// Discretize into the 4-way command surface shared with player input.
    ///
    /// The 0.01 thresholds suppress command jitter from floating-point
    /// near-zero noise; a negligible steering output issues no bits at all.
    pub fn command(self) -> DirectionCommand {
        let mut cmd = DirectionCommand::default();

        if (2.0 * self.moving_angle).abs() > 0.01 {
            cmd.turn_right = 2.0 * self.moving_angle > 0.0;
            cmd.turn_left = 2.0 * self.moving_angle < 0.0;
        }

        if self.acceleration > 0.01 {
            cmd.forward = true;
        } else if self.acceleration < -0.01 {
            cmd.backward = true;
        }

        cmd
    }
}

/// Plan one steering step toward `target`.
///
/// Pure function of the pose and target; reads nothing else and mutates
/// nothing. A zero-length delta resolves to bearing 0 (`atan2(0, 0) == 0`)
/// rather than an error.
pub fn plan(pose: &Pose, target: Vec2) -> Steering {
    steer(pose.position, pose.angle, pose.linvel.length(), target)
}

fn steer(position: Vec2, heading: f32, speed: f32, target: Vec2) -> Steering {
    let delta = target - position;
    let target_angle = delta.y.atan2(delta.x);
    let angle_diff = normalize_angle(target_angle - heading);

    let max_turn = MAX_ANGULAR_SPEED_BOT.to_radians();
    let mut acceleration = MAX_ACCELERATION_BOT;
    let mut moving_angle = 0.0;

    // Negative for any positive turn limit, so the branch below is the live
    // path whenever speed is non-negative. Kept as the reference wrote it.
    let threshold = -180.0 / MAX_ANGULAR_SPEED_BOT / 2.0;

    if speed > threshold {
        if angle_diff.abs() > max_turn {
            // Steps of turning left before the remaining error drops under
            // a quarter turn; wide-and-fast means brake or coast first.
            let turns_before_90 = ((angle_diff.abs() - FRAC_PI_2) / max_turn).floor() as i32;
            if turns_before_90 > 1 && speed > MAX_SPEED_BOT - turns_before_90 as f32 {
                acceleration = -MAX_ACCELERATION_BOT / 2.0;
            } else if turns_before_90 == 1 && speed > MAX_SPEED_BOT - turns_before_90 as f32 {
                acceleration = 0.0;
            }
            moving_angle = max_turn.copysign(angle_diff);
        } else if angle_diff.abs() > 0.0 {
            moving_angle = angle_diff;
        }
    } else {
        // Face away from the target, easing off as the reversed heading
        // lines up.
        let delta_to_pi = (PI - angle_diff.abs()).abs();
        if delta_to_pi > max_turn {
            moving_angle = -max_turn.copysign(angle_diff);
        } else if delta_to_pi > 0.0 {
            moving_angle = -delta_to_pi.copysign(angle_diff);
        }
    }

    Steering {
        moving_angle,
        acceleration,
    }
}

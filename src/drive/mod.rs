/**
 * Drive Module
 *
 * The per-tick pipeline that turns operator input into motor commands:
 * - input: axis readings and override-line snapshots
 * - mapper: piecewise-linear joystick translation
 * - arbiter: fixed-priority digital override
 * - controller: the polling loop tying them to the serial channel
 */

pub mod arbiter;
pub mod controller;
pub mod input;
pub mod mapper;

pub use arbiter::OverrideButtons;
pub use controller::{compute_frame, DriveController, FixedDelay, Ticker, DEFAULT_BAUD, TICK_INTERVAL};
pub use input::{InputSnapshot, InputSource, SharedInput, AXIS_CENTER};
pub use mapper::{interpolate, MotorSpeeds, SpeedMapper, MAX_SPEED, MIN_SPEED};

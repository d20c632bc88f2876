pub mod drive;
pub mod serial;

pub mod ffi;

#[cfg(feature = "python")]
pub mod python;

pub use drive::{
    compute_frame, interpolate, DriveController, FixedDelay, InputSnapshot, InputSource,
    MotorSpeeds, OverrideButtons, SharedInput, SpeedMapper, Ticker, AXIS_CENTER, DEFAULT_BAUD,
    MAX_SPEED, MIN_SPEED, TICK_INTERVAL,
};

pub use serial::{open_port, write_banner, CommandFrame, BANNER, DEFAULT_PORT, M1_OFFSET};

/**
 * Input Sampling
 *
 * One snapshot per tick: both joystick axis readings plus the resolved
 * override lines. Sources hand back whatever the hardware reports right
 * now - no buffering, no averaging, no range checks, so ADC noise outside
 * 0-1023 passes straight through to the mapper.
 */

use std::io;
use std::sync::{Arc, RwLock};

use super::arbiter::OverrideButtons;

/// Neutral reading for an at-rest axis (10-bit ADC midpoint).
pub const AXIS_CENTER: i32 = 512;

/// Everything the drive loop consumes in one tick. Rebuilt from scratch
/// each cycle, never carried forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputSnapshot {
    pub x: i32,
    pub y: i32,
    pub buttons: OverrideButtons,
}

impl Default for InputSnapshot {
    fn default() -> Self {
        InputSnapshot {
            x: AXIS_CENTER,
            y: AXIS_CENTER,
            buttons: OverrideButtons::default(),
        }
    }
}

/// Per-tick input source. A hardware implementation surfaces a failed read
/// as `io::Error`; the mapping layer never sees anything but the snapshot.
pub trait InputSource {
    fn sample(&mut self) -> io::Result<InputSnapshot>;
}

/// Snapshot store shared between the drive loop and programmatic writers
/// (Python, C, the console binary). Writers replace fields of the latest
/// snapshot; the loop reads the whole value once per tick.
#[derive(Clone, Default)]
pub struct SharedInput {
    state: Arc<RwLock<InputSnapshot>>,
}

impl SharedInput {
    pub fn new() -> Self {
        SharedInput::default()
    }

    pub fn set(&self, snapshot: InputSnapshot) {
        *self.state.write().unwrap() = snapshot;
    }

    pub fn set_axes(&self, x: i32, y: i32) {
        let mut state = self.state.write().unwrap();
        state.x = x;
        state.y = y;
    }

    pub fn set_axis_x(&self, x: i32) {
        self.state.write().unwrap().x = x;
    }

    pub fn set_axis_y(&self, y: i32) {
        self.state.write().unwrap().y = y;
    }

    pub fn set_buttons(&self, buttons: OverrideButtons) {
        self.state.write().unwrap().buttons = buttons;
    }

    pub fn get(&self) -> InputSnapshot {
        *self.state.read().unwrap()
    }

    /// Center both axes and release every override line.
    pub fn reset(&self) {
        *self.state.write().unwrap() = InputSnapshot::default();
    }
}

impl InputSource for SharedInput {
    fn sample(&mut self) -> io::Result<InputSnapshot> {
        Ok(*self.state.read().unwrap())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot_is_neutral() {
        let snapshot = InputSnapshot::default();
        assert_eq!(snapshot.x, AXIS_CENTER);
        assert_eq!(snapshot.y, AXIS_CENTER);
        assert!(!snapshot.buttons.any());
    }

    #[test]
    fn test_shared_input_reflects_latest_write() {
        let input = SharedInput::new();
        input.set_axes(100, 900);
        input.set_buttons(OverrideButtons { left: true, ..Default::default() });

        let mut source = input.clone();
        let snapshot = source.sample().unwrap();
        assert_eq!(snapshot.x, 100);
        assert_eq!(snapshot.y, 900);
        assert!(snapshot.buttons.left);
    }

    #[test]
    fn test_single_axis_writes_keep_other_axis() {
        let input = SharedInput::new();
        input.set_axes(100, 900);
        input.set_axis_x(700);
        let snapshot = input.get();
        assert_eq!(snapshot.x, 700);
        assert_eq!(snapshot.y, 900);
    }

    #[test]
    fn test_reset_returns_to_neutral() {
        let input = SharedInput::new();
        input.set_axes(0, 1023);
        input.set_buttons(OverrideButtons { forward: true, ..Default::default() });
        input.reset();
        assert_eq!(input.get(), InputSnapshot::default());
    }

    #[test]
    fn test_clones_share_state() {
        let input = SharedInput::new();
        let writer = input.clone();
        writer.set_axes(42, 642);
        assert_eq!(input.get().x, 42);
        assert_eq!(input.get().y, 642);
    }
}

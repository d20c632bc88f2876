/**
 * Drive Controller
 *
 * Main controller that:
 * 1. Samples joystick axes and override lines once per tick
 * 2. Maps them to differential-drive wheel speeds
 * 3. Streams M1/M2 command frames over the serial port
 *
 * One pass per tick, single-threaded: sample, map, arbitrate, emit, wait.
 */

use std::io::Write;
use std::sync::{Arc, atomic::{AtomicBool, Ordering}};
use std::thread;
use std::time::Duration;

use crate::serial;
use crate::serial::frame::{write_banner, CommandFrame};
use super::arbiter::OverrideButtons;
use super::input::{InputSnapshot, InputSource, SharedInput};
use super::mapper::SpeedMapper;

pub const DEFAULT_BAUD: u32 = 9600;
/// Pause between passes through the pipeline.
pub const TICK_INTERVAL: Duration = Duration::from_millis(500);

/// Compute one tick's command frame from one tick's inputs. Pure: nothing
/// is retained between calls. The mapper stages run first; a pressed
/// override line then replaces the joystick result outright.
pub fn compute_frame(mapper: &SpeedMapper, input: &InputSnapshot) -> CommandFrame {
    let mapped = mapper.map_axes(input.x, input.y);
    let speeds = input.buttons.arbitrate(mapped, mapper.max_speed);
    CommandFrame::new(speeds.right, speeds.left)
}

/// Paces the drive loop. `wait` blocks until the next tick and returns
/// false when no ticks remain.
pub trait Ticker {
    fn wait(&mut self) -> bool;
}

/// Wall-clock ticker: sleeps a fixed period, never runs out.
pub struct FixedDelay {
    period: Duration,
}

impl FixedDelay {
    pub fn new(period: Duration) -> Self {
        FixedDelay { period }
    }
}

impl Ticker for FixedDelay {
    fn wait(&mut self) -> bool {
        thread::sleep(self.period);
        true
    }
}

/// Drive controller - operator input in, command frames out
pub struct DriveController {
    mapper: SpeedMapper,
    input: SharedInput,
    running: Arc<AtomicBool>,
    port_name: String,
    baud_rate: u32,
    tick: Duration,
}

impl DriveController {
    pub fn new(port_name: &str) -> Self {
        Self {
            mapper: SpeedMapper::default(),
            input: SharedInput::new(),
            running: Arc::new(AtomicBool::new(false)),
            port_name: port_name.to_string(),
            baud_rate: DEFAULT_BAUD,
            tick: TICK_INTERVAL,
        }
    }

    pub fn with_baud(mut self, baud: u32) -> Self {
        self.baud_rate = baud;
        self
    }

    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    /// Handle to the shared snapshot for external writers.
    pub fn input(&self) -> SharedInput {
        self.input.clone()
    }

    /// Set both axis readings (0-1023 from the joystick ADC).
    pub fn set_axes(&self, x: i32, y: i32) {
        self.input.set_axes(x, y);
    }

    pub fn set_axis_x(&self, x: i32) {
        self.input.set_axis_x(x);
    }

    pub fn set_axis_y(&self, y: i32) {
        self.input.set_axis_y(y);
    }

    /// Replace the whole override-line state for this tick onward.
    pub fn set_buttons(&self, buttons: OverrideButtons) {
        self.input.set_buttons(buttons);
    }

    pub fn set_forward(&self, pressed: bool) {
        let mut buttons = self.input.get().buttons;
        buttons.forward = pressed;
        self.input.set_buttons(buttons);
    }

    pub fn set_backward(&self, pressed: bool) {
        let mut buttons = self.input.get().buttons;
        buttons.backward = pressed;
        self.input.set_buttons(buttons);
    }

    pub fn set_left(&self, pressed: bool) {
        let mut buttons = self.input.get().buttons;
        buttons.left = pressed;
        self.input.set_buttons(buttons);
    }

    pub fn set_right(&self, pressed: bool) {
        let mut buttons = self.input.get().buttons;
        buttons.right = pressed;
        self.input.set_buttons(buttons);
    }

    /// Center the stick and release every override line.
    pub fn stop(&self) {
        self.input.reset();
    }

    /// The frame the current inputs would produce this tick.
    pub fn preview_frame(&self) -> CommandFrame {
        compute_frame(&self.mapper, &self.input.get())
    }

    /// Start the controller (blocking).
    pub fn run(&self) -> std::io::Result<()> {
        println!("[DRIVE] Opening port {} at {} baud...", self.port_name, self.baud_rate);

        let mut port = serial::open_port(&self.port_name, self.baud_rate)?;

        println!("[DRIVE] Connected, one frame every {:?}", self.tick);

        let mut source = self.input.clone();
        let mut ticker = FixedDelay::new(self.tick);
        let result = self.drive_loop(&mut source, &mut port, &mut ticker);

        // leave the wheels stopped on the way out
        let _ = CommandFrame::new(0, 0).write_to(&mut port);
        let _ = port.flush();

        println!("[DRIVE] Shutdown complete");
        result
    }

    /// One pass per tick against injectable seams. The banner goes out
    /// before the first sample; the loop then runs until `shutdown` or the
    /// ticker gives out. Tests drive this directly with a byte sink and a
    /// scripted ticker.
    pub fn drive_loop<W: Write>(
        &self,
        source: &mut dyn InputSource,
        out: &mut W,
        ticker: &mut dyn Ticker,
    ) -> std::io::Result<()> {
        self.running.store(true, Ordering::SeqCst);

        write_banner(out)?;
        out.flush()?;

        while self.running.load(Ordering::SeqCst) {
            let snapshot = source.sample()?;
            let frame = compute_frame(&self.mapper, &snapshot);
            frame.write_to(out)?;
            out.flush()?;

            if !ticker.wait() {
                break;
            }
        }

        Ok(())
    }

    /// Start in background thread
    pub fn start_background(self: Arc<Self>) -> thread::JoinHandle<()> {
        let controller = self.clone();
        thread::spawn(move || {
            if let Err(e) = controller.run() {
                eprintln!("[DRIVE] Controller stopped: {}", e);
            }
        })
    }

    /// Signal shutdown; the loop exits at the top of its next pass.
    pub fn shutdown(&self) {
        self.running.store(false, Ordering::SeqCst);
    }
}

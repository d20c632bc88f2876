/**
 * End-to-End Test for the Rover Drive Serial Link
 *
 * Exercises, against a real port:
 * 1. Open the serial connection to the motor controller
 * 2. Emit the startup banner
 * 3. Sweep the joystick range and pulse each override line
 * 4. Print every frame written
 *
 * Usage: cargo run --example serial_test [port]
 */

use rover_drive::{
    compute_frame, write_banner, CommandFrame, InputSnapshot, OverrideButtons, SpeedMapper,
};
use std::io::Write;
use std::time::Duration;

const BAUD_RATE: u32 = 9600;
const TICK: Duration = Duration::from_millis(500);

fn emit(
    port: &mut Box<dyn serialport::SerialPort>,
    input: &InputSnapshot,
) -> std::io::Result<CommandFrame> {
    let frame = compute_frame(&SpeedMapper::default(), input);
    frame.write_to(port)?;
    port.flush()?;
    println!(
        "[TX] x={:4} y={:4} -> M1: {}  M2: {}",
        input.x,
        input.y,
        frame.m1_value(),
        frame.m2_value()
    );
    Ok(frame)
}

fn main() -> std::io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let port_name = args.get(1).map(|s| s.as_str()).unwrap_or("/dev/ttyACM0");

    println!("Opening {} at {} baud...", port_name, BAUD_RATE);
    let mut port = serialport::new(port_name, BAUD_RATE)
        .timeout(Duration::from_millis(100))
        .open()
        .map_err(std::io::Error::from)?;

    write_banner(&mut port)?;
    port.flush()?;
    println!("[TX] banner");

    // full reverse to full forward, stick centered on X
    let mut input = InputSnapshot::default();
    for y in (0..=1023).step_by(93) {
        input.y = y;
        emit(&mut port, &input)?;
        std::thread::sleep(TICK);
    }

    // turning overlay: hold some forward speed, swing X across its range
    input.y = 800;
    for x in [0, 200, 400, 520, 700, 1023] {
        input.x = x;
        emit(&mut port, &input)?;
        std::thread::sleep(TICK);
    }

    // override pulses, one line at a time
    input = InputSnapshot::default();
    for (name, buttons) in [
        ("forward", OverrideButtons { forward: true, ..Default::default() }),
        ("backward", OverrideButtons { backward: true, ..Default::default() }),
        ("left", OverrideButtons { left: true, ..Default::default() }),
        ("right", OverrideButtons { right: true, ..Default::default() }),
    ] {
        println!("[OVERRIDE] {}", name);
        input.buttons = buttons;
        emit(&mut port, &input)?;
        std::thread::sleep(TICK);
    }

    // leave the wheels stopped
    input = InputSnapshot::default();
    emit(&mut port, &input)?;

    println!("Done.");
    Ok(())
}

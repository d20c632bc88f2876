/**
 * Drive Controller Binary
 *
 * Runs the rover drive controller that:
 * 1. Connects to the motor controller over serial
 * 2. Streams M1/M2 command frames every tick
 * 3. Accepts teleop input from the console
 *
 * Usage: drive_controller [port] [baud]
 * Default: /dev/ttyACM0, 9600
 */

use rover_drive::{DriveController, OverrideButtons};
use std::sync::Arc;
use std::io::{self, Write};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let port = args.get(1).map(|s| s.as_str()).unwrap_or("/dev/ttyACM0");
    let baud: u32 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(9600);

    println!("==============================================");
    println!("  Rover Drive Controller");
    println!("==============================================");
    println!("  Port: {}", port);
    println!("  Baud: {}", baud);
    println!("==============================================\n");

    let controller = Arc::new(DriveController::new(port).with_baud(baud));

    // Start controller in background
    let ctrl = controller.clone();
    let handle = ctrl.start_background();

    // Wait for connection
    std::thread::sleep(std::time::Duration::from_secs(1));

    println!("\n[Commands]");
    println!("  w/s     - hold forward/backward override");
    println!("  a/d     - hold left/right override");
    println!("  jx <v>  - set X axis (0-1023)");
    println!("  jy <v>  - set Y axis (0-1023)");
    println!("  r       - show the frame the current inputs produce");
    println!("  stop    - release overrides, center the stick");
    println!("  q       - exit\n");

    println!("Enter commands (or 'q' to exit):");

    loop {
        print!("> ");
        io::stdout().flush().unwrap();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            break;
        }

        let cmd = input.trim();

        match cmd {
            "w" => {
                controller.set_buttons(OverrideButtons { forward: true, ..Default::default() });
                println!("[OVERRIDE FORWARD]");
            }
            "s" => {
                controller.set_buttons(OverrideButtons { backward: true, ..Default::default() });
                println!("[OVERRIDE BACKWARD]");
            }
            "a" => {
                controller.set_buttons(OverrideButtons { left: true, ..Default::default() });
                println!("[OVERRIDE LEFT]");
            }
            "d" => {
                controller.set_buttons(OverrideButtons { right: true, ..Default::default() });
                println!("[OVERRIDE RIGHT]");
            }
            "r" => {
                let frame = controller.preview_frame();
                println!(
                    "[FRAME] M1: {}  M2: {}  (right={}, left={})",
                    frame.m1_value(),
                    frame.m2_value(),
                    frame.right,
                    frame.left
                );
            }
            "stop" => {
                controller.stop();
                println!("[STOP]");
            }
            "q" | "exit" | "quit" => {
                println!("[SHUTDOWN]");
                controller.stop();
                controller.shutdown();
                break;
            }
            "" => {}
            _ if cmd.starts_with("jx ") => match cmd[3..].trim().parse::<i32>() {
                Ok(v) => {
                    controller.set_axis_x(v);
                    println!("[AXIS X={}]", v);
                }
                Err(_) => println!("Bad value: {}", cmd),
            },
            _ if cmd.starts_with("jy ") => match cmd[3..].trim().parse::<i32>() {
                Ok(v) => {
                    controller.set_axis_y(v);
                    println!("[AXIS Y={}]", v);
                }
                Err(_) => println!("Bad value: {}", cmd),
            },
            _ => println!("Unknown command: {}", cmd),
        }
    }

    let _ = handle.join();
    println!("Goodbye!");
}

pub mod frame;
pub use frame::{write_banner, CommandFrame, BANNER, M1_OFFSET};

use std::time::Duration;
use serialport::SerialPort;

pub const DEFAULT_PORT: &str = "/dev/ttyACM0";

/// Open the serial link to the motor controller.
pub fn open_port(port_name: &str, baud_rate: u32) -> Result<Box<dyn SerialPort>, serialport::Error>{
    serialport::new(port_name, baud_rate)
        .timeout(Duration::from_millis(100))
        .open()
}

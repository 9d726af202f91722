pub use rusb;
pub mod error;
pub mod relay;

mod device;

pub use device::base::{ExecutablePowerDevice, PowerCommands, UsbData};
pub use device::open_device;
pub use device::PowerUSB;

pub const VID_POWER_8800: u16 = 0x067b;
pub const PID_POWER_8800: u16 = 0x2303;

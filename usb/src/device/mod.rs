use crate::error::ConnectError;
use log::debug;

pub mod base;
mod libusb;

pub use crate::device::libusb::device::PowerUSB;

/// Locates the first attached USB Net Power 8800 and opens it.
pub fn open_device() -> Result<PowerUSB, ConnectError> {
    let device = PowerUSB::open()?;
    debug!("Device Descriptor: {:?}", device.get_descriptor());
    Ok(device)
}

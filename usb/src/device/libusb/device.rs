// Talks to the outlet through libusb. Only endpoint 0 is ever used, so there's no need to
// claim an interface or detach the PL2303 serial driver the kernel binds to it.
use crate::device::base::{ExecutablePowerDevice, PowerCommands, UsbData};
use crate::error::ConnectError;
use crate::{PID_POWER_8800, VID_POWER_8800};
use log::{debug, info};
use rusb::{
    Device, DeviceDescriptor, DeviceHandle, Direction, GlobalContext, Recipient, RequestType,
};
use std::time::Duration;

pub struct PowerUSB {
    handle: DeviceHandle<GlobalContext>,
    device: Device<GlobalContext>,
    descriptor: DeviceDescriptor,
    timeout: Duration,
}

impl PowerUSB {
    fn find_device() -> Result<(Device<GlobalContext>, DeviceDescriptor), ConnectError> {
        for usb_device in rusb::devices()?.iter() {
            if let Ok(descriptor) = usb_device.device_descriptor() {
                if descriptor.vendor_id() == VID_POWER_8800
                    && descriptor.product_id() == PID_POWER_8800
                {
                    debug!(
                        "Found {:04x}:{:04x} on bus {}, address {}",
                        VID_POWER_8800,
                        PID_POWER_8800,
                        usb_device.bus_number(),
                        usb_device.address()
                    );
                    return Ok((usb_device, descriptor));
                }
            }
        }
        Err(ConnectError::DeviceNotFound)
    }

    pub fn open() -> Result<Self, ConnectError> {
        let (device, descriptor) = PowerUSB::find_device()?;
        let handle = device.open().map_err(ConnectError::DeviceOpen)?;

        info!("Connected to USB Net Power 8800 at {:?}", device);

        Ok(Self {
            handle,
            device,
            descriptor,
            timeout: Duration::from_secs(1),
        })
    }

    pub fn get_descriptor(&self) -> UsbData {
        let version = self.descriptor.usb_version();

        // The PL2303 doesn't always carry string descriptors, so these are best effort.
        let language = self
            .handle
            .read_languages(Duration::from_millis(100))
            .ok()
            .and_then(|languages| languages.first().copied());

        let (device_manufacturer, product_name) = match language {
            Some(language) => (
                self.handle
                    .read_manufacturer_string(
                        language,
                        &self.descriptor,
                        Duration::from_millis(100),
                    )
                    .ok(),
                self.handle
                    .read_product_string(language, &self.descriptor, Duration::from_millis(100))
                    .ok(),
            ),
            None => (None, None),
        };

        UsbData {
            vendor_id: self.descriptor.vendor_id(),
            product_id: self.descriptor.product_id(),
            device_version: (version.0, version.1, version.2),
            device_manufacturer,
            product_name,
        }
    }
}

impl ExecutablePowerDevice for PowerUSB {
    fn read_control(
        &mut self,
        request: u8,
        value: u16,
        index: u16,
        length: usize,
    ) -> Result<Vec<u8>, rusb::Error> {
        let mut buf = vec![0; length];
        debug!(
            "Reading control on {:?}: request {:#04x}, value {:#06x}, index {:#06x}",
            self.device, request, value, index
        );
        let response_length = self.handle.read_control(
            read_request_type(),
            request,
            value,
            index,
            &mut buf,
            self.timeout,
        )?;
        buf.truncate(response_length);
        Ok(buf)
    }

    fn write_control(
        &mut self,
        request: u8,
        value: u16,
        index: u16,
        data: &[u8],
    ) -> Result<(), rusb::Error> {
        debug!(
            "Writing control on {:?}: request {:#04x}, value {:#06x}, index {:#06x}",
            self.device, request, value, index
        );
        self.handle.write_control(
            write_request_type(),
            request,
            value,
            index,
            data,
            self.timeout,
        )?;

        Ok(())
    }
}

impl PowerCommands for PowerUSB {}

fn read_request_type() -> u8 {
    rusb::request_type(Direction::In, RequestType::Vendor, Recipient::Device)
}

fn write_request_type() -> u8 {
    rusb::request_type(Direction::Out, RequestType::Vendor, Recipient::Device)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_types_match_the_outlet() {
        assert_eq!(read_request_type(), 0xc0);
        assert_eq!(write_request_type(), 0x40);
    }
}

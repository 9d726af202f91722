use crate::error::CommandError;
use crate::relay::RelayState;
use log::debug;

/// Vendor request used for both reading and writing the relay.
pub(crate) const REQUEST_RELAY: u8 = 0x01;
pub(crate) const VALUE_READ_STATE: u16 = 0x0081;
pub(crate) const VALUE_WRITE_STATE: u16 = 0x0001;

// The raw vendor control primitive, reads are device-to-host, writes host-to-device.
pub trait ExecutablePowerDevice {
    fn read_control(
        &mut self,
        request: u8,
        value: u16,
        index: u16,
        length: usize,
    ) -> Result<Vec<u8>, rusb::Error>;

    fn write_control(
        &mut self,
        request: u8,
        value: u16,
        index: u16,
        data: &[u8],
    ) -> Result<(), rusb::Error>;
}

// These are the relay operations, they only need the control primitive to be implemented..
pub trait PowerCommands: ExecutablePowerDevice {
    fn get_state(&mut self) -> Result<RelayState, CommandError> {
        let response = self.read_control(REQUEST_RELAY, VALUE_READ_STATE, 0x0000, 1)?;
        debug!("Relay State Response: {:x?}", response);
        Ok(RelayState::from_response(&response))
    }

    fn set_state(&mut self, state: RelayState) -> Result<(), CommandError> {
        debug!("Setting Relay {}", state);
        self.write_control(REQUEST_RELAY, VALUE_WRITE_STATE, state.code() as u16, &[])?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct UsbData {
    pub vendor_id: u16,
    pub product_id: u16,
    pub device_version: (u8, u8, u8),
    pub device_manufacturer: Option<String>,
    pub product_name: Option<String>,
}

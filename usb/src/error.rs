#[derive(thiserror::Error, Debug)]
pub enum ConnectError {
    #[error("No USB Net Power 8800 device was found")]
    DeviceNotFound,

    #[error("Unable to open the USB Net Power 8800: {0}")]
    DeviceOpen(#[source] rusb::Error),

    #[error("USB error: {0}")]
    UsbError(#[from] rusb::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum CommandError {
    #[error("USB error: {0}")]
    Transfer(#[from] rusb::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_error_keeps_usb_cause() {
        let error = ConnectError::DeviceOpen(rusb::Error::Access);
        assert!(error.to_string().contains(&rusb::Error::Access.to_string()));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn transfer_error_converts_from_rusb() {
        let error: CommandError = rusb::Error::Pipe.into();
        assert!(matches!(error, CommandError::Transfer(rusb::Error::Pipe)));
    }
}

use log::{debug, info, warn};
use std::io::{self, Write};
use std::process::ExitCode;
use std::str::FromStr;
use std::time::Duration;
use strum::EnumString;
use usbnetpower_usb::error::{CommandError, ConnectError};
use usbnetpower_usb::relay::RelayState;
use usbnetpower_usb::PowerCommands;

/// How long the outlet stays off during a reboot.
pub const REBOOT_DELAY: Duration = Duration::from_secs(5);

#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Action {
    On,
    Off,
    Toggle,
    Query,
    Reboot,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Invocation {
    Action(Action),
    Unrecognized,
}

impl Invocation {
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg.map(Action::from_str) {
            Some(Ok(action)) => Invocation::Action(action),
            _ => Invocation::Unrecognized,
        }
    }

    /// Only the first word counts, the rest of the command line is ignored.
    pub fn from_args(args: &[String]) -> Self {
        Invocation::from_arg(args.first().map(String::as_str))
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The command worked, or for a query, the outlet is on.
    Success,
    /// A query found the outlet off.
    PoweredOff,
    Failed,
}

impl Outcome {
    pub fn code(&self) -> u8 {
        match self {
            Outcome::Success => 0,
            Outcome::PoweredOff => 1,
            Outcome::Failed => 2,
        }
    }
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        ExitCode::from(outcome.code())
    }
}

/// Handles a single invocation. The device is only opened once we know there's something
/// to do with it, so the usage can be printed without one attached.
pub async fn run<D, F, O, E>(
    invocation: Invocation,
    program: &str,
    open: F,
    out: &mut O,
    err: &mut E,
) -> io::Result<Outcome>
where
    D: PowerCommands,
    F: FnOnce() -> Result<D, ConnectError>,
    O: Write,
    E: Write,
{
    let action = match invocation {
        Invocation::Action(action) => action,
        Invocation::Unrecognized => {
            writeln!(out, "Controller for the USB Net Power 8800")?;
            writeln!(out, "Usage: {} on|off|toggle|query|reboot", program)?;
            return Ok(Outcome::Success);
        }
    };

    let mut device = match open() {
        Ok(device) => device,
        Err(error) => {
            warn!("Unable to connect to the outlet: {:?}", error);
            writeln!(err, "{}", error)?;
            return Ok(Outcome::Failed);
        }
    };

    execute(action, &mut device, out, err).await
}

pub async fn execute<D, O, E>(
    action: Action,
    device: &mut D,
    out: &mut O,
    err: &mut E,
) -> io::Result<Outcome>
where
    D: PowerCommands,
    O: Write,
    E: Write,
{
    debug!("Executing {:?}", action);

    let result = match action {
        Action::On => device.set_state(RelayState::On),
        Action::Off => device.set_state(RelayState::Off),
        Action::Toggle => toggle(device),
        Action::Reboot => reboot(device).await,
        Action::Query => {
            return match device.get_state() {
                Ok(state) => {
                    writeln!(out, "Power : {}", state)?;
                    Ok(match state {
                        RelayState::On => Outcome::Success,
                        RelayState::Off => Outcome::PoweredOff,
                    })
                }
                Err(error) => report(Err(error), out, err),
            };
        }
    };

    report(result, out, err)
}

fn toggle<D: PowerCommands>(device: &mut D) -> Result<(), CommandError> {
    let state = device.get_state()?;
    info!("Outlet is {}, switching {}", state, state.toggled());
    device.set_state(state.toggled())
}

async fn reboot<D: PowerCommands>(device: &mut D) -> Result<(), CommandError> {
    device.set_state(RelayState::Off)?;
    info!("Outlet off, turning back on in {:?}", REBOOT_DELAY);
    tokio::time::sleep(REBOOT_DELAY).await;
    device.set_state(RelayState::On)
}

fn report<O: Write, E: Write>(
    result: Result<(), CommandError>,
    out: &mut O,
    err: &mut E,
) -> io::Result<Outcome> {
    match result {
        Ok(()) => {
            writeln!(out, "Command succeed")?;
            Ok(Outcome::Success)
        }
        Err(error) => {
            writeln!(err, "Command failed {}", error)?;
            Ok(Outcome::Failed)
        }
    }
}

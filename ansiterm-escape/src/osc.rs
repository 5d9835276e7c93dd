use log::trace;

use crate::EventHandler;

/// Operating system command selected by the leading number.
#[derive(Clone, Debug, PartialEq, Eq)]
enum OperatingSystemCommand {
    SetWindowTitle,
    Unhandled,
}

impl From<&[u8]> for OperatingSystemCommand {
    fn from(action: &[u8]) -> Self {
        match action {
            b"0" | b"1" | b"2" => Self::SetWindowTitle,
            _ => Self::Unhandled,
        }
    }
}

pub(crate) fn perform<H: EventHandler>(handler: &mut H, data: &[u8]) {
    let (action, rest) = match data.iter().position(|&b| b == b';') {
        Some(split) => (&data[..split], &data[split + 1..]),
        None => (data, &[][..]),
    };

    match OperatingSystemCommand::from(action) {
        OperatingSystemCommand::SetWindowTitle => {
            handler.set_title(&String::from_utf8_lossy(rest))
        },
        OperatingSystemCommand::Unhandled => {
            trace!(
                "[osc] forwarding: {:?}",
                String::from_utf8_lossy(data)
            );
            handler.operating_system_command(data)
        },
    }
}

use ansiterm_vte::Context;
use log::{debug, error};

use crate::{EventHandler, Params};

pub(crate) fn perform<H: EventHandler>(handler: &mut H, context: &Context) {
    let Some(byte) = context.final_byte() else {
        error!("[dcs] dispatched without a final byte: {context:?}");
        return;
    };

    if let Some(marker) = context.marker() {
        debug!(
            "[unexpected dcs] marker: {:?}, action: {:?}",
            char::from(marker),
            byte as char
        );
        return;
    }

    let params = match Params::parse(context.params()) {
        Ok(params) => params.values(0),
        Err(err) => {
            error!("[dcs] {err}: {context:?}");
            return;
        },
    };

    handler.device_control_string(
        &params,
        context.intermediates(),
        byte,
        context.data(),
    );
}

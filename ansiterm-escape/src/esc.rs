use log::debug;

use crate::EventHandler;

pub(crate) fn perform<H: EventHandler>(
    handler: &mut H,
    intermediates: &[u8],
    byte: u8,
) {
    match (byte, intermediates) {
        // IND - Index
        (b'D', []) => handler.index(),
        // NEL - Next Line
        (b'E', []) => handler.next_line(),
        // HTS - Horizontal Tab Set
        (b'H', []) => handler.set_tab_stop(),
        // RI - Reverse Index
        (b'M', []) => handler.reverse_index(),
        // RIS - Full Reset
        (b'c', []) => handler.reset_state(),
        // DECSC - Save cursor position
        (b'7', []) => handler.save_cursor(),
        // DECRC - Restore saved cursor position
        (b'8', []) => handler.restore_cursor(),
        // ST - String Terminator
        (b'\\', []) => {},
        _ => debug!(
            "[unexpected esc] action: {:02X} intermediates: {:?}",
            byte, intermediates
        ),
    }
}

//! Decisions the render data facade makes instead of forwarding

use crate::core::{CodePage, OutputMode};

/// Cursor sizes above this are halved rather than doubled in overwrite mode
const DOUBLE_THRESHOLD: u32 = 50;

/// Effective cursor height, out of 100, for a raw `size` in 0-100.
///
/// In overwrite mode (`double`) a thin cursor is doubled and a thick one
/// halved, so the result never leaves 0-100.
pub fn cursor_height(size: u32, double: bool) -> u32 {
    if !double {
        return size;
    }
    if size > DOUBLE_THRESHOLD {
        size >> 1
    } else {
        size << 1
    }
}

/// Whether grid line attribute bits may be drawn.
///
/// VT output always gets them. Otherwise they are only honored when
/// explicitly allowed worldwide, or in a DBCS output code page: legacy
/// applications outside those code pages set the bits by accident and
/// must not suddenly grow lines.
pub fn grid_line_drawing_allowed(
    mode: OutputMode,
    allow_worldwide: bool,
    code_page: CodePage,
) -> bool {
    if mode.contains(OutputMode::VIRTUAL_TERMINAL_PROCESSING) {
        true
    } else if allow_worldwide {
        true
    } else {
        code_page.is_east_asian()
    }
}

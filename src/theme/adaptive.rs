//! Shade detection from the operating system's color mode.

use dark_light::{detect as detect_os_mode, Mode as OsMode};
use once_cell::sync::Lazy;
use std::sync::Mutex;

use crate::props::Shade;

type ShadeDetector = fn() -> Shade;

static SHADE_DETECTOR: Lazy<Mutex<ShadeDetector>> = Lazy::new(|| Mutex::new(os_shade_detector));

/// Overrides the detector used to determine whether the user prefers a light or dark shade.
///
/// This is useful for testing or when the host app tracks the color mode itself.
pub fn set_shade_detector(detector: ShadeDetector) {
    let mut guard = SHADE_DETECTOR.lock().unwrap_or_else(|e| e.into_inner());
    *guard = detector;
}

/// Returns the shade the current detector reports.
pub fn detect_shade() -> Shade {
    let detector = SHADE_DETECTOR.lock().unwrap_or_else(|e| e.into_inner());
    (*detector)()
}

fn os_shade_detector() -> Shade {
    match detect_os_mode() {
        OsMode::Dark => Shade::Dark,
        OsMode::Light => Shade::Light,
    }
}

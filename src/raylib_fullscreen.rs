use raylib::prelude::*;

use slidenav::{FullscreenChain, FullscreenMethod, FullscreenMethodKind};

/// Exclusive fullscreen on the current monitor.
pub struct NativeFullscreen;

/// Undecorated window covering the monitor.
pub struct BorderlessWindowed;

impl FullscreenMethod<RaylibHandle> for NativeFullscreen {
    fn name(&self) -> &'static str {
        "native"
    }

    // exclusive mode needs a monitor to switch video modes on
    fn is_supported(&self, _rl: &RaylibHandle) -> bool {
        get_monitor_count() > 0
    }

    fn is_active(&self, rl: &RaylibHandle) -> bool {
        rl.is_window_fullscreen()
    }

    fn request(&self, rl: &mut RaylibHandle) {
        if !rl.is_window_fullscreen() {
            rl.toggle_fullscreen();
        }
    }

    fn exit(&self, rl: &mut RaylibHandle) {
        if rl.is_window_fullscreen() {
            rl.toggle_fullscreen();
        }
    }
}

impl FullscreenMethod<RaylibHandle> for BorderlessWindowed {
    fn name(&self) -> &'static str {
        "borderless"
    }

    fn is_active(&self, rl: &RaylibHandle) -> bool {
        // WindowState has no accessor for this flag
        let flag = raylib::ffi::ConfigFlags::FLAG_BORDERLESS_WINDOWED_MODE as u32;
        unsafe { raylib::ffi::IsWindowState(flag) }
    }

    fn request(&self, rl: &mut RaylibHandle) {
        if !self.is_active(rl) {
            rl.toggle_borderless_windowed();
        }
    }

    fn exit(&self, rl: &mut RaylibHandle) {
        if self.is_active(rl) {
            rl.toggle_borderless_windowed();
        }
    }
}

/// Builds the chain in configured order; the first supported entry is the
/// one every request goes through.
pub fn build_chain(kinds: &[FullscreenMethodKind]) -> FullscreenChain<RaylibHandle> {
    let mut chain = FullscreenChain::default();
    for kind in kinds {
        match kind {
            FullscreenMethodKind::Native => chain.push(Box::new(NativeFullscreen)),
            FullscreenMethodKind::Borderless => chain.push(Box::new(BorderlessWindowed)),
        }
    }
    chain
}

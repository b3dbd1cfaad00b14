//! Fullscreen capability.
//!
//! Platforms expose fullscreen through several near-equivalent methods. A
//! [`FullscreenChain`] holds them in preference order and always drives the
//! first one the host supports. The navigator never assumes a request
//! succeeded: the button icon only changes when a [`FullscreenWatcher`]
//! observes the new state.

/// One way of making a window fullscreen on host `H`.
pub trait FullscreenMethod<H> {
    fn name(&self) -> &'static str;

    fn is_supported(&self, _host: &H) -> bool {
        true
    }

    fn is_active(&self, host: &H) -> bool;

    fn request(&self, host: &mut H);

    fn exit(&self, host: &mut H);
}

pub struct FullscreenChain<H> {
    methods: Vec<Box<dyn FullscreenMethod<H>>>,
}

impl<H> Default for FullscreenChain<H> {
    fn default() -> Self {
        Self { methods: Vec::new() }
    }
}

impl<H> FullscreenChain<H> {
    pub fn new(methods: Vec<Box<dyn FullscreenMethod<H>>>) -> Self {
        Self { methods }
    }

    pub fn push(&mut self, method: Box<dyn FullscreenMethod<H>>) {
        self.methods.push(method);
    }

    /// True when any known method reports fullscreen.
    pub fn is_active(&self, host: &H) -> bool {
        self.methods.iter().any(|m| m.is_active(host))
    }

    fn first_supported(&self, host: &H) -> Option<&dyn FullscreenMethod<H>> {
        self.methods
            .iter()
            .map(|m| m.as_ref())
            .find(|m| m.is_supported(host))
    }

    pub fn enter(&self, host: &mut H) {
        match self.first_supported(host) {
            Some(method) => {
                tracing::debug!(method = method.name(), "requesting fullscreen");
                method.request(host);
            }
            None => tracing::debug!("no fullscreen method available"),
        }
    }

    pub fn exit(&self, host: &mut H) {
        match self.first_supported(host) {
            Some(method) => {
                tracing::debug!(method = method.name(), "leaving fullscreen");
                method.exit(host);
            }
            None => tracing::debug!("no fullscreen method available"),
        }
    }

    pub fn toggle(&self, host: &mut H) {
        if self.is_active(host) {
            self.exit(host);
        } else {
            self.enter(host);
        }
    }
}

/// Turns a polled fullscreen flag into change notifications.
#[derive(Debug, Clone, Default)]
pub struct FullscreenWatcher {
    last: bool,
}

impl FullscreenWatcher {
    pub fn new(initial: bool) -> Self {
        Self { last: initial }
    }

    /// Returns the new state when it differs from the last observed one.
    pub fn poll(&mut self, active: bool) -> Option<bool> {
        if active == self.last {
            return None;
        }
        self.last = active;
        Some(active)
    }
}

/// Icon shown on the fullscreen button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenIcon {
    Enter,
    Exit,
}

/// A polyline in the icon's 24x24 view box.
pub type Stroke = [(f32, f32); 3];

// Corner brackets pointing outwards: "M8 3H5a2 2 0 0 0-2 2v3" and friends.
const ENTER_STROKES: [Stroke; 4] = [
    [(8.0, 3.0), (3.0, 3.0), (3.0, 8.0)],
    [(16.0, 3.0), (21.0, 3.0), (21.0, 8.0)],
    [(21.0, 16.0), (21.0, 21.0), (16.0, 21.0)],
    [(3.0, 16.0), (3.0, 21.0), (8.0, 21.0)],
];

// Corner brackets pointing inwards: "M8 3v3a2 2 0 0 1-2 2H3" and friends.
const EXIT_STROKES: [Stroke; 4] = [
    [(8.0, 3.0), (8.0, 8.0), (3.0, 8.0)],
    [(16.0, 3.0), (16.0, 8.0), (21.0, 8.0)],
    [(21.0, 16.0), (16.0, 16.0), (16.0, 21.0)],
    [(3.0, 16.0), (8.0, 16.0), (8.0, 21.0)],
];

impl FullscreenIcon {
    pub fn for_state(active: bool) -> Self {
        if active {
            FullscreenIcon::Exit
        } else {
            FullscreenIcon::Enter
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FullscreenIcon::Enter => "Enter fullscreen mode",
            FullscreenIcon::Exit => "Exit fullscreen mode",
        }
    }

    pub fn strokes(self) -> &'static [Stroke; 4] {
        match self {
            FullscreenIcon::Enter => &ENTER_STROKES,
            FullscreenIcon::Exit => &EXIT_STROKES,
        }
    }
}

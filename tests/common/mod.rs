#![allow(dead_code)]

use std::time::Instant;

use slidenav::{FullscreenChain, FullscreenMethod, Navigator, NavigatorOptions};

/// Stand-in for a window: remembers which method currently holds fullscreen.
#[derive(Debug, Default)]
pub struct FakeHost {
    pub fullscreen_by: Option<&'static str>,
    pub calls: Vec<String>,
}

/// A fullscreen method that may or may not exist on the fake platform.
pub struct FakeMethod {
    pub name: &'static str,
    pub supported: bool,
}

impl FullscreenMethod<FakeHost> for FakeMethod {
    fn name(&self) -> &'static str {
        self.name
    }

    fn is_supported(&self, _host: &FakeHost) -> bool {
        self.supported
    }

    fn is_active(&self, host: &FakeHost) -> bool {
        host.fullscreen_by == Some(self.name)
    }

    fn request(&self, host: &mut FakeHost) {
        host.calls.push(format!("{}:request", self.name));
        host.fullscreen_by = Some(self.name);
    }

    fn exit(&self, host: &mut FakeHost) {
        host.calls.push(format!("{}:exit", self.name));
        host.fullscreen_by = None;
    }
}

pub fn chain(methods: &[(&'static str, bool)]) -> FullscreenChain<FakeHost> {
    FullscreenChain::new(
        methods
            .iter()
            .map(|&(name, supported)| {
                Box::new(FakeMethod { name, supported }) as Box<dyn FullscreenMethod<FakeHost>>
            })
            .collect(),
    )
}

pub fn navigator(titles: &[Option<&str>], now: Instant) -> Navigator {
    Navigator::new(
        titles.iter().map(|t| t.map(str::to_string)),
        NavigatorOptions::default(),
        now,
    )
    .expect("deck is not empty")
}

pub fn untitled(count: usize, now: Instant) -> Navigator {
    navigator(&vec![None; count], now)
}

/// Asserts that exactly slide `index` and dot `index` are active.
pub fn assert_only_active(nav: &Navigator, index: usize) {
    for (i, slide) in nav.slides().iter().enumerate() {
        assert_eq!(slide.active, i == index, "slide {i} active flag");
    }
    for (i, dot) in nav.dots().iter().enumerate() {
        assert_eq!(dot.active, i == index, "dot {i} active flag");
    }
}

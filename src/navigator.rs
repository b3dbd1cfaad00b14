use std::time::{Duration, Instant};

use thiserror::Error;

use crate::announce::Announcer;
use crate::constants::ANNOUNCEMENT_MS;
use crate::fullscreen::{FullscreenChain, FullscreenIcon};
use crate::input::{Command, Direction};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigatorError {
    #[error("a presentation needs at least one slide")]
    EmptyDeck,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideView {
    pub title: Option<String>,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressDot {
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct NavigatorOptions {
    pub announcement_ttl: Duration,
    /// Whether a fullscreen toggle button exists.
    pub fullscreen_button: bool,
}

impl Default for NavigatorOptions {
    fn default() -> Self {
        Self {
            announcement_ttl: Duration::from_millis(ANNOUNCEMENT_MS),
            fullscreen_button: true,
        }
    }
}

/// Slide cursor plus every piece of UI state derived from it.
///
/// All navigation goes through [`Navigator::render`], which re-derives the
/// active slide, the active progress dot, the counter, the button states and
/// the announcement from a single index.
#[derive(Debug)]
pub struct Navigator {
    slides: Vec<SlideView>,
    dots: Vec<ProgressDot>,
    cursor: usize,
    prev_disabled: bool,
    next_disabled: bool,
    counter: String,
    announcer: Announcer,
    fullscreen_icon: Option<FullscreenIcon>,
}

impl Navigator {
    /// Builds the navigator for a deck and shows its first slide.
    pub fn new<I>(titles: I, options: NavigatorOptions, now: Instant) -> Result<Self, NavigatorError>
    where
        I: IntoIterator<Item = Option<String>>,
    {
        let slides: Vec<SlideView> = titles
            .into_iter()
            .map(|title| SlideView { title, active: false })
            .collect();
        if slides.is_empty() {
            return Err(NavigatorError::EmptyDeck);
        }

        let total = slides.len();
        let mut navigator = Self {
            dots: vec![ProgressDot::default(); total],
            slides,
            cursor: 0,
            prev_disabled: true,
            next_disabled: total == 1,
            counter: format!("Slide 1 of {total}"),
            announcer: Announcer::new(options.announcement_ttl),
            fullscreen_icon: options.fullscreen_button.then_some(FullscreenIcon::Enter),
        };
        navigator.render(0, now);
        Ok(navigator)
    }

    /// Shows the slide at `index` and moves the cursor there.
    ///
    /// An index past the end is logged and replaced by the first slide.
    pub fn render(&mut self, index: usize, now: Instant) {
        let index = if index < self.slides.len() {
            index
        } else {
            tracing::error!(index, total = self.slides.len(), "slide index out of bounds");
            0
        };
        self.cursor = index;

        for (i, slide) in self.slides.iter_mut().enumerate() {
            slide.active = i == index;
        }
        for (i, dot) in self.dots.iter_mut().enumerate() {
            dot.active = i == index;
        }

        self.counter = format!("Slide {} of {}", index + 1, self.slides.len());
        let title = self.slide_title(index);
        self.announcer.announce(format!("Now viewing: {title}"), now);

        self.prev_disabled = index == 0;
        self.next_disabled = index == self.slides.len() - 1;
    }

    /// Title used to announce a slide, falling back to its position.
    pub fn slide_title(&self, index: usize) -> String {
        self.slides
            .get(index)
            .and_then(|s| s.title.as_deref())
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Slide {}", index + 1))
    }

    /// Moves one slide back or forward. Stops at either end.
    pub fn change_slide(&mut self, direction: Direction, now: Instant) {
        let Some(target) = self.cursor.checked_add_signed(direction.offset()) else {
            return;
        };
        if target < self.slides.len() {
            self.render(target, now);
        }
    }

    pub fn jump_to(&mut self, index: usize, now: Instant) {
        if index != self.cursor {
            self.render(index, now);
        }
    }

    pub fn first(&mut self, now: Instant) {
        self.render(0, now);
    }

    pub fn last(&mut self, now: Instant) {
        self.render(self.slides.len() - 1, now);
    }

    /// Applies one user command.
    pub fn dispatch<H>(
        &mut self,
        command: Command,
        now: Instant,
        fullscreen: &FullscreenChain<H>,
        host: &mut H,
    ) {
        tracing::debug!(?command, cursor = self.cursor, "dispatch");
        match command {
            Command::Previous => self.change_slide(Direction::Previous, now),
            Command::Next => self.change_slide(Direction::Next, now),
            Command::First => self.first(now),
            Command::Last => self.last(now),
            Command::JumpTo(index) => self.jump_to(index, now),
            Command::ToggleFullscreen => fullscreen.toggle(host),
        }
    }

    /// Reacts to a fullscreen change notification.
    pub fn update_fullscreen_icon(&mut self, active: bool) {
        if let Some(icon) = self.fullscreen_icon.as_mut() {
            *icon = FullscreenIcon::for_state(active);
            tracing::debug!(label = icon.label(), "fullscreen button updated");
        }
    }

    pub fn tick(&mut self, now: Instant) {
        self.announcer.prune(now);
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &[SlideView] {
        &self.slides
    }

    pub fn dots(&self) -> &[ProgressDot] {
        &self.dots
    }

    pub fn prev_disabled(&self) -> bool {
        self.prev_disabled
    }

    pub fn next_disabled(&self) -> bool {
        self.next_disabled
    }

    /// Screen reader counter, e.g. "Slide 2 of 5".
    pub fn counter(&self) -> &str {
        &self.counter
    }

    pub fn announcer(&self) -> &Announcer {
        &self.announcer
    }

    pub fn fullscreen_icon(&self) -> Option<FullscreenIcon> {
        self.fullscreen_icon
    }
}

/// Direction of a relative slide change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    pub fn offset(self) -> isize {
        match self {
            Direction::Previous => -1,
            Direction::Next => 1,
        }
    }
}

/// Everything a user can ask the navigator to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Previous,
    Next,
    First,
    Last,
    JumpTo(usize),
    ToggleFullscreen,
}

/// Host independent key identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    Char(char),
}

/// Clickable chrome element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Previous,
    Next,
    Dot(usize),
    Fullscreen,
}

pub fn command_for_key(key: Key) -> Option<Command> {
    match key {
        Key::ArrowLeft => Some(Command::Previous),
        Key::ArrowRight => Some(Command::Next),
        Key::Home => Some(Command::First),
        Key::End => Some(Command::Last),
        Key::Char('f' | 'F') => Some(Command::ToggleFullscreen),
        Key::Char(_) => None,
    }
}

pub fn command_for_target(target: Target) -> Command {
    match target {
        Target::Previous => Command::Previous,
        Target::Next => Command::Next,
        Target::Dot(index) => Command::JumpTo(index),
        Target::Fullscreen => Command::ToggleFullscreen,
    }
}

/// Turns a touch start/end pair into a horizontal swipe.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold: f32,
    start_x: Option<f32>,
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            start_x: None,
        }
    }

    pub fn touch_start(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Returns the command for a completed gesture.
    ///
    /// A rightward swipe goes back, a leftward swipe goes forward. The
    /// travel must strictly exceed the threshold.
    pub fn touch_end(&mut self, x: f32) -> Option<Command> {
        let start = self.start_x.take()?;
        let distance = x - start;

        if distance > self.threshold {
            Some(Command::Previous)
        } else if distance < -self.threshold {
            Some(Command::Next)
        } else {
            None
        }
    }

    /// Feeds one frame of primary pointer state.
    ///
    /// A press that landed on a button, dot or the fullscreen control is a
    /// click and never starts a swipe, so one drag cannot navigate twice.
    pub fn pointer(
        &mut self,
        pressed: bool,
        released: bool,
        x: f32,
        on_chrome: bool,
    ) -> Option<Command> {
        if pressed {
            if on_chrome {
                self.start_x = None;
            } else {
                self.touch_start(x);
            }
        }
        if released {
            return self.touch_end(x);
        }
        None
    }

    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_bindings() {
        assert_eq!(command_for_key(Key::ArrowLeft), Some(Command::Previous));
        assert_eq!(command_for_key(Key::ArrowRight), Some(Command::Next));
        assert_eq!(command_for_key(Key::Home), Some(Command::First));
        assert_eq!(command_for_key(Key::End), Some(Command::Last));
        assert_eq!(command_for_key(Key::Char('f')), Some(Command::ToggleFullscreen));
        assert_eq!(command_for_key(Key::Char('F')), Some(Command::ToggleFullscreen));
        assert_eq!(command_for_key(Key::Char('g')), None);
    }

    #[test]
    fn dot_click_jumps() {
        assert_eq!(command_for_target(Target::Dot(3)), Command::JumpTo(3));
    }

    #[test]
    fn swipe_threshold_is_exclusive() {
        let mut swipe = SwipeTracker::new(50.0);

        swipe.touch_start(100.0);
        assert_eq!(swipe.touch_end(150.0), None);

        swipe.touch_start(100.0);
        assert_eq!(swipe.touch_end(50.0), None);

        swipe.touch_start(100.0);
        assert_eq!(swipe.touch_end(151.0), Some(Command::Previous));

        swipe.touch_start(100.0);
        assert_eq!(swipe.touch_end(49.0), Some(Command::Next));
    }

    #[test]
    fn pointer_drag_across_frames_swipes() {
        let mut swipe = SwipeTracker::new(50.0);
        assert_eq!(swipe.pointer(true, false, 400.0, false), None);
        assert_eq!(swipe.pointer(false, false, 380.0, false), None);
        assert_eq!(swipe.pointer(false, true, 349.0, false), Some(Command::Next));

        assert_eq!(swipe.pointer(true, false, 100.0, false), None);
        assert_eq!(swipe.pointer(false, true, 151.0, false), Some(Command::Previous));

        assert_eq!(swipe.pointer(true, false, 100.0, false), None);
        assert_eq!(swipe.pointer(false, true, 150.0, false), None);
    }

    #[test]
    fn press_on_chrome_never_swipes() {
        let mut swipe = SwipeTracker::new(50.0);
        assert_eq!(swipe.pointer(true, false, 1200.0, true), None);
        assert!(!swipe.is_tracking());
        assert_eq!(swipe.pointer(false, true, 900.0, false), None);

        // a chrome press also drops a stale start
        swipe.touch_start(0.0);
        swipe.pointer(true, false, 10.0, true);
        assert_eq!(swipe.pointer(false, true, 500.0, false), None);
    }

    #[test]
    fn idle_frames_do_nothing() {
        let mut swipe = SwipeTracker::new(50.0);
        assert_eq!(swipe.pointer(false, false, 999.0, false), None);
        assert!(!swipe.is_tracking());
    }

    #[test]
    fn end_without_start_is_ignored() {
        let mut swipe = SwipeTracker::new(50.0);
        assert_eq!(swipe.touch_end(500.0), None);

        swipe.touch_start(0.0);
        assert!(swipe.is_tracking());
        swipe.touch_end(0.0);
        assert!(!swipe.is_tracking());
        assert_eq!(swipe.touch_end(500.0), None);
    }
}

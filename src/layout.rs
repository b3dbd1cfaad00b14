use crate::constants::*;
use crate::input::Target;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width * 0.5, self.y + self.height * 0.5)
    }
}

/// Screen positions of the presentation chrome.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub slide_area: Rect,
    pub prev: Rect,
    pub next: Rect,
    /// Dot centers, one per slide.
    pub dots: Vec<(f32, f32)>,
    pub fullscreen: Option<Rect>,
}

impl Layout {
    pub fn compute(width: f32, height: f32, slide_count: usize, fullscreen_button: bool) -> Self {
        let bar_height = BUTTON_SIZE + BUTTON_MARGIN * 2.0;
        let button_y = height - BUTTON_MARGIN - BUTTON_SIZE;

        let prev = Rect::new(BUTTON_MARGIN, button_y, BUTTON_SIZE, BUTTON_SIZE);
        let next = Rect::new(width - BUTTON_MARGIN - BUTTON_SIZE, button_y, BUTTON_SIZE, BUTTON_SIZE);

        let dot_y = button_y + BUTTON_SIZE * 0.5;
        let row_width = slide_count.saturating_sub(1) as f32 * DOT_SPACING;
        let first_x = width * 0.5 - row_width * 0.5;
        let dots = (0..slide_count)
            .map(|i| (first_x + i as f32 * DOT_SPACING, dot_y))
            .collect();

        let fullscreen = fullscreen_button.then(|| {
            Rect::new(width - BUTTON_MARGIN - BUTTON_SIZE, BUTTON_MARGIN, BUTTON_SIZE, BUTTON_SIZE)
        });

        Self {
            slide_area: Rect::new(0.0, 0.0, width, (height - bar_height).max(0.0)),
            prev,
            next,
            dots,
            fullscreen,
        }
    }

    /// Returns the chrome element under a point.
    pub fn hit(&self, x: f32, y: f32) -> Option<Target> {
        if self.fullscreen.is_some_and(|r| r.contains(x, y)) {
            return Some(Target::Fullscreen);
        }
        if self.prev.contains(x, y) {
            return Some(Target::Previous);
        }
        if self.next.contains(x, y) {
            return Some(Target::Next);
        }

        self.dots
            .iter()
            .position(|&(cx, cy)| {
                let (dx, dy) = (x - cx, y - cy);
                dx * dx + dy * dy <= DOT_HIT_RADIUS * DOT_HIT_RADIUS
            })
            .map(Target::Dot)
    }

    /// Largest rectangle with the content's aspect ratio that fits the slide area, centered.
    pub fn fit(&self, content_width: f32, content_height: f32) -> Rect {
        let area = self.slide_area;
        if content_width <= 0.0 || content_height <= 0.0 {
            return Rect::new(area.x, area.y, 0.0, 0.0);
        }

        let scale = (area.width / content_width).min(area.height / content_height);
        let width = content_width * scale;
        let height = content_height * scale;
        Rect::new(
            area.x + (area.width - width) * 0.5,
            area.y + (area.height - height) * 0.5,
            width,
            height,
        )
    }
}

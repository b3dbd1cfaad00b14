use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use raylib::prelude::*;

use slidenav::constants::{DOT_RADIUS, ICON_BOX};
use slidenav::input::{command_for_key, command_for_target};
use slidenav::{
    Command, Config, FullscreenChain, FullscreenIcon, FullscreenWatcher, Key, Layout, Navigator,
    NavigatorOptions, SlideSource, SwipeTracker,
};

use crate::raylib_fullscreen::build_chain;
use crate::texture_loader::load_deck_textures;

const KEY_BINDINGS: [(KeyboardKey, Key); 4] = [
    (KeyboardKey::KEY_LEFT, Key::ArrowLeft),
    (KeyboardKey::KEY_RIGHT, Key::ArrowRight),
    (KeyboardKey::KEY_HOME, Key::Home),
    (KeyboardKey::KEY_END, Key::End),
];

const BACKGROUND: Color = Color::new(18, 18, 24, 255);
const CHROME: Color = Color::new(230, 230, 235, 255);
const CHROME_DISABLED: Color = Color::new(230, 230, 235, 70);
const BUTTON_FILL: Color = Color::new(255, 255, 255, 30);
const DOT_IDLE: Color = Color::new(255, 255, 255, 90);

pub struct App {
    rl: RaylibHandle,
    thread: RaylibThread,
    textures: Vec<Texture2D>,
    navigator: Navigator,
    fullscreen: FullscreenChain<RaylibHandle>,
    /// Present only when the fullscreen button exists.
    watcher: Option<FullscreenWatcher>,
    swipe: SwipeTracker,
    base_title: String,
    shown_title: String,
}

impl App {
    pub fn new(config: &Config, sources: Vec<SlideSource>) -> Result<Self> {
        let window = &config.window;
        let (mut rl, thread) = raylib::init()
            .size(window.width, window.height)
            .title(&window.title)
            .vsync()
            .resizable()
            .build();
        rl.set_target_fps(window.fps);
        rl.set_trace_log(TraceLogLevel::LOG_ERROR);

        let (sources, textures) = load_deck_textures(&mut rl, &thread, sources);
        let options = NavigatorOptions {
            announcement_ttl: Duration::from_millis(config.navigation.announcement_ms),
            fullscreen_button: config.fullscreen.button,
        };
        let navigator = Navigator::new(sources.into_iter().map(|s| s.title), options, Instant::now())
            .context("No slides could be loaded")?;
        tracing::info!(slides = navigator.slide_count(), "presentation ready");

        let fullscreen = build_chain(&config.fullscreen.methods);
        let watcher = config
            .fullscreen
            .button
            .then(|| FullscreenWatcher::new(fullscreen.is_active(&rl)));

        let mut app = Self {
            rl,
            thread,
            textures,
            navigator,
            fullscreen,
            watcher,
            swipe: SwipeTracker::new(config.navigation.swipe_threshold),
            base_title: window.title.clone(),
            shown_title: String::new(),
        };

        if config.fullscreen.start {
            app.fullscreen.enter(&mut app.rl);
        }
        Ok(app)
    }

    pub fn run(mut self) {
        while !self.rl.window_should_close() {
            let now = Instant::now();
            let layout = Layout::compute(
                self.rl.get_screen_width() as f32,
                self.rl.get_screen_height() as f32,
                self.navigator.slide_count(),
                self.navigator.fullscreen_icon().is_some(),
            );

            for command in self.poll_commands(&layout) {
                self.navigator.dispatch(command, now, &self.fullscreen, &mut self.rl);
            }

            self.observe_fullscreen();
            self.navigator.tick(now);
            self.sync_window_title();
            self.draw(&layout);
        }
        tracing::info!("window closed");
    }

    fn poll_commands(&mut self, layout: &Layout) -> Vec<Command> {
        let mut commands = Vec::new();

        for (raylib_key, key) in KEY_BINDINGS {
            if self.rl.is_key_pressed(raylib_key) {
                commands.extend(command_for_key(key));
            }
        }
        if self.rl.is_key_pressed(KeyboardKey::KEY_F) {
            let shifted = self.rl.is_key_down(KeyboardKey::KEY_LEFT_SHIFT)
                || self.rl.is_key_down(KeyboardKey::KEY_RIGHT_SHIFT);
            commands.extend(command_for_key(Key::Char(if shifted { 'F' } else { 'f' })));
        }

        // raylib reports touch point 0 as the left mouse button on every backend
        let pressed = self.rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT);
        let released = self.rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT);
        let mouse = self.rl.get_mouse_position();

        let clicked = if pressed { layout.hit(mouse.x, mouse.y) } else { None };
        if let Some(target) = clicked {
            tracing::trace!(?target, "click");
            commands.push(command_for_target(target));
        }
        commands.extend(self.swipe.pointer(pressed, released, mouse.x, clicked.is_some()));

        commands
    }

    fn observe_fullscreen(&mut self) {
        let Some(watcher) = self.watcher.as_mut() else {
            return;
        };
        if let Some(active) = watcher.poll(self.fullscreen.is_active(&self.rl)) {
            tracing::info!(active, "fullscreen changed");
            self.navigator.update_fullscreen_icon(active);
        }
    }

    fn sync_window_title(&mut self) {
        let title = format!("{} - {}", self.base_title, self.navigator.counter());
        if title != self.shown_title {
            self.rl.set_window_title(&self.thread, &title);
            self.shown_title = title;
        }
    }

    fn draw(&mut self, layout: &Layout) {
        let mut d = self.rl.begin_drawing(&self.thread);
        d.clear_background(BACKGROUND);

        let active = self.navigator.slides().iter().position(|s| s.active);
        if let Some(texture) = active.and_then(|i| self.textures.get(i)) {
            let (w, h) = (texture.width() as f32, texture.height() as f32);
            let dest = layout.fit(w, h);
            d.draw_texture_pro(
                texture,
                Rectangle::new(0.0, 0.0, w, h),
                Rectangle::new(dest.x, dest.y, dest.width, dest.height),
                Vector2::zero(),
                0.0,
                Color::WHITE,
            );
        }

        draw_button(&mut d, layout.prev, -1.0, self.navigator.prev_disabled());
        draw_button(&mut d, layout.next, 1.0, self.navigator.next_disabled());

        for (&(x, y), dot) in layout.dots.iter().zip(self.navigator.dots()) {
            let (radius, color) = if dot.active {
                (DOT_RADIUS * 1.3, CHROME)
            } else {
                (DOT_RADIUS, DOT_IDLE)
            };
            d.draw_circle_v(Vector2::new(x, y), radius, color);
        }

        if let (Some(rect), Some(icon)) = (layout.fullscreen, self.navigator.fullscreen_icon()) {
            draw_fullscreen_icon(&mut d, rect, icon);
        }
    }
}

fn rectangle(rect: slidenav::Rect) -> Rectangle {
    Rectangle::new(rect.x, rect.y, rect.width, rect.height)
}

/// Rounded button with a chevron; `pointing` is -1 for left and 1 for right.
fn draw_button(d: &mut RaylibDrawHandle, rect: slidenav::Rect, pointing: f32, disabled: bool) {
    let color = if disabled { CHROME_DISABLED } else { CHROME };
    d.draw_rectangle_rounded(rectangle(rect), 0.3, 8, BUTTON_FILL);

    let (cx, cy) = rect.center();
    let arm = rect.width * 0.15;
    let tip = Vector2::new(cx + pointing * arm * 0.6, cy);
    let top = Vector2::new(cx - pointing * arm * 0.6, cy - arm);
    let bottom = Vector2::new(cx - pointing * arm * 0.6, cy + arm);
    d.draw_line_ex(top, tip, 3.0, color);
    d.draw_line_ex(tip, bottom, 3.0, color);
}

fn draw_fullscreen_icon(d: &mut RaylibDrawHandle, rect: slidenav::Rect, icon: FullscreenIcon) {
    d.draw_rectangle_rounded(rectangle(rect), 0.3, 8, BUTTON_FILL);

    let scale = rect.width * 0.6 / ICON_BOX;
    let origin_x = rect.x + rect.width * 0.2;
    let origin_y = rect.y + rect.height * 0.2;
    let point = |(x, y): (f32, f32)| Vector2::new(origin_x + x * scale, origin_y + y * scale);

    for stroke in icon.strokes() {
        d.draw_line_ex(point(stroke[0]), point(stroke[1]), 2.0, CHROME);
        d.draw_line_ex(point(stroke[1]), point(stroke[2]), 2.0, CHROME);
    }
}

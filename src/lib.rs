//! Slide presentation navigator.
//!
//! Everything here is independent of the window toolkit: the binary wires
//! these pieces to raylib input, fullscreen and drawing.

pub mod announce;
pub mod config;
pub mod constants;
pub mod deck;
pub mod fullscreen;
pub mod input;
pub mod layout;
pub mod navigator;

pub use announce::{Announcement, Announcer};
pub use config::{Config, ConfigError, FullscreenMethodKind};
pub use deck::{DeckError, SlideSource};
pub use fullscreen::{FullscreenChain, FullscreenIcon, FullscreenMethod, FullscreenWatcher};
pub use input::{Command, Direction, Key, SwipeTracker, Target};
pub use layout::{Layout, Rect};
pub use navigator::{Navigator, NavigatorError, NavigatorOptions, ProgressDot, SlideView};

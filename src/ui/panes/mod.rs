//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`bars`]: the array as a bar chart, with the current step's indices highlighted
//! - [`menu`]: algorithm list, explanation of the selected algorithm and run settings
//! - [`status`]: status bar with keybindings and playback state
//!
//! Each pane exports a single `render_*` function that draws from borrowed
//! state and keeps nothing between frames.

pub mod bars;
pub mod menu;
pub mod status;

pub use bars::{render_bars_pane, BarsView};
pub use menu::{render_menu_pane, MenuView};
pub use status::{render_status_bar, PlaybackState, StatusView};

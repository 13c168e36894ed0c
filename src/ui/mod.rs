//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is one concrete consumer of the step stream. It is organized into
//! three layers:
//!
//! - **[`app`]** — application state, keyboard event loop, replay pacing
//! - **[`panes`]** — stateless render functions for each visible pane (bar chart,
//!   algorithm menu, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a [`Controller`]
//! and the loaded [`Settings`], then call [`App::run`] to start the event loop.
//!
//! [`Controller`]: crate::controller::Controller
//! [`Settings`]: crate::config::Settings
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;

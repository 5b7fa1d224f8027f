//! # fitline-tui
//!
//! Interactive line-fitting TUI using ratatui with Elm architecture.

pub mod bridge;
pub mod chart;
pub mod footer;
pub mod header;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod notification;
pub mod sparkline;
pub mod table;

pub use bridge::TuiEventBridge;
pub use keymap::KeyAction;
pub use messages::TuiMessage;
pub use model::TuiApp;
pub use notification::{Notice, NOTICE_TTL};
pub use sparkline::SparklineBuffer;

//! Widgets composing the terminal UI. Each exposes a `render(frame, area, ..)`.
pub mod action_menu;
pub mod board;
pub mod footer;
pub mod game_area;
pub mod header;
pub mod info_panel;
pub mod messages;

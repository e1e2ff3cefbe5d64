//! Ratatui widgets, one module per panel or screen body.

pub mod battle;
pub mod dashboard;
pub mod footer;
pub mod header;
pub mod matching;
pub mod messages;
pub mod overlay;
pub mod teacher_room;
pub mod wheel;

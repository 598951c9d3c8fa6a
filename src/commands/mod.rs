pub mod config;
pub mod dispatch;
pub mod format;
pub mod interactive;
pub mod list;
pub mod recommend;
pub mod show;

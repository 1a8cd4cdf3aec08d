pub mod add;
pub mod calendar;
pub mod config;
pub mod db;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod mark;
pub mod progress;
pub mod user;

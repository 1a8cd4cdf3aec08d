pub mod calendar;
pub mod context;
pub mod del;
pub mod list;
pub mod log;
pub mod quota;
pub mod submit;
pub mod update;

pub mod add;
pub mod alarm;
pub mod alarms;
pub mod list;
pub mod remove;
pub mod save;

mod display;

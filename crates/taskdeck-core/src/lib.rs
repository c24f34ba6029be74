pub mod chart;
pub mod datetime;
pub mod gateway;
pub mod pomodoro;
pub mod store;
pub mod task;
pub mod view;

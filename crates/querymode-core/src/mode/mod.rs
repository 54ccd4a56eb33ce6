pub mod actions;
pub mod classify;
pub mod click;
pub mod modes;

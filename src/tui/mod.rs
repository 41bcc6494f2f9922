//! Terminal front end: a config menu and a view of the current deal.

pub mod app;
pub mod controller;
pub mod ui;

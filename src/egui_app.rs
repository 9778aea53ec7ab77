//! egui front end: tab shell state, view models, controller and renderer.

pub mod controller;
pub mod state;
pub mod ui;
pub mod view_model;

pub mod controller;
pub mod model;

pub use controller::{BASE_PATH, router};

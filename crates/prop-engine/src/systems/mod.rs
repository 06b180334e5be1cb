pub mod interpolation;
pub mod lighting;
pub mod state;

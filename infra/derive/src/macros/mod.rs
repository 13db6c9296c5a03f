pub mod controller;
pub mod error;

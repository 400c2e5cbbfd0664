pub mod backends;
pub mod cli;
pub mod color;
pub mod config;
pub mod logging;
pub mod preview;
pub mod shades;

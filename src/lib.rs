pub mod config;
pub mod environment;
pub mod gym;
pub mod util;

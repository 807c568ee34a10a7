pub mod fridge;
pub mod fridge_environment;
pub mod policy;

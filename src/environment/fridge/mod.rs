pub mod algebra_2d;
#[cfg(feature = "gui")]
pub mod app_game_drawer;
pub mod assets;
pub mod elements;
pub mod frame_drawer;
pub mod mechanics;

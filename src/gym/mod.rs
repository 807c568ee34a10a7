pub mod prelude;
pub mod spaces;

pub mod menu;
pub mod quiz;
pub mod results;

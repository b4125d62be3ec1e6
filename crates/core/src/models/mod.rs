pub mod coin;
pub mod portfolio;

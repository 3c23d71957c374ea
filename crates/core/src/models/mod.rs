pub mod asset;
pub mod comparison;
pub mod exchange;
pub mod result;
pub mod session;
pub mod settings;
pub mod step;
pub mod strategy;

pub mod calculator_service;
pub mod catalog_service;
pub mod ranking_service;
pub mod strategy_service;

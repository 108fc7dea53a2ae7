pub mod settings;
pub mod tournament_service;

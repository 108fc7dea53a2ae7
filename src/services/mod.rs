pub mod tournament_client;

pub use tournament_client::{TournamentServiceClient, TournamentServiceError};

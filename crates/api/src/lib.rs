pub mod app;
pub mod config;
pub mod error;
pub mod feeds;
pub mod gql;
pub mod league_setup;
pub mod services;
pub mod state;

pub use config::AppConfig;
pub use state::AppState;

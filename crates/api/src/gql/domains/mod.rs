// Each domain contains: mod.rs, resolvers.rs, types.rs

pub mod clubs;
pub mod competitions;
pub mod league_setup;
pub mod players;
pub mod stats;
pub mod teams;

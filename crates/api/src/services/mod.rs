pub mod setup_reaper;

pub use setup_reaper::{spawn_setup_reaper, SetupReaper};

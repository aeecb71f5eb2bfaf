pub mod config;
pub mod logging;

pub mod context;
pub mod events;
pub mod naming;
pub mod relocate;
pub mod shutdown;
pub mod stabilize;
pub mod watcher;

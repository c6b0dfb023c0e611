//! Host-side failures. The simulation itself never fails; only the
//! surroundings (files, threads, channels) can.

use std::path::PathBuf;

use thiserror::Error;

use brawler_core::config::ConfigError;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid combat config: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to spawn game loop thread: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("encounter already running")]
    AlreadyRunning,

    #[error("encounter not started")]
    NotStarted,

    #[error("game loop command channel closed")]
    Disconnected,

    #[error("host state lock was poisoned")]
    LockPoisoned,
}

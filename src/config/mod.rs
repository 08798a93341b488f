//! Configuration loading.

mod settings;

pub use settings::{
    expand_env_vars, AnalysisSettings, ConnectionSettings, ModelSettings, Settings, SettingsError,
    WorkerSettings,
};

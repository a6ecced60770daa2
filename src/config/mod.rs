//! User configuration (`settings.kdl`)

pub mod settings;

pub use settings::Settings;

pub mod settings;

pub use settings::{AppConfig, CatalogSettings, ReportSettings, RiotSettings, TeamSplit};

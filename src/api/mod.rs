pub mod ddragon_client;
pub mod models;
pub mod riot_client;

pub use ddragon_client::DataDragonClient;
pub use riot_client::RiotClient;

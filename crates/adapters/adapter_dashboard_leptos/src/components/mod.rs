mod controls;
mod distance_reader;
mod error_banner;
mod history;
mod loading;
mod stat_card;
mod statistics;
mod status_card;

pub use controls::Controls;
pub use distance_reader::DistanceReader;
pub use error_banner::ErrorBanner;
pub use history::History;
pub use loading::Loading;
pub use stat_card::StatCard;
pub use statistics::Statistics;
pub use status_card::StatusCard;

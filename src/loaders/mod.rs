pub mod generation;
pub mod location_directory;
pub mod series_loader;
pub mod slot;
pub mod summary_loader;

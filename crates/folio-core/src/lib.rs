pub mod animate;
pub mod config;
pub mod content;
pub mod error;
pub mod section;
pub mod tracker;

pub use config::AppConfig;
pub use content::Portfolio;
pub use error::{Error, Result};
pub use section::Section;
pub use tracker::{ScrollTracker, SectionBounds, SectionLayout};

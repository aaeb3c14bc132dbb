pub mod config;
pub mod error;
pub mod models;
pub mod taxonomy;
pub mod analysis;
pub mod input;

pub use config::{AnalyzerConfig, Config};
pub use error::{Error, Result};
pub use analysis::JobAnalyzer;
pub use models::{AnalysisReport, BudgetTier, JobPost};
pub use taxonomy::Taxonomy;

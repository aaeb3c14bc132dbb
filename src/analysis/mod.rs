pub mod aggregator;
pub mod classifier;
pub mod pipeline;
pub mod scorer;
pub mod skill_extractor;

pub use classifier::{Classification, Classifier};
pub use pipeline::JobAnalyzer;
pub use skill_extractor::{extract_budget, SkillExtractor};

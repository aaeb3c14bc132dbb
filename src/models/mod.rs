pub mod job;
pub mod analysis;

pub use job::*;
pub use analysis::*;

pub mod analysis_client;
pub mod completeness;

pub use analysis_client::{AnalysisClient, ResumeAnalyzer, PARSE_PATH};
pub use completeness::{completeness_score, completeness_tier, CompletenessTier};

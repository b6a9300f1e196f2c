pub mod aggregator;
pub mod pipeline;

pub use aggregator::{
    build_comparison, build_profile_data, compare_profiles, compute_language_stats,
    compute_metrics, pick_winner,
};
pub use pipeline::{validate_username, AnalysisPipeline};

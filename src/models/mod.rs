pub mod user;
pub mod repository;
pub mod metrics;
pub mod comparison;
pub mod analysis;

pub use user::*;
pub use repository::*;
pub use metrics::*;
pub use comparison::*;
pub use analysis::*;

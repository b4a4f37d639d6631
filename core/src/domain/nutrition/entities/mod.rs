pub mod analysis_outcome;
pub mod analysis_request;
pub mod nutrition_report;

pub use analysis_outcome::*;
pub use analysis_request::*;
pub use nutrition_report::*;

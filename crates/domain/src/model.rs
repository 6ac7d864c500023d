pub mod report;
pub mod summary;

pub use report::DocumentReport;
pub use summary::Summary;

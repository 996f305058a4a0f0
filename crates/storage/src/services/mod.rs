pub mod context;
pub mod lifecycle;
pub mod results;
pub mod scoring;

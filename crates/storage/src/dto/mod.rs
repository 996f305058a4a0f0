pub mod assignment;
pub mod category;
pub mod context;
pub mod event;
pub mod festival;
pub mod producer;
pub mod results;
pub mod sample;
pub mod score;
pub mod user;

pub mod assignment;
pub mod category;
pub mod event;
pub mod festival;
pub mod producer;
pub mod sample;
pub mod score;
pub mod user;

pub mod assignments;
pub mod categories;
pub mod context;
pub mod events;
pub mod festivals;
pub mod producers;
pub mod results;
pub mod samples;
pub mod scores;
pub mod users;

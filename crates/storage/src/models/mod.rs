pub mod category;
pub mod event;
pub mod festival;
pub mod judge_assignment;
pub mod producer;
pub mod sample;
pub mod score;
pub mod user;

pub use category::Category;
pub use event::FestivalEvent;
pub use festival::{Festival, STATUS_ACTIVE, STATUS_INACTIVE};
pub use judge_assignment::{ASSIGNMENT_ACTIVE, ASSIGNMENT_FINISHED, JudgeAssignment};
pub use producer::Producer;
pub use sample::Sample;
pub use score::{Criterion, Score, ScoreCriteria, max_total_score, score_step};
pub use user::{ROLE_ADMIN, ROLE_JUDGE, User};

pub mod question;
pub mod score;
pub mod subject;
pub use question::Question;
pub use score::{classify, FinalScore, ScoreBand};
pub use subject::Subject;

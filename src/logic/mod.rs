//! Bracket logic: seeding, construction, result recording, champion lookup.

mod advancer;
mod builder;
mod champion;
mod seeding;

pub use advancer::{destination, record_result, round_of};
pub use builder::build_bracket;
pub use champion::{champion, runner_up};
pub use seeding::seeding_order;

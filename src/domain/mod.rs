pub mod board;
pub mod calendar;
pub mod change;
pub mod clock;
pub mod insights;
pub mod job;
pub mod table;
pub mod weekly;

pub use clock::ViewClock;
pub use job::{JobDraft, JobRecord, JobStatus};

mod ids;
mod job;
mod user;

pub use ids::{JobId, StepId};

pub use job::{Job, JobStatus};
pub use user::User;

mod job_vm;
mod progress_vm;
mod time_fmt;

pub use job_vm::{JobDetailVm, JobSummaryVm, map_job_detail, map_job_summaries};
pub use progress_vm::{ProgressBarVm, map_progress_bar};
pub use time_fmt::format_datetime;

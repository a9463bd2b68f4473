mod job;
mod progress_bar;

pub use job::JobView;
pub use progress_bar::ProgressBar;

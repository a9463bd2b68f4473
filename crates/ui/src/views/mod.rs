mod header;
mod home;
pub(crate) mod jobs;
mod offline_alert;
mod scripts;
mod state;

pub use header::UserMenu;
pub use home::HomeView;
pub use jobs::{JobView, ProgressBar};
pub use offline_alert::{OfflineAlert, use_offline_status};
pub use state::ViewError;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

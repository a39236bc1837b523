mod exams;
mod home;
mod login;
mod notice;
mod process;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use exams::ExamSelectorView;
pub use home::HomeView;
pub use login::LoginView;
pub use notice::NoticeBanner;
pub use process::ProcessView;
pub use state::{ViewError, ViewState, view_state_from_resource};

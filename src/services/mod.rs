pub mod assignments;
pub mod auth;
pub mod features;
pub mod submissions;

pub use assignments::AssignmentService;
pub use auth::AuthService;
pub use features::FeatureService;
pub use submissions::SubmissionService;

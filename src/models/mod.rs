pub mod saved_password;
pub mod tip;
pub mod user;

pub use saved_password::SavedPassword;
pub use tip::{Tip, TipFilter};
pub use user::{User, UserSummary};

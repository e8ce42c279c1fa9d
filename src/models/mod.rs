pub mod audit_event;
pub mod client;
pub mod editor;
pub mod expense;
pub mod monthly_payout;
pub mod savings;
pub mod user;
pub mod video_completion;

pub use audit_event::AuditEvent;
pub use client::Client;
pub use editor::{Editor, EditorStats};
pub use expense::Expense;
pub use monthly_payout::{MonthlyPayout, PayoutStatus};
pub use savings::Savings;
pub use user::{Role, User};
pub use video_completion::{ClientVideoCount, VideoCompletion};

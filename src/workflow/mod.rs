pub mod app_state;
pub mod dashboard;
pub mod list_view;
pub mod notifications;

pub use app_state::{Action, AppState, AppStore, Notification, NotificationId, NotificationKind, Theme};
pub use dashboard::{CourseShare, Dashboard};
pub use list_view::{ListPage, ListView};
pub use notifications::NotificationCenter;

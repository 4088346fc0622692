//! 应用状态
//!
//! 显式传递的状态对象 + 注入式派发器，不使用任何全局单例。
//! 所有状态变化都经过 `reduce`，便于测试。

use chrono::{DateTime, Local};
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

/// 界面主题
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// 通知 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(pub u64);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 通知类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

/// 一条通知
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

/// 应用状态
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub theme: Theme,
    pub notifications: Vec<Notification>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// 状态变更动作
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetTheme(Theme),
    SetLoading(bool),
    SetError(Option<String>),
    AddNotification(Notification),
    RemoveNotification(NotificationId),
    ClearNotifications,
}

/// 纯函数：根据动作计算下一个状态
pub fn reduce(mut state: AppState, action: Action) -> AppState {
    match action {
        Action::SetTheme(theme) => state.theme = theme,
        Action::SetLoading(is_loading) => state.is_loading = is_loading,
        Action::SetError(error) => state.error = error,
        Action::AddNotification(notification) => state.notifications.push(notification),
        Action::RemoveNotification(id) => state.notifications.retain(|n| n.id != id),
        Action::ClearNotifications => state.notifications.clear(),
    }
    state
}

/// 状态容器（派发器）
///
/// 克隆开销很小，克隆出的句柄共享同一份状态
#[derive(Clone, Default)]
pub struct AppStore {
    state: Arc<Mutex<AppState>>,
}

impl AppStore {
    pub fn new(initial: AppState) -> Self {
        Self {
            state: Arc::new(Mutex::new(initial)),
        }
    }

    /// 派发动作
    pub fn dispatch(&self, action: Action) {
        debug!("派发动作: {:?}", action);
        let mut guard = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let current = std::mem::take(&mut *guard);
        *guard = reduce(current, action);
    }

    /// 当前状态的副本
    pub fn state(&self) -> AppState {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set_loading(&self, is_loading: bool) {
        self.dispatch(Action::SetLoading(is_loading));
    }

    pub fn set_error(&self, error: Option<String>) {
        self.dispatch(Action::SetError(error));
    }

    pub fn toggle_theme(&self) {
        let theme = self.state().theme.toggled();
        self.dispatch(Action::SetTheme(theme));
    }
}

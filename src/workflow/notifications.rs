//! 通知中心
//!
//! 每条通知都对应一个可取消的延迟删除任务（以通知 ID 为键），
//! 手动关闭时取消该任务。

use crate::workflow::app_state::{
    Action, AppStore, Notification, NotificationId, NotificationKind,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

type TimerMap = Arc<Mutex<HashMap<NotificationId, JoinHandle<()>>>>;

/// 通知中心
pub struct NotificationCenter {
    store: AppStore,
    ttl: Duration,
    next_id: AtomicU64,
    timers: TimerMap,
}

impl NotificationCenter {
    pub fn new(store: AppStore, ttl: Duration) -> Self {
        Self {
            store,
            ttl,
            next_id: AtomicU64::new(1),
            timers: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// 添加通知，并在 ttl 后自动删除
    ///
    /// 必须在 tokio 运行时中调用
    pub fn notify(
        &self,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> NotificationId {
        let id = NotificationId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.store.dispatch(Action::AddNotification(Notification {
            id,
            kind,
            title: title.into(),
            message: message.into(),
            timestamp: chrono::Local::now(),
        }));

        // 持锁插入，保证过期任务删除自身句柄时句柄已经存在
        let mut timers = self.timers.lock().unwrap_or_else(PoisonError::into_inner);
        let store = self.store.clone();
        let timer_map = Arc::clone(&self.timers);
        let ttl = self.ttl;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            debug!("通知 {} 已过期", id);
            store.dispatch(Action::RemoveNotification(id));
            timer_map
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .remove(&id);
        });
        timers.insert(id, handle);

        id
    }

    pub fn success(&self, title: impl Into<String>, message: impl Into<String>) -> NotificationId {
        self.notify(NotificationKind::Success, title, message)
    }

    pub fn error(&self, title: impl Into<String>, message: impl Into<String>) -> NotificationId {
        self.notify(NotificationKind::Error, title, message)
    }

    pub fn warning(&self, title: impl Into<String>, message: impl Into<String>) -> NotificationId {
        self.notify(NotificationKind::Warning, title, message)
    }

    /// 手动关闭：取消延迟任务并删除通知
    ///
    /// 返回是否取消了尚未触发的任务
    pub fn dismiss(&self, id: NotificationId) -> bool {
        let handle = self
            .timers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id);
        let cancelled = match handle {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        };
        self.store.dispatch(Action::RemoveNotification(id));
        cancelled
    }

    /// 清空所有通知并取消全部任务
    pub fn clear(&self) {
        let handles: Vec<_> = self
            .timers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain()
            .map(|(_, handle)| handle)
            .collect();
        for handle in handles {
            handle.abort();
        }
        self.store.dispatch(Action::ClearNotifications);
    }

    /// 尚未触发的删除任务数量
    pub fn pending_timers(&self) -> usize {
        self.timers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Drop for NotificationCenter {
    fn drop(&mut self) {
        for (_, handle) in self
            .timers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain()
        {
            handle.abort();
        }
    }
}

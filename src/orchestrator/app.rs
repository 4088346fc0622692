//! 应用主结构 - 编排层
//!
//! 每个公开方法对应一个用户操作：
//! 设置加载状态 → 调用下层 → 成功 / 失败写入通知 → 清除加载状态

use crate::clients::{StudentBackend, StudentClient};
use crate::config::Config;
use crate::error::AppResult;
use crate::models::loaders::load_student_batches;
use crate::models::student::{StudentId, StudentInput};
use crate::services::{ImportSummary, MutationGateway, RecordStore, Snapshot};
use crate::utils::logging;
use crate::workflow::{AppState, AppStore, Dashboard, ListPage, ListView, NotificationCenter};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

/// 应用主结构
pub struct App {
    config: Config,
    backend: Arc<dyn StudentBackend>,
    records: Arc<RecordStore>,
    gateway: MutationGateway,
    app_store: AppStore,
    notifications: NotificationCenter,
}

impl App {
    /// 初始化应用（使用 HTTP 后端）
    pub fn initialize(config: Config) -> AppResult<Self> {
        config.validate()?;
        logging::log_startup(&config);

        let backend: Arc<dyn StudentBackend> = Arc::new(StudentClient::new(&config)?);
        Ok(Self::with_backend(config, backend))
    }

    /// 使用指定的后端实现组装应用
    pub fn with_backend(config: Config, backend: Arc<dyn StudentBackend>) -> Self {
        let records = Arc::new(RecordStore::new(Arc::clone(&backend)));
        let gateway = MutationGateway::new(Arc::clone(&backend), Arc::clone(&records));
        let app_store = AppStore::default();
        let notifications = NotificationCenter::new(
            app_store.clone(),
            Duration::from_secs(config.notification_ttl_secs),
        );

        Self {
            config,
            backend,
            records,
            gateway,
            app_store,
            notifications,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// 当前应用状态（主题 / 加载中 / 错误 / 通知）
    pub fn state(&self) -> AppState {
        self.app_store.state()
    }

    pub fn store(&self) -> &AppStore {
        &self.app_store
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    /// 新建一个使用配置页大小的列表视图
    pub fn list_view(&self) -> ListView {
        ListView::new(self.config.page_size)
    }

    /// 拉取最新集合；失败时保留旧快照并写入错误状态
    pub async fn load(&self) -> AppResult<Snapshot> {
        self.app_store.set_loading(true);
        let result = self.records.refresh().await;
        self.app_store.set_loading(false);

        match result {
            Ok(snapshot) => {
                self.app_store.set_error(None);
                info!("✓ 已加载 {} 名学生", snapshot.len());
                Ok(snapshot)
            }
            Err(e) => {
                error!("❌ 加载学生列表失败: {}", e);
                self.app_store.set_error(Some(e.user_message()));
                self.notifications.error("错误", "加载学生数据失败");
                Err(e)
            }
        }
    }

    /// 当前快照（不发请求）
    pub async fn snapshot(&self) -> Snapshot {
        self.records.snapshot().await
    }

    /// 列表页：首次使用时先加载
    pub async fn list(&self, view: &ListView) -> AppResult<ListPage> {
        let snapshot = self.ensure_loaded().await?;
        Ok(view.render(&snapshot))
    }

    /// 仪表盘
    pub async fn dashboard(&self) -> AppResult<Dashboard> {
        let snapshot = self.ensure_loaded().await?;
        Ok(Dashboard::build(&snapshot))
    }

    /// 注册学生
    pub async fn register(&self, input: &StudentInput) -> AppResult<()> {
        self.app_store.set_loading(true);
        let result = self.gateway.register(input).await;
        self.app_store.set_loading(false);

        match &result {
            Ok(()) => {
                self.notifications.success("成功", "学生注册成功");
            }
            Err(e) => {
                self.notifications.error("错误", e.user_message());
            }
        }
        result
    }

    /// 删除学生
    pub async fn remove(&self, id: StudentId) -> AppResult<()> {
        self.app_store.set_loading(true);
        let result = self.gateway.remove(id).await;
        self.app_store.set_loading(false);

        match &result {
            Ok(()) => {
                self.notifications.success("成功", "学生已删除");
            }
            Err(e) => {
                self.notifications.error("错误", e.user_message());
            }
        }
        result
    }

    /// 从 TOML 文件或目录批量注册
    pub async fn import(&self, path: &Path) -> AppResult<ImportSummary> {
        info!("\n📁 正在加载待导入的学生: {}", path.display());
        let batches = load_student_batches(path).await?;

        self.app_store.set_loading(true);
        let summary = self.gateway.import(batches).await;
        self.app_store.set_loading(false);

        if summary.failed.is_empty() {
            self.notifications
                .success("成功", format!("已导入 {} 名学生", summary.succeeded));
        } else if summary.succeeded > 0 {
            self.notifications.warning(
                "部分失败",
                format!("{} 名学生导入失败", summary.failed.len()),
            );
        } else {
            self.notifications.error("错误", "全部导入失败");
        }
        Ok(summary)
    }

    /// 后端健康检查
    pub async fn health(&self) -> AppResult<String> {
        self.backend.health().await
    }

    async fn ensure_loaded(&self) -> AppResult<Snapshot> {
        if self.records.is_loaded().await {
            Ok(self.records.snapshot().await)
        } else {
            self.load().await
        }
    }
}

//! # Student Registry
//!
//! 学生注册管理客户端：注册表单校验、可搜索 / 过滤 / 排序 / 分页的学生列表、
//! 仪表盘汇总统计，以及对 REST 后端的增删调用。
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（HTTP 连接池），只暴露能力
//! - `HttpExecutor` - 唯一的 Client owner，统一错误映射
//!
//! ### ② 客户端层（Clients）
//! - `clients/` - `StudentBackend` 协作方接口及其 HTTP 实现 `StudentClient`
//!
//! ### ③ 核心（Query）
//! - `query/` - 纯函数：`apply`（搜索 / 过滤 / 排序）、`page`（分页）、`summarize`（统计）
//!
//! ### ④ 业务能力层（Services）
//! - `RecordStore` - 拉取并持有最新快照，丢弃过期响应
//! - `MutationGateway` - 校验后提交注册 / 删除，成功后刷新
//!
//! ### ⑤ 流程层（Workflow）
//! - `ListView` / `Dashboard` - 视图模型
//! - `AppStore` / `NotificationCenter` - 显式传递的应用状态与可取消的通知
//!
//! ### ⑥ 编排层（Orchestration）
//! - `orchestrator::App` - 组装以上各层，处理一次用户操作
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod orchestrator;
pub mod query;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::{StudentBackend, StudentClient};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::HttpExecutor;
pub use models::{AggregateStats, QuerySpec, SortField, SortOrder, StudentId, StudentInput, StudentRecord};
pub use orchestrator::App;
pub use query::{apply, page, summarize, total_pages};
pub use services::{MutationGateway, RecordStore};
pub use workflow::{AppStore, Dashboard, ListView, NotificationCenter};

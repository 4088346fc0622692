//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 组装整个应用：配置 → 后端客户端 → 存取器 / 变更网关 → 视图，
//! 并把每个用户操作的加载状态、错误和通知写入应用状态。
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator::App (一个用户操作)
//!     ↓
//! workflow (ListView / Dashboard / AppStore / NotificationCenter)
//!     ↓
//! services (RecordStore / MutationGateway) + query (纯函数核心)
//!     ↓
//! clients::StudentBackend → infrastructure::HttpExecutor
//! ```
//!
//! ## 设计原则
//!
//! 1. **资源隔离**：只有编排层决定使用哪个后端实现
//! 2. **向下依赖**：编排层 → workflow → services → clients → infrastructure
//! 3. **错误不致命**：所有错误都转为状态中的提示，旧数据保持不变

pub mod app;

pub use app::App;

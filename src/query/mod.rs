//! 列表查询核心
//!
//! - `engine` - 搜索 / 过滤 / 排序
//! - `paginator` - 分页
//! - `aggregator` - 仪表盘汇总统计
//!
//! 全部为纯函数：参数由调用方显式传入，不读取任何全局状态或配置。

pub mod aggregator;
pub mod engine;
pub mod paginator;

pub use aggregator::{course_share, recent, summarize};
pub use engine::{apply, unique_courses};
pub use paginator::{display_total_pages, page, total_pages};

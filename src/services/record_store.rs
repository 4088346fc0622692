//! 记录存取服务 - 业务能力层
//!
//! 只负责"拉取并持有最新快照"能力，不做过滤

use crate::clients::StudentBackend;
use crate::error::AppResult;
use crate::models::student::StudentRecord;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// 一次渲染使用的不可变快照
pub type Snapshot = Arc<Vec<StudentRecord>>;

struct SnapshotState {
    records: Snapshot,
    applied_seq: u64,
}

/// 学生记录存取器
///
/// 职责：
/// - 从后端拉取完整集合
/// - 持有最新快照，供查询和统计使用
/// - 丢弃过期的响应：每次刷新都有递增序号，只应用比当前更新的结果
pub struct RecordStore {
    backend: Arc<dyn StudentBackend>,
    state: RwLock<SnapshotState>,
    next_seq: AtomicU64,
}

impl RecordStore {
    /// 创建新的存取器（初始快照为空）
    pub fn new(backend: Arc<dyn StudentBackend>) -> Self {
        Self {
            backend,
            state: RwLock::new(SnapshotState {
                records: Arc::new(Vec::new()),
                applied_seq: 0,
            }),
            next_seq: AtomicU64::new(0),
        }
    }

    /// 当前快照
    pub async fn snapshot(&self) -> Snapshot {
        self.state.read().await.records.clone()
    }

    /// 是否已经成功加载过至少一次
    pub async fn is_loaded(&self) -> bool {
        self.state.read().await.applied_seq > 0
    }

    /// 重新拉取完整集合
    ///
    /// 拉取失败时保留之前的快照并返回错误；
    /// 比已应用结果更旧的响应（无论成功还是失败）会被丢弃，返回值始终是最新快照
    pub async fn refresh(&self) -> AppResult<Snapshot> {
        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("开始刷新学生列表 (序号 {})", seq);

        let records = match self.backend.fetch_all().await {
            Ok(records) => records,
            Err(e) => {
                let state = self.state.read().await;
                if seq <= state.applied_seq {
                    warn!(
                        "丢弃过期的刷新失败 (序号 {} <= 已应用 {}): {}",
                        seq, state.applied_seq, e
                    );
                    return Ok(state.records.clone());
                }
                warn!("⚠️ 刷新学生列表失败 (序号 {}): {}，保留旧数据", seq, e);
                return Err(e);
            }
        };

        let mut state = self.state.write().await;
        if seq > state.applied_seq {
            debug!("应用刷新结果 (序号 {}, {} 条)", seq, records.len());
            state.records = Arc::new(records);
            state.applied_seq = seq;
        } else {
            warn!(
                "丢弃过期的刷新结果 (序号 {} <= 已应用 {})",
                seq, state.applied_seq
            );
        }

        Ok(state.records.clone())
    }
}

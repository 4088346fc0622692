//! 变更网关 - 业务能力层
//!
//! 负责注册 / 删除：先做客户端校验，成功后让存取器重新拉取完整集合

use crate::clients::StudentBackend;
use crate::error::{AppError, AppResult};
use crate::models::loaders::StudentBatch;
use crate::models::student::{NewStudent, StudentId, StudentInput};
use crate::services::record_store::RecordStore;
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tracing::{info, warn};

/// 批量导入结果
#[derive(Debug, Default)]
pub struct ImportSummary {
    pub succeeded: usize,
    /// (文件内序号, 姓名, 错误)
    pub failed: Vec<(usize, String, AppError)>,
}

impl ImportSummary {
    pub fn total(&self) -> usize {
        self.succeeded + self.failed.len()
    }
}

/// 变更网关
///
/// 职责：
/// - 校验失败时不发起任何网络请求，直接返回字段错误
/// - 变更成功后刷新集合（不在本地修补缓存）
/// - 变更失败时不假设任何状态变化，旧快照保持不变
pub struct MutationGateway {
    backend: Arc<dyn StudentBackend>,
    store: Arc<RecordStore>,
}

impl MutationGateway {
    pub fn new(backend: Arc<dyn StudentBackend>, store: Arc<RecordStore>) -> Self {
        Self { backend, store }
    }

    /// 注册学生
    pub async fn register(&self, input: &StudentInput) -> AppResult<()> {
        self.submit(input).await?;
        self.refresh_after_mutation().await;
        Ok(())
    }

    /// 删除学生
    pub async fn remove(&self, id: StudentId) -> AppResult<()> {
        if let Err(e) = self.backend.delete_by_id(id).await {
            warn!("⚠️ 删除学生 {} 失败: {}", id, e);
            return Err(e);
        }
        self.refresh_after_mutation().await;
        Ok(())
    }

    /// 批量注册
    ///
    /// 逐条校验并提交（不并发），全部结束后统一刷新一次
    pub async fn import(&self, batches: Vec<StudentBatch>) -> ImportSummary {
        let inputs: Vec<StudentInput> = batches.into_iter().flat_map(|b| b.students).collect();

        let results: Vec<(usize, String, AppResult<()>)> = stream::iter(inputs.into_iter().enumerate())
            .then(|(index, input)| async move {
                let result = self.submit(&input).await.map(|_| ());
                (index + 1, input.name, result)
            })
            .collect()
            .await;

        let mut summary = ImportSummary::default();
        for (index, name, result) in results {
            match result {
                Ok(()) => summary.succeeded += 1,
                Err(e) => summary.failed.push((index, name, e)),
            }
        }

        if summary.succeeded > 0 {
            self.refresh_after_mutation().await;
        }

        info!(
            "📋 批量导入完成: 成功 {}/{}",
            summary.succeeded,
            summary.total()
        );
        summary
    }

    /// 校验并提交，不刷新
    async fn submit(&self, input: &StudentInput) -> AppResult<NewStudent> {
        let student = input.validate().map_err(|errors| {
            warn!("⚠️ 表单校验失败，未发起请求: {}", errors);
            AppError::Validation(errors)
        })?;

        if let Err(e) = self.backend.create(&student).await {
            warn!("⚠️ 注册学生 {} 失败: {}", student.name, e);
            return Err(e);
        }
        Ok(student)
    }

    /// 变更已经成功，刷新失败只记录日志
    async fn refresh_after_mutation(&self) {
        if let Err(e) = self.store.refresh().await {
            warn!("⚠️ 变更成功但刷新列表失败: {}", e);
        }
    }
}

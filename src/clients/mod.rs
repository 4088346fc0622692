pub mod student_client;

pub use student_client::StudentClient;

use crate::error::AppResult;
use crate::models::student::{NewStudent, StudentId, StudentRecord};
use async_trait::async_trait;

/// 学生后端（外部协作方）
///
/// 只定义三种操作，不做服务端过滤；具体传输方式由实现决定
#[async_trait]
pub trait StudentBackend: Send + Sync {
    /// 拉取完整的学生集合
    async fn fetch_all(&self) -> AppResult<Vec<StudentRecord>>;

    /// 创建学生（ID 由后端分配）
    async fn create(&self, student: &NewStudent) -> AppResult<()>;

    /// 按 ID 删除，ID 不存在时返回 NotFound
    async fn delete_by_id(&self, id: StudentId) -> AppResult<()>;

    /// 后端健康检查
    async fn health(&self) -> AppResult<String> {
        Ok("OK".to_string())
    }
}

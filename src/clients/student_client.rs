/// 学生 REST API 客户端
///
/// 封装所有与学生后端相关的调用逻辑
use crate::clients::StudentBackend;
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::infrastructure::HttpExecutor;
use crate::models::student::{NewStudent, StudentId, StudentRecord};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, info};

/// 学生 API 客户端
pub struct StudentClient {
    executor: HttpExecutor,
    api_url: String,
    base_url: String,
}

impl StudentClient {
    /// 创建新的学生客户端
    pub fn new(config: &Config) -> AppResult<Self> {
        let executor = HttpExecutor::new(Duration::from_secs(config.request_timeout_secs))?;
        Ok(Self::with_executor(
            executor,
            &config.api_url,
            &config.api_base_url,
        ))
    }

    /// 使用已有的执行器创建
    pub fn with_executor(
        executor: HttpExecutor,
        api_url: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            executor,
            api_url: trim_slash(api_url.into()),
            base_url: trim_slash(base_url.into()),
        }
    }

    fn users_url(&self) -> String {
        format!("{}/users", self.api_url)
    }

    fn register_url(&self) -> String {
        format!("{}/register", self.api_url)
    }

    fn user_url(&self, id: StudentId) -> String {
        format!("{}/users/{}", self.api_url, id)
    }

    fn health_url(&self) -> String {
        format!("{}/health", self.base_url)
    }
}

#[async_trait]
impl StudentBackend for StudentClient {
    async fn fetch_all(&self) -> AppResult<Vec<StudentRecord>> {
        let records: Vec<StudentRecord> = self.executor.get_json(&self.users_url()).await?;
        debug!("拉取到 {} 条学生记录", records.len());
        Ok(records)
    }

    async fn create(&self, student: &NewStudent) -> AppResult<()> {
        debug!("注册学生: {} <{}>", student.name, student.email);
        self.executor.post_json(&self.register_url(), student).await?;
        info!("✓ 学生注册成功: {}", student.name);
        Ok(())
    }

    async fn delete_by_id(&self, id: StudentId) -> AppResult<()> {
        let status = self.executor.delete(&self.user_url(id)).await?;
        if status == StatusCode::NOT_FOUND {
            return Err(AppError::not_found("学生", id));
        }
        info!("✓ 学生删除成功: {}", id);
        Ok(())
    }

    async fn health(&self) -> AppResult<String> {
        self.executor.get_text(&self.health_url()).await
    }
}

fn trim_slash(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

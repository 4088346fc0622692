//! HTTP 执行器 - 基础设施层
//!
//! 持有唯一的 reqwest::Client，只暴露"发请求"的能力

use crate::error::{AppError, AppResult};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// HTTP 执行器
///
/// 职责：
/// - 持有连接池（Client）
/// - 把网络失败 / 非 2xx 状态 / 解析失败统一映射为 AppError
/// - 不认识 Student，不处理业务流程
#[derive(Clone)]
pub struct HttpExecutor {
    client: Client,
}

impl HttpExecutor {
    /// 创建带超时的执行器
    pub fn new(timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::request_failed("client-builder", e))?;
        Ok(Self { client })
    }

    /// GET 并反序列化 JSON
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> AppResult<T> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::request_failed(url, e))?;
        let response = Self::check_status(url, response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| AppError::decode_failed(url, e))
    }

    /// GET 并返回文本
    pub async fn get_text(&self, url: &str) -> AppResult<String> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::request_failed(url, e))?;
        let response = Self::check_status(url, response).await?;
        response
            .text()
            .await
            .map_err(|e| AppError::decode_failed(url, e))
    }

    /// POST JSON，忽略响应体
    pub async fn post_json<B: Serialize + ?Sized>(&self, url: &str, body: &B) -> AppResult<()> {
        debug!("POST {}", url);
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::request_failed(url, e))?;
        Self::check_status(url, response).await?;
        Ok(())
    }

    /// DELETE，返回状态码供调用方区分 404
    pub async fn delete(&self, url: &str) -> AppResult<StatusCode> {
        debug!("DELETE {}", url);
        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(|e| AppError::request_failed(url, e))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(StatusCode::NOT_FOUND);
        }
        let response = Self::check_status(url, response).await?;
        Ok(response.status())
    }

    /// 非 2xx 状态映射为 BadStatus，附带响应体方便排查
    async fn check_status(url: &str, response: Response) -> AppResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.ok().filter(|b| !b.is_empty());
        Err(AppError::bad_status(url, status.as_u16(), body))
    }
}

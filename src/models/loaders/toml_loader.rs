use crate::error::{AppError, AppResult, FileError};
use crate::models::student::StudentInput;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::fs;

/// 批量注册文件（`[[students]]` 表数组）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentBatch {
    #[serde(default)]
    pub students: Vec<StudentInput>,
    #[serde(skip)]
    pub file_path: Option<String>,
}

/// 从 TOML 文件加载一批待注册的学生
pub async fn load_student_batch(toml_file_path: &Path) -> AppResult<StudentBatch> {
    let display = toml_file_path.display().to_string();
    let content = fs::read_to_string(toml_file_path)
        .await
        .map_err(|e| AppError::file_read_failed(display.clone(), e))?;

    let mut batch: StudentBatch =
        toml::from_str(&content).map_err(|source| FileError::TomlParseFailed {
            path: display.clone(),
            source,
        })?;

    batch.file_path = Some(display);

    Ok(batch)
}

/// 加载单个文件，或目录下的所有 TOML 文件
///
/// 目录中解析失败的文件会被跳过并记录警告
pub async fn load_student_batches(path: &Path) -> AppResult<Vec<StudentBatch>> {
    if !path.exists() {
        return Err(FileError::NotFound {
            path: path.display().to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Ok(vec![load_student_batch(path).await?]);
    }

    let mut toml_files: Vec<PathBuf> = Vec::new();
    let mut entries = fs::read_dir(path)
        .await
        .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?
    {
        let entry_path = entry.path();
        if entry_path.extension().and_then(|s| s.to_str()) == Some("toml") {
            toml_files.push(entry_path);
        }
    }
    toml_files.sort();

    let mut batches = Vec::new();
    for file in toml_files {
        tracing::info!(
            "正在加载: {}",
            file.file_name().unwrap_or_default().to_string_lossy()
        );

        match load_student_batch(&file).await {
            Ok(batch) => {
                tracing::info!("成功加载 {} 名学生", batch.students.len());
                batches.push(batch);
            }
            Err(e) => {
                tracing::warn!("加载文件失败 {}: {}", file.display(), e);
            }
        }
    }

    Ok(batches)
}

/// 日志工具模块
///
/// 提供日志初始化和格式化输出的辅助函数
use crate::config::Config;
use crate::models::stats::AggregateStats;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 优先使用 RUST_LOG，否则默认 info（verbose 时为 debug）。
/// 重复调用不会报错。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 {} - 启动", config.app_title);
    info!(
        "启动时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("🌐 接口地址: {}", config.api_url);
    info!("📄 每页条数: {}", config.page_size);
    info!("{}", "=".repeat(60));
}

/// 打印汇总统计
pub fn log_stats(stats: &AggregateStats) {
    info!("\n{}", "=".repeat(60));
    info!("📊 学生统计");
    info!("{}", "=".repeat(60));
    info!("👥 学生总数: {}", stats.total_count);
    info!("🆕 最近注册: {}", stats.recent_count);
    info!("📈 平均成绩: {}%", stats.average_percentage);
    info!("🎓 热门课程: {}", stats.top_courses.len());
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度（按字符计）
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

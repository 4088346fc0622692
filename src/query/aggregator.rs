//! 汇总统计（仪表盘）

use crate::models::stats::{AggregateStats, CourseCount};
use crate::models::student::StudentRecord;

/// "最近注册"统计的窗口大小
pub const RECENT_WINDOW: usize = 5;
/// 热门课程最多展示数量
pub const TOP_COURSE_LIMIT: usize = 3;

/// 计算汇总统计
///
/// 依赖集合的自然顺序（后端返回的插入顺序），对同一输入结果确定
pub fn summarize(records: &[StudentRecord]) -> AggregateStats {
    let total_count = records.len();

    AggregateStats {
        total_count,
        recent_count: total_count.min(RECENT_WINDOW),
        average_percentage: average_percentage(records),
        top_courses: top_courses(records, TOP_COURSE_LIMIT),
    }
}

fn average_percentage(records: &[StudentRecord]) -> i64 {
    if records.is_empty() {
        return 0;
    }
    let sum: f64 = records.iter().map(StudentRecord::percentage_value).sum();
    round_half_up(sum / records.len() as f64)
}

/// 按人数降序，人数相同时按首次出现顺序
fn top_courses(records: &[StudentRecord], limit: usize) -> Vec<CourseCount> {
    let mut counts: Vec<CourseCount> = Vec::new();
    for record in records {
        match counts.iter_mut().find(|c| c.course == record.course) {
            Some(entry) => entry.count += 1,
            None => counts.push(CourseCount {
                course: record.course.clone(),
                count: 1,
            }),
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(limit);
    counts
}

/// 最近注册的 `n` 名学生，最新的在前
pub fn recent(records: &[StudentRecord], n: usize) -> Vec<StudentRecord> {
    records.iter().rev().take(n).cloned().collect()
}

/// 课程人数占总人数的百分比（四舍五入），总数为 0 时返回 0
pub fn course_share(count: usize, total: usize) -> i64 {
    if total == 0 {
        return 0;
    }
    round_half_up(count as f64 / total as f64 * 100.0)
}

// .5 一律向上取整
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

use serde::Serialize;

/// 课程人数统计
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseCount {
    pub course: String,
    pub count: usize,
}

/// 仪表盘汇总统计
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStats {
    pub total_count: usize,
    /// 最近注册数（末尾最多 5 条）
    pub recent_count: usize,
    /// 平均成绩（四舍五入取整），集合为空时为 0
    pub average_percentage: i64,
    /// 人数最多的课程（最多 3 个）
    pub top_courses: Vec<CourseCount>,
}

use serde::{Deserialize, Serialize};

/// 排序字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    #[default]
    Name,
    Email,
    Course,
    Percentage,
}

/// 排序方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    /// 列头上的方向箭头
    pub fn indicator(self) -> &'static str {
        match self {
            SortOrder::Asc => "↑",
            SortOrder::Desc => "↓",
        }
    }
}

/// 列表查询条件：搜索词 + 课程过滤 + 排序
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuerySpec {
    /// 搜索词（对姓名 / 邮箱 / 课程做不区分大小写的子串匹配）
    pub search_term: String,
    /// 课程过滤（精确匹配）
    pub course_filter: Option<String>,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
}

impl QuerySpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn course(mut self, course: impl Into<String>) -> Self {
        self.course_filter = Some(course.into());
        self
    }

    pub fn sort_by(mut self, field: SortField, order: SortOrder) -> Self {
        self.sort_field = field;
        self.sort_order = order;
        self
    }

    /// 是否设置了任何过滤条件
    pub fn has_filters(&self) -> bool {
        !self.search_term.is_empty() || self.active_course_filter().is_some()
    }

    /// 有效的课程过滤（空字符串视为未设置）
    pub fn active_course_filter(&self) -> Option<&str> {
        self.course_filter.as_deref().filter(|c| !c.is_empty())
    }
}

//! 学生列表视图 - 流程层
//!
//! 持有当前查询条件和页码，把快照交给查询核心，产出一页可展示的数据

use crate::models::query::{QuerySpec, SortField};
use crate::models::student::StudentRecord;
use crate::query::{apply, display_total_pages, page, unique_courses};

/// 一页列表数据
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage {
    /// 当前页的记录
    pub rows: Vec<StudentRecord>,
    /// 满足条件的记录总数
    pub total_matches: usize,
    /// 快照中的记录总数
    pub total_records: usize,
    pub current_page: usize,
    pub total_pages: usize,
    /// 课程过滤可选项
    pub course_options: Vec<String>,
}

/// 列表视图控制器
#[derive(Debug, Clone)]
pub struct ListView {
    spec: QuerySpec,
    current_page: usize,
    page_size: usize,
}

impl ListView {
    pub fn new(page_size: usize) -> Self {
        Self {
            spec: QuerySpec::default(),
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn with_spec(mut self, spec: QuerySpec) -> Self {
        self.spec = spec;
        self
    }

    pub fn spec(&self) -> &QuerySpec {
        &self.spec
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// 修改搜索词，回到第 1 页
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.spec.search_term = term.into();
        self.current_page = 1;
    }

    /// 修改课程过滤，回到第 1 页
    pub fn set_course_filter(&mut self, course: Option<String>) {
        self.spec.course_filter = course;
        self.current_page = 1;
    }

    /// 点击列头：同一列切换方向，换列时从升序开始
    pub fn handle_sort(&mut self, field: SortField) {
        if self.spec.sort_field == field {
            self.spec.sort_order = self.spec.sort_order.toggled();
        } else {
            self.spec.sort_field = field;
            self.spec.sort_order = Default::default();
        }
    }

    /// 清空搜索 / 过滤 / 排序，回到第 1 页
    pub fn clear_filters(&mut self) {
        self.spec = QuerySpec::default();
        self.current_page = 1;
    }

    /// 跳到指定页（夹在 1..=total_pages 之间）
    pub fn go_to(&mut self, page_index: usize, total_pages: usize) {
        self.current_page = page_index.clamp(1, total_pages.max(1));
    }

    pub fn next_page(&mut self, total_pages: usize) {
        self.go_to(self.current_page + 1, total_pages);
    }

    pub fn previous_page(&mut self) {
        self.current_page = self.current_page.saturating_sub(1).max(1);
    }

    /// 生成当前页
    pub fn render(&self, records: &[StudentRecord]) -> ListPage {
        let matches = apply(records, &self.spec);
        let rows = page(&matches, self.current_page, self.page_size).to_vec();

        ListPage {
            rows,
            total_matches: matches.len(),
            total_records: records.len(),
            current_page: self.current_page,
            total_pages: display_total_pages(matches.len(), self.page_size),
            course_options: unique_courses(records),
        }
    }

    /// 结果摘要，例如 "显示 10 / 25 名学生，匹配 "amy"，课程 Data Science"
    pub fn summary(&self, list_page: &ListPage) -> String {
        let mut line = format!(
            "显示 {} / {} 名学生",
            list_page.rows.len(),
            list_page.total_matches
        );
        if !self.spec.search_term.is_empty() {
            line.push_str(&format!("，匹配 \"{}\"", self.spec.search_term));
        }
        if let Some(course) = self.spec.active_course_filter() {
            line.push_str(&format!("，课程 {}", course));
        }
        line
    }
}

//! 仪表盘视图 - 流程层

use crate::models::stats::{AggregateStats, CourseCount};
use crate::models::student::StudentRecord;
use crate::query::{course_share, recent, summarize};

/// 仪表盘上"最近学生"卡片数量
pub const RECENT_CARDS: usize = 4;

/// 热门课程及其占比
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseShare {
    pub rank: usize,
    pub course: CourseCount,
    /// 占总人数的百分比（取整）
    pub share: i64,
}

/// 仪表盘数据
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub stats: AggregateStats,
    /// 最近注册的学生，最新的在前
    pub recent_students: Vec<StudentRecord>,
    pub popular_courses: Vec<CourseShare>,
}

impl Dashboard {
    pub fn build(records: &[StudentRecord]) -> Self {
        let stats = summarize(records);
        let popular_courses = stats
            .top_courses
            .iter()
            .enumerate()
            .map(|(i, course)| CourseShare {
                rank: i + 1,
                course: course.clone(),
                share: course_share(course.count, stats.total_count),
            })
            .collect();

        Self {
            recent_students: recent(records, RECENT_CARDS),
            popular_courses,
            stats,
        }
    }

    /// 出现在热门榜单上的课程数
    pub fn active_courses(&self) -> usize {
        self.stats.top_courses.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::student::StudentId;

    fn record(id: i64, course: &str) -> StudentRecord {
        StudentRecord {
            id: StudentId(id),
            name: format!("Student {}", id),
            email: String::new(),
            course: course.to_string(),
            highest_education: String::new(),
            percentage: "75".to_string(),
            branch: String::new(),
            mobile_number: String::new(),
        }
    }

    #[test]
    fn test_dashboard_from_records() {
        let records = vec![
            record(1, "Data Science"),
            record(2, "Data Science"),
            record(3, "Cybersecurity"),
            record(4, "Data Science"),
            record(5, "Cybersecurity"),
            record(6, "Civil Engineering"),
        ];

        let dashboard = Dashboard::build(&records);

        assert_eq!(dashboard.stats.total_count, 6);
        assert_eq!(dashboard.stats.recent_count, 5);
        assert_eq!(dashboard.stats.average_percentage, 75);
        assert_eq!(dashboard.active_courses(), 3);

        let recent_ids: Vec<i64> = dashboard.recent_students.iter().map(|r| r.id.0).collect();
        assert_eq!(recent_ids, vec![6, 5, 4, 3]);

        assert_eq!(dashboard.popular_courses[0].rank, 1);
        assert_eq!(dashboard.popular_courses[0].course.course, "Data Science");
        assert_eq!(dashboard.popular_courses[0].share, 50);
        assert_eq!(dashboard.popular_courses[1].share, 33);
        assert_eq!(dashboard.popular_courses[2].share, 17);
    }

    #[test]
    fn test_empty_dashboard() {
        let dashboard = Dashboard::build(&[]);
        assert!(dashboard.recent_students.is_empty());
        assert!(dashboard.popular_courses.is_empty());
        assert_eq!(dashboard.active_courses(), 0);
    }
}

//! 查询引擎
//!
//! 对完整的学生集合做搜索、课程过滤和排序，返回新的有序子序列。
//! 纯函数，不修改输入，也不会失败。

use crate::models::query::{QuerySpec, SortField, SortOrder};
use crate::models::student::StudentRecord;
use std::cmp::Ordering;

/// 按查询条件过滤并排序
///
/// 排序是稳定的：比较结果相等的记录保持输入中的先后顺序
pub fn apply(records: &[StudentRecord], spec: &QuerySpec) -> Vec<StudentRecord> {
    let needle = spec.search_term.to_lowercase();
    let course_filter = spec.active_course_filter();

    let mut result: Vec<StudentRecord> = records
        .iter()
        .filter(|record| matches_search(record, &needle))
        .filter(|record| course_filter.map_or(true, |course| record.course == course))
        .cloned()
        .collect();

    result.sort_by(|a, b| {
        let ordering = compare_by(a, b, spec.sort_field);
        match spec.sort_order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });

    result
}

/// 搜索词已转为小写；为空时全部匹配
fn matches_search(record: &StudentRecord, needle: &str) -> bool {
    needle.is_empty()
        || record.name.to_lowercase().contains(needle)
        || record.email.to_lowercase().contains(needle)
        || record.course.to_lowercase().contains(needle)
}

fn compare_by(a: &StudentRecord, b: &StudentRecord, field: SortField) -> Ordering {
    match field {
        SortField::Percentage => {
            // 加 0.0 把 -0.0 归一为 0.0，与无法解析的成绩并列
            (a.percentage_value() + 0.0).total_cmp(&(b.percentage_value() + 0.0))
        }
        SortField::Name => compare_text(&a.name, &b.name),
        SortField::Email => compare_text(&a.email, &b.email),
        SortField::Course => compare_text(&a.course, &b.course),
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// 课程过滤下拉框的可选项：去重后按字母排序
pub fn unique_courses(records: &[StudentRecord]) -> Vec<String> {
    let mut courses: Vec<String> = records.iter().map(|r| r.course.clone()).collect();
    courses.sort();
    courses.dedup();
    courses
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::student::StudentId;

    fn record(id: i64, name: &str, course: &str, percentage: &str) -> StudentRecord {
        StudentRecord {
            id: StudentId(id),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            course: course.to_string(),
            highest_education: "B.Sc".to_string(),
            percentage: percentage.to_string(),
            branch: "Civil".to_string(),
            mobile_number: "1234567890".to_string(),
        }
    }

    fn names(records: &[StudentRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    fn sample() -> Vec<StudentRecord> {
        vec![
            record(1, "Bob", "Data Science", "70"),
            record(2, "amy", "Cybersecurity", "90"),
            record(3, "Carl", "Data Science", "abc"),
            record(4, "Dana", "Civil Engineering", "85.5"),
        ]
    }

    #[test]
    fn test_sort_by_name_ascending() {
        let records = vec![record(1, "Bob", "Data Science", "70"), record(2, "Amy", "Data Science", "90")];
        let spec = QuerySpec::new().sort_by(SortField::Name, SortOrder::Asc);
        assert_eq!(names(&apply(&records, &spec)), vec!["Amy", "Bob"]);
    }

    #[test]
    fn test_text_sort_ignores_case() {
        let spec = QuerySpec::new().sort_by(SortField::Name, SortOrder::Asc);
        assert_eq!(names(&apply(&sample(), &spec)), vec!["amy", "Bob", "Carl", "Dana"]);
    }

    #[test]
    fn test_negative_zero_ties_with_unparsable() {
        let records = vec![record(1, "Gus", "MBA", "abc"), record(2, "Hal", "MBA", "-0")];
        let spec = QuerySpec::new().sort_by(SortField::Percentage, SortOrder::Asc);
        assert_eq!(names(&apply(&records, &spec)), vec!["Gus", "Hal"]);

        let records = vec![record(2, "Hal", "MBA", "-0"), record(1, "Gus", "MBA", "abc")];
        assert_eq!(names(&apply(&records, &spec)), vec!["Hal", "Gus"]);
    }

    #[test]
    fn test_percentage_sort_is_numeric_and_coerces_garbage() {
        let spec = QuerySpec::new().sort_by(SortField::Percentage, SortOrder::Desc);
        assert_eq!(names(&apply(&sample(), &spec)), vec!["amy", "Dana", "Bob", "Carl"]);

        let spec = QuerySpec::new().sort_by(SortField::Percentage, SortOrder::Asc);
        assert_eq!(names(&apply(&sample(), &spec)), vec!["Carl", "Bob", "Dana", "amy"]);
    }

    #[test]
    fn test_search_matches_name_email_or_course() {
        let records = sample();
        assert_eq!(names(&apply(&records, &QuerySpec::new().search("AMY"))), vec!["amy"]);
        assert_eq!(
            names(&apply(&records, &QuerySpec::new().search("data"))),
            vec!["Bob", "Carl"]
        );
        assert_eq!(
            names(&apply(&records, &QuerySpec::new().search("dana@"))),
            vec!["Dana"]
        );
        assert!(apply(&records, &QuerySpec::new().search("zzz")).is_empty());
    }

    #[test]
    fn test_course_filter_is_exact() {
        let records = sample();
        let result = apply(&records, &QuerySpec::new().course("Data Science"));
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|r| r.course == "Data Science"));

        assert!(apply(&records, &QuerySpec::new().course("data science")).is_empty());
    }

    #[test]
    fn test_empty_course_filter_means_no_filter() {
        let records = sample();
        assert_eq!(apply(&records, &QuerySpec::new().course("")).len(), records.len());
    }

    #[test]
    fn test_search_and_filter_combine() {
        let spec = QuerySpec::new().search("carl").course("Data Science");
        assert_eq!(names(&apply(&sample(), &spec)), vec!["Carl"]);
    }

    #[test]
    fn test_no_filters_returns_permutation() {
        let records = sample();
        for field in [SortField::Name, SortField::Email, SortField::Course, SortField::Percentage] {
            for order in [SortOrder::Asc, SortOrder::Desc] {
                let result = apply(&records, &QuerySpec::new().sort_by(field, order));
                assert_eq!(result.len(), records.len());
                let mut ids: Vec<_> = result.iter().map(|r| r.id).collect();
                ids.sort();
                assert_eq!(ids, vec![StudentId(1), StudentId(2), StudentId(3), StudentId(4)]);
            }
        }
    }

    #[test]
    fn test_ties_keep_input_order() {
        let records = vec![
            record(1, "Zed", "Data Science", "80"),
            record(2, "Abe", "Data Science", "80"),
            record(3, "Kim", "Data Science", "80"),
        ];
        for order in [SortOrder::Asc, SortOrder::Desc] {
            let spec = QuerySpec::new().sort_by(SortField::Course, order);
            assert_eq!(names(&apply(&records, &spec)), vec!["Zed", "Abe", "Kim"]);
        }
    }

    #[test]
    fn test_apply_is_idempotent_and_leaves_input_untouched() {
        let records = sample();
        let before = records.clone();
        let spec = QuerySpec::new().search("a").sort_by(SortField::Email, SortOrder::Desc);

        let first = apply(&records, &spec);
        let second = apply(&records, &spec);

        assert_eq!(first, second);
        assert_eq!(records, before);
    }

    #[test]
    fn test_unique_courses_sorted() {
        assert_eq!(
            unique_courses(&sample()),
            vec!["Civil Engineering", "Cybersecurity", "Data Science"]
        );
    }
}

use crate::error::ValidationErrors;
use crate::models::course::{Branch, Course};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
const MOBILE_PATTERN: &str = r"^[0-9]{10}$";
const LEADING_NUMBER_PATTERN: &str = r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?";

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

fn mobile_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(MOBILE_PATTERN).expect("mobile pattern compiles"))
}

fn leading_number_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(LEADING_NUMBER_PATTERN).expect("number pattern compiles"))
}

/// 学生 ID（由后端分配，创建后不可变）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(pub i64);

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 后端返回的学生记录
///
/// 课程、方向和成绩按原样保存为文本，后端出现未知取值时不影响整批拉取。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub id: StudentId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub course: String,
    /// 最高学历
    #[serde(default, rename = "studentClass")]
    pub highest_education: String,
    #[serde(default, deserialize_with = "deserialize_percentage")]
    pub percentage: String,
    #[serde(default)]
    pub branch: String,
    #[serde(default)]
    pub mobile_number: String,
}

impl StudentRecord {
    /// 数值形式的成绩，无法解析时按 0 处理
    pub fn percentage_value(&self) -> f64 {
        parse_percentage(&self.percentage)
    }

    /// 成绩档次
    pub fn percentage_band(&self) -> PercentageBand {
        PercentageBand::classify(&self.percentage)
    }
}

/// 宽松解析成绩文本：取开头的数字部分，失败或非有限值返回 0
pub fn parse_percentage(raw: &str) -> f64 {
    leading_number_regex()
        .find(raw.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

// 成绩既可能是数字也可能是字符串
pub(crate) fn deserialize_percentage<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Visitor;

    struct PercentageVisitor;

    impl<'de> Visitor<'de> for PercentageVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a number or string representing a percentage")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(String::new())
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(String::new())
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            deserializer.deserialize_any(PercentageVisitor)
        }
    }

    deserializer.deserialize_any(PercentageVisitor)
}

/// 成绩档次（列表中的成绩徽标）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PercentageBand {
    Excellent,
    Good,
    Average,
    BelowAverage,
    Poor,
}

impl PercentageBand {
    pub fn classify(raw: &str) -> Self {
        let value = parse_percentage(raw);
        if value >= 90.0 {
            PercentageBand::Excellent
        } else if value >= 80.0 {
            PercentageBand::Good
        } else if value >= 70.0 {
            PercentageBand::Average
        } else if value >= 60.0 {
            PercentageBand::BelowAverage
        } else {
            PercentageBand::Poor
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PercentageBand::Excellent => "excellent",
            PercentageBand::Good => "good",
            PercentageBand::Average => "average",
            PercentageBand::BelowAverage => "below-average",
            PercentageBand::Poor => "poor",
        }
    }
}

/// 注册表单的原始输入（全部为文本）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentInput {
    pub name: String,
    pub email: String,
    pub course: String,
    #[serde(rename = "studentClass", alias = "highestEducation")]
    pub highest_education: String,
    #[serde(deserialize_with = "deserialize_percentage")]
    pub percentage: String,
    pub branch: String,
    pub mobile_number: String,
}

/// 通过校验、可以提交给后端的学生数据
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub course: Course,
    #[serde(rename = "studentClass")]
    pub highest_education: String,
    pub percentage: f64,
    pub branch: Branch,
    pub mobile_number: String,
}

impl StudentInput {
    /// 校验表单，返回所有不合法字段
    ///
    /// 校验失败时不应发起任何网络请求
    pub fn validate(&self) -> Result<NewStudent, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.name.trim().is_empty() {
            errors.add("name", "姓名不能为空");
        } else if self.name.chars().count() < 2 {
            errors.add("name", "姓名至少需要 2 个字符");
        }

        if self.email.trim().is_empty() {
            errors.add("email", "邮箱不能为空");
        } else if !email_regex().is_match(&self.email) {
            errors.add("email", "请输入有效的邮箱地址");
        }

        let course = if self.course.is_empty() {
            errors.add("course", "请选择课程");
            None
        } else {
            let course = Course::from_label(&self.course);
            if course.is_none() {
                errors.add("course", format!("未知课程: {}", self.course));
            }
            course
        };

        if self.highest_education.trim().is_empty() {
            errors.add("studentClass", "最高学历不能为空");
        }

        let percentage = if self.percentage.trim().is_empty() {
            errors.add("percentage", "成绩不能为空");
            None
        } else {
            match self.percentage.trim().parse::<f64>() {
                Ok(v) if !v.is_finite() => {
                    errors.add("percentage", "成绩必须是数字");
                    None
                }
                Ok(v) if !(0.0..=100.0).contains(&v) => {
                    errors.add("percentage", "成绩必须在 0 到 100 之间");
                    None
                }
                Ok(v) => Some(v),
                Err(_) => {
                    errors.add("percentage", "成绩必须是数字");
                    None
                }
            }
        };

        let branch = if self.branch.is_empty() {
            errors.add("branch", "请选择专业方向");
            None
        } else {
            let branch = Branch::from_label(&self.branch);
            if branch.is_none() {
                errors.add("branch", format!("未知专业方向: {}", self.branch));
            }
            branch
        };

        if self.mobile_number.is_empty() {
            errors.add("mobileNumber", "手机号不能为空");
        } else if !mobile_regex().is_match(&self.mobile_number) {
            errors.add("mobileNumber", "请输入 10 位数字的手机号");
        }

        match (course, percentage, branch) {
            (Some(course), Some(percentage), Some(branch)) if errors.is_empty() => Ok(NewStudent {
                name: self.name.trim().to_string(),
                email: self.email.clone(),
                course,
                highest_education: self.highest_education.trim().to_string(),
                percentage,
                branch,
                mobile_number: self.mobile_number.clone(),
            }),
            _ => Err(errors),
        }
    }
}

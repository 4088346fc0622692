use serde::{Deserialize, Serialize};

/// 课程枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Course {
    #[serde(rename = "Computer Science")]
    ComputerScience,
    #[serde(rename = "Information Technology")]
    InformationTechnology,
    #[serde(rename = "Electronics & Communication")]
    ElectronicsCommunication,
    #[serde(rename = "Mechanical Engineering")]
    MechanicalEngineering,
    #[serde(rename = "Civil Engineering")]
    CivilEngineering,
    #[serde(rename = "Electrical Engineering")]
    ElectricalEngineering,
    #[serde(rename = "Business Administration")]
    BusinessAdministration,
    #[serde(rename = "Data Science")]
    DataScience,
    #[serde(rename = "Artificial Intelligence")]
    ArtificialIntelligence,
    #[serde(rename = "Cybersecurity")]
    Cybersecurity,
}

impl Course {
    /// 表单下拉框中的全部课程（按显示顺序）
    pub const ALL: [Course; 10] = [
        Course::ComputerScience,
        Course::InformationTechnology,
        Course::ElectronicsCommunication,
        Course::MechanicalEngineering,
        Course::CivilEngineering,
        Course::ElectricalEngineering,
        Course::BusinessAdministration,
        Course::DataScience,
        Course::ArtificialIntelligence,
        Course::Cybersecurity,
    ];

    /// 获取标准名称
    pub fn label(self) -> &'static str {
        match self {
            Course::ComputerScience => "Computer Science",
            Course::InformationTechnology => "Information Technology",
            Course::ElectronicsCommunication => "Electronics & Communication",
            Course::MechanicalEngineering => "Mechanical Engineering",
            Course::CivilEngineering => "Civil Engineering",
            Course::ElectricalEngineering => "Electrical Engineering",
            Course::BusinessAdministration => "Business Administration",
            Course::DataScience => "Data Science",
            Course::ArtificialIntelligence => "Artificial Intelligence",
            Course::Cybersecurity => "Cybersecurity",
        }
    }

    /// 从标准名称解析（精确匹配）
    pub fn from_label(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == s)
    }
}

impl std::fmt::Display for Course {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 专业方向枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Branch {
    #[serde(rename = "Computer Science")]
    ComputerScience,
    #[serde(rename = "Information Technology")]
    InformationTechnology,
    #[serde(rename = "Electronics")]
    Electronics,
    #[serde(rename = "Mechanical")]
    Mechanical,
    #[serde(rename = "Civil")]
    Civil,
    #[serde(rename = "Electrical")]
    Electrical,
    #[serde(rename = "Business")]
    Business,
    #[serde(rename = "Data Analytics")]
    DataAnalytics,
    #[serde(rename = "AI/ML")]
    AiMl,
    #[serde(rename = "Network Security")]
    NetworkSecurity,
}

impl Branch {
    pub const ALL: [Branch; 10] = [
        Branch::ComputerScience,
        Branch::InformationTechnology,
        Branch::Electronics,
        Branch::Mechanical,
        Branch::Civil,
        Branch::Electrical,
        Branch::Business,
        Branch::DataAnalytics,
        Branch::AiMl,
        Branch::NetworkSecurity,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Branch::ComputerScience => "Computer Science",
            Branch::InformationTechnology => "Information Technology",
            Branch::Electronics => "Electronics",
            Branch::Mechanical => "Mechanical",
            Branch::Civil => "Civil",
            Branch::Electrical => "Electrical",
            Branch::Business => "Business",
            Branch::DataAnalytics => "Data Analytics",
            Branch::AiMl => "AI/ML",
            Branch::NetworkSecurity => "Network Security",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.label() == s)
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

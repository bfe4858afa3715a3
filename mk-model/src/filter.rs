//! Dashboard filter snapshots and option lists.

use crate::dates::format_date;
use crate::serde_util::null_default;
use chrono::NaiveDate;
use serde::ser::{SerializeTuple, Serializer};
use serde::{Deserialize, Serialize};

/// Inclusive date range, serialized as `["YYYY-MM-DD", "YYYY-MM-DD"]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Build a range, swapping the ends if they arrive reversed.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self { start: end, end: start }
        }
    }

    /// Parse two date-input values; `None` unless both are valid dates.
    pub fn parse(start: &str, end: &str) -> Option<Self> {
        let start = crate::dates::parse_date(start)?;
        let end = crate::dates::parse_date(end)?;
        Some(Self::new(start, end))
    }
}

impl Serialize for DateRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&format_date(&self.start))?;
        tuple.serialize_element(&format_date(&self.end))?;
        tuple.end()
    }
}

/// The complete set of dashboard filter criteria at one point in time.
///
/// Sent verbatim to the metrics endpoints; empty fields are left out so the
/// empty snapshot is `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterSnapshot {
    #[serde(rename = "timeRange", skip_serializing_if = "Option::is_none")]
    pub time_range: Option<DateRange>,
    #[serde(rename = "fdDeptList", skip_serializing_if = "Vec::is_empty")]
    pub departments: Vec<String>,
    #[serde(rename = "fdTypeList", skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,
    #[serde(rename = "fdName", skip_serializing_if = "Vec::is_empty")]
    pub courses: Vec<String>,
}

impl FilterSnapshot {
    pub fn is_empty(&self) -> bool {
        self.time_range.is_none()
            && self.departments.is_empty()
            && self.types.is_empty()
            && self.courses.is_empty()
    }

    /// Short human-readable description of what is selected.
    pub fn summary(&self) -> Vec<String> {
        let mut parts = Vec::new();
        if !self.departments.is_empty() {
            parts.push(format!("Departments: {}", self.departments.len()));
        }
        if !self.types.is_empty() {
            parts.push(format!("Types: {}", self.types.len()));
        }
        if !self.courses.is_empty() {
            parts.push(format!("Courses: {}", self.courses.len()));
        }
        if self.time_range.is_some() {
            parts.push("Time range set".to_string());
        }
        parts
    }
}

/// One entry of a select list (department, course, certificate type).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionItem {
    #[serde(default, deserialize_with = "null_default")]
    pub value: String,
    #[serde(default, deserialize_with = "null_default")]
    pub label: String,
    #[serde(alias = "deptId", alias = "typeId", default, deserialize_with = "null_default")]
    pub id: String,
}

impl OptionItem {
    /// An option whose id and value are the same backend key.
    pub fn keyed(key: &str, label: &str) -> Self {
        Self {
            value: key.to_string(),
            label: label.to_string(),
            id: key.to_string(),
        }
    }

    /// The key a selection stores: the id, or the value when there is none.
    pub fn key(&self) -> &str {
        if self.id.is_empty() {
            &self.value
        } else {
            &self.id
        }
    }

    /// Case-insensitive substring match over label, id and value.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.label.to_lowercase().contains(&query)
            || self.id.to_lowercase().contains(&query)
            || self.value.to_lowercase().contains(&query)
    }
}

/// Options matching the search text, in their original order.
pub fn filter_options<'a>(options: &'a [OptionItem], query: &str) -> Vec<&'a OptionItem> {
    options.iter().filter(|o| o.matches(query)).collect()
}

/// Certificate types offered by the training-order filter.
///
/// The keys are the backend's type names and are sent verbatim.
pub fn certificate_types() -> Vec<OptionItem> {
    [
        ("高压电工", "High-voltage electrician"),
        ("低压电工", "Low-voltage electrician"),
        ("防爆电工", "Explosion-proof electrician"),
        ("熔化焊接与热切割作业", "Fusion welding and thermal cutting"),
        ("压力焊作业", "Pressure welding"),
        ("钎焊作业", "Brazing"),
        ("登高架设作业", "Scaffold erection"),
        ("高处安装、维护、拆除作业", "Installation and maintenance at height"),
        ("制冷与空调设备运行操作作业", "Refrigeration and HVAC operation"),
        ("安装修理作业", "Installation and repair"),
        ("特种设备安全管理A", "Special equipment safety management A"),
        ("快开门式压力容器操作R1", "Quick-opening pressure vessel R1"),
        ("移动式压力容器充装R2", "Mobile pressure vessel filling R2"),
        ("机械式停车设备操作Q2", "Mechanical parking equipment Q2"),
        ("起重机指挥Q1", "Crane signaller Q1"),
        ("起重机司机Q2", "Crane operator Q2"),
        ("叉车司机N1", "Forklift driver N1"),
        ("工业锅炉司炉G1", "Industrial boiler operator G1"),
        ("消防中级操作员证", "Fire safety operator (intermediate)"),
        ("有限空间地下监护人员作业", "Confined space attendant"),
    ]
    .iter()
    .map(|(key, label)| OptionItem::keyed(key, label))
    .collect()
}

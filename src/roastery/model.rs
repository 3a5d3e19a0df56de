use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind} '{input}' (expected one of: {expected})")]
pub struct ParseCodeError {
    kind: &'static str,
    input: String,
    expected: &'static str,
}

/// How dark the beans are roasted. Stored as 1..=3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "i64")]
pub enum RoastDegree {
    #[default]
    Light,
    Medium,
    Strong,
}

impl RoastDegree {
    pub const ALL: [RoastDegree; 3] = [RoastDegree::Light, RoastDegree::Medium, RoastDegree::Strong];

    pub fn code(self) -> i64 {
        match self {
            RoastDegree::Light => 1,
            RoastDegree::Medium => 2,
            RoastDegree::Strong => 3,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(RoastDegree::Light),
            2 => Some(RoastDegree::Medium),
            3 => Some(RoastDegree::Strong),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RoastDegree::Light => "Light",
            RoastDegree::Medium => "Medium",
            RoastDegree::Strong => "Strong",
        }
    }
}

/// Whether the product is sold ground or as whole beans. Stored as 0..=1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "i64")]
pub enum GrindForm {
    #[default]
    Ground,
    WholeBean,
}

impl GrindForm {
    pub const ALL: [GrindForm; 2] = [GrindForm::Ground, GrindForm::WholeBean];

    pub fn code(self) -> i64 {
        match self {
            GrindForm::Ground => 0,
            GrindForm::WholeBean => 1,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(GrindForm::Ground),
            1 => Some(GrindForm::WholeBean),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GrindForm::Ground => "Ground",
            GrindForm::WholeBean => "Whole Bean",
        }
    }
}

// Conversions shared by both enumerations: serde, SQL and text.
macro_rules! coded_enum {
    ($ty:ident, $kind:literal, $expected:literal, [$($alias:literal => $variant:ident),* $(,)?]) => {
        impl From<$ty> for i64 {
            fn from(value: $ty) -> i64 {
                value.code()
            }
        }

        impl TryFrom<i64> for $ty {
            type Error = String;

            fn try_from(code: i64) -> Result<Self, Self::Error> {
                $ty::from_code(code).ok_or_else(|| format!("invalid {} code {}", $kind, code))
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $ty {
            type Err = ParseCodeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let needle = s.trim().to_lowercase();
                if let Some(found) = needle.parse::<i64>().ok().and_then($ty::from_code) {
                    return Ok(found);
                }
                let by_label = $ty::ALL
                    .into_iter()
                    .find(|v| v.label().to_lowercase() == needle);
                if let Some(found) = by_label {
                    return Ok(found);
                }
                match needle.as_str() {
                    $($alias => Ok($ty::$variant),)*
                    _ => Err(ParseCodeError {
                        kind: $kind,
                        input: s.to_string(),
                        expected: $expected,
                    }),
                }
            }
        }

        impl ToSql for $ty {
            fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
                Ok(ToSqlOutput::from(self.code()))
            }
        }

        impl FromSql for $ty {
            fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
                let code = i64::column_result(value)?;
                $ty::from_code(code).ok_or(FromSqlError::OutOfRange(code))
            }
        }
    };
}

coded_enum!(RoastDegree, "roast degree", "1/light, 2/medium, 3/strong", []);
coded_enum!(
    GrindForm,
    "grind form",
    "0/ground, 1/whole-bean",
    ["whole-bean" => WholeBean, "wholebean" => WholeBean, "bean" => WholeBean, "beans" => WholeBean]
);

/// A product as the form produces it, before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoffeeDraft {
    pub variety: String,
    pub roast_degree: RoastDegree,
    pub ground_or_bean: GrindForm,
    pub taste_description: String,
    pub price: i64,
    pub package_volume: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoffeeRecord {
    pub id: i64,
    pub variety: String,
    pub roast_degree: RoastDegree,
    pub ground_or_bean: GrindForm,
    pub taste_description: String,
    pub price: i64,
    pub package_volume: i64,
}

impl CoffeeRecord {
    pub fn from_draft(id: i64, draft: CoffeeDraft) -> Self {
        Self {
            id,
            variety: draft.variety,
            roast_degree: draft.roast_degree,
            ground_or_bean: draft.ground_or_bean,
            taste_description: draft.taste_description,
            price: draft.price,
            package_volume: draft.package_volume,
        }
    }

    pub fn to_draft(&self) -> CoffeeDraft {
        CoffeeDraft {
            variety: self.variety.clone(),
            roast_degree: self.roast_degree,
            ground_or_bean: self.ground_or_bean,
            taste_description: self.taste_description.clone(),
            price: self.price,
            package_volume: self.package_volume,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roast_codes_map_to_labels() {
        let labels: Vec<_> = (1..=3)
            .map(|c| RoastDegree::from_code(c).unwrap().label())
            .collect();
        assert_eq!(labels, ["Light", "Medium", "Strong"]);
        assert_eq!(RoastDegree::from_code(0), None);
        assert_eq!(RoastDegree::from_code(4), None);
    }

    #[test]
    fn grind_codes_map_to_labels() {
        assert_eq!(GrindForm::from_code(0).unwrap().label(), "Ground");
        assert_eq!(GrindForm::from_code(1).unwrap().label(), "Whole Bean");
        assert_eq!(GrindForm::from_code(2), None);
    }

    #[test]
    fn parses_codes_and_labels() {
        assert_eq!("2".parse::<RoastDegree>().unwrap(), RoastDegree::Medium);
        assert_eq!("STRONG".parse::<RoastDegree>().unwrap(), RoastDegree::Strong);
        assert_eq!("whole bean".parse::<GrindForm>().unwrap(), GrindForm::WholeBean);
        assert_eq!("bean".parse::<GrindForm>().unwrap(), GrindForm::WholeBean);
        assert_eq!("0".parse::<GrindForm>().unwrap(), GrindForm::Ground);
        assert!("dark".parse::<RoastDegree>().is_err());
        assert!("2".parse::<GrindForm>().is_err());
    }

    #[test]
    fn serializes_codes_not_labels() {
        let record = CoffeeRecord {
            id: 7,
            variety: "Kenya AA".into(),
            roast_degree: RoastDegree::Medium,
            ground_or_bean: GrindForm::WholeBean,
            taste_description: "Bright, citrus".into(),
            price: 450,
            package_volume: 250,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["roast_degree"], 2);
        assert_eq!(json["ground_or_bean"], 1);

        let bad = r#"{"id":1,"variety":"x","roast_degree":9,"ground_or_bean":0,
            "taste_description":"y","price":0,"package_volume":1}"#;
        assert!(serde_json::from_str::<CoffeeRecord>(bad).is_err());
    }
}

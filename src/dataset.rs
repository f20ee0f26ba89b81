// Brand dataset: the curated records the whole pipeline runs on.
//
// Each record is a brand name plus up to three hand-picked mood tags in
// priority order. The built-in catalog covers 20 Korean fashion brands;
// an external JSON file with the same shape can be analyzed instead via
// `--data`.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// One brand and its curated mood tags, strongest first.
///
/// `main_mood` is always set; the sub moods may be empty strings when the
/// curator assigned fewer than three tags. Tags are free-form labels, not
/// an enum, so new moods only require a palette entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandRecord {
    pub name: String,
    pub main_mood: String,
    #[serde(default)]
    pub sub_mood_1: String,
    #[serde(default)]
    pub sub_mood_2: String,
}

impl BrandRecord {
    /// The mood fields in assignment order (main, first sub, second sub).
    /// Empty slots come back as empty strings.
    pub fn moods(&self) -> [&str; 3] {
        [&self.main_mood, &self.sub_mood_1, &self.sub_mood_2]
    }
}

/// The built-in brand catalog: (name, main mood, sub mood 1, sub mood 2).
const BUILTIN_BRANDS: &[(&str, &str, &str, &str)] = &[
    ("라무스튜디오", "클래식", "캐주얼", ""),
    ("니즈르", "걸리시", "캐주얼", "로맨틱"),
    ("올리브 데 올리브", "클래식", "로맨틱", "미니멀"),
    ("아틀리에 나인", "미니멀", "클래식", "로맨틱"),
    ("프리터", "캐주얼", "걸리시", "스트릿"),
    ("플라스크", "시크", "캐주얼", "미니멀"),
    ("준준스페이스", "걸리시", "캐주얼", "로맨틱"),
    ("던드롬", "로맨틱", "걸리시", ""),
    ("페이탈고스트", "스트릿", "캐주얼", ""),
    ("제뉴즈", "캐주얼", "걸리시", "워크웨어"),
    ("비나이스", "캐주얼", "", ""),
    ("논플로어", "캐주얼", "스트릿", ""),
    ("타일레", "미니멀", "시크", "캐주얼"),
    ("아이언스탠드", "시크", "캐주얼", ""),
    ("론트", "클래식", "미니멀", "캐주얼"),
    ("롤링스튜디오", "캐주얼", "미니멀", "클래식"),
    ("스토리요가", "스포티", "에스닉", ""),
    ("발리안트", "스포티", "캐주얼", "스트릿"),
    ("디터민드", "스포티", "캐주얼", ""),
    ("테일러메이드 어패럴", "스포티", "클래식", ""),
];

/// An immutable, validated collection of brand records.
///
/// Record order is load-bearing downstream: vector rows, matrix indices,
/// and graph node ids all follow it. Construction validates once so the
/// pipeline never has to.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<BrandRecord>,
}

impl Dataset {
    /// The built-in 20-brand catalog. External input goes through
    /// `from_records`; the catalog itself is covered by tests.
    pub fn builtin() -> Self {
        let records = BUILTIN_BRANDS
            .iter()
            .map(|&(name, main, sub1, sub2)| BrandRecord {
                name: name.to_string(),
                main_mood: main.to_string(),
                sub_mood_1: sub1.to_string(),
                sub_mood_2: sub2.to_string(),
            })
            .collect();
        Self { records }
    }

    /// Load records from a JSON array of objects with the `BrandRecord` shape.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read brand data from {}", path.display()))?;
        let records: Vec<BrandRecord> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse brand data in {}", path.display()))?;
        Self::from_records(records)
    }

    /// Validate and wrap a set of records. An empty set is allowed (the
    /// pipeline produces an empty network); blank or duplicate brand names
    /// are not, since names double as node labels and report keys.
    pub fn from_records(records: Vec<BrandRecord>) -> Result<Self> {
        let mut seen = HashSet::new();
        for record in &records {
            if record.name.trim().is_empty() {
                bail!("Brand record with an empty name");
            }
            if record.main_mood.trim().is_empty() {
                bail!("Brand '{}' has no main mood", record.name);
            }
            if !seen.insert(record.name.as_str()) {
                bail!("Duplicate brand name: '{}'", record.name);
            }
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[BrandRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Brand names in record order (the shared index space).
    pub fn names(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.name.as_str()).collect()
    }
}

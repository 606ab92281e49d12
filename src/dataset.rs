use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

/// One row of the primary index table: a firm's digitalization score for
/// a single year, plus the term-frequency counters the score was built from.
///
/// `stock_code` is NOT unique on its own - the composite key is
/// (stock_code, year). Uniqueness of that key is enforced at load time.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct IndexRecord {
    #[serde(rename = "Stock_Code")]
    pub stock_code: String,

    #[serde(rename = "Firm_Name")]
    pub firm_name: String,

    #[serde(rename = "Year")]
    pub year: i32,

    /// Pre-computed score, observed range 0-100. Treated as opaque data:
    /// not recomputed, not range-checked.
    #[serde(rename = "Digitalization_Index")]
    pub digitalization_index: f64,

    #[serde(rename = "AI_Terms")]
    pub ai_terms: u32,

    #[serde(rename = "Big_Data_Terms")]
    pub big_data_terms: u32,

    #[serde(rename = "Cloud_Computing_Terms")]
    pub cloud_terms: u32,

    #[serde(rename = "Blockchain_Terms")]
    pub blockchain_terms: u32,

    #[serde(rename = "Digital_Usage_Terms")]
    pub digital_usage_terms: u32,
}

impl IndexRecord {
    /// Composite key that identifies this record within the dataset.
    pub fn key(&self) -> (&str, i32) {
        (&self.stock_code, self.year)
    }
}

/// One row of the supplementary keyword-statistics table. Same keying
/// convention as the primary table, displayed verbatim, never joined.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct KeywordRecord {
    #[serde(rename = "Stock_Code")]
    pub stock_code: String,

    #[serde(rename = "Firm_Name")]
    pub firm_name: String,

    #[serde(rename = "Year")]
    pub year: i32,

    #[serde(rename = "AI_Terms")]
    pub ai_terms: u32,

    #[serde(rename = "Big_Data_Terms")]
    pub big_data_terms: u32,

    #[serde(rename = "Cloud_Computing_Terms")]
    pub cloud_terms: u32,

    #[serde(rename = "Blockchain_Terms")]
    pub blockchain_terms: u32,

    #[serde(rename = "Digital_Usage_Terms")]
    pub digital_usage_terms: u32,

    #[serde(rename = "Total_Terms")]
    pub total_terms: u32,
}

// ============================================================================
// LOAD ERRORS
// ============================================================================

/// Why the dataset could not be loaded. All variants are fatal to the
/// session: the binaries print the error and exit instead of starting
/// an interaction loop over missing data.
#[derive(Debug)]
pub enum LoadError {
    /// A backing table file is absent at startup.
    DataUnavailable { path: PathBuf },
    /// A row in a backing table failed to parse.
    Malformed { path: PathBuf, source: csv::Error },
    /// Two primary rows share the same (stock_code, year) key.
    DuplicateKey { stock_code: String, year: i32 },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::DataUnavailable { path } => {
                write!(f, "data file not found: {}", path.display())
            }
            LoadError::Malformed { path, source } => {
                write!(f, "malformed data in {}: {}", path.display(), source)
            }
            LoadError::DuplicateKey { stock_code, year } => {
                write!(
                    f,
                    "duplicate record for stock code {} in year {}",
                    stock_code, year
                )
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Malformed { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ============================================================================
// TABLE SELECTION
// ============================================================================

/// Which of the two raw tables to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    DigitalIndex,
    TechKeywords,
}

impl TableKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "digital-index" => Some(TableKind::DigitalIndex),
            "tech-keywords" => Some(TableKind::TechKeywords),
            _ => None,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            TableKind::DigitalIndex => "digital-index",
            TableKind::TechKeywords => "tech-keywords",
        }
    }

    pub fn title(&self) -> &str {
        match self {
            TableKind::DigitalIndex => "Digitalization Index Results",
            TableKind::TechKeywords => "Annual Report Tech Keyword Stats",
        }
    }

    pub fn other(&self) -> Self {
        match self {
            TableKind::DigitalIndex => TableKind::TechKeywords,
            TableKind::TechKeywords => TableKind::DigitalIndex,
        }
    }
}

// ============================================================================
// DATASET
// ============================================================================

/// Immutable in-memory holder of both tables. Built once at process start,
/// then only read - there is no write path, so it can be shared freely
/// (plain reference in the TUI, Arc in the server) without locking.
#[derive(Debug)]
pub struct Dataset {
    index: Vec<IndexRecord>,
    keywords: Vec<KeywordRecord>,
    loaded_at: DateTime<Utc>,
    index_source: Option<PathBuf>,
    keywords_source: Option<PathBuf>,
}

impl Dataset {
    /// Load both tables from CSV files. Fails with `DataUnavailable` when
    /// either file is missing, `Malformed` on a bad row, `DuplicateKey`
    /// when the primary table violates the composite-key invariant.
    pub fn load(index_path: &Path, keywords_path: &Path) -> Result<Self, LoadError> {
        let index = read_table::<IndexRecord>(index_path)?;
        let keywords = read_table::<KeywordRecord>(keywords_path)?;

        let mut dataset = Self::from_records(index, keywords)?;
        dataset.index_source = Some(index_path.to_path_buf());
        dataset.keywords_source = Some(keywords_path.to_path_buf());
        Ok(dataset)
    }

    /// Build a dataset from already-materialized rows. Used by tests and
    /// embedders; runs the same duplicate-key validation as `load`.
    pub fn from_records(
        index: Vec<IndexRecord>,
        keywords: Vec<KeywordRecord>,
    ) -> Result<Self, LoadError> {
        {
            let mut seen: HashSet<(&str, i32)> = HashSet::new();
            for record in &index {
                if !seen.insert(record.key()) {
                    return Err(LoadError::DuplicateKey {
                        stock_code: record.stock_code.clone(),
                        year: record.year,
                    });
                }
            }
        }

        Ok(Self {
            index,
            keywords,
            loaded_at: Utc::now(),
            index_source: None,
            keywords_source: None,
        })
    }

    pub fn index_records(&self) -> &[IndexRecord] {
        &self.index
    }

    pub fn keyword_records(&self) -> &[KeywordRecord] {
        &self.keywords
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn index_source(&self) -> Option<&Path> {
        self.index_source.as_deref()
    }

    pub fn keywords_source(&self) -> Option<&Path> {
        self.keywords_source.as_deref()
    }

    /// Row count of the selected table, for display purposes.
    pub fn row_count(&self, kind: TableKind) -> usize {
        match kind {
            TableKind::DigitalIndex => self.index.len(),
            TableKind::TechKeywords => self.keywords.len(),
        }
    }
}

fn read_table<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>, LoadError> {
    if !path.exists() {
        return Err(LoadError::DataUnavailable {
            path: path.to_path_buf(),
        });
    }

    let mut rdr = csv::Reader::from_path(path).map_err(|source| LoadError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;

    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let row: T = result.map_err(|source| LoadError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;
        rows.push(row);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_row(code: &str, year: i32, index: f64) -> IndexRecord {
        IndexRecord {
            stock_code: code.to_string(),
            firm_name: "Test Firm".to_string(),
            year,
            digitalization_index: index,
            ai_terms: 1,
            big_data_terms: 2,
            cloud_terms: 3,
            blockchain_terms: 4,
            digital_usage_terms: 5,
        }
    }

    #[test]
    fn test_from_records_accepts_unique_keys() {
        let dataset = Dataset::from_records(
            vec![
                index_row("000921", 2020, 55.5),
                index_row("000921", 2021, 60.0),
                index_row("600519", 2020, 12.3),
            ],
            vec![],
        )
        .unwrap();

        assert_eq!(dataset.index_records().len(), 3);
        assert_eq!(dataset.row_count(TableKind::DigitalIndex), 3);
        assert_eq!(dataset.row_count(TableKind::TechKeywords), 0);
    }

    #[test]
    fn test_from_records_rejects_duplicate_key() {
        let result = Dataset::from_records(
            vec![index_row("000921", 2020, 55.5), index_row("000921", 2020, 60.0)],
            vec![],
        );

        match result {
            Err(LoadError::DuplicateKey { stock_code, year }) => {
                assert_eq!(stock_code, "000921");
                assert_eq!(year, 2020);
            }
            other => panic!("Expected DuplicateKey error, got {:?}", other),
        }
    }

    #[test]
    fn test_same_code_different_years_is_not_duplicate() {
        let result = Dataset::from_records(
            vec![index_row("000921", 2020, 55.5), index_row("000921", 2021, 60.0)],
            vec![],
        );

        assert!(result.is_ok(), "Same code across years must be accepted");
    }

    #[test]
    fn test_load_missing_file_is_data_unavailable() {
        let missing = Path::new("no/such/dir/digital_index.csv");
        let result = Dataset::load(missing, Path::new("no/such/dir/tech_keywords.csv"));

        match result {
            Err(LoadError::DataUnavailable { path }) => {
                assert_eq!(path, missing.to_path_buf());
            }
            other => panic!("Expected DataUnavailable error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_sample_data() {
        let dataset = Dataset::load(
            Path::new("data/digital_index.csv"),
            Path::new("data/tech_keywords.csv"),
        )
        .unwrap();

        assert!(!dataset.index_records().is_empty());
        assert_eq!(
            dataset.index_records().len(),
            dataset.keyword_records().len()
        );
        assert_eq!(
            dataset.index_source(),
            Some(Path::new("data/digital_index.csv"))
        );

        let first = &dataset.index_records()[0];
        assert_eq!(first.stock_code, "000921");
        assert_eq!(first.year, 2020);
        assert_eq!(first.digitalization_index, 55.5);
    }

    #[test]
    fn test_table_kind_round_trip() {
        for kind in [TableKind::DigitalIndex, TableKind::TechKeywords] {
            assert_eq!(TableKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(TableKind::from_name("bogus"), None);
        assert_eq!(TableKind::DigitalIndex.other(), TableKind::TechKeywords);
        assert_eq!(TableKind::TechKeywords.other(), TableKind::DigitalIndex);
    }
}

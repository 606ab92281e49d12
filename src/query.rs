// Record Query Service
// Pure reads over the immutable dataset: lookup, summary, year menu.

use crate::dataset::{Dataset, IndexRecord};
use serde::Serialize;
use std::collections::BTreeSet;

/// Outcome of a single (stock_code, year) lookup.
///
/// `MissingCode` is distinct from `NotFound`: an empty or whitespace-only
/// code is rejected before the dataset is scanned at all.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Found(IndexRecord),
    NotFound,
    MissingCode,
}

impl LookupOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, LookupOutcome::Found(_))
    }
}

/// Whole-dataset statistics for the overview lines.
/// Year bounds are `None` only for an empty primary table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
    pub firm_count: usize,
}

impl DatasetSummary {
    /// "1999-2023" style label for display, or "n/a" when empty.
    pub fn year_range(&self) -> String {
        match (self.min_year, self.max_year) {
            (Some(min), Some(max)) => format!("{}-{}", min, max),
            _ => "n/a".to_string(),
        }
    }
}

/// Read-only query interface over a loaded dataset. Holds a borrow, not
/// a copy: the dataset never changes after load, so every operation is a
/// synchronous scan with no locking.
pub struct QueryService<'a> {
    dataset: &'a Dataset,
}

impl<'a> QueryService<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    /// Exact-match lookup on the composite key. Case-sensitive, no code
    /// normalization. At most one record can match because the load path
    /// rejects duplicate keys.
    pub fn lookup(&self, stock_code: &str, year: i32) -> LookupOutcome {
        if stock_code.trim().is_empty() {
            return LookupOutcome::MissingCode;
        }

        match self
            .dataset
            .index_records()
            .iter()
            .find(|r| r.stock_code == stock_code && r.year == year)
        {
            Some(record) => LookupOutcome::Found(record.clone()),
            None => LookupOutcome::NotFound,
        }
    }

    /// Year range and distinct firm count over the whole primary table.
    pub fn summarize(&self) -> DatasetSummary {
        let records = self.dataset.index_records();

        DatasetSummary {
            min_year: records.iter().map(|r| r.year).min(),
            max_year: records.iter().map(|r| r.year).max(),
            firm_count: self.stock_codes().len(),
        }
    }

    /// Distinct years present in the primary table, ascending. Drives the
    /// closed year menu: queries only ever use one of these values.
    pub fn years(&self) -> Vec<i32> {
        let years: BTreeSet<i32> = self
            .dataset
            .index_records()
            .iter()
            .map(|r| r.year)
            .collect();
        years.into_iter().collect()
    }

    /// Distinct stock codes, sorted ascending.
    pub fn stock_codes(&self) -> Vec<String> {
        let codes: BTreeSet<&str> = self
            .dataset
            .index_records()
            .iter()
            .map(|r| r.stock_code.as_str())
            .collect();
        codes.into_iter().map(|c| c.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_row(code: &str, name: &str, year: i32, index: f64, terms: [u32; 5]) -> IndexRecord {
        IndexRecord {
            stock_code: code.to_string(),
            firm_name: name.to_string(),
            year,
            digitalization_index: index,
            ai_terms: terms[0],
            big_data_terms: terms[1],
            cloud_terms: terms[2],
            blockchain_terms: terms[3],
            digital_usage_terms: terms[4],
        }
    }

    /// The worked example: one firm, two years.
    fn acme_dataset() -> Dataset {
        Dataset::from_records(
            vec![
                index_row("000921", "ACME", 2020, 55.5, [1, 2, 3, 4, 5]),
                index_row("000921", "ACME", 2021, 60.0, [2, 2, 3, 4, 6]),
            ],
            vec![],
        )
        .unwrap()
    }

    #[test]
    fn test_lookup_hit_returns_exact_record() {
        let dataset = acme_dataset();
        let service = QueryService::new(&dataset);

        match service.lookup("000921", 2020) {
            LookupOutcome::Found(record) => {
                assert_eq!(record.stock_code, "000921");
                assert_eq!(record.firm_name, "ACME");
                assert_eq!(record.year, 2020);
                assert_eq!(record.digitalization_index, 55.5);
                assert_eq!(record.ai_terms, 1);
                assert_eq!(record.digital_usage_terms, 5);
            }
            other => panic!("Expected Found, got {:?}", other),
        }
    }

    #[test]
    fn test_lookup_miss_is_not_found() {
        let dataset = acme_dataset();
        let service = QueryService::new(&dataset);

        assert_eq!(service.lookup("000921", 2022), LookupOutcome::NotFound);
        assert_eq!(service.lookup("999999", 2020), LookupOutcome::NotFound);
    }

    #[test]
    fn test_lookup_is_case_sensitive_exact_match() {
        let dataset = Dataset::from_records(
            vec![index_row("ABC123", "Mixed Case Co", 2020, 10.0, [0, 0, 0, 0, 0])],
            vec![],
        )
        .unwrap();
        let service = QueryService::new(&dataset);

        assert!(service.lookup("ABC123", 2020).is_found());
        assert_eq!(service.lookup("abc123", 2020), LookupOutcome::NotFound);
        assert_eq!(service.lookup("ABC12", 2020), LookupOutcome::NotFound);
    }

    #[test]
    fn test_empty_code_is_missing_input_never_scans() {
        let dataset = acme_dataset();
        let service = QueryService::new(&dataset);

        assert_eq!(service.lookup("", 2020), LookupOutcome::MissingCode);
        assert_eq!(service.lookup("   ", 2020), LookupOutcome::MissingCode);
        assert_eq!(service.lookup("\t", 2021), LookupOutcome::MissingCode);
        // Rejected regardless of year validity
        assert_eq!(service.lookup("", 1800), LookupOutcome::MissingCode);
    }

    #[test]
    fn test_years_ascending_deduplicated() {
        let dataset = Dataset::from_records(
            vec![
                index_row("B", "Firm B", 2021, 1.0, [0; 5]),
                index_row("A", "Firm A", 2019, 2.0, [0; 5]),
                index_row("A", "Firm A", 2021, 3.0, [0; 5]),
                index_row("C", "Firm C", 2020, 4.0, [0; 5]),
            ],
            vec![],
        )
        .unwrap();
        let service = QueryService::new(&dataset);

        assert_eq!(service.years(), vec![2019, 2020, 2021]);
    }

    #[test]
    fn test_summary_agrees_with_year_menu() {
        let dataset = acme_dataset();
        let service = QueryService::new(&dataset);

        let years = service.years();
        let summary = service.summarize();

        assert_eq!(summary.min_year, years.first().copied());
        assert_eq!(summary.max_year, years.last().copied());
        assert_eq!(summary.firm_count, 1);
        assert_eq!(summary.year_range(), "2020-2021");
    }

    #[test]
    fn test_summary_counts_distinct_codes() {
        let dataset = Dataset::from_records(
            vec![
                index_row("000921", "ACME", 2020, 1.0, [0; 5]),
                index_row("000921", "ACME", 2021, 2.0, [0; 5]),
                index_row("600519", "Baijiu Inc", 2020, 3.0, [0; 5]),
            ],
            vec![],
        )
        .unwrap();
        let service = QueryService::new(&dataset);

        assert_eq!(service.summarize().firm_count, 2);
        assert_eq!(service.stock_codes(), vec!["000921", "600519"]);
    }

    #[test]
    fn test_empty_dataset_summary() {
        let dataset = Dataset::from_records(vec![], vec![]).unwrap();
        let service = QueryService::new(&dataset);

        let summary = service.summarize();
        assert_eq!(summary.min_year, None);
        assert_eq!(summary.max_year, None);
        assert_eq!(summary.firm_count, 0);
        assert_eq!(summary.year_range(), "n/a");
        assert!(service.years().is_empty());
    }

    #[test]
    fn test_worked_example_end_to_end() {
        let dataset = acme_dataset();
        let service = QueryService::new(&dataset);

        match service.lookup("000921", 2020) {
            LookupOutcome::Found(record) => assert_eq!(record.digitalization_index, 55.5),
            other => panic!("Expected Found, got {:?}", other),
        }
        assert_eq!(service.lookup("000921", 2022), LookupOutcome::NotFound);
        assert_eq!(service.years(), vec![2020, 2021]);

        let summary = service.summarize();
        assert_eq!(summary.min_year, Some(2020));
        assert_eq!(summary.max_year, Some(2021));
        assert_eq!(summary.firm_count, 1);
    }
}

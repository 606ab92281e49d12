// Index distribution by year
// Groups digitalization_index values by year and derives the five-number
// summary per group, which is what the box-plot style views render.

use crate::dataset::Dataset;
use serde::Serialize;
use std::collections::BTreeMap;

/// Five-number summary of one year's index values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearDistribution {
    pub year: i32,
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Group digitalization_index values by year, ascending year order.
/// Values within a group keep dataset order; callers that need order
/// sort themselves (the summary path does).
pub fn index_by_year(dataset: &Dataset) -> Vec<(i32, Vec<f64>)> {
    let mut groups: BTreeMap<i32, Vec<f64>> = BTreeMap::new();

    for record in dataset.index_records() {
        groups
            .entry(record.year)
            .or_default()
            .push(record.digitalization_index);
    }

    groups.into_iter().collect()
}

/// Per-year five-number summaries, ascending year order. Years are never
/// empty groups: a year only appears because at least one record has it.
pub fn year_distributions(dataset: &Dataset) -> Vec<YearDistribution> {
    index_by_year(dataset)
        .into_iter()
        .map(|(year, mut values)| {
            values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

            YearDistribution {
                year,
                count: values.len(),
                min: values[0],
                q1: quantile(&values, 0.25),
                median: quantile(&values, 0.5),
                q3: quantile(&values, 0.75),
                max: values[values.len() - 1],
            }
        })
        .collect()
}

/// Quantile over a sorted, non-empty slice with linear interpolation
/// between the two nearest ranks.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let rank = q * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;

    if lo == hi {
        sorted[lo]
    } else {
        let frac = rank - lo as f64;
        sorted[lo] + (sorted[hi] - sorted[lo]) * frac
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::IndexRecord;

    fn index_row(code: &str, year: i32, index: f64) -> IndexRecord {
        IndexRecord {
            stock_code: code.to_string(),
            firm_name: "Test Firm".to_string(),
            year,
            digitalization_index: index,
            ai_terms: 0,
            big_data_terms: 0,
            cloud_terms: 0,
            blockchain_terms: 0,
            digital_usage_terms: 0,
        }
    }

    #[test]
    fn test_grouping_is_by_year_ascending() {
        let dataset = Dataset::from_records(
            vec![
                index_row("A", 2021, 10.0),
                index_row("B", 2019, 20.0),
                index_row("C", 2021, 30.0),
                index_row("D", 2020, 40.0),
            ],
            vec![],
        )
        .unwrap();

        let groups = index_by_year(&dataset);
        let years: Vec<i32> = groups.iter().map(|(y, _)| *y).collect();

        assert_eq!(years, vec![2019, 2020, 2021]);
        assert_eq!(groups[0].1, vec![20.0]);
        assert_eq!(groups[1].1, vec![40.0]);
        assert_eq!(groups[2].1, vec![10.0, 30.0]);
    }

    #[test]
    fn test_single_value_year() {
        let dataset =
            Dataset::from_records(vec![index_row("A", 2020, 42.0)], vec![]).unwrap();

        let dist = year_distributions(&dataset);
        assert_eq!(dist.len(), 1);

        let d = &dist[0];
        assert_eq!(d.count, 1);
        assert_eq!(d.min, 42.0);
        assert_eq!(d.q1, 42.0);
        assert_eq!(d.median, 42.0);
        assert_eq!(d.q3, 42.0);
        assert_eq!(d.max, 42.0);
    }

    #[test]
    fn test_two_value_year_interpolates() {
        let dataset = Dataset::from_records(
            vec![index_row("A", 2020, 10.0), index_row("B", 2020, 20.0)],
            vec![],
        )
        .unwrap();

        let d = &year_distributions(&dataset)[0];
        assert_eq!(d.min, 10.0);
        assert_eq!(d.q1, 12.5);
        assert_eq!(d.median, 15.0);
        assert_eq!(d.q3, 17.5);
        assert_eq!(d.max, 20.0);
    }

    #[test]
    fn test_odd_count_median_is_middle_value() {
        let dataset = Dataset::from_records(
            vec![
                index_row("A", 2020, 30.0),
                index_row("B", 2020, 10.0),
                index_row("C", 2020, 20.0),
            ],
            vec![],
        )
        .unwrap();

        let d = &year_distributions(&dataset)[0];
        assert_eq!(d.median, 20.0);
        assert_eq!(d.q1, 15.0);
        assert_eq!(d.q3, 25.0);
    }

    #[test]
    fn test_five_value_year() {
        let dataset = Dataset::from_records(
            vec![
                index_row("A", 2020, 1.0),
                index_row("B", 2020, 2.0),
                index_row("C", 2020, 3.0),
                index_row("D", 2020, 4.0),
                index_row("E", 2020, 5.0),
            ],
            vec![],
        )
        .unwrap();

        let d = &year_distributions(&dataset)[0];
        assert_eq!(d.count, 5);
        assert_eq!(d.min, 1.0);
        assert_eq!(d.q1, 2.0);
        assert_eq!(d.median, 3.0);
        assert_eq!(d.q3, 4.0);
        assert_eq!(d.max, 5.0);
    }

    #[test]
    fn test_empty_dataset_has_no_groups() {
        let dataset = Dataset::from_records(vec![], vec![]).unwrap();
        assert!(index_by_year(&dataset).is_empty());
        assert!(year_distributions(&dataset).is_empty());
    }
}

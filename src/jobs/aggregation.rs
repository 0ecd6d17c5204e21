// src/jobs/aggregation.rs
use super::types::JobRecord;
use std::collections::HashMap;

/// Per-company job counts in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyCounts {
    entries: Vec<(String, usize)>,
}

impl CompanyCounts {
    pub fn from_jobs(jobs: &[JobRecord]) -> Self {
        let mut entries: Vec<(String, usize)> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for job in jobs {
            let company = job.company();
            match positions.get(&*company) {
                Some(&pos) => entries[pos].1 += 1,
                None => {
                    positions.insert(company.to_string(), entries.len());
                    entries.push((company.into_owned(), 1));
                }
            }
        }

        Self { entries }
    }

    pub fn get(&self, company: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(name, _)| name == company)
            .map(|(_, count)| *count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(name, count)| (name.as_str(), *count))
    }

    /// Split into parallel label and count sequences, order preserved.
    pub fn into_series(self) -> (Vec<String>, Vec<usize>) {
        self.entries.into_iter().unzip()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jobs_at(companies: &[&str]) -> Vec<JobRecord> {
        companies
            .iter()
            .map(|c| JobRecord::new("Engineer", c, "DC", "2024-01-01", "https://example.gov"))
            .collect()
    }

    #[test]
    fn test_counts_in_first_seen_order() {
        let counts = CompanyCounts::from_jobs(&jobs_at(&["A", "B", "A", "C", "B", "A"]));

        assert_eq!(counts.get("A"), Some(3));
        assert_eq!(counts.get("B"), Some(2));
        assert_eq!(counts.get("C"), Some(1));
        assert_eq!(counts.get("D"), None);

        let (labels, data) = counts.into_series();
        assert_eq!(labels, vec!["A", "B", "C"]);
        assert_eq!(data, vec![3, 2, 1]);
    }

    #[test]
    fn test_no_sorting_applied() {
        let counts = CompanyCounts::from_jobs(&jobs_at(&["Zeta", "Alpha", "Alpha"]));
        let labels: Vec<&str> = counts.iter().map(|(name, _)| name).collect();

        assert_eq!(labels, vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn test_empty_jobs() {
        let counts = CompanyCounts::from_jobs(&[]);

        assert!(counts.is_empty());
        assert_eq!(counts.into_series(), (Vec::new(), Vec::new()));
    }

    #[test]
    fn test_blank_company_is_its_own_bucket() {
        let counts = CompanyCounts::from_jobs(&jobs_at(&["", "A", ""]));

        assert_eq!(counts.len(), 2);
        assert_eq!(counts.get(""), Some(2));
    }
}

//! Filter/search engine for the listing pages.
//!
//! Pure functions: given a source list, a case-insensitive free-text
//! term and zero or more categorical filters, derive a filtered view
//! preserving the original relative order. The source is never
//! mutated. An empty term and a `None` categorical filter are
//! pass-through.
//!
//! Searchable fields are fixed per entity: tenants match on name,
//! description and country; processes on name, description and
//! category.

use crate::models::{Process, ProcessStatus, Tenant, TenantStatus};

fn contains_ci(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}

#[derive(Debug, Clone, Default)]
pub struct TenantFilter {
    pub term: String,
    pub status: Option<TenantStatus>,
}

impl TenantFilter {
    pub fn apply(&self, tenants: &[Tenant]) -> Vec<Tenant> {
        let needle = self.term.to_lowercase();
        tenants
            .iter()
            .filter(|t| {
                needle.is_empty()
                    || contains_ci(&t.name, &needle)
                    || contains_ci(&t.description, &needle)
                    || contains_ci(&t.country, &needle)
            })
            .filter(|t| self.status.is_none_or(|s| t.status == s))
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProcessFilter {
    pub term: String,
    pub status: Option<ProcessStatus>,
    pub tenant_id: Option<String>,
}

impl ProcessFilter {
    pub fn apply(&self, processes: &[Process]) -> Vec<Process> {
        let needle = self.term.to_lowercase();
        processes
            .iter()
            .filter(|p| {
                needle.is_empty()
                    || contains_ci(&p.name, &needle)
                    || contains_ci(&p.description, &needle)
                    || contains_ci(&p.category, &needle)
            })
            .filter(|p| self.status.is_none_or(|s| p.status == s))
            .filter(|p| {
                self.tenant_id
                    .as_ref()
                    .is_none_or(|id| p.tenant_id == *id)
            })
            .cloned()
            .collect()
    }
}

/// Per-status counts shown above the process listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessTally {
    pub total: usize,
    pub running: usize,
    pub completed: usize,
    pub failed: usize,
    pub paused: usize,
}

pub fn tally_processes(processes: &[Process]) -> ProcessTally {
    let mut tally = ProcessTally {
        total: processes.len(),
        ..ProcessTally::default()
    };
    for p in processes {
        match p.status {
            ProcessStatus::Running => tally.running += 1,
            ProcessStatus::Completed => tally.completed += 1,
            ProcessStatus::Failed => tally.failed += 1,
            ProcessStatus::Paused => tally.paused += 1,
        }
    }
    tally
}

/// Per-status counts shown above the tenant listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TenantTally {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub suspended: usize,
}

pub fn tally_tenants(tenants: &[Tenant]) -> TenantTally {
    let mut tally = TenantTally {
        total: tenants.len(),
        ..TenantTally::default()
    };
    for t in tenants {
        match t.status {
            TenantStatus::Active => tally.active += 1,
            TenantStatus::Inactive => tally.inactive += 1,
            TenantStatus::Suspended => tally.suspended += 1,
        }
    }
    tally
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn tenant(id: &str, name: &str, description: &str, country: &str, status: TenantStatus) -> Tenant {
        Tenant {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            status,
            created_at: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
            process_count: 1,
            country: country.into(),
        }
    }

    fn process(id: &str, tenant_id: &str, name: &str, category: &str, status: ProcessStatus) -> Process {
        Process {
            id: id.into(),
            tenant_id: tenant_id.into(),
            name: name.into(),
            description: format!("{name} description"),
            start_date: NaiveDate::from_ymd_opt(2023, 1, 20).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
            last_run_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            status,
            run_count: 10,
            category: category.into(),
        }
    }

    fn sample_tenants() -> Vec<Tenant> {
        vec![
            tenant("1", "Global Financial Services", "International banking group", "USA", TenantStatus::Active),
            tenant("2", "European Investment Bank", "Regional investment institution", "Germany", TenantStatus::Active),
            tenant("3", "Asia Pacific Credit Union", "Credit union", "Singapore", TenantStatus::Inactive),
            tenant("4", "Middle East Banking Corp", "Corporate solutions", "UAE", TenantStatus::Active),
            tenant("5", "South American Financial", "Financial services provider", "Brazil", TenantStatus::Suspended),
            tenant("6", "Nordic Solutions", "Fintech company", "Sweden", TenantStatus::Active),
        ]
    }

    #[test]
    fn term_matches_name_description_and_country_case_insensitive() {
        let tenants = sample_tenants();
        let filter = TenantFilter {
            term: "bank".into(),
            status: None,
        };
        let got: Vec<_> = filter.apply(&tenants).into_iter().map(|t| t.id).collect();
        // 1 matches description, 2 matches name, 4 matches name.
        assert_eq!(got, vec!["1", "2", "4"]);
    }

    #[test]
    fn empty_term_is_pass_through() {
        let tenants = sample_tenants();
        let filter = TenantFilter::default();
        assert_eq!(filter.apply(&tenants).len(), tenants.len());
    }

    #[test]
    fn order_is_preserved() {
        let tenants = sample_tenants();
        let filter = TenantFilter {
            term: "financial".into(),
            status: None,
        };
        let got: Vec<_> = filter.apply(&tenants).into_iter().map(|t| t.id).collect();
        assert_eq!(got, vec!["1", "5"]);
    }

    #[test]
    fn tenant_status_filter_narrows() {
        let tenants = sample_tenants();
        let filter = TenantFilter {
            term: String::new(),
            status: Some(TenantStatus::Suspended),
        };
        let got = filter.apply(&tenants);
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].id, "5");
    }

    #[test]
    fn process_status_filter_returns_only_running() {
        let processes = vec![
            process("p1", "1", "AML Check", "Compliance", ProcessStatus::Running),
            process("p2", "1", "Monitoring", "Monitoring", ProcessStatus::Running),
            process("p3", "1", "Due Diligence", "Verification", ProcessStatus::Completed),
            process("p4", "2", "Sanctions", "Compliance", ProcessStatus::Running),
            process("p5", "2", "Risk Assessment", "Assessment", ProcessStatus::Paused),
        ];
        let filter = ProcessFilter {
            status: Some(ProcessStatus::Running),
            ..ProcessFilter::default()
        };
        let got: Vec<_> = filter.apply(&processes).into_iter().map(|p| p.id).collect();
        assert_eq!(got, vec!["p1", "p2", "p4"]);

        // Combining tenant and status yields the intersection.
        let filter = ProcessFilter {
            status: Some(ProcessStatus::Running),
            tenant_id: Some("2".into()),
            ..ProcessFilter::default()
        };
        let got: Vec<_> = filter.apply(&processes).into_iter().map(|p| p.id).collect();
        assert_eq!(got, vec!["p4"]);
    }

    #[test]
    fn tallies_count_by_status() {
        let processes = vec![
            process("p1", "1", "a", "c", ProcessStatus::Running),
            process("p2", "1", "b", "c", ProcessStatus::Failed),
            process("p3", "1", "c", "c", ProcessStatus::Running),
        ];
        let tally = tally_processes(&processes);
        assert_eq!(tally.total, 3);
        assert_eq!(tally.running, 2);
        assert_eq!(tally.failed, 1);
        assert_eq!(tally.completed, 0);
    }
}

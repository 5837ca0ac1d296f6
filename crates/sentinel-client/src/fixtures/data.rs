//! The deterministic fixture data set.
//!
//! These records substitute for the live backend when the session is
//! unauthenticated or a call fails. Values are fixed so that demo
//! navigation is reproducible.

use chrono::{NaiveDate, NaiveDateTime};
use sentinel_core::models::{
    Process, ProcessRun, ProcessStatus, RunStatus, Severity, Tenant, TenantStatus, Transaction,
    TransactionStatus, TriggerSummary, User,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid fixture date")
}

fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    date(y, m, d)
        .and_hms_opt(h, min, s)
        .expect("valid fixture time")
}

fn tenant(
    id: &str,
    name: &str,
    description: &str,
    status: TenantStatus,
    created_at: NaiveDate,
    process_count: u32,
    country: &str,
) -> Tenant {
    Tenant {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        status,
        created_at,
        process_count,
        country: country.into(),
    }
}

pub fn tenants() -> Vec<Tenant> {
    vec![
        tenant(
            "1",
            "Global Financial Services",
            "International banking and financial services organization",
            TenantStatus::Active,
            date(2023, 1, 15),
            12,
            "USA",
        ),
        tenant(
            "2",
            "European Investment Bank",
            "Regional investment banking institution",
            TenantStatus::Active,
            date(2023, 3, 22),
            8,
            "Germany",
        ),
        tenant(
            "3",
            "Asia Pacific Credit Union",
            "Credit union serving Asia Pacific region",
            TenantStatus::Inactive,
            date(2023, 2, 10),
            5,
            "Singapore",
        ),
        tenant(
            "4",
            "Middle East Banking Corp",
            "Corporate banking solutions for Middle East",
            TenantStatus::Active,
            date(2023, 4, 5),
            15,
            "UAE",
        ),
        tenant(
            "5",
            "South American Financial",
            "Regional financial services provider",
            TenantStatus::Suspended,
            date(2023, 1, 30),
            3,
            "Brazil",
        ),
        tenant(
            "6",
            "Nordic Banking Solutions",
            "Scandinavian financial technology company",
            TenantStatus::Active,
            date(2023, 5, 12),
            9,
            "Sweden",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn process(
    id: &str,
    tenant_id: &str,
    name: &str,
    description: &str,
    start: NaiveDate,
    end: NaiveDate,
    last_run: NaiveDate,
    status: ProcessStatus,
    run_count: u64,
    category: &str,
) -> Process {
    Process {
        id: id.into(),
        tenant_id: tenant_id.into(),
        name: name.into(),
        description: description.into(),
        start_date: start,
        end_date: end,
        last_run_date: last_run,
        status,
        run_count,
        category: category.into(),
    }
}

pub fn processes() -> Vec<Process> {
    vec![
        process(
            "p1",
            "1",
            "Anti-Money Laundering Check",
            "Automated AML screening for all transactions",
            date(2023, 1, 20),
            date(2024, 1, 20),
            date(2024, 1, 15),
            ProcessStatus::Running,
            1250,
            "Compliance",
        ),
        process(
            "p2",
            "1",
            "Transaction Monitoring",
            "Real-time transaction pattern analysis",
            date(2023, 2, 1),
            date(2024, 2, 1),
            date(2024, 1, 14),
            ProcessStatus::Running,
            2840,
            "Monitoring",
        ),
        process(
            "p3",
            "1",
            "Customer Due Diligence",
            "Enhanced customer background verification",
            date(2023, 1, 25),
            date(2024, 1, 25),
            date(2024, 1, 13),
            ProcessStatus::Completed,
            856,
            "Verification",
        ),
        process(
            "p4",
            "2",
            "Sanctions Screening",
            "Automated sanctions list checking",
            date(2023, 3, 25),
            date(2024, 3, 25),
            date(2024, 1, 15),
            ProcessStatus::Running,
            945,
            "Compliance",
        ),
        process(
            "p5",
            "2",
            "Risk Assessment",
            "Comprehensive risk evaluation process",
            date(2023, 4, 1),
            date(2024, 4, 1),
            date(2024, 1, 12),
            ProcessStatus::Paused,
            234,
            "Assessment",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn run(
    id: &str,
    process_id: &str,
    run_date: NaiveDate,
    status: RunStatus,
    duration: u32,
    users_involved: u32,
    records_processed: u64,
    total_trigger_hits: u32,
) -> ProcessRun {
    ProcessRun {
        id: id.into(),
        process_id: process_id.into(),
        run_date,
        status,
        duration,
        users_involved,
        records_processed,
        total_trigger_hits,
    }
}

pub fn runs() -> Vec<ProcessRun> {
    vec![
        run("r1", "p1", date(2024, 1, 15), RunStatus::Success, 45, 3, 1250, 47),
        run("r2", "p1", date(2024, 1, 14), RunStatus::Success, 42, 2, 1180, 32),
        run("r3", "p1", date(2024, 1, 13), RunStatus::Failed, 12, 1, 450, 8),
        run("r4", "p1", date(2024, 1, 12), RunStatus::Success, 48, 3, 1320, 56),
        run("r5", "p2", date(2024, 1, 14), RunStatus::Success, 180, 5, 2840, 89),
        run("r6", "p2", date(2024, 1, 13), RunStatus::Success, 175, 4, 2650, 73),
        run("r7", "p2", date(2024, 1, 12), RunStatus::InProgress, 90, 3, 1400, 34),
    ]
}

fn user(
    id: &str,
    name: &str,
    email: &str,
    role: &str,
    department: &str,
    last_activity: NaiveDateTime,
) -> User {
    User {
        id: id.into(),
        name: name.into(),
        email: email.into(),
        role: role.into(),
        department: department.into(),
        last_activity,
    }
}

pub fn users() -> Vec<User> {
    vec![
        user(
            "u1",
            "Sarah Johnson",
            "sarah.johnson@example.com",
            "Compliance Analyst",
            "Risk Management",
            datetime(2024, 1, 15, 14, 30, 0),
        ),
        user(
            "u2",
            "Michael Chen",
            "michael.chen@example.com",
            "Senior Analyst",
            "Fraud Detection",
            datetime(2024, 1, 15, 12, 15, 0),
        ),
        user(
            "u3",
            "Emma Rodriguez",
            "emma.rodriguez@example.com",
            "AML Specialist",
            "Compliance",
            datetime(2024, 1, 15, 16, 45, 0),
        ),
        user(
            "u4",
            "David Kim",
            "david.kim@example.com",
            "Risk Analyst",
            "Risk Management",
            datetime(2024, 1, 14, 9, 20, 0),
        ),
        user(
            "u5",
            "Lisa Thompson",
            "lisa.thompson@example.com",
            "Compliance Manager",
            "Compliance",
            datetime(2024, 1, 14, 17, 30, 0),
        ),
    ]
}

fn trigger(
    id: &str,
    name: &str,
    rule_type: &str,
    severity: Severity,
    hit_count: u32,
    description: &str,
) -> TriggerSummary {
    TriggerSummary {
        id: id.into(),
        name: name.into(),
        rule_type: rule_type.into(),
        severity,
        hit_count,
        description: description.into(),
    }
}

pub fn triggers() -> Vec<TriggerSummary> {
    vec![
        trigger(
            "t1",
            "Large Cash Transaction",
            "Amount Threshold",
            Severity::High,
            15,
            "Transactions exceeding $10,000 in cash",
        ),
        trigger(
            "t2",
            "Rapid Fire Transactions",
            "Velocity",
            Severity::Medium,
            8,
            "Multiple transactions within short time frame",
        ),
        trigger(
            "t3",
            "Sanctions List Match",
            "Watchlist",
            Severity::Critical,
            3,
            "Customer matches sanctions database",
        ),
        trigger(
            "t4",
            "Unusual Geographic Pattern",
            "Geographic",
            Severity::Medium,
            12,
            "Transactions from high-risk countries",
        ),
        trigger(
            "t5",
            "Round Number Pattern",
            "Pattern",
            Severity::Low,
            22,
            "Frequent round number transactions",
        ),
    ]
}

pub fn transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            id: "tx1".into(),
            amount: 15000.0,
            currency: "USD".into(),
            from_account: "ACC-001-2024".into(),
            to_account: "ACC-002-2024".into(),
            timestamp: datetime(2024, 1, 15, 10, 30, 0),
            description: "Wire transfer to offshore account".into(),
            status: TransactionStatus::Completed,
            risk_score: 85,
            flagged_reasons: vec![
                "Large amount".into(),
                "Offshore destination".into(),
                "Cash intensive business".into(),
            ],
        },
        Transaction {
            id: "tx2".into(),
            amount: 12500.0,
            currency: "USD".into(),
            from_account: "ACC-001-2024".into(),
            to_account: "ACC-003-2024".into(),
            timestamp: datetime(2024, 1, 15, 11, 45, 0),
            description: "Business payment".into(),
            status: TransactionStatus::Completed,
            risk_score: 72,
            flagged_reasons: vec!["Large amount".into(), "Rapid succession".into()],
        },
        Transaction {
            id: "tx3".into(),
            amount: 10000.0,
            currency: "USD".into(),
            from_account: "ACC-004-2024".into(),
            to_account: "ACC-001-2024".into(),
            timestamp: datetime(2024, 1, 15, 14, 20, 0),
            description: "Cash deposit".into(),
            status: TransactionStatus::Completed,
            risk_score: 78,
            flagged_reasons: vec![
                "Exact threshold amount".into(),
                "Cash transaction".into(),
            ],
        },
    ]
}

//! Integration tests for the PostgreSQL `RecordStore` driving the metrics
//! aggregator end to end.

use assert_matches::assert_matches;
use budget_core::aggregator::{compute_dashboard, compute_hour_variance};
use budget_core::error::CoreError;
use budget_core::kinds::{TransactionType, WorkLogType};
use budget_core::month::MonthRange;
use budget_db::models::engineer::CreateEngineer;
use budget_db::models::project::CreateProject;
use budget_db::models::transaction::CreateTransaction;
use budget_db::models::work_log::CreateWorkLog;
use budget_db::repositories::{EngineerRepo, ProjectRepo, TransactionRepo, WorkLogRepo};
use budget_db::store::PgRecordStore;
use chrono::NaiveDate;
use sqlx::PgPool;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

struct Seeded {
    project_id: i64,
    engineer_id: i64,
}

/// Budget 1,000,000; income 500,000; expense 50,000; 10h ACTUAL and 100h
/// PLANNED by an engineer at 5,000/h.
async fn seed_reference(pool: &PgPool) -> Seeded {
    let project = ProjectRepo::create(
        pool,
        &CreateProject {
            name: "Reference".to_string(),
            budget: 1_000_000.0,
            start_date: day(2024, 5, 1),
            end_date: None,
        },
    )
    .await
    .unwrap();
    let engineer = EngineerRepo::create(
        pool,
        &CreateEngineer {
            name: "Tanaka".to_string(),
            position: "Senior Engineer".to_string(),
            hourly_rate: 5_000.0,
        },
    )
    .await
    .unwrap();

    for (transaction_type, amount) in [
        (TransactionType::Income, 500_000.0),
        (TransactionType::Expense, 50_000.0),
    ] {
        TransactionRepo::create(
            pool,
            &CreateTransaction {
                project_id: project.id,
                transaction_type,
                amount,
                category: String::new(),
                date: day(2024, 5, 2),
                description: String::new(),
            },
        )
        .await
        .unwrap();
    }

    for (work_type, hours) in [(WorkLogType::Actual, 10.0), (WorkLogType::Planned, 100.0)] {
        WorkLogRepo::create(
            pool,
            &CreateWorkLog {
                engineer_id: engineer.id,
                project_id: project.id,
                hours,
                date: day(2024, 5, 3),
                description: String::new(),
                category: String::new(),
                work_type,
            },
        )
        .await
        .unwrap();
    }

    Seeded {
        project_id: project.id,
        engineer_id: engineer.id,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn dashboard_from_database(pool: PgPool) {
    let seeded = seed_reference(&pool).await;
    let store = PgRecordStore::new(pool);

    let dashboard = compute_dashboard(&store, seeded.project_id).await.unwrap();

    assert_eq!(dashboard.budget, 1_000_000.0);
    assert_eq!(dashboard.income, 500_000.0);
    assert_eq!(dashboard.other_expense, 50_000.0);
    assert_eq!(dashboard.labor_cost, 50_000.0);
    assert_eq!(dashboard.balance, 400_000.0);
    assert_eq!(dashboard.budget_usage, 10.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn soft_deleted_engineer_is_dangling(pool: PgPool) {
    let seeded = seed_reference(&pool).await;
    EngineerRepo::soft_delete(&pool, seeded.engineer_id)
        .await
        .unwrap();
    let store = PgRecordStore::new(pool);

    let err = compute_dashboard(&store, seeded.project_id)
        .await
        .unwrap_err();

    assert_matches!(
        err,
        CoreError::DanglingReference { entity: "Engineer", id, .. } if id == seeded.engineer_id
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn soft_deleted_project_is_not_found(pool: PgPool) {
    let seeded = seed_reference(&pool).await;
    ProjectRepo::soft_delete(&pool, seeded.project_id)
        .await
        .unwrap();
    let store = PgRecordStore::new(pool);

    let err = compute_dashboard(&store, seeded.project_id)
        .await
        .unwrap_err();

    assert_matches!(err, CoreError::NotFound { entity: "Project", .. });
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn hour_variance_from_database(pool: PgPool) {
    let seeded = seed_reference(&pool).await;
    let store = PgRecordStore::new(pool);

    let month = MonthRange::parse("2024-05").unwrap();
    let may = compute_hour_variance(&store, seeded.project_id, month)
        .await
        .unwrap();
    assert_eq!(may.planned_hours, 100.0);
    assert_eq!(may.actual_hours, 10.0);
    assert_eq!(may.variance, -90.0);

    let month = MonthRange::parse("2024-06").unwrap();
    let june = compute_hour_variance(&store, seeded.project_id, month)
        .await
        .unwrap();
    assert_eq!(june.planned_hours, 0.0);
    assert_eq!(june.actual_hours, 0.0);
}

use visa_crm::domain::types::{Amount, OpportunityCategory, OpportunityStatus};
use visa_crm::filter::{FilterChain, FilterCriteria};
use visa_crm::repository::errors::RepositoryError;
use visa_crm::repository::{
    DieselRepository, OpportunityListQuery, OpportunityReader, OpportunityWriter,
};

mod common;

use common::{date, new_opportunity};

#[test]
fn test_opportunity_repository_crud() {
    let test_db = common::TestDb::new("test_opportunity_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let items = vec![
        new_opportunity(
            OpportunityCategory::WorkPermit,
            "Ankara",
            date(2024, 1, 10),
            "WP-1",
            "Ali",
            "Veli",
        ),
        new_opportunity(
            OpportunityCategory::ResidencePermit,
            "İzmir",
            date(2024, 3, 5),
            "RP-1",
            "Ayşe",
            "Kaya",
        ),
    ];
    assert_eq!(repo.create_opportunities(&items).unwrap(), 2);

    let all = repo.list_opportunities(OpportunityListQuery::new()).unwrap();
    assert_eq!(all.len(), 2);
    // Newest registration first.
    assert_eq!(all[0].registration_number.as_str(), "RP-1");
    assert_eq!(all[1].registration_number.as_str(), "WP-1");

    let work_permits = repo
        .list_opportunities(OpportunityListQuery::new().category(OpportunityCategory::WorkPermit))
        .unwrap();
    assert_eq!(work_permits.len(), 1);
    assert_eq!(work_permits[0].full_name(), "Ali Veli");

    let ali = work_permits[0].clone();
    let fetched = repo.get_opportunity_by_id(ali.id).unwrap().unwrap();
    assert_eq!(fetched, ali);

    let updated = repo
        .update_opportunity_status(ali.id, OpportunityStatus::InProgress)
        .unwrap();
    assert_eq!(updated.status, OpportunityStatus::InProgress);

    let paid = repo
        .record_payment(ali.id, Amount::new(30_000).unwrap())
        .unwrap();
    let paid = repo
        .record_payment(paid.id, Amount::new(20_000).unwrap())
        .unwrap();
    assert_eq!(paid.paid_amount.get(), 50_000);
    assert_eq!(paid.outstanding_amount(), 50_000);

    repo.delete_opportunity(ali.id).unwrap();
    assert!(repo.get_opportunity_by_id(ali.id).unwrap().is_none());
    assert!(matches!(
        repo.delete_opportunity(ali.id),
        Err(RepositoryError::NotFound)
    ));

    let remaining = repo.list_opportunities(OpportunityListQuery::new()).unwrap();
    assert_eq!(remaining.len(), 1);
}

#[test]
fn test_duplicate_registration_number_is_rejected() {
    let test_db = common::TestDb::new("test_duplicate_registration_number.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    let item = new_opportunity(
        OpportunityCategory::Other,
        "Bursa",
        date(2024, 2, 2),
        "OT-7",
        "Kemal",
        "Ali",
    );

    repo.create_opportunities(std::slice::from_ref(&item)).unwrap();

    assert!(matches!(
        repo.create_opportunities(&[item]),
        Err(RepositoryError::ConstraintViolation(_))
    ));
}

#[test]
fn test_stored_records_feed_the_filter_chain() {
    let test_db = common::TestDb::new("test_stored_records_feed_the_filter_chain.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    let items: Vec<_> = (1..=5)
        .map(|month| {
            new_opportunity(
                OpportunityCategory::WorkPermit,
                if month % 2 == 0 { "Ankara" } else { "İzmir" },
                date(2024, month, 1),
                &format!("WP-{month}"),
                "Test",
                &format!("Kayıt {month}"),
            )
        })
        .collect();
    repo.create_opportunities(&items).unwrap();

    let candidates = repo.list_opportunities(OpportunityListQuery::new()).unwrap();
    let criteria = FilterCriteria::new()
        .province("İzmir")
        .date_from(date(2024, 2, 1));
    let kept = FilterChain::new(&criteria).apply(&candidates);

    let numbers: Vec<_> = kept
        .iter()
        .map(|o| o.registration_number.as_str())
        .collect();
    assert_eq!(numbers, vec!["WP-5", "WP-3"]);
}

#[test]
fn test_overflowing_payment_is_rejected_and_total_kept() {
    let test_db = common::TestDb::new("test_overflowing_payment_is_rejected.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    let item = new_opportunity(
        OpportunityCategory::WorkPermit,
        "Ankara",
        date(2024, 4, 4),
        "WP-MAX",
        "Ali",
        "Veli",
    );
    repo.create_opportunities(&[item]).unwrap();
    let id = repo.list_opportunities(OpportunityListQuery::new()).unwrap()[0].id;

    let paid = repo
        .record_payment(id, Amount::new(i64::MAX).unwrap())
        .unwrap();
    assert_eq!(paid.paid_amount.get(), i64::MAX);

    assert!(matches!(
        repo.record_payment(id, Amount::new(10).unwrap()),
        Err(RepositoryError::ConstraintViolation(_))
    ));

    let stored = repo.get_opportunity_by_id(id).unwrap().unwrap();
    assert_eq!(stored.paid_amount.get(), i64::MAX);
}

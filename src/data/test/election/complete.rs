use super::*;

fn completed(seat_id: &str) -> CompletedElection {
    let election = testkit::overdue_election(seat_id, vec![testkit::candidate(1, "Alice", 10.0)]);
    let winner = election.candidates[0].clone();
    CompletedElection {
        election,
        winner: Some(winner),
        completed_date: Utc::now(),
        cancelled: false,
        cancellation_reason: None,
    }
}

/// Tests moving an active election into the completed list.
///
/// Verifies that the active entry is removed and the outcome appended in one
/// write.
///
/// Expected: Ok(true) with the election moved
#[tokio::test]
async fn moves_active_to_completed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_election_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ElectionRepository::new(db);
    repo.save_active(1000, &[testkit::overdue_election("REP-01", vec![])])
        .await?;

    let moved = repo.complete(1000, "REP-01", completed("REP-01")).await?;
    assert!(moved);

    let doc = repo.get_or_create(1000).await?;
    assert!(doc.active.is_empty());
    assert_eq!(doc.completed.len(), 1);
    assert_eq!(
        doc.completed[0].winner.as_ref().unwrap().name,
        "Alice".to_string()
    );

    Ok(())
}

/// Tests completing a seat with no active election.
///
/// Expected: Ok(false) with nothing written
#[tokio::test]
async fn returns_false_when_no_active_for_seat() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_election_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ElectionRepository::new(db);
    let moved = repo.complete(1000, "REP-01", completed("REP-01")).await?;
    assert!(!moved);

    let completed_list = repo.list_completed(1000).await?;
    assert!(completed_list.is_empty());

    Ok(())
}

/// Tests that completing one election leaves the others active.
///
/// Expected: Ok(true) with only the named seat's election moved
#[tokio::test]
async fn leaves_other_elections_active() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_election_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ElectionRepository::new(db);
    repo.save_active(
        1000,
        &[
            testkit::overdue_election("REP-01", vec![]),
            testkit::campaign_election("REP-02", vec![]),
        ],
    )
    .await?;

    let moved = repo.complete(1000, "REP-01", completed("REP-01")).await?;
    assert!(moved);

    let doc = repo.get_or_create(1000).await?;
    assert_eq!(doc.active.len(), 1);
    assert_eq!(doc.active[0].seat_id, "REP-02");

    Ok(())
}

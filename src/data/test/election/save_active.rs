use super::*;

/// Tests that an active election round-trips through the JSON columns.
///
/// Verifies that candidate fields, fractional points, and timestamps survive
/// the write/read cycle exactly.
///
/// Expected: Ok with the stored list equal to the written list
#[tokio::test]
async fn round_trips_candidate_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_election_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let election = testkit::campaign_election(
        "REP-01",
        vec![
            testkit::candidate(1, "Alice", 2.5),
            testkit::candidate_with_stamina(2, "Bob", 0.0, 80),
        ],
    );

    let repo = ElectionRepository::new(db);
    repo.save_active(1000, std::slice::from_ref(&election))
        .await?;

    let doc = repo.get_or_create(1000).await?;
    assert_eq!(doc.active, vec![election]);

    Ok(())
}

/// Tests that saving replaces the previous active list wholesale.
///
/// Expected: Ok with only the new list stored
#[tokio::test]
async fn overwrites_previous_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_election_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ElectionRepository::new(db);
    repo.save_active(1000, &[testkit::campaign_election("REP-01", vec![])])
        .await?;
    repo.save_active(1000, &[testkit::campaign_election("REP-02", vec![])])
        .await?;

    let doc = repo.get_or_create(1000).await?;
    assert_eq!(doc.active.len(), 1);
    assert_eq!(doc.active[0].seat_id, "REP-02");

    Ok(())
}

/// Tests that documents are stored per guild.
///
/// Expected: Ok with each guild seeing only its own elections
#[tokio::test]
async fn isolates_guild_documents() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_election_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ElectionRepository::new(db);
    repo.save_active(1000, &[testkit::campaign_election("REP-01", vec![])])
        .await?;
    repo.save_active(2000, &[testkit::campaign_election("REP-09", vec![])])
        .await?;

    let doc = repo.get_or_create(1000).await?;
    assert_eq!(doc.active[0].seat_id, "REP-01");

    Ok(())
}

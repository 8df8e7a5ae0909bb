use super::*;

/// Tests matching seats by a partial seat_id.
///
/// Expected: Ok with only the REP-prefixed seats, ordered by seat_id
#[tokio::test]
async fn matches_partial_seat_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_election_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::seat::create_seat(db, "1000", "REP-02").await?;
    factory::seat::create_seat(db, "1000", "REP-01").await?;
    factory::seat::SeatFactory::new(db, "1000", "SEN-01")
        .office("Senator")
        .build()
        .await?;

    let repo = SeatRepository::new(db);
    let seats = repo.search(1000, "REP", 25).await?;

    let ids: Vec<&str> = seats.iter().map(|s| s.seat_id.as_str()).collect();
    assert_eq!(ids, vec!["REP-01", "REP-02"]);

    Ok(())
}

/// Tests matching seats by a partial office name.
///
/// Expected: Ok with seats whose office contains the fragment
#[tokio::test]
async fn matches_office_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_election_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::seat::SeatFactory::new(db, "1000", "OH-District-4")
        .office("District 4 Representative")
        .build()
        .await?;
    factory::seat::SeatFactory::new(db, "1000", "SEN-01")
        .office("Senator")
        .build()
        .await?;

    let repo = SeatRepository::new(db);
    let seats = repo.search(1000, "District", 25).await?;

    assert_eq!(seats.len(), 1);
    assert_eq!(seats[0].seat_id, "OH-District-4");

    Ok(())
}

/// Tests that the result count respects the limit.
///
/// Expected: Ok with at most `limit` seats
#[tokio::test]
async fn respects_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_election_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for i in 1..=5 {
        factory::seat::create_seat(db, "1000", format!("REP-0{}", i)).await?;
    }

    let repo = SeatRepository::new(db);
    let seats = repo.search(1000, "REP", 3).await?;

    assert_eq!(seats.len(), 3);

    Ok(())
}

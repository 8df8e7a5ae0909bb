use super::*;

/// Tests looking up an existing seat.
///
/// Expected: Ok(Some) with the seat's fields converted to the domain model
#[tokio::test]
async fn returns_seat_when_present() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_election_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::seat::SeatFactory::new(db, "1000", "REP-03")
        .state("Vermont")
        .holder(Some(("John Smith", "77")))
        .build()
        .await?;

    let repo = SeatRepository::new(db);
    let seat = repo.get(1000, "REP-03").await?;

    assert!(seat.is_some());
    let seat = seat.unwrap();
    assert_eq!(seat.seat_id, "REP-03");
    assert_eq!(seat.state, "Vermont");
    assert_eq!(seat.current_holder, Some("John Smith".to_string()));
    assert_eq!(seat.current_holder_id, Some(77));

    Ok(())
}

/// Tests looking up a seat that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_seat() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_election_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeatRepository::new(db);
    let seat = repo.get(1000, "REP-99").await?;

    assert!(seat.is_none());

    Ok(())
}

/// Tests that lookups are scoped to the requesting guild.
///
/// Expected: Ok(Some) only for the guild owning the seat
#[tokio::test]
async fn scopes_lookup_to_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_election_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::seat::create_seat(db, "1000", "REP-01").await?;

    let repo = SeatRepository::new(db);
    assert!(repo.get(1000, "REP-01").await?.is_some());
    assert!(repo.get(2000, "REP-01").await?.is_none());

    Ok(())
}

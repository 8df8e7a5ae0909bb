use super::*;

async fn seed_signup_phase(db: &sea_orm::DatabaseConnection) -> Result<(), DbErr> {
    factory::seat::SeatFactory::new(db, "1000", "REP-01")
        .office("House Representative")
        .state("Ohio")
        .up_for_election(true)
        .build()
        .await?;
    ElectionRepository::new(db)
        .save_active(1000, &[testkit::signup_election("REP-01", vec![])])
        .await
}

fn signup_params(user_id: u64, name: &str) -> SignupParams {
    SignupParams {
        seat_id: Some("REP-01".to_string()),
        user_id,
        name: name.to_string(),
        party: "Independent".to_string(),
    }
}

/// Tests registering a candidate during the signup phase.
///
/// Verifies the candidate starts with zero points, full stamina, and the
/// seat's office and state, and lands on the persisted roster.
///
/// Expected: Ok with the candidate registered
#[tokio::test]
async fn registers_candidate_during_signup() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_election_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed_signup_phase(db).await?;

    let engine = ActionEngine::new(db);
    let candidate = engine
        .signup(1000, signup_params(1, "Alice"))
        .await
        .unwrap();

    assert_eq!(candidate.user_id, 1);
    assert_eq!(candidate.name, "Alice");
    assert_eq!(candidate.points, 0.0);
    assert_eq!(candidate.stamina, STARTING_STAMINA);
    assert_eq!(candidate.office, "House Representative");
    assert_eq!(candidate.state, "Ohio");

    let stored = ElectionRepository::new(db)
        .find_active_for_seat(1000, "REP-01")
        .await?
        .unwrap();
    assert_eq!(stored.candidates.len(), 1);
    assert_eq!(stored.candidates[0].name, "Alice");

    Ok(())
}

/// Tests signing up twice with the same user.
///
/// Expected: Err(AlreadyRegistered) with the roster unchanged
#[tokio::test]
async fn rejects_duplicate_signup() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_election_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed_signup_phase(db).await?;

    let engine = ActionEngine::new(db);
    engine.signup(1000, signup_params(1, "Alice")).await.unwrap();
    let err = engine
        .signup(1000, signup_params(1, "Alice"))
        .await
        .unwrap_err();

    assert_eq!(
        err.as_election_error(),
        Some(&ElectionError::AlreadyRegistered("Alice".to_string()))
    );

    let stored = ElectionRepository::new(db)
        .find_active_for_seat(1000, "REP-01")
        .await?
        .unwrap();
    assert_eq!(stored.candidates.len(), 1);

    Ok(())
}

/// Tests signing up after signups have closed.
///
/// Expected: Err(WrongPhase)
#[tokio::test]
async fn rejects_signup_during_campaign_phase() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_election_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed_campaign(db, vec![]).await?;

    let engine = ActionEngine::new(db);
    let err = engine
        .signup(1000, signup_params(1, "Alice"))
        .await
        .unwrap_err();

    assert_eq!(
        err.as_election_error(),
        Some(&ElectionError::WrongPhase {
            required: Phase::Signup,
            current: Phase::Campaign,
        })
    );

    Ok(())
}

/// Tests signing up with no active election.
///
/// Expected: Err(NoActiveElection)
#[tokio::test]
async fn errors_without_active_election() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_election_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let engine = ActionEngine::new(db);
    let err = engine
        .signup(1000, signup_params(1, "Alice"))
        .await
        .unwrap_err();

    assert_eq!(
        err.as_election_error(),
        Some(&ElectionError::NoActiveElection)
    );

    Ok(())
}

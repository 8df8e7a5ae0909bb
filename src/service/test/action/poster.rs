use super::*;

/// Tests putting up a poster with a valid image.
///
/// Posters are synchronous: the attachment arrives with the command and no
/// prompt or collection session is involved.
///
/// Expected: Ok with 1-3 points to the target and 15 stamina off the payer
#[tokio::test]
async fn awards_points_for_valid_image() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_election_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed_campaign(
        db,
        vec![
            testkit::candidate(1, "Alice", 0.0),
            testkit::candidate(2, "Bob", 0.0),
        ],
    )
    .await?;

    let engine = ActionEngine::new(db);
    let report = engine
        .put_up_poster(1000, params(1, "Alice", Some("Bob")), image_attachment())
        .await
        .unwrap();

    assert_eq!(report.action, ActionKind::Poster);
    assert!(report.points_gained >= 1.0 && report.points_gained <= 3.0);
    assert_eq!(report.payer_id, 1);
    assert_eq!(report.stamina_deducted, 15);
    assert_eq!(report.payer_stamina_after, 85);

    let last = CooldownRepository::new(db)
        .last_used(1000, 1, ActionKind::Poster)
        .await?;
    assert!(last.is_some());

    Ok(())
}

/// Tests a poster with a non-image attachment.
///
/// Expected: Err(ContentInvalid) with no state change
#[tokio::test]
async fn rejects_non_image_attachment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_election_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed_campaign(
        db,
        vec![
            testkit::candidate(1, "Alice", 0.0),
            testkit::candidate(2, "Bob", 0.0),
        ],
    )
    .await?;

    let engine = ActionEngine::new(db);
    let err = engine
        .put_up_poster(1000, params(1, "Alice", Some("Bob")), video_attachment())
        .await
        .unwrap_err();

    assert!(matches!(
        err.as_election_error(),
        Some(ElectionError::ContentInvalid { .. })
    ));

    let stored = ElectionRepository::new(db)
        .find_active_for_seat(1000, "REP-01")
        .await?
        .unwrap();
    assert_eq!(stored.candidate_by_user(2).unwrap().points, 0.0);
    assert_eq!(stored.candidate_by_user(1).unwrap().stamina, 100);

    Ok(())
}

/// Tests a poster with an attachment over the size limit.
///
/// Expected: Err(ContentInvalid)
#[tokio::test]
async fn rejects_oversize_attachment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_election_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed_campaign(
        db,
        vec![
            testkit::candidate(1, "Alice", 0.0),
            testkit::candidate(2, "Bob", 0.0),
        ],
    )
    .await?;

    let mut attachment = image_attachment();
    attachment.size_bytes = 26 * 1024 * 1024;

    let engine = ActionEngine::new(db);
    let err = engine
        .put_up_poster(1000, params(1, "Alice", Some("Bob")), attachment)
        .await
        .unwrap_err();

    assert!(matches!(
        err.as_election_error(),
        Some(ElectionError::ContentInvalid { .. })
    ));

    Ok(())
}

/// Tests a poster whose attachment carries no content type.
///
/// Expected: Err(ContentInvalid)
#[tokio::test]
async fn rejects_attachment_without_content_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_election_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed_campaign(
        db,
        vec![
            testkit::candidate(1, "Alice", 0.0),
            testkit::candidate(2, "Bob", 0.0),
        ],
    )
    .await?;

    let mut attachment = image_attachment();
    attachment.content_type = None;

    let engine = ActionEngine::new(db);
    let err = engine
        .put_up_poster(1000, params(1, "Alice", Some("Bob")), attachment)
        .await
        .unwrap_err();

    assert!(matches!(
        err.as_election_error(),
        Some(ElectionError::ContentInvalid { .. })
    ));

    Ok(())
}

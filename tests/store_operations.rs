use camping_world::database::connect_in_memory;
use camping_world::services::{activity_service, camper_service, seed_service, signup_service};
use camping_world::StoreError;

#[tokio::test]
async fn activity_detail_lists_campers_through_signups() {
    let pool = connect_in_memory().await.unwrap();
    let caitlin = camper_service::create_camper(&pool, Some("Caitlin"), Some(8))
        .await
        .unwrap();
    let kevin = camper_service::create_camper(&pool, Some("Kevin"), Some(18))
        .await
        .unwrap();
    let archery = activity_service::create_activity(&pool, Some("Archery"), Some(2))
        .await
        .unwrap();

    signup_service::create_signup(&pool, Some(9), Some(kevin.id), Some(archery.id))
        .await
        .unwrap();
    signup_service::create_signup(&pool, Some(11), Some(caitlin.id), Some(archery.id))
        .await
        .unwrap();

    let detail = activity_service::get_activity(&pool, archery.id).await.unwrap();
    assert_eq!(detail.activity, archery);
    assert_eq!(detail.campers, vec![kevin, caitlin]);

    let missing = activity_service::get_activity(&pool, archery.id + 1).await.unwrap_err();
    assert!(matches!(missing, StoreError::NotFound("Activity")));
}

#[tokio::test]
async fn rejected_writes_leave_no_rows() {
    let pool = connect_in_memory().await.unwrap();

    let err = camper_service::create_camper(&pool, Some("Lizzie"), Some(19))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Validation(ref v) if v.field == "age"));

    let err = signup_service::create_signup(&pool, Some(10), Some(1), Some(1))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Constraint(_)), "{err:?}");

    assert!(camper_service::list_campers(&pool).await.unwrap().is_empty());
    assert!(signup_service::get_signup(&pool, 1).await.is_err());
}

#[tokio::test]
async fn deleting_missing_activity_changes_nothing() {
    let pool = connect_in_memory().await.unwrap();
    let hiking = activity_service::create_activity(&pool, Some("Hiking"), Some(1))
        .await
        .unwrap();

    let err = activity_service::delete_activity(&pool, hiking.id + 1)
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound("Activity")));
    assert_eq!(
        activity_service::list_activities(&pool).await.unwrap(),
        vec![hiking]
    );
}

#[tokio::test]
async fn seeding_populates_and_resets() {
    let pool = connect_in_memory().await.unwrap();

    let first = seed_service::seed_demo_data(&pool, true).await.unwrap();
    assert_eq!(first.cleared, 0);
    assert_eq!(first.campers, 8);
    assert_eq!(first.activities, 5);
    assert_eq!(first.signups, 16);

    let second = seed_service::seed_demo_data(&pool, true).await.unwrap();
    assert_eq!(second.cleared, 8 + 5 + 16);
    assert_eq!(camper_service::list_campers(&pool).await.unwrap().len(), 8);

    for camper in camper_service::list_campers(&pool).await.unwrap() {
        let detail = camper_service::get_camper(&pool, camper.id).await.unwrap();
        assert_eq!(detail.activities.len(), 2);
    }
}

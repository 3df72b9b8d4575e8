use super::MyDataType;
use crate::{FetchError, FetchSnapshot, InvariantViolation, RemoteData, RemoteDataStreamExt, SnapshotStore};
use futures::stream::{self, StreamExt};
use std::time::Duration;

#[tokio::test]
async fn test_until_settled_stops_after_success() {
    let items: Vec<Result<RemoteData<u8>, InvariantViolation>> = vec![
        Ok(RemoteData::Initialized),
        Ok(RemoteData::Pending),
        Ok(RemoteData::success(1)),
        Ok(RemoteData::Pending),
    ];
    let collected: Vec<_> = stream::iter(items).until_settled().collect().await;
    assert_eq!(
        collected,
        vec![
            Ok(RemoteData::Initialized),
            Ok(RemoteData::Pending),
            Ok(RemoteData::success(1)),
        ]
    );
}

#[tokio::test]
async fn test_until_settled_stops_after_failure() {
    let items: Vec<Result<RemoteData<u8>, InvariantViolation>> = vec![
        Ok(RemoteData::Pending),
        Ok(RemoteData::failure(FetchError::Timeout)),
        Ok(RemoteData::success(1)),
    ];
    let collected: Vec<_> = stream::iter(items).until_settled().collect().await;
    assert_eq!(collected.len(), 2);
    assert_eq!(collected[1], Ok(RemoteData::failure(FetchError::Timeout)));
}

#[tokio::test]
async fn test_until_settled_stops_after_invariant_violation() {
    let violation = InvariantViolation::UnknownTag("Loading".to_string());
    let items: Vec<Result<RemoteData<u8>, InvariantViolation>> = vec![
        Err(violation.clone()),
        Ok(RemoteData::success(1)),
    ];
    let collected: Vec<_> = stream::iter(items).until_settled().collect().await;
    assert_eq!(collected, vec![Err(violation)]);
}

#[tokio::test]
async fn test_until_settled_passes_through_end_of_stream() {
    let items: Vec<Result<RemoteData<u8>, InvariantViolation>> = vec![Ok(RemoteData::Pending)];
    let collected: Vec<_> = stream::iter(items).until_settled().collect().await;
    assert_eq!(collected, vec![Ok(RemoteData::Pending)]);
}

#[tokio::test]
async fn test_until_settled_on_store_stream() {
    let store = SnapshotStore::<MyDataType>::default();

    let collaborator = store.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        collaborator.publish(FetchSnapshot::in_flight());
        tokio::time::sleep(Duration::from_millis(20)).await;
        collaborator.publish(FetchSnapshot::with_error(FetchError::network("offline")));
        tokio::time::sleep(Duration::from_millis(20)).await;
        collaborator.publish(FetchSnapshot::in_flight());
    });

    let last = store.to_stream().until_settled().collect::<Vec<_>>().await.pop();
    assert_eq!(last, Some(Ok(RemoteData::failure(FetchError::network("offline")))));
}

use super::MyDataType;
use crate::mock::MockFetcher;
use crate::{query_rd, FetchError, FetchSnapshot, RemoteData, Tag};

const GET_DATA_QUERY: &str = "query getData($opt: String!) { getData(opt: $opt) { data } }";

#[test]
fn test_query_rd_calls_fetcher_once() {
    let fetcher = MockFetcher::<MyDataType>::new();
    let res = query_rd(&fetcher, &GET_DATA_QUERY.to_string()).unwrap();
    assert!(res.rd.is_initialized());
    assert_eq!(fetcher.call_count(), 1);
    assert_eq!(fetcher.calls(), vec![GET_DATA_QUERY.to_string()]);
}

#[test]
fn test_query_rd_keeps_result_and_adds_rd() {
    let fetcher = MockFetcher::<MyDataType>::new();
    fetcher.mock_snapshot(FetchSnapshot::with_data(MyDataType::sample()));

    let res = query_rd(&fetcher, &GET_DATA_QUERY.to_string()).unwrap();
    assert_eq!(res.rd.tag(), Tag::Success);
    assert!(res.called);
    assert!(!res.loading);
    assert_eq!(res.data, Some(MyDataType::sample()));

    let (result, rd) = res.into_parts();
    assert_eq!(result, FetchSnapshot::with_data(MyDataType::sample()));
    assert_eq!(rd, RemoteData::success(MyDataType::sample()));
}

#[test]
fn test_query_rd_with_closure_fetcher() {
    let fetcher = |query: &str| {
        if query.contains("getData") {
            FetchSnapshot::<u32>::with_error(FetchError::graphql(["denied"]))
        } else {
            FetchSnapshot::not_called()
        }
    };

    let res = query_rd(&fetcher, GET_DATA_QUERY).unwrap();
    assert_eq!(res.rd, RemoteData::failure(FetchError::graphql(["denied"])));

    let res = query_rd(&fetcher, "query other { x }").unwrap();
    assert!(res.rd.is_initialized());
}

#[test]
fn test_query_rd_propagates_invariant_violation() {
    let fetcher = MockFetcher::<MyDataType>::new();
    fetcher.mock_snapshot(FetchSnapshot::not_called().set_called(true));

    let violation = query_rd(&fetcher, &GET_DATA_QUERY.to_string()).unwrap_err();
    assert!(violation.is_unmatched_snapshot());
}

#[cfg(feature = "serde")]
#[test]
fn test_query_result_serializes_rd_under_fixed_key() {
    use crate::QueryResultWithRemoteData;
    use serde_json::json;

    let fetcher = MockFetcher::<String>::new();
    fetcher.mock_snapshot(FetchSnapshot::with_data("sample".to_string()));
    let res = query_rd(&fetcher, &GET_DATA_QUERY.to_string()).unwrap();

    let value = serde_json::to_value(&res).unwrap();
    assert_eq!(
        value,
        json!({
            "called": true,
            "loading": false,
            "data": "sample",
            "error": null,
            "_rd": { "tag": "Success", "data": "sample" }
        })
    );

    let back: QueryResultWithRemoteData<FetchSnapshot<String>, String> =
        serde_json::from_value(value).unwrap();
    assert_eq!(back, res);
}

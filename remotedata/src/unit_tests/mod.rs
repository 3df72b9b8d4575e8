use crate::{FetchError, FetchSnapshot};

mod query_test;
mod stream_ext_test;

#[derive(Clone, Debug, PartialEq)]
pub struct MyDataType {
    pub data: String,
}

impl MyDataType {
    pub fn sample() -> Self {
        MyDataType {
            data: "sample".to_string(),
        }
    }
}

pub type TestSnapshot = FetchSnapshot<MyDataType, FetchError>;

/// Every combination of the four snapshot fields.
pub fn all_snapshots() -> Vec<TestSnapshot> {
    let mut snapshots = Vec::new();
    for called in [false, true] {
        for loading in [false, true] {
            for data in [None, Some(MyDataType::sample())] {
                for error in [None, Some(FetchError::network("offline"))] {
                    snapshots.push(FetchSnapshot {
                        called,
                        loading,
                        data: data.clone(),
                        error,
                    });
                }
            }
        }
    }
    snapshots
}

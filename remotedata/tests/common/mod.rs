#![allow(dead_code)]

use remotedata::{FetchError, FetchSnapshot, RemoteData};

pub const GET_DATA_QUERY: &str = r#"
  query getData($opt: String!) {
    getData(opt: $opt) {
      data
    }
  }
"#;

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

/// The lifecycle a well-behaved collaborator walks through for one fetch.
pub fn lifecycle(outcome: Result<MyDataType, FetchError>) -> Vec<FetchSnapshot<MyDataType>> {
    let settled = match outcome {
        Ok(data) => FetchSnapshot::with_data(data),
        Err(error) => FetchSnapshot::with_error(error),
    };
    vec![FetchSnapshot::not_called(), FetchSnapshot::in_flight(), settled]
}

pub fn render(rd: RemoteData<MyDataType>) -> String {
    rd.fold(
        || "Initialized".to_string(),
        || "Loading...".to_string(),
        |error| format!("Error: {}", error.message()),
        |data| format!("This is my data: {}", data.data),
    )
}

use crate::tracing_setup::tracing_init;
use futures::StreamExt;
use remotedata::{fold, query_rd, FetchError, FetchSnapshot, RemoteDataStreamExt, SnapshotStore};
use std::time::Duration;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

mod tracing_setup;

const GET_DATA_QUERY: &str = "query getData($opt: String!) { getData(opt: $opt) { data } }";

#[derive(Debug, Clone, PartialEq)]
struct MyDataType {
    data: String,
}

/// Stands in for the fetch-execution layer: walks one fetch through its
/// snapshots and publishes each of them.
async fn simulated_fetch(
    store: SnapshotStore<MyDataType>,
    token: CancellationToken,
    outcome: Result<MyDataType, FetchError>,
) {
    sleep(Duration::from_millis(100)).await;
    debug!("Worker | fetch started");
    store.publish(FetchSnapshot::in_flight());

    let settled = tokio::select! {
        biased;
        _ = token.cancelled() => FetchSnapshot::with_error(FetchError::Cancelled),
        _ = sleep(Duration::from_millis(200)) => match outcome {
            Ok(data) => FetchSnapshot::with_data(data),
            Err(error) => FetchSnapshot::with_error(error),
        },
    };
    debug!("Worker | fetch settled: {:?}", settled);
    store.publish(settled);
}

async fn observe(store: &SnapshotStore<MyDataType>) {
    let render = fold(
        || "Initialized".to_string(),
        || "Loading...".to_string(),
        |error: FetchError| format!("Error: {}", error.message()),
        |data: MyDataType| format!("This is my data: {}", data.data),
    );

    store
        .to_stream()
        .until_settled()
        .for_each(|rd| {
            match rd {
                Ok(rd) => info!("  Main | render: {}", render(rd)),
                Err(violation) => error!("  Main | {}", violation),
            }
            async {}
        })
        .await;
}

#[tokio::main]
async fn main() {
    tracing_init();

    info!("==========================================");
    warn!("A. fetch completes with data");

    let store = SnapshotStore::<MyDataType>::default();
    tokio::spawn(simulated_fetch(
        store.clone(),
        CancellationToken::new(),
        Ok(MyDataType {
            data: "sample".to_string(),
        }),
    ));
    observe(&store).await;

    info!("==========================================");
    warn!("B. fetch fails with a server error");

    let store = SnapshotStore::<MyDataType>::default();
    tokio::spawn(simulated_fetch(
        store.clone(),
        CancellationToken::new(),
        Err(FetchError::graphql(["getData: permission denied"])),
    ));
    observe(&store).await;

    info!("==========================================");
    warn!("C. fetch cancelled from main");

    let store = SnapshotStore::<MyDataType>::default();
    let token = CancellationToken::new();
    tokio::spawn(simulated_fetch(
        store.clone(),
        token.clone(),
        Ok(MyDataType {
            data: "never seen".to_string(),
        }),
    ));
    let control = token.clone();
    tokio::spawn(async move {
        sleep(Duration::from_millis(150)).await;
        control.cancel();
    });
    observe(&store).await;

    info!("==========================================");
    warn!("D. one-shot query with an injected fetcher");

    let fetcher = |query: &str| {
        debug!("Fetcher | {}", query);
        FetchSnapshot::<MyDataType>::with_data(MyDataType {
            data: "from fetcher".to_string(),
        })
    };
    match query_rd(&fetcher, GET_DATA_QUERY) {
        Ok(res) => info!(
            "  Main | called: {}, loading: {}, _rd: {:?}",
            res.called, res.loading, res.rd
        ),
        Err(violation) => error!("  Main | {}", violation),
    }

    info!("==========================================");
    warn!("E. collaborator breaks its contract");

    let broken = |_: &str| FetchSnapshot::<MyDataType>::not_called().set_called(true);
    if let Err(violation) = query_rd::<_, MyDataType, FetchError, _>(&broken, GET_DATA_QUERY) {
        error!("  Main | {}", violation);
    }

    info!("==========================================");
    info!("  Main | Finish");
}

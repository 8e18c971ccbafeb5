// One seeded bracket server shared by every integration test in the binary.
use std::{
    net::SocketAddr,
    sync::{OnceLock, mpsc},
    time::Duration,
};

use bracket_server::domain::entities::{BracketSummary, TeamView};
use bracket_server::interface_adapters::state::AppState;

static SERVER_ADDR: OnceLock<SocketAddr> = OnceLock::new();

pub struct TestServer {
    addr: SocketAddr,
    client: reqwest::Client,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    // GET with an optional correlation header.
    pub async fn get(&self, path: &str, request_id: Option<&str>) -> reqwest::Response {
        let mut request = self.client.get(self.url(path));
        if let Some(request_id) = request_id {
            request = request.header("x-request-id", request_id);
        }
        request.send().await.expect("request should succeed")
    }
}

pub fn seed_brackets() -> Vec<BracketSummary> {
    vec![
        BracketSummary {
            id: 1,
            name: "NFC Bracket".to_string(),
            predicted_winner: Some(TeamView {
                id: 10,
                name: "Eagles".to_string(),
            }),
        },
        BracketSummary {
            id: 7,
            name: "AFC Bracket".to_string(),
            predicted_winner: None,
        },
    ]
}

// Start the shared server on first use. Each test gets its own client because
// every `#[tokio::test]` runs on a fresh runtime.
pub fn server() -> TestServer {
    let addr = *SERVER_ADDR.get_or_init(spawn_server);

    TestServer {
        addr,
        client: reqwest::Client::new(),
    }
}

fn spawn_server() -> SocketAddr {
    let (addr_tx, addr_rx) = mpsc::channel();

    // A dedicated thread and runtime keep the server alive across test runtimes.
    std::thread::spawn(move || {
        let runtime = tokio::runtime::Runtime::new().expect("test runtime");
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                .await
                .expect("bind ephemeral test port");
            let addr = listener.local_addr().expect("get local addr");
            // The listener is already bound, so connections queue until serve starts.
            addr_tx.send(addr).expect("publish server addr");
            bracket_server::serve(listener, AppState::new(seed_brackets()))
                .await
                .expect("server failed");
        });
    });

    addr_rx
        .recv_timeout(Duration::from_secs(5))
        .expect("server did not bind in time")
}

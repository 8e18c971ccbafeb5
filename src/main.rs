#[tokio::main]
async fn main() {
    bracket_server::run().await;
}

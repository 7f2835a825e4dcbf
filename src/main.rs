#[tokio::main]
async fn main() {
    paceline_gateway::start_server().await;
}

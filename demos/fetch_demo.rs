use relay_client::{FetchOptions, RelayClient};
use reqwest::header::{HeaderValue, ACCEPT};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let base = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:8080".to_string());
    let client = RelayClient::new(&base)?;

    println!("Loading relay configuration...");
    client.load_config().await?;

    let mut options = FetchOptions::default();
    options
        .headers
        .insert(ACCEPT, HeaderValue::from_static("application/json"));

    println!("Fetching status through the relay...");
    let response = client.fetch("status", options).await?;
    println!("Status: {} {}", response.status(), response.status_text());

    if let Some(server) = response.header("server") {
        println!("Origin server: {}", server.to_str().unwrap_or("<binary>"));
    }

    let body = response.text().await?;
    println!("Body: {body}");

    Ok(())
}

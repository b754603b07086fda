use omnibus_rs::{OmnibusClientBuilder, QueryParams};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Reads OMNIBUS_USERNAME / OMNIBUS_PASSWORD (and optionally OMNIBUS_HOST).
    let client = OmnibusClientBuilder::from_env()?.build().await?;
    println!("Logged in to {}", client.host());

    let me = client.me(QueryParams::new()).await?;
    println!("--- user ---\n{me:#}");

    let positions = client
        .iress_positions(QueryParams::new().date("2024-06-28"))
        .await?;
    let count = positions.as_array().map_or(0, Vec::len);
    println!("--- {count} open Iress positions ---");

    Ok(())
}

use chrono::NaiveDate;
use omnibus_rs::{ArrayFormat, Endpoint, OmnibusClientBuilder, OmnibusError, QueryParams};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = OmnibusClientBuilder::from_env()?
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .array_format(ArrayFormat::Indexed)
        .build()
        .await?;

    println!("=== Endpoint catalog ===");
    for endpoint in Endpoint::ALL {
        let filters: Vec<String> = endpoint
            .params()
            .iter()
            .map(|p| {
                if p.required {
                    format!("{}*", p.name)
                } else {
                    p.name.to_string()
                }
            })
            .collect();
        println!(
            "{:<30} /api/{:<28} {}",
            endpoint.method_name(),
            endpoint.path(),
            filters.join(", ")
        );
    }

    let from = NaiveDate::from_ymd_opt(2024, 1, 1).ok_or("bad date")?;
    let to = NaiveDate::from_ymd_opt(2024, 1, 31).ok_or("bad date")?;
    let params = QueryParams::new()
        .from(from)
        .to(to)
        .accounts(["A1", "A2"])
        .currency("EUR,USD");

    println!("\n=== Monthly totals ===");
    for endpoint in [Endpoint::IressMoneyFlowTotals, Endpoint::DevexMoneyFlowTotals] {
        match client.call(endpoint, params.clone()).await {
            Ok(body) => println!("{endpoint}: {body}"),
            Err(OmnibusError::Status { status, body, .. }) => {
                println!("{endpoint}: HTTP {status} {}", body.unwrap_or_default())
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}

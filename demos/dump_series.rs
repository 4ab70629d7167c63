// Dump a dataset's samples as JSON.
//
// Usage: cargo run --example dump_series -- [DB_PATH] [DATASET] [LIMIT]
//   DB_PATH  default: ./solarviz.db
//   DATASET  default: demo
//   LIMIT    default: 10

use solarviz::models::Window;
use solarviz::store_repo::StoreRepo;
use std::env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    let path = args.get(1).map(String::as_str).unwrap_or("./solarviz.db");
    let dataset = args.get(2).map(String::as_str).unwrap_or("demo");
    let limit: usize = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(10);

    let store = StoreRepo::connect(path).await?;
    store.init().await?;
    let samples = store.fetch_series(dataset, Window::unbounded()).await?;

    println!(
        "{}",
        serde_json::to_string_pretty(&samples[..samples.len().min(limit)])?
    );
    Ok(())
}

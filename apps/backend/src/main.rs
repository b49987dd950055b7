#[tokio::main]
async fn main() -> anyhow::Result<()> {
    leetcode_series_backend::run().await
}

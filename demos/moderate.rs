//! Minimal example host: classify a piece of text and print the verdict
//!
//! Usage: OPENAI_API_KEY=sk-... cargo run --example moderate -- "some text"

use aiapiclient::{ApiDispatcher, ModerationApi, ModerationClient, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let input = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "hello world".to_string());

    let settings = Settings::from_env()?;
    let dispatcher = ApiDispatcher::new(settings)?;
    let moderation = ModerationClient::new(dispatcher);

    let response = moderation.classify_text(&input).await?;

    println!("request id: {:?}", response.meta.request_id);
    println!(
        "processed in {} ms",
        response.meta.processing_time.as_millis()
    );
    for result in &response.data.results {
        println!("flagged: {}", result.flagged);
        for (category, verdict) in &result.categories {
            if *verdict {
                let score = result.category_scores.get(category).copied().unwrap_or(0.0);
                println!("  {}: {:.3}", category, score);
            }
        }
    }

    Ok(())
}

//! 过滤器引擎演示
//!
//! 列出全部可用过滤器，加载一份示例配置，并对一条示例记录
//! 逐条求值。

use anyhow::Result;
use filter_engine::{config_from_json, FilterRegistry};
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let registry = FilterRegistry::with_builtins();

    println!("All available:");
    for filter in registry.available() {
        println!("{}", filter);
    }
    println!();

    info!("Loading demo configuration...");
    let config = config_from_json(
        r#"{
            "created_utc.min": 0,
            "created_utc.max": 100,
            "created_utc": 99,
            "created_utc.match": "99",
            "title.match": "Test"
        }"#,
    )?;

    let filters = registry.load(&config)?;
    println!("Loaded Filters:");
    for filter in &filters {
        let (key, value) = filter.to_keyval();
        println!("\t{} = {}", key, value);
    }

    let test_post = json!({
        "created_utc": 99,
        "title": "Test Title"
    });

    println!("\nRunning checks on test: {}", test_post);
    for filter in &filters {
        println!("{} | {}", filter.check(&test_post)?, filter);
    }

    Ok(())
}

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use charfind_client::HttpLookupClient;
use charfind_core::config::Config;
use charfind_core::control::ControlState;
use charfind_core::types::SearchOutcome;
use charfind_pipeline::SearchPipeline;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

/// Interactive character search.
///
/// Each line is treated as one edit of the search field: type a value
/// and press Enter, an empty line clears the field, `quit` exits.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::load()?;
    let search = config.search()?;

    println!("🔍 Character Search");
    println!("===================");
    println!("Endpoint: {}", search.base_url);
    println!("Debounce: {} ms", search.debounce_ms);
    println!("Each line is one edit; an empty line clears the field; 'quit' exits.");
    println!();

    let client = Arc::new(HttpLookupClient::new(search.base_url.clone()));
    let (pipeline, mut outcomes) = SearchPipeline::spawn(client, search.debounce());
    let mut control = pipeline.control();

    // Render outcomes as they arrive, off the input loop.
    let renderer = tokio::spawn(async move {
        while let Some(outcome) = outcomes.recv().await {
            render_outcome(&outcome);
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("search> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let value = line.trim_end_matches(['\r', '\n']).to_string();
        if value == "quit" || value == "exit" {
            break;
        }
        pipeline.input(value);
        // Give the undebounced leg a beat, then show the field state.
        tokio::time::sleep(Duration::from_millis(10)).await;
        render_control(&control.borrow_and_update());
    }

    pipeline.shutdown().await;
    renderer.await?;
    Ok(())
}

fn render_control(state: &ControlState) {
    if state.shows_numbers_only_error() {
        println!("❌ '{}' is not a number - digits only", state.value);
    } else if !state.dirty {
        println!("(field cleared)");
    }
}

fn render_outcome(outcome: &SearchOutcome) {
    match outcome {
        SearchOutcome::Found(record) => {
            let name = record
                .get("name")
                .and_then(|n| n.as_str())
                .unwrap_or("<unnamed>");
            println!("✅ {name}");
            if let Ok(pretty) = serde_json::to_string_pretty(record) {
                println!("{pretty}");
            }
        }
        SearchOutcome::NotFound => println!("❌ No character with that id"),
        SearchOutcome::NotApplicable => println!("(nothing to search)"),
    }
}

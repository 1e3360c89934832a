// roomscape - assemble a 3D room scene from a text description
//
// Pipeline:
//   1. Extract room attributes from the description text
//   2. Optionally summarize a reference photo (dominant colors, aspect)
//   3. Compose the declarative scene and write it as JSON for a viewer
//
// Usage: roomscape "<description>" [--image photo.jpg] [--out scene.json]
//                  [--normalize normalized.jpg] [--delay-ms N]

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use log::info;

use roomscape::imaging::NORMALIZE_TARGET;
use roomscape::session::{SessionConfig, SessionController};
use roomscape::{format_extracted_info, generate_prompt_from_info, normalize};

struct Args {
    description: String,
    image: Option<String>,
    out: String,
    normalize_out: Option<String>,
    delay_ms: u64,
}

fn parse_args() -> Option<Args> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!(
            "Usage: {} \"<description>\" [--image photo.jpg] [--out scene.json] \
             [--normalize normalized.jpg] [--delay-ms N]",
            args[0]
        );
        return None;
    }

    let mut parsed = Args {
        description: args[1].clone(),
        image: None,
        out: "scene.json".to_string(),
        normalize_out: None,
        delay_ms: 0,
    };

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--image" => {
                parsed.image = args.get(i + 1).cloned();
                i += 2;
            }
            "--out" => {
                if let Some(path) = args.get(i + 1) {
                    parsed.out = path.clone();
                }
                i += 2;
            }
            "--normalize" => {
                parsed.normalize_out = args.get(i + 1).cloned();
                i += 2;
            }
            "--delay-ms" => {
                parsed.delay_ms = args
                    .get(i + 1)
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(0);
                i += 2;
            }
            _ => i += 1,
        }
    }

    Some(parsed)
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let Some(args) = parse_args() else {
        std::process::exit(1);
    };

    let controller = SessionController::new(SessionConfig {
        compose_delay: Duration::from_millis(args.delay_ms),
    });

    if let Some(image_path) = &args.image {
        info!("summarizing reference image {}", image_path);
        controller
            .submit_image_file(image_path)
            .await
            .with_context(|| format!("failed to process image {}", image_path))?;

        if let Some(normalize_path) = &args.normalize_out {
            let bytes = tokio::fs::read(image_path).await?;
            let normalized = normalize(&bytes, NORMALIZE_TARGET, NORMALIZE_TARGET)?;
            tokio::fs::write(normalize_path, normalized).await?;
            println!(
                "Normalized image ({0}x{0}) written to {1}",
                NORMALIZE_TARGET, normalize_path
            );
        }
    }

    let scene = controller
        .submit_text(&args.description)
        .await
        .context("scene generation failed")?;

    let snapshot = controller.snapshot().await;
    if let Some(record) = &snapshot.record {
        println!("{}", format_extracted_info(record));
        println!();
        println!("Prompt: {}", generate_prompt_from_info(record));
        println!();
    }

    let json = serde_json::to_string_pretty(&*scene)?;
    tokio::fs::write(&args.out, json).await?;
    println!(
        "Scene with {} primitives written to {}",
        scene.primitives.len(),
        args.out
    );

    Ok(())
}

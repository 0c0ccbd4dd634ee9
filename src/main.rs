use anyhow::Result;
use figma_features::config::Config;
use figma_features::extract::extract_frame_names;
use figma_features::features::FeatureGenerator;
use figma_features::figma::FigmaClient;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter("figma_features=info")
        .init();

    let Some(config) = Config::from_env() else {
        println!(
            "FIGMA_TOKEN, FIGMA_FILE_KEY and OPENAI_API_KEY environment variables \
             must be set to run figma-features."
        );
        return Ok(());
    };

    let figma_client =
        FigmaClient::with_base_url(config.figma_token, config.figma_base_url)?;
    info!("Fetching Figma file {}", config.figma_file_key);
    let file_data = figma_client.get_file(&config.figma_file_key).await?;

    let frame_names = extract_frame_names(&file_data);
    if frame_names.is_empty() {
        println!("No frames were found in the Figma document.");
        return Ok(());
    }
    println!(
        "Found {} top-level frame(s): {}",
        frame_names.len(),
        frame_names.join(", ")
    );

    let generator = FeatureGenerator::new(config.openai_api_key, config.generation)?;
    let features = generator.generate(&frame_names).await?;

    println!("\nGenerated feature suggestions:\n");
    for feature in &features {
        println!("- {}: {}", feature.title, feature.description);
    }

    Ok(())
}

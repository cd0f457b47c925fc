use clap::{Parser, Subcommand};
use serde_json::Value;

use video_gateway::VideoRequest;

#[derive(Parser)]
#[command(name = "gateway-cli")]
#[command(about = "Command line client for the video gateway", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the gateway is running
    Status,
    /// Submit a video for processing
    Submit {
        /// Location of the video
        video_url: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let res = match cli.command {
        Commands::Status => client.get(format!("{}/", cli.url)).send().await?,
        Commands::Submit { video_url } => {
            client
                .post(format!("{}/videos", cli.url))
                .json(&VideoRequest::new(video_url))
                .send()
                .await?
        }
    };

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;
    let rendered = match serde_json::from_str::<Value>(&text) {
        Ok(json) => serde_json::to_string_pretty(&json)?,
        Err(_) => text,
    };

    if status.is_success() {
        println!("{}", rendered);
        Ok(())
    } else {
        eprintln!("Error: gateway returned status {}", status);
        eprintln!("{}", rendered);
        Err(format!("request failed with status {}", status).into())
    }
}

use clap::Parser;
use resizefn::config::RawInput;
use resizefn::{handler, invoker};
use resizefn_core::ErrorPayload;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "resizefn")]
#[command(about = "Serverless image-resize function invoker", long_about = None)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", env = "RESIZEFN_LOG_LEVEL")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Diagnostics go to stderr; stdout carries only the result line.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("resizefn={}", args.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let input = RawInput::from_env();

    match invoker::invoke(&input, handler::resize_image).await {
        Ok(response) => {
            let line = serde_json::to_string(&response)
                .unwrap_or_else(|_| format!(r#"{{"message":"{}"}}"#, response.message));
            println!("{line}");
            // Normal termination signals success; no explicit exit(0).
        }
        Err(err) => {
            eprintln!("{}", ErrorPayload::from(&err).to_json());
            std::process::exit(1);
        }
    }
}

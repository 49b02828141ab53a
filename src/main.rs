use formcheck::config::Configuration;
use formcheck::coordinator::{CoordinatorBuilder, UiEvent};
use formcheck::error::AppError;
use tracing::Level;

fn init_logging() {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    init_logging();
    let configuration = Configuration::load("formcheck")?;

    let mut coordinator = CoordinatorBuilder::new(configuration).build();
    let mut outputs = coordinator
        .take_outputs()
        .expect("outputs taken once at startup");

    // Print UI events as JSON lines until the detector side hangs up or
    // the process is interrupted.
    let printer = tokio::spawn(async move {
        while let Some(event) = outputs.recv().await {
            match serde_json::to_string(&event) {
                Ok(line) => println!("{line}"),
                Err(e) => tracing::error!("Failed to serialize UI event: {}", e),
            }
            if let UiEvent::Frame(output) = event {
                tracing::info!(
                    good = output.good_reps,
                    bad = output.bad_reps,
                    "{}",
                    output.feedback
                );
            }
        }
    });

    tracing::info!("formcheck ready, waiting for detector frames");
    tokio::signal::ctrl_c()
        .await
        .expect("ctrl_c handler installs on all supported platforms");
    coordinator.stop();
    printer.abort();
    Ok(())
}

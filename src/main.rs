use std::sync::Arc;

use dotenvy::dotenv;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;

use stockcast::chart::ChartSeries;
use stockcast::config::BackendConfig;
use stockcast::controller::{Phase, WorkflowController, WorkflowState};
use stockcast::logger::setup_logger;
use stockcast::registry::SymbolRegistry;
use stockcast::remote::BackendClient;
use stockcast::services::{PredictionService, ValidationService};

const HELP: &str = "commands: list | select <SYMBOL> | search <text> | predict | state | quit";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_logger();
    dotenv().ok();

    let config = BackendConfig::from_env();
    info!("Using backend at {}", config.base_url);

    let client = BackendClient::new(config);
    let mut controller = WorkflowController::new(
        SymbolRegistry::popular(),
        Arc::new(ValidationService::new(client.clone())),
        Arc::new(PredictionService::new(client)),
    );

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    stdout.write_all(format!("{HELP}\n").as_bytes()).await?;
    stdout.write_all(b"> ").await?;
    stdout.flush().await?;

    while let Some(line) = lines.next_line().await? {
        let mut parts = line.trim().splitn(2, ' ');
        let command = parts.next().unwrap_or_default();
        let argument = parts.next().unwrap_or_default();

        match command {
            "" => {}
            "quit" | "exit" => break,
            "list" => {
                for chunk in controller.registry().symbols().chunks(10) {
                    let row: Vec<&str> = chunk.iter().map(|s| s.as_str()).collect();
                    stdout
                        .write_all(format!("  {}\n", row.join(" ")).as_bytes())
                        .await?;
                }
            }
            "select" => {
                if !controller.select_from_list(argument) {
                    stdout
                        .write_all(b"not in the popular list; try `search` instead\n")
                        .await?;
                }
            }
            "search" => {
                if let Err(e) = controller.submit_search(argument) {
                    stdout.write_all(format!("{e}\n").as_bytes()).await?;
                }
            }
            "predict" => {
                if !controller.request_prediction() {
                    stdout
                        .write_all(b"select or search a valid symbol first\n")
                        .await?;
                }
            }
            "state" => {}
            _ => {
                stdout.write_all(format!("{HELP}\n").as_bytes()).await?;
            }
        }

        controller.pump().await;
        stdout
            .write_all(render_state(controller.state()).as_bytes())
            .await?;
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;
    }

    Ok(())
}

fn render_state(state: &WorkflowState) -> String {
    let mut out = String::new();
    let symbol = state
        .selected_symbol
        .as_ref()
        .map(|s| s.as_str())
        .unwrap_or("-");
    out.push_str(&format!(
        "[{:?}] symbol={} valid={} {}\n",
        state.phase, symbol, state.is_valid, state.status_message
    ));

    if let Some(error) = &state.error {
        out.push_str(&format!("error: {error}\n"));
    }

    if state.phase == Phase::Results {
        if let Some(forecast) = &state.forecast {
            out.push_str(&format!(
                "current: high {:.2} / low {:.2}\n",
                forecast.current_high, forecast.current_low
            ));
            match ChartSeries::from_forecast(forecast) {
                Ok(series) => {
                    for (i, label) in series.labels.iter().enumerate() {
                        out.push_str(&format!(
                            "{label}: high {:.2} / low {:.2}\n",
                            series.high_series[i], series.low_series[i]
                        ));
                    }
                }
                Err(e) => out.push_str(&format!("chart error: {e}\n")),
            }
        }
    }

    out
}

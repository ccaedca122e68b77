use stockvol::{RuntimeSettings, build_chart, pipeline, prompt, render};
use stockvol_core::HistoryProvider;
use stockvol_mock::MockConnector;
use stockvol_yfinance::YfConnector;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=info,stockvol=debug,stockvol_yfinance=debug
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();

    let settings = RuntimeSettings::from_env()?;

    let mut config = {
        let stdin = std::io::stdin();
        let mut input = stdin.lock();
        let mut output = std::io::stdout();
        prompt::read_config(&mut input, &mut output)?
    };
    if let Some(window) = settings.window {
        config = config.with_window(window);
    }

    let connector: Box<dyn HistoryProvider> = if settings.use_mock {
        Box::new(MockConnector::new())
    } else {
        Box::new(YfConnector::try_new_default()?)
    };

    let report = pipeline::run(connector.as_ref(), &config).await?;
    println!("Calculated Volatility: {}", report.format_volatility());

    render(&build_chart(&report), &settings.chart)?;
    Ok(())
}

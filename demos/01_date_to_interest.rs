/// date to interest - 30/360 day count feeding the interest form
use interest_desk::{AppConfig, AppContext, InterestMode, SafeTimeProvider, TimeSource};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = AppConfig::from_env()?;
    let time = SafeTimeProvider::new(TimeSource::from_env());
    let mut app = AppContext::from_config(config, time)?;

    let span = app.calculate_dates("2020-01-01", "2023-06-15")?;
    println!("30/360 days: {} ({})", span.total_days, span.breakdown);

    app.form.principal = "50000".to_string();
    app.form.rate = "2".to_string();
    app.form.mode = InterestMode::Custom;
    app.form.simple_years = "2".to_string();

    let outcome = app.calculate_interest().await?;
    println!("simple:   {}", outcome.formatted.simple_interest);
    println!("compound: {}", outcome.formatted.compound_interest);
    println!("total:    {}", outcome.formatted.total);

    println!("\nhistory:");
    for line in app.interest_history_lines() {
        println!("  {line}");
    }

    Ok(())
}

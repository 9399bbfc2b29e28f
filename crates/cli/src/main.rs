fn main() -> anyhow::Result<()> {
    quizbank_observability::init();

    let report = quizbank_cli::run()?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    tracing::info!("demo complete");
    Ok(())
}

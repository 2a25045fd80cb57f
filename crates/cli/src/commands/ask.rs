//! `shopmate ask` — Answer a single query and exit.

pub async fn run(query: &str) -> Result<(), Box<dyn std::error::Error>> {
    let agent = super::build_agent()?;
    let reply = agent.handle(query).await?;
    println!("{reply}");
    Ok(())
}

//! `shopmate demo` — Run the built-in showcase queries.

const DEMO_QUERIES: &[&str] = &[
    "Find a floral skirt under $140 in size S. Is it in stock, and can I apply a discount code 'SAVE10'?",
    "I need white sneakers (size 8) for under $80 that can arrive by Monday.",
    "I found a 'casual denim jacket' at $79 on StoreA. Any better deals?",
    "I want to buy a cocktail dress from StoreB, but only if returns are hassle-free. Do they accept returns?",
];

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let agent = super::build_agent()?;

    println!();
    println!("  Shopmate — Demo Queries");
    println!();

    for query in DEMO_QUERIES {
        println!("  You > {query}");
        let reply = agent.handle(query).await?;
        for line in reply.lines() {
            println!("  Assistant > {line}");
        }
        println!();
    }

    Ok(())
}

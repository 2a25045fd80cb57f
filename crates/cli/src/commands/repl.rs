//! `shopmate repl` — Interactive query loop.

use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let agent = super::build_agent()?;

    println!();
    println!("  Shopmate — Interactive Mode");
    println!();
    println!("  Ask about products, prices, shipping, returns, or discounts.");
    println!("  Type 'exit' or Ctrl+C to quit.");
    println!();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    print!("  You > ");
    std::io::stdout().flush()?;

    while let Some(line) = lines.next_line().await? {
        let query = line.trim();
        if query.eq_ignore_ascii_case("exit") || query.eq_ignore_ascii_case("quit") {
            break;
        }

        match agent.handle(query).await {
            Ok(reply) => {
                println!();
                for line in reply.lines() {
                    println!("  Assistant > {line}");
                }
                println!();
            }
            Err(e) => {
                eprintln!("  [Error] {e}");
                println!();
            }
        }

        print!("  You > ");
        std::io::stdout().flush()?;
    }

    println!();
    println!("  Goodbye!");
    println!();
    Ok(())
}

use pony_maze::{init_logging, AutoNavigator, InMemoryGateway, MazeClient};
use serde_json::json;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if !(2..=4).contains(&args.len()) {
        eprintln!("Usage: {} <seed> [width] [height]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let width: u32 = args.get(2).map(|w| w.parse::<u32>()).transpose()?.unwrap_or(15);
    let height: u32 = args.get(3).map(|h| h.parse::<u32>()).transpose()?.unwrap_or(width);

    let navigator = AutoNavigator::new(width, height, "Fluttershy");
    let gateway = InMemoryGateway::with_seed(seed);
    let mut client = MazeClient::new(Box::new(navigator), Box::new(gateway));
    client.run().await?;

    let game = client
        .last_game()
        .ok_or_else(|| anyhow::anyhow!("no game was played"))?;
    let result = json!({
        "maze_id": game.maze_id,
        "width": width,
        "height": height,
        "moves": game.moves,
        "status": game.status.to_string(),
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}

//! Play a scripted flood-fill game and print each intermediate state

use gridfill::{DenseGrid, FloodGame, GameStatus};

fn main() -> gridfill::Result<()> {
    let board = DenseGrid::from_fn(4, 4, |x, y| (x * 3 + y * 5) % 3)?;
    println!("Board:\n{board}\n");

    let mut game = FloodGame::new(&board, 8)?;
    for colour in [1, 2, 0, 1, 2] {
        if game.status() != GameStatus::InProgress {
            break;
        }
        let status = game.flood(colour);
        println!(
            "flood({colour}) -> {status}, {} colours left, {} moves left",
            game.remaining_colours(),
            game.moves_left()
        );
        println!("{}\n", game.state());
    }

    println!("Finished after {} moves: {}", game.moves_made(), game.status());
    Ok(())
}

//! Development client that plays the game automatically.
//!
//! Connects to a running server, echoes everything it receives, and each
//! time the solution prompt appears it recovers the board from the
//! transcript, solves it with the puzzle crate, and submits the presses.
//! Exits when the server closes the connection.

use puzzle::{parse_glyphs, solve, Board, OFF_GLYPH, ON_GLYPH};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let addr = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "127.0.0.1:1337".to_string());

    let mut stream = TcpStream::connect(&addr).await?;
    println!("Connected to {}", addr);

    let mut transcript: Vec<u8> = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        print!("{}", String::from_utf8_lossy(&chunk[..n]));
        transcript.extend_from_slice(&chunk[..n]);

        if transcript.ends_with(b"Your Solution: ") {
            let text = String::from_utf8_lossy(&transcript).into_owned();
            let board = extract_board(&text)?;
            let solution =
                solve(&board).ok_or("server presented an unsolvable board")?;

            let glyphs: String = solution
                .iter()
                .map(|&press| if press == 1 { ON_GLYPH } else { OFF_GLYPH })
                .collect();
            println!("{}", glyphs);

            stream.write_all(glyphs.as_bytes()).await?;
            stream.write_all(b"\n").await?;
            transcript.clear();
        }
    }

    println!("\nServer closed the connection");
    Ok(())
}

/// Pulls the most recently presented board grid out of the transcript.
fn extract_board(transcript: &str) -> Result<Board, Box<dyn std::error::Error>> {
    let block = transcript
        .rsplit("Lights Out Board:\n\n")
        .next()
        .ok_or("no board in transcript")?;

    let rows: Vec<&str> = block
        .lines()
        .take_while(|line| {
            !line.is_empty() && line.chars().all(|c| c == ON_GLYPH || c == OFF_GLYPH)
        })
        .collect();

    let n = rows.len();
    if n == 0 || rows.iter().any(|row| row.len() != n) {
        return Err("malformed board grid".into());
    }

    let cells = rows.iter().flat_map(|row| parse_glyphs(row)).collect();
    Ok(Board::from_cells(n, cells))
}

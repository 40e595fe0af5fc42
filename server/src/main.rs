use clap::Parser;
use server::network::Server;
use server::session::SessionConfig;
use std::time::Duration;

/// Main-method of the application.
/// Parses command-line arguments, then serves puzzle sessions until interrupted.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Command line arguments
    #[derive(Parser, Debug)]
    #[clap(author, version, about)]
    struct Args {
        /// Server IP address to bind to
        #[clap(short = 'H', long, default_value = "0.0.0.0")]
        host: String,
        /// Server port to listen on
        #[clap(short, long, default_value = "1337")]
        port: u16,
        /// Seconds a client gets to answer each board
        #[clap(short, long, default_value = "10")]
        timeout: u64,
        /// Smallest board edge length
        #[clap(long, default_value = "15")]
        min_size: usize,
        /// Largest board edge length
        #[clap(long, default_value = "25")]
        max_size: usize,
        /// Text sent to a client that solves a board
        #[clap(long, default_value = "corctf{freshman_math_class_throwback}")]
        flag: String,
    }

    // Parse command line arguments
    let args = Args::parse();

    env_logger::init();

    if args.min_size == 0 || args.min_size > args.max_size {
        return Err(format!(
            "invalid board size range {}..={}",
            args.min_size, args.max_size
        )
        .into());
    }

    let config = SessionConfig {
        board_sizes: args.min_size..=args.max_size,
        input_timeout: Duration::from_secs(args.timeout),
        flag: args.flag,
    };

    let address = format!("{}:{}", args.host, args.port);
    let server = Server::new(&address, config).await?;

    // Handle shutdown gracefully
    tokio::select! {
        result = server.run() => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            println!("Received Ctrl+C, shutting down gracefully...");
        }
    }

    Ok(())
}

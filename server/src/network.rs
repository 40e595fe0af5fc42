//! TCP accept loop dispatching one puzzle session per connection

use crate::session::{run_session, SessionConfig};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;
use std::net::SocketAddr;
use tokio::io::BufReader;
use tokio::net::TcpListener;

/// Listening server that hands each accepted connection its own session.
pub struct Server {
    listener: TcpListener,
    config: SessionConfig,
}

impl Server {
    /// Binds the listener and stores the session configuration.
    pub async fn new(addr: &str, config: SessionConfig) -> io::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        info!("Server listening on {}", listener.local_addr()?);
        Ok(Self { listener, config })
    }

    /// Address the listener actually bound to (relevant with port 0).
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accepts connections forever, spawning an independent task per client.
    ///
    /// Sessions own all of their state, so a session stuck in its board
    /// retry loop or waiting on input never blocks the others.
    pub async fn run(&self) -> io::Result<()> {
        loop {
            let (stream, peer) = self.listener.accept().await?;
            info!("Client connected from {}", peer);

            let config = self.config.clone();
            tokio::spawn(async move {
                let (read_half, mut write_half) = stream.into_split();
                let mut reader = BufReader::new(read_half);
                let mut rng = StdRng::from_entropy();

                match run_session(&config, &mut rng, &mut reader, &mut write_half).await {
                    Ok(()) => info!("Session with {} ended", peer),
                    Err(e) => warn!("Session with {} failed: {}", peer, e),
                }
            });
        }
    }
}

//! Inbound host messages over TCP.
//!
//! The host connects and writes one JSON message per line. Each non-empty
//! line is forwarded as raw bytes; decoding happens in the bridge so that
//! malformed input is logged in one place. Any number of connections may be
//! open at once. A line longer than [`MAX_LINE_LEN`] closes its connection.

use std::net::SocketAddr;

use tokio::{
    io::{AsyncBufReadExt, AsyncReadExt, BufReader},
    net::{TcpListener, TcpStream},
    sync::mpsc,
    task::JoinHandle,
};

use crate::TransportError;

/// Longest accepted host message, excluding the newline.
pub const MAX_LINE_LEN: usize = 64 * 1024;

/// TCP listener for host pushes.
pub struct HostListener {
    listener: TcpListener,
}

impl HostListener {
    /// Bind to `address`.
    pub async fn bind(address: &str) -> Result<Self, TransportError> {
        let addr: SocketAddr = address
            .parse()
            .map_err(|e| TransportError::Config(format!("invalid listen address '{address}': {e}")))?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!(%addr, "listening for host messages");
        Ok(Self { listener })
    }

    /// Local address the listener is bound to.
    pub fn local_addr(&self) -> Result<SocketAddr, TransportError> {
        Ok(self.listener.local_addr()?)
    }

    /// Accept connections until the receiver is dropped.
    pub async fn run(self, messages: mpsc::Sender<Vec<u8>>) -> Result<(), TransportError> {
        loop {
            let (stream, peer) = tokio::select! {
                accepted = self.listener.accept() => accepted?,
                () = messages.closed() => return Ok(()),
            };

            tracing::debug!(%peer, "host connected");
            let messages = messages.clone();
            tokio::spawn(async move {
                if let Err(e) = read_lines(stream, messages).await {
                    tracing::warn!(%peer, error = %e, "host connection failed");
                }
                tracing::debug!(%peer, "host disconnected");
            });
        }
    }

    /// Run the accept loop on a background task.
    pub fn spawn(self, messages: mpsc::Sender<Vec<u8>>) -> JoinHandle<()> {
        tokio::spawn(async move {
            if let Err(e) = self.run(messages).await {
                tracing::warn!(error = %e, "host listener stopped");
            }
        })
    }
}

async fn read_lines(
    stream: TcpStream,
    messages: mpsc::Sender<Vec<u8>>,
) -> Result<(), TransportError> {
    let mut reader = BufReader::new(stream);
    let mut line = Vec::new();

    loop {
        line.clear();
        let limit = MAX_LINE_LEN as u64 + 1;
        if (&mut reader).take(limit).read_until(b'\n', &mut line).await? == 0 {
            return Ok(());
        }
        if line.last() != Some(&b'\n') && line.len() > MAX_LINE_LEN {
            return Err(TransportError::LineTooLong { limit: MAX_LINE_LEN });
        }

        let message = line.trim_ascii();
        if message.is_empty() {
            continue;
        }
        if messages.send(message.to_vec()).await.is_err() {
            return Ok(());
        }
    }
}

use async_trait::async_trait;
use std::io;
use std::net::SocketAddr;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// Per-request handle used to answer one client.
#[async_trait]
pub trait ResponseWriter: Send {
    fn peer(&self) -> SocketAddr;

    async fn write_message(&mut self, bytes: &[u8]) -> io::Result<()>;

    fn close(&mut self) -> io::Result<()>;
}

/// Owns a writer for the lifetime of one request and closes it on drop,
/// whichever path the request took.
pub struct ScopedResponseWriter<W: ResponseWriter> {
    inner: W,
}

impl<W: ResponseWriter> ScopedResponseWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }
}

impl<W: ResponseWriter> Deref for ScopedResponseWriter<W> {
    type Target = W;

    fn deref(&self) -> &W {
        &self.inner
    }
}

impl<W: ResponseWriter> DerefMut for ScopedResponseWriter<W> {
    fn deref_mut(&mut self) -> &mut W {
        &mut self.inner
    }
}

impl<W: ResponseWriter> Drop for ScopedResponseWriter<W> {
    fn drop(&mut self) {
        if let Err(e) = self.inner.close() {
            warn!(client = %self.inner.peer(), error = %e, "Error closing connection");
        }
    }
}

/// Replies through the shared listening socket.
pub struct UdpResponseWriter {
    socket: Arc<UdpSocket>,
    peer: SocketAddr,
    closed: bool,
}

impl UdpResponseWriter {
    pub fn new(socket: Arc<UdpSocket>, peer: SocketAddr) -> Self {
        Self {
            socket,
            peer,
            closed: false,
        }
    }
}

#[async_trait]
impl ResponseWriter for UdpResponseWriter {
    fn peer(&self) -> SocketAddr {
        self.peer
    }

    async fn write_message(&mut self, bytes: &[u8]) -> io::Result<()> {
        if self.closed {
            return Err(io::Error::new(
                io::ErrorKind::NotConnected,
                "response writer already closed",
            ));
        }
        let sent = self.socket.send_to(bytes, self.peer).await?;
        debug!(client = %self.peer, bytes = sent, "Reply sent");
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        if self.closed {
            return Err(io::Error::new(
                io::ErrorKind::NotConnected,
                "response writer already closed",
            ));
        }
        self.closed = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_udp_writer_sends_to_peer() {
        let server = Arc::new(UdpSocket::bind("127.0.0.1:0").await.unwrap());
        let client = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let client_addr = client.local_addr().unwrap();

        let mut writer = UdpResponseWriter::new(server, client_addr);
        writer.write_message(b"reply").await.unwrap();

        let mut buf = [0u8; 16];
        let (len, _) = client.recv_from(&mut buf).await.unwrap();
        assert_eq!(&buf[..len], b"reply");
    }

    #[tokio::test]
    async fn test_udp_writer_rejects_use_after_close() {
        let server = Arc::new(UdpSocket::bind("127.0.0.1:0").await.unwrap());
        let peer: SocketAddr = "127.0.0.1:9".parse().unwrap();

        let mut writer = UdpResponseWriter::new(server, peer);
        assert!(writer.close().is_ok());
        assert!(writer.close().is_err());
        assert!(writer.write_message(b"late").await.is_err());
    }
}

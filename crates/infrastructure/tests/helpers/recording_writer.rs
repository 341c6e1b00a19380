#![allow(dead_code)]
use async_trait::async_trait;
use masq_dns_infrastructure::dns::ResponseWriter;
use std::io;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
pub struct WriterLog {
    pub replies: Vec<Vec<u8>>,
    pub closed: usize,
}

/// Captures replies and close calls; the log outlives the writer.
pub struct RecordingWriter {
    peer: SocketAddr,
    log: Arc<Mutex<WriterLog>>,
}

impl RecordingWriter {
    pub fn new() -> (Self, Arc<Mutex<WriterLog>>) {
        let log = Arc::new(Mutex::new(WriterLog::default()));
        let writer = Self {
            peer: "192.168.1.100:40000".parse().unwrap(),
            log: log.clone(),
        };
        (writer, log)
    }
}

#[async_trait]
impl ResponseWriter for RecordingWriter {
    fn peer(&self) -> SocketAddr {
        self.peer
    }

    async fn write_message(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.log.lock().unwrap().replies.push(bytes.to_vec());
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        self.log.lock().unwrap().closed += 1;
        Ok(())
    }
}

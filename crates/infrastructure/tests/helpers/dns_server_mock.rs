#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType, OpCode};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{RData, Record};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::{Arc, Mutex};
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// One A record per address, owned by the name that was asked.
    Answer(Vec<Ipv4Addr>),
    /// NOERROR with an empty answer section.
    Empty,
    /// Never replies.
    Silent,
}

/// Upstream stub on 127.0.0.1 recording every query name it receives.
pub struct MockDnsServer {
    addr: SocketAddr,
    received: Arc<Mutex<Vec<String>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(behavior: MockBehavior) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let addr = socket.local_addr()?;
        let received = Arc::new(Mutex::new(Vec::new()));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let log = received.clone();
        tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            if let Some(response) = Self::build_mock_response(&buf[..len], &behavior, &log) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            received,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// `host:port` as written in a pool.
    pub fn endpoint(&self) -> String {
        self.addr.to_string()
    }

    pub fn received_names(&self) -> Vec<String> {
        self.received.lock().unwrap().clone()
    }

    fn build_mock_response(
        query: &[u8],
        behavior: &MockBehavior,
        log: &Mutex<Vec<String>>,
    ) -> Option<Vec<u8>> {
        let request = Message::from_vec(query).ok()?;
        let question = request.queries().first()?.clone();
        log.lock().unwrap().push(question.name().to_ascii());

        let answers = match behavior {
            MockBehavior::Silent => return None,
            MockBehavior::Empty => vec![],
            MockBehavior::Answer(ips) => ips
                .iter()
                .map(|ip| Record::from_rdata(question.name().clone(), 60, RData::A(A(*ip))))
                .collect(),
        };

        let mut response = Message::new(request.id(), MessageType::Response, OpCode::Query);
        response.set_recursion_desired(request.recursion_desired());
        response.set_recursion_available(true);
        response.add_query(question);
        response.add_answers(answers);

        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);
        response.emit(&mut encoder).ok()?;
        Some(buf)
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

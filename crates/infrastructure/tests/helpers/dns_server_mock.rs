#![allow(dead_code)]
use std::collections::HashMap;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

/// How the mock server answers one query type.
#[derive(Clone, Debug)]
pub enum MockAnswer {
    /// NOERROR with one answer per rdata, owner name copied from the question.
    Records(Vec<Vec<u8>>),
    /// Empty reply carrying this RCODE.
    Rcode(u8),
    /// Never replies over UDP.
    Silent,
    /// UDP reply has TC set and no answers; TCP reply carries the records.
    Truncated(Vec<Vec<u8>>),
    /// Reply with a transaction ID that does not match the query.
    WrongId,
}

pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Vec<oneshot::Sender<()>>,
}

impl MockDnsServer {
    /// Starts UDP and TCP listeners on the same ephemeral loopback port.
    ///
    /// Types with no entry in `answers` get NOERROR with an empty answer section.
    pub async fn start(answers: HashMap<u16, MockAnswer>) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let addr = socket.local_addr()?;
        let listener = TcpListener::bind(addr).await?;

        let answers = Arc::new(answers);
        let (udp_tx, mut udp_rx) = oneshot::channel();
        let (tcp_tx, mut tcp_rx) = oneshot::channel();

        let udp_answers = answers.clone();
        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut udp_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            if let Some(response) = build_response(&buf[..len], &udp_answers, false) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        let tcp_answers = answers;
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = &mut tcp_rx => {
                        break;
                    }
                    result = listener.accept() => {
                        let Ok((mut stream, _)) = result else { continue };
                        let answers = tcp_answers.clone();
                        tokio::spawn(async move {
                            let mut len_buf = [0u8; 2];
                            if stream.read_exact(&mut len_buf).await.is_err() {
                                return;
                            }
                            let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
                            if stream.read_exact(&mut query).await.is_err() {
                                return;
                            }
                            if let Some(response) = build_response(&query, &answers, true) {
                                let _ = stream.write_all(&(response.len() as u16).to_be_bytes()).await;
                                let _ = stream.write_all(&response).await;
                            }
                        });
                    }
                }
            }
        });

        Ok(Self {
            addr,
            shutdown_tx: vec![udp_tx, tcp_tx],
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn shutdown(mut self) {
        for tx in self.shutdown_tx.drain(..) {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        for tx in self.shutdown_tx.drain(..) {
            let _ = tx.send(());
        }
    }
}

/// Returns `(qtype, end of question section)`.
fn parse_question(query: &[u8]) -> Option<(u16, usize)> {
    if query.len() < 12 {
        return None;
    }
    let mut pos = 12;
    while *query.get(pos)? != 0 {
        pos += query[pos] as usize + 1;
    }
    let qtype = u16::from_be_bytes([*query.get(pos + 1)?, *query.get(pos + 2)?]);
    // zero byte + QTYPE + QCLASS
    Some((qtype, pos + 5))
}

fn build_response(
    query: &[u8],
    answers: &HashMap<u16, MockAnswer>,
    over_tcp: bool,
) -> Option<Vec<u8>> {
    let (qtype, question_end) = parse_question(query)?;
    if question_end > query.len() {
        return None;
    }

    let mut id = [query[0], query[1]];
    let mut rcode = 0u8;
    let mut truncated = false;
    let mut rdatas: Vec<Vec<u8>> = Vec::new();

    match answers.get(&qtype) {
        None => {}
        Some(MockAnswer::Records(records)) => rdatas = records.clone(),
        Some(MockAnswer::Rcode(code)) => rcode = *code,
        Some(MockAnswer::Silent) if !over_tcp => return None,
        Some(MockAnswer::Silent) => {}
        Some(MockAnswer::Truncated(records)) => {
            if over_tcp {
                rdatas = records.clone();
            } else {
                truncated = true;
            }
        }
        Some(MockAnswer::WrongId) => id = [query[0] ^ 0xff, query[1] ^ 0xff],
    }

    let mut response = Vec::with_capacity(512);
    response.extend_from_slice(&id);
    // QR + RD, TC when truncated
    response.push(0x81 | if truncated { 0x02 } else { 0x00 });
    // RA + RCODE
    response.push(0x80 | (rcode & 0x0f));
    response.extend_from_slice(&[0x00, 0x01]);
    response.extend_from_slice(&(rdatas.len() as u16).to_be_bytes());
    response.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);
    response.extend_from_slice(&query[12..question_end]);

    for rdata in &rdatas {
        response.extend_from_slice(&[0xc0, 0x0c]);
        response.extend_from_slice(&qtype.to_be_bytes());
        response.extend_from_slice(&[0x00, 0x01]);
        response.extend_from_slice(&300u32.to_be_bytes());
        response.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        response.extend_from_slice(rdata);
    }

    Some(response)
}

pub fn encode_name(name: &str) -> Vec<u8> {
    let mut out = Vec::new();
    for label in name.trim_end_matches('.').split('.').filter(|l| !l.is_empty()) {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);
    out
}

pub fn a(ip: &str) -> Vec<u8> {
    ip.parse::<Ipv4Addr>().unwrap().octets().to_vec()
}

pub fn aaaa(ip: &str) -> Vec<u8> {
    ip.parse::<Ipv6Addr>().unwrap().octets().to_vec()
}

pub fn mx(preference: u16, exchange: &str) -> Vec<u8> {
    let mut out = preference.to_be_bytes().to_vec();
    out.extend(encode_name(exchange));
    out
}

pub fn txt(text: &str) -> Vec<u8> {
    let mut out = vec![text.len() as u8];
    out.extend_from_slice(text.as_bytes());
    out
}

pub fn ptr(name: &str) -> Vec<u8> {
    encode_name(name)
}

//! The SMF's N4 client toward a UPF (§6.2): Session
//! Establishment/Modification/Deletion over UDP/8805, with the jittered
//! retransmission policy §6.2 names (3 attempts, base 1s, cap 8s) — distinct
//! from the SBI HTTP `RetryPolicy` in `common::sbi`.

use pfcp::ie::Ie;
use pfcp::message::association_setup_request::AssociationSetupRequestBuilder;
use pfcp::message::association_setup_response::AssociationSetupResponse;
use pfcp::message::session_deletion_request::SessionDeletionRequestBuilder;
use pfcp::message::session_deletion_response::SessionDeletionResponse;
use pfcp::message::session_establishment_request::SessionEstablishmentRequestBuilder;
use pfcp::message::session_establishment_response::SessionEstablishmentResponse;
use pfcp::message::session_modification_request::SessionModificationRequestBuilder;
use pfcp::message::session_modification_response::SessionModificationResponse;
use pfcp::message::Message;
use rand::Rng;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{Duration, SystemTime};
use tokio::net::UdpSocket;
use tokio::time::timeout;

const MAX_ATTEMPTS: u32 = 3;
const BASE_DELAY: Duration = Duration::from_secs(1);
const MAX_DELAY: Duration = Duration::from_secs(8);
const RESPONSE_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Debug, thiserror::Error)]
pub enum PfcpClientError {
    #[error("no response from upf {0} after {1} attempts")]
    NoResponse(SocketAddr, u32),
    #[error("udp transport error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed pfcp response: {0}")]
    Decode(String),
}

impl From<pfcp::error::PfcpError> for PfcpClientError {
    fn from(err: pfcp::error::PfcpError) -> Self {
        PfcpClientError::Decode(err.to_string())
    }
}

fn backoff(attempt: u32) -> Duration {
    let exp = BASE_DELAY.saturating_mul(1u32 << attempt.min(3));
    let capped = exp.min(MAX_DELAY);
    let jitter_bound = (capped.as_millis() as u64 / 4).max(1);
    let jitter_ms = rand::thread_rng().gen_range(0..=jitter_bound);
    capped + Duration::from_millis(jitter_ms)
}

/// One client per SMF process: sequence numbers are drawn from a single
/// counter regardless of which UPF a given request targets, since PFCP
/// sequence numbers only need to be unique per (CP node, UP node) pair and a
/// monotonically increasing counter satisfies that trivially.
pub struct PfcpClient {
    local_node_id: Ipv4Addr,
    sequence: AtomicU32,
}

impl PfcpClient {
    pub fn new(local_node_id: Ipv4Addr) -> Self {
        Self {
            local_node_id,
            sequence: AtomicU32::new(1),
        }
    }

    fn next_sequence(&self) -> u32 {
        self.sequence.fetch_add(1, Ordering::Relaxed) & 0x00FF_FFFF
    }

    async fn send_and_wait(
        &self,
        peer: SocketAddr,
        request: &[u8],
    ) -> Result<Vec<u8>, PfcpClientError> {
        let socket = UdpSocket::bind("0.0.0.0:0").await?;
        socket.connect(peer).await?;
        let mut attempt = 0u32;
        loop {
            socket.send(request).await?;
            let mut buf = [0u8; 4096];
            match timeout(RESPONSE_TIMEOUT, socket.recv(&mut buf)).await {
                Ok(Ok(n)) => return Ok(buf[..n].to_vec()),
                _ => {
                    attempt += 1;
                    if attempt >= MAX_ATTEMPTS {
                        return Err(PfcpClientError::NoResponse(peer, attempt));
                    }
                    tokio::time::sleep(backoff(attempt)).await;
                }
            }
        }
    }

    pub async fn association_setup(
        &self,
        peer: SocketAddr,
    ) -> Result<AssociationSetupResponse, PfcpClientError> {
        let seq = self.next_sequence();
        let request = AssociationSetupRequestBuilder::new(seq)
            .node_id(self.local_node_id)
            .recovery_time_stamp(SystemTime::now())
            .build();
        let response = self.send_and_wait(peer, &request.marshal()).await?;
        AssociationSetupResponse::unmarshal(&response).map_err(Into::into)
    }

    /// Sends the Session Establishment Request with `local_seid` as the
    /// SMF's local SEID. The header SEID is 0 (TS 29.244: "shall be set to
    /// 0" when no UP-assigned SEID exists yet); the negotiated local SEID
    /// travels only in the mandatory F-SEID IE, and the UPF's own assigned
    /// SEID comes back in the response's F-SEID.
    pub async fn session_establishment(
        &self,
        peer: SocketAddr,
        local_seid: u64,
        create_pdrs: Vec<Ie>,
        create_fars: Vec<Ie>,
        create_qers: Vec<Ie>,
    ) -> Result<SessionEstablishmentResponse, PfcpClientError> {
        let seq = self.next_sequence();
        let request = SessionEstablishmentRequestBuilder::new(0, seq)
            .node_id(self.local_node_id)
            .fseid(local_seid, IpAddr::V4(self.local_node_id))
            .create_pdrs(create_pdrs)
            .create_fars(create_fars)
            .create_qers(create_qers)
            .build()
            .map_err(|e| PfcpClientError::Decode(e.to_string()))?;
        let response = self.send_and_wait(peer, &request.marshal()).await?;
        SessionEstablishmentResponse::unmarshal(&response).map_err(Into::into)
    }

    pub async fn session_modification(
        &self,
        peer: SocketAddr,
        upf_seid: u64,
        update_fars: Vec<Ie>,
        update_qers: Vec<Ie>,
    ) -> Result<SessionModificationResponse, PfcpClientError> {
        let seq = self.next_sequence();
        let request = SessionModificationRequestBuilder::new(upf_seid, seq)
            .update_fars(update_fars)
            .update_qers(update_qers)
            .build();
        let response = self.send_and_wait(peer, &request.marshal()).await?;
        SessionModificationResponse::unmarshal(&response).map_err(Into::into)
    }

    pub async fn session_deletion(
        &self,
        peer: SocketAddr,
        upf_seid: u64,
    ) -> Result<SessionDeletionResponse, PfcpClientError> {
        let seq = self.next_sequence();
        let request = SessionDeletionRequestBuilder::new(upf_seid, seq)
            .node_id(self.local_node_id)
            .build();
        let response = self.send_and_wait(peer, &request.marshal()).await?;
        SessionDeletionResponse::unmarshal(&response).map_err(|e| PfcpClientError::Decode(e.to_string()))
    }
}

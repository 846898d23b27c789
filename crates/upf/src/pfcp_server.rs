//! The N4 PFCP server (§4.7, §6.2): a single UDP/8805 socket dispatching on
//! message type, with (peer, sequence-number) reply-cache deduplication
//! (§6.2, §8 "PFCP idempotence") and all-or-nothing rule installation
//! (§4.7 step 3).

use crate::dataplane::DataPlane;
use crate::error::UpfError;
use crate::model::{Far, PeerAssociation, Pdr, PfcpSession, Qer, RuleSnapshot, Urr};
use crate::store::SessionStore;
use pfcp::ie::cause::{Cause, CauseValue};
use pfcp::ie::create_far::CreateFar;
use pfcp::ie::create_pdr::CreatePdr;
use pfcp::ie::create_qer::CreateQer;
use pfcp::ie::create_urr::CreateUrr;
use pfcp::ie::created_pdr::CreatedPdr;
use pfcp::ie::f_teid::Fteid;
use pfcp::ie::fseid::Fseid;
use pfcp::ie::node_id::NodeId;
use pfcp::ie::remove_far::RemoveFar;
use pfcp::ie::remove_pdr::RemovePdr;
use pfcp::ie::remove_qer::RemoveQer;
use pfcp::ie::remove_urr::RemoveUrr;
use pfcp::ie::update_far::UpdateFar;
use pfcp::ie::update_qer::UpdateQer;
use pfcp::ie::{Ie, IeType};
use pfcp::message::association_setup_request::AssociationSetupRequest;
use pfcp::message::association_setup_response::AssociationSetupResponseBuilder;
use pfcp::message::header::Header;
use pfcp::message::heartbeat_request::HeartbeatRequest;
use pfcp::message::heartbeat_response::HeartbeatResponseBuilder;
use pfcp::message::session_deletion_request::SessionDeletionRequest;
use pfcp::message::session_deletion_response::SessionDeletionResponse;
use pfcp::message::session_establishment_request::SessionEstablishmentRequest;
use pfcp::message::session_establishment_response::SessionEstablishmentResponseBuilder;
use pfcp::message::session_modification_request::SessionModificationRequest;
use pfcp::message::session_modification_response::SessionModificationResponseBuilder;
use pfcp::message::session_report_request::SessionReportRequestBuilder;
use pfcp::message::{Message, MsgType};
use std::collections::HashMap;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex as StdMutex};
use std::time::{Duration, Instant, SystemTime};
use tokio::net::UdpSocket;

const DEDUP_WINDOW: Duration = Duration::from_secs(30);
const MAX_DATAGRAM: usize = 4096;

/// Reply cache entry keyed by `(peer, sequence number)`, per §6.2's
/// 30-second receiver dedup window.
struct CachedReply {
    reply: Vec<u8>,
    stored_at: Instant,
}

pub struct PfcpServer {
    pub store: Arc<SessionStore>,
    pub dataplane: Arc<dyn DataPlane>,
    node_id: NodeId,
    n3_address: Ipv4Addr,
    teid_counter: AtomicU32,
    dedup: StdMutex<HashMap<(SocketAddr, u32), CachedReply>>,
}

impl PfcpServer {
    pub fn new(store: Arc<SessionStore>, dataplane: Arc<dyn DataPlane>, node_id: Ipv4Addr, n3_address: Ipv4Addr) -> Self {
        PfcpServer {
            store,
            dataplane,
            node_id: NodeId::new_ipv4(node_id),
            n3_address,
            teid_counter: AtomicU32::new(1),
            dedup: StdMutex::new(HashMap::new()),
        }
    }

    fn allocate_teid(&self) -> u32 {
        self.teid_counter.fetch_add(1, Ordering::Relaxed)
    }

    /// Runs the UDP receive loop until `shutdown` fires. Each datagram is
    /// handled on its own task so a slow session lock never stalls the
    /// socket (§5 "no operation may block an entire NF").
    pub async fn run(self: Arc<Self>, socket: UdpSocket, mut shutdown: tokio::sync::watch::Receiver<bool>) {
        let socket = Arc::new(socket);
        let mut buf = vec![0u8; MAX_DATAGRAM];
        loop {
            tokio::select! {
                res = socket.recv_from(&mut buf) => {
                    let (n, peer) = match res {
                        Ok(v) => v,
                        Err(err) => {
                            tracing::warn!(error = %err, "pfcp socket recv error");
                            continue;
                        }
                    };
                    let datagram = buf[..n].to_vec();
                    let server = self.clone();
                    let socket = socket.clone();
                    tokio::spawn(async move {
                        if let Some(reply) = server.handle_datagram(peer, &datagram).await {
                            if let Err(err) = socket.send_to(&reply, peer).await {
                                tracing::warn!(error = %err, peer = %peer, "pfcp reply send failed");
                            }
                        }
                    });
                }
                _ = shutdown.changed() => return,
            }
        }
    }

    async fn handle_datagram(&self, peer: SocketAddr, datagram: &[u8]) -> Option<Vec<u8>> {
        let header = match Header::unmarshal(datagram) {
            Ok(h) => h,
            Err(err) => {
                tracing::warn!(error = %err, peer = %peer, "malformed pfcp header, dropping");
                return None;
            }
        };
        let seq = header.sequence_number;

        if let Some(cached) = self.cached_reply(peer, seq) {
            tracing::debug!(peer = %peer, seq, "replaying cached pfcp reply");
            return Some(cached);
        }

        let reply = match header.message_type {
            MsgType::AssociationSetupRequest => self.handle_association_setup(peer, datagram, seq),
            MsgType::HeartbeatRequest => self.handle_heartbeat(datagram, seq),
            MsgType::SessionEstablishmentRequest => self.handle_session_establishment(peer, datagram, seq),
            MsgType::SessionModificationRequest => self.handle_session_modification(datagram, seq).await,
            MsgType::SessionDeletionRequest => self.handle_session_deletion(datagram, seq).await,
            other => {
                tracing::warn!(?other, peer = %peer, "unsupported pfcp message type, rejecting");
                None
            }
        };

        if let Some(reply) = &reply {
            self.cache_reply(peer, seq, reply.clone());
        }
        reply
    }

    fn cached_reply(&self, peer: SocketAddr, seq: u32) -> Option<Vec<u8>> {
        let mut cache = self.dedup.lock().unwrap();
        cache.retain(|_, v| v.stored_at.elapsed() < DEDUP_WINDOW);
        cache.get(&(peer, seq)).map(|c| c.reply.clone())
    }

    fn cache_reply(&self, peer: SocketAddr, seq: u32, reply: Vec<u8>) {
        self.dedup.lock().unwrap().insert(
            (peer, seq),
            CachedReply {
                reply,
                stored_at: Instant::now(),
            },
        );
    }

    fn handle_association_setup(&self, peer: SocketAddr, datagram: &[u8], seq: u32) -> Option<Vec<u8>> {
        let request = match AssociationSetupRequest::unmarshal(datagram) {
            Ok(r) => r,
            Err(err) => {
                tracing::warn!(error = %err, "malformed association setup request");
                return Some(self.reject_no_seid(seq, CauseValue::MandatoryIeIncorrect));
            }
        };
        let peer_node_id = match NodeId::unmarshal(&request.node_id.payload) {
            Ok(id) => id,
            Err(_) => return Some(self.reject_no_seid(seq, CauseValue::MandatoryIeIncorrect)),
        };

        let had_prior = self.store.association(peer).is_some();
        self.store
            .set_association(peer, PeerAssociation::new(peer_node_id, SystemTime::now()));
        if had_prior {
            // A returning peer resyncs via a fresh association; any sessions
            // marked orphaned under the old association are live again
            // (§4.7 "an Association Setup from the returning peer resyncs
            // state").
            for session_lock in self.store.sessions_for_peer(peer) {
                if let Ok(mut session) = session_lock.try_lock() {
                    session.orphaned = false;
                }
            }
            tracing::info!(peer = %peer, "pfcp association re-established, resyncing sessions");
        }

        let response = AssociationSetupResponseBuilder::new(seq)
            .cause_accepted()
            .node_id_ie(self.node_id.to_ie())
            .recovery_time_stamp(SystemTime::now())
            .build();
        Some(response.marshal())
    }

    fn handle_heartbeat(&self, datagram: &[u8], seq: u32) -> Option<Vec<u8>> {
        if HeartbeatRequest::unmarshal(datagram).is_err() {
            return None;
        }
        let response = HeartbeatResponseBuilder::new(seq).recovery_time_stamp(SystemTime::now()).build();
        Some(response.marshal())
    }

    fn handle_session_establishment(&self, peer: SocketAddr, datagram: &[u8], seq: u32) -> Option<Vec<u8>> {
        let request = match SessionEstablishmentRequest::unmarshal(datagram) {
            Ok(r) => r,
            Err(err) => {
                tracing::warn!(error = %err, "malformed session establishment request");
                return Some(self.reject_no_seid(seq, CauseValue::MandatoryIeIncorrect));
            }
        };

        if self.store.association(peer).is_none() {
            // §4.7 step 1: "Verify peer association exists or auto-establish."
            self.store
                .set_association(peer, PeerAssociation::new(NodeId::new_ipv4(Ipv4Addr::UNSPECIFIED), SystemTime::now()));
            tracing::info!(peer = %peer, "auto-establishing pfcp association on session request");
        }

        let cp_fseid = match Fseid::unmarshal(&request.fseid.payload) {
            Ok(f) => f,
            Err(_) => return Some(self.reject_no_seid(seq, CauseValue::MandatoryIeIncorrect)),
        };
        let remote_seid = *cp_fseid.seid;

        match self.build_snapshot(&request.create_pdrs, &request.create_fars, &request.create_qers, &request.create_urrs) {
            Ok((mut snapshot, local_fteid_allocs)) => {
                let local_seid = self.store.allocate_seid();
                for qer in snapshot.qers.values() {
                    self.dataplane.install_qer(local_seid, qer);
                }

                let mut created_pdrs = Vec::new();
                for (pdr_id, teid) in local_fteid_allocs {
                    if let Some(pdr) = snapshot.pdrs.get_mut(&pdr_id) {
                        let ipv4 = self.n3_address;
                        pdr.local_fteid = Some(Fteid::new(true, false, teid, Some(ipv4), None, 0));
                        created_pdrs.push(CreatedPdr::new(pfcp::ie::pdr_id::PdrId::new(pdr_id), pdr.local_fteid.clone().unwrap()));
                    }
                }

                let node_id_for_session = NodeId::unmarshal(&request.node_id.payload).unwrap_or(NodeId::new_ipv4(peer_ip(peer)));
                let mut session = PfcpSession::new(local_seid, remote_seid, node_id_for_session, peer);
                session.rules = std::mem::replace(&mut snapshot, RuleSnapshot::empty());

                self.store.insert(session);

                let mut builder = SessionEstablishmentResponseBuilder::accepted(remote_seid, seq)
                    .node_id(self.node_id.to_ie())
                    .fseid(local_seid, std::net::IpAddr::V4(self.n3_address));
                for created in created_pdrs {
                    builder = builder.created_pdr(Ie::new(IeType::CreatedPdr, created.marshal()));
                }
                let response = builder.build().ok()?;
                Some(response.marshal())
            }
            Err(err) => {
                tracing::warn!(error = %err, peer = %peer, "session establishment rejected");
                let response = SessionEstablishmentResponseBuilder::new(remote_seid, seq, err.cause())
                    .node_id(self.node_id.to_ie())
                    .build()
                    .ok()?;
                Some(response.marshal())
            }
        }
    }

    /// Parses and validates a batch of create IEs before anything is
    /// installed: every PDR's `far_id` must resolve within the same batch
    /// (§8 "every installed PDR references an installed FAR"). Returns the
    /// snapshot plus the list of `(pdr_id, allocated_teid)` pairs for PDRs
    /// whose F-TEID asked the UPF to choose one.
    fn build_snapshot(
        &self,
        create_pdrs: &[Ie],
        create_fars: &[Ie],
        create_qers: &[Ie],
        create_urrs: &[Ie],
    ) -> Result<(RuleSnapshot, Vec<(u16, u32)>), UpfError> {
        let mut snapshot = RuleSnapshot::empty();

        for ie in create_fars {
            let create = CreateFar::unmarshal(&ie.payload).map_err(|e| UpfError::MalformedMessage(e.to_string()))?;
            let far = Far::from_create(&create);
            snapshot.fars.insert(far.far_id, far);
        }
        for ie in create_qers {
            let create = CreateQer::unmarshal(&ie.payload).map_err(|e| UpfError::MalformedMessage(e.to_string()))?;
            let qer = Qer::from_create(&create);
            snapshot.qers.insert(qer.qer_id, qer);
        }
        for ie in create_urrs {
            let create = CreateUrr::unmarshal(&ie.payload).map_err(|e| UpfError::MalformedMessage(e.to_string()))?;
            let urr = Urr::from_create(&create);
            snapshot.urrs.insert(urr.urr_id, urr);
        }

        let mut teid_allocs = Vec::new();
        for ie in create_pdrs {
            let create = CreatePdr::unmarshal(&ie.payload).map_err(|e| UpfError::MalformedMessage(e.to_string()))?;
            let pdr = Pdr::from_create(&create);
            if !snapshot.fars.contains_key(&pdr.far_id) {
                return Err(UpfError::UnknownFar(pdr.far_id));
            }
            if pdr.local_fteid.as_ref().map(|f| f.ch).unwrap_or(false) {
                teid_allocs.push((pdr.pdr_id, self.allocate_teid()));
            }
            snapshot.pdrs.insert(pdr.pdr_id, pdr);
        }

        Ok((snapshot, teid_allocs))
    }

    async fn handle_session_modification(&self, datagram: &[u8], seq: u32) -> Option<Vec<u8>> {
        let request = match SessionModificationRequest::unmarshal(datagram) {
            Ok(r) => r,
            Err(err) => {
                tracing::warn!(error = %err, "malformed session modification request");
                return Some(self.reject_with_seid(0, seq, CauseValue::MandatoryIeIncorrect));
            }
        };
        let local_seid = request.header.seid;
        let session_lock = match self.store.get(local_seid) {
            Some(s) => s,
            None => return Some(self.reject_with_seid(local_seid, seq, CauseValue::SessionContextNotFound)),
        };

        let mut session = session_lock.lock().await;
        let result: Result<(), UpfError> = (|| {
            let mut working = RuleSnapshot {
                pdrs: session.pdrs.clone(),
                fars: session.fars.clone(),
                qers: session.qers.clone(),
                urrs: session.urrs.clone(),
            };

            apply_removes(&mut working, &request)?;
            apply_creates(&mut working, &request)?;
            apply_updates(&mut working, &request)?;

            for qer in working.qers.values() {
                self.dataplane.install_qer(local_seid, qer);
            }
            for removed_qer in session.qers.keys().filter(|id| !working.qers.contains_key(id)) {
                self.dataplane.remove_qer(local_seid, *removed_qer);
            }

            session.rules = working;
            session.touch();
            Ok(())
        })();

        match result {
            Ok(()) => {
                let remote_seid = session.remote_seid;
                let response = SessionModificationResponseBuilder::new(remote_seid, seq)
                    .cause(CauseValue::RequestAccepted)
                    .build();
                Some(response.marshal())
            }
            Err(err) => Some(self.reject_with_seid(local_seid, seq, err.cause())),
        }
    }

    async fn handle_session_deletion(&self, datagram: &[u8], seq: u32) -> Option<Vec<u8>> {
        let request = match SessionDeletionRequest::unmarshal(datagram) {
            Ok(r) => r,
            Err(err) => {
                tracing::warn!(error = %err, "malformed session deletion request");
                return Some(self.reject_with_seid(0, seq, CauseValue::MandatoryIeIncorrect));
            }
        };
        let local_seid = request.header.seid;
        let Some(session_lock) = self.store.get(local_seid) else {
            return Some(self.reject_with_seid(local_seid, seq, CauseValue::SessionContextNotFound));
        };

        let (remote_seid, usage_reports) = {
            let mut session = session_lock.lock().await;
            let reports: Vec<Ie> = session
                .urrs
                .values_mut()
                .filter(|u| u.measures_volume)
                .map(|u| {
                    let seqn = u.next_seqn();
                    pfcp::ie::usage_report::UsageReportBuilder::new(pfcp::ie::urr_id::UrrId::new(u.urr_id))
                        .sequence_number(pfcp::types::SequenceNumber::new(seqn))
                        .with_volume_data(u.uplink_bytes + u.downlink_bytes, u.uplink_bytes, u.downlink_bytes)
                        .build()
                        .map(|report| Ie::new(IeType::UsageReport, report.marshal()))
                        .ok()
                })
                .flatten()
                .collect();
            (session.remote_seid, reports)
        };

        self.dataplane.remove_session(local_seid);
        self.store.remove(local_seid);

        let cause_ie = Ie::new(IeType::Cause, Cause::new(CauseValue::RequestAccepted).marshal().to_vec());
        let response = SessionDeletionResponse::new(remote_seid, seq, cause_ie, None, usage_reports);
        Some(response.marshal())
    }

    fn reject_no_seid(&self, seq: u32, cause: CauseValue) -> Vec<u8> {
        // Rejections for messages we couldn't even parse a SEID from are
        // sent with SEID 0; peers match purely on sequence number here.
        self.reject_with_seid(0, seq, cause)
    }

    fn reject_with_seid(&self, seid: u64, seq: u32, cause: CauseValue) -> Vec<u8> {
        let cause_ie = Ie::new(IeType::Cause, Cause::new(cause).marshal().to_vec());
        pfcp::message::session_deletion_response::SessionDeletionResponse::new(seid, seq, cause_ie, None, vec![]).marshal()
    }

    /// Fires a Session Report Request for a URR that just crossed its
    /// volume threshold (§4.7 data-plane contract step (e)). Best-effort:
    /// the UPF does not block the packet path on SMF's reply.
    pub async fn send_usage_report(&self, socket: &UdpSocket, peer: SocketAddr, local_seid: u64, remote_seid: u64, urr: &mut Urr) {
        let seqn = urr.next_seqn();
        let report = match pfcp::ie::usage_report::UsageReportBuilder::volume_threshold_report(
            pfcp::ie::urr_id::UrrId::new(urr.urr_id),
            pfcp::types::SequenceNumber::new(seqn),
        )
        .with_volume_data(urr.uplink_bytes + urr.downlink_bytes, urr.uplink_bytes, urr.downlink_bytes)
        .build()
        {
            Ok(r) => r,
            Err(err) => {
                tracing::warn!(error = %err, "failed to build usage report");
                return;
            }
        };
        urr.reset();

        let request = SessionReportRequestBuilder::new(remote_seid, self.next_report_seq())
            .report_type(Ie::new(
                IeType::ReportType,
                pfcp::ie::report_type::ReportType::new().with_usage_report(true).marshal().to_vec(),
            ))
            .usage_reports(vec![Ie::new(IeType::UsageReport, report.marshal())])
            .build();
        let _ = local_seid;
        if let Err(err) = socket.send_to(&request.marshal(), peer).await {
            tracing::warn!(error = %err, peer = %peer, "failed to send usage report");
        }
    }

    fn next_report_seq(&self) -> u32 {
        self.teid_counter.fetch_add(1, Ordering::Relaxed) & 0x00FF_FFFF
    }

    /// Marks sessions belonging to peers whose association has gone stale
    /// beyond the configured grace period as orphaned (§4.7 failure
    /// semantics). Called from a periodic sweep task.
    pub fn sweep_stale_associations(&self, grace: Duration) {
        for peer in self.store.stale_peers(grace) {
            for session_lock in self.store.sessions_for_peer(peer) {
                if let Ok(mut session) = session_lock.try_lock() {
                    if !session.orphaned {
                        tracing::warn!(peer = %peer, local_seid = session.local_seid, "pfcp association stale, orphaning session");
                        session.orphaned = true;
                    }
                }
            }
        }
    }
}

fn apply_removes(working: &mut RuleSnapshot, request: &SessionModificationRequest) -> Result<(), UpfError> {
    if let Some(remove_pdrs) = &request.remove_pdrs {
        for ie in remove_pdrs {
            let remove = RemovePdr::unmarshal(&ie.payload).map_err(|e| UpfError::MalformedMessage(e.to_string()))?;
            working.pdrs.remove(&remove.pdr_id.value);
        }
    }
    if let Some(remove_fars) = &request.remove_fars {
        for ie in remove_fars {
            let remove = RemoveFar::unmarshal(&ie.payload).map_err(|e| UpfError::MalformedMessage(e.to_string()))?;
            let far_id = remove.far_id.value;
            if working.pdrs.values().any(|p| p.far_id == far_id) {
                return Err(UpfError::RuleCreationFailure(format!("far {far_id} still referenced by a pdr")));
            }
            working.fars.remove(&far_id);
        }
    }
    if let Some(remove_qers) = &request.remove_qers {
        for ie in remove_qers {
            let remove = RemoveQer::unmarshal(&ie.payload).map_err(|e| UpfError::MalformedMessage(e.to_string()))?;
            working.qers.remove(&remove.qer_id.value);
        }
    }
    if let Some(remove_urrs) = &request.remove_urrs {
        for ie in remove_urrs {
            let remove = RemoveUrr::unmarshal(&ie.payload).map_err(|e| UpfError::MalformedMessage(e.to_string()))?;
            working.urrs.remove(&remove.urr_id.value);
        }
    }
    Ok(())
}

fn apply_creates(working: &mut RuleSnapshot, request: &SessionModificationRequest) -> Result<(), UpfError> {
    if let Some(create_fars) = &request.create_fars {
        for ie in create_fars {
            let create = CreateFar::unmarshal(&ie.payload).map_err(|e| UpfError::MalformedMessage(e.to_string()))?;
            let far = Far::from_create(&create);
            working.fars.insert(far.far_id, far);
        }
    }
    if let Some(create_qers) = &request.create_qers {
        for ie in create_qers {
            let create = CreateQer::unmarshal(&ie.payload).map_err(|e| UpfError::MalformedMessage(e.to_string()))?;
            let qer = Qer::from_create(&create);
            working.qers.insert(qer.qer_id, qer);
        }
    }
    if let Some(create_urrs) = &request.create_urrs {
        for ie in create_urrs {
            let create = CreateUrr::unmarshal(&ie.payload).map_err(|e| UpfError::MalformedMessage(e.to_string()))?;
            let urr = Urr::from_create(&create);
            working.urrs.insert(urr.urr_id, urr);
        }
    }
    if let Some(create_pdrs) = &request.create_pdrs {
        for ie in create_pdrs {
            let create = CreatePdr::unmarshal(&ie.payload).map_err(|e| UpfError::MalformedMessage(e.to_string()))?;
            let pdr = Pdr::from_create(&create);
            if !working.fars.contains_key(&pdr.far_id) {
                return Err(UpfError::UnknownFar(pdr.far_id));
            }
            working.pdrs.insert(pdr.pdr_id, pdr);
        }
    }
    Ok(())
}

fn apply_updates(working: &mut RuleSnapshot, request: &SessionModificationRequest) -> Result<(), UpfError> {
    if let Some(update_fars) = &request.update_fars {
        for ie in update_fars {
            let update = UpdateFar::unmarshal(&ie.payload).map_err(|e| UpfError::MalformedMessage(e.to_string()))?;
            let far_id = update.far_id.value;
            let far = working.fars.get_mut(&far_id).ok_or(UpfError::UnknownFar(far_id))?;
            if let Some(action) = update.apply_action {
                far.apply_action = action;
            }
            if let Some(params) = &update.update_forwarding_parameters {
                far.destination_interface = params.destination_interface.map(|d| d.value);
                if let Some(ohc) = &params.outer_header_creation {
                    far.outer_header_creation = Some(ohc.clone());
                }
            }
        }
    }
    if let Some(update_qers) = &request.update_qers {
        for ie in update_qers {
            let update = UpdateQer::unmarshal(&ie.payload).map_err(|e| UpfError::MalformedMessage(e.to_string()))?;
            let qer_id = update.qer_id.value;
            let qer = working.qers.get_mut(&qer_id).ok_or_else(|| UpfError::RuleCreationFailure(format!("unknown qer {qer_id}")))?;
            if let Some(gate) = &update.gate_status {
                use pfcp::ie::gate_status::GateStatusValue;
                qer.gate_open = gate.uplink_gate == GateStatusValue::Open && gate.downlink_gate == GateStatusValue::Open;
            }
            if let Some(mbr) = &update.mbr {
                qer.mbr_uplink_bps = Some(mbr.uplink);
                qer.mbr_downlink_bps = Some(mbr.downlink);
            }
            if let Some(gbr) = &update.gbr {
                qer.gbr_uplink_bps = Some(gbr.uplink);
                qer.gbr_downlink_bps = Some(gbr.downlink);
            }
        }
    }
    Ok(())
}

fn peer_ip(peer: SocketAddr) -> Ipv4Addr {
    match peer.ip() {
        std::net::IpAddr::V4(v4) => v4,
        std::net::IpAddr::V6(_) => Ipv4Addr::UNSPECIFIED,
    }
}

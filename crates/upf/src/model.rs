//! PFCP session and rule-table records (§4.7): a `PfcpSession` owns every
//! PDR/FAR/QER/URR installed against it, keyed by the rule ID the SMF
//! assigned, plus the association bookkeeping a peer loss/resync needs.

use pfcp::ie::cause::CauseValue;
use pfcp::ie::create_far::FarAction;
use pfcp::ie::create_pdr::CreatePdr;
use pfcp::ie::create_far::CreateFar;
use pfcp::ie::create_qer::CreateQer;
use pfcp::ie::create_urr::CreateUrr;
use pfcp::ie::destination_interface::Interface;
use pfcp::ie::f_teid::Fteid;
use pfcp::ie::node_id::NodeId;
use pfcp::ie::outer_header_creation::OuterHeaderCreation;
use pfcp::ie::source_interface::SourceInterfaceValue;
use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::time::Instant;

/// A decoded Packet Detection Rule: which direction's traffic it matches
/// and which FAR/QER/URR process a match.
#[derive(Debug, Clone)]
pub struct Pdr {
    pub pdr_id: u16,
    pub precedence: u32,
    pub source_interface: SourceInterfaceValue,
    pub local_fteid: Option<Fteid>,
    pub ue_ip: Option<IpAddr>,
    pub remove_outer_header: bool,
    pub far_id: u32,
    pub qer_id: Option<u32>,
    pub urr_id: Option<u32>,
}

impl Pdr {
    pub fn from_create(create: &CreatePdr) -> Self {
        Pdr {
            pdr_id: create.pdr_id.value,
            precedence: create.precedence.value,
            source_interface: create.pdi.source_interface.value,
            local_fteid: create.pdi.f_teid.clone(),
            ue_ip: create
                .pdi
                .ue_ip_address
                .as_ref()
                .and_then(|ip| ip.ipv4_address.map(IpAddr::V4).or(ip.ipv6_address.map(IpAddr::V6))),
            remove_outer_header: create.outer_header_removal.is_some(),
            far_id: create.far_id.map(|id| id.value).unwrap_or(0),
            qer_id: create.qer_id.map(|id| id.value),
            urr_id: create.urr_id.map(|id| id.value),
        }
    }
}

/// A decoded Forwarding Action Rule: what to do with traffic a PDR routes
/// here, and where to send it when the action is forward.
#[derive(Debug, Clone)]
pub struct Far {
    pub far_id: u32,
    pub apply_action: pfcp::ie::apply_action::ApplyAction,
    pub destination_interface: Option<Interface>,
    pub outer_header_creation: Option<OuterHeaderCreation>,
}

impl Far {
    pub fn from_create(create: &CreateFar) -> Self {
        let destination_interface = create
            .forwarding_parameters
            .as_ref()
            .map(|fp| fp.destination_interface.value);
        let outer_header_creation = create
            .forwarding_parameters
            .as_ref()
            .and_then(|fp| fp.outer_header_creation.clone());
        Far {
            far_id: create.far_id.value,
            apply_action: create.apply_action,
            destination_interface,
            outer_header_creation,
        }
    }

    pub fn drops(&self) -> bool {
        self.apply_action.contains(pfcp::ie::apply_action::ApplyAction::DROP)
    }

    pub fn buffers(&self) -> bool {
        self.apply_action.contains(pfcp::ie::apply_action::ApplyAction::BUFF)
    }
}

/// A decoded QoS Enforcement Rule: gate state plus the metering envelope
/// the token-bucket data plane enforces (MBR) and accounts (GBR).
#[derive(Debug, Clone)]
pub struct Qer {
    pub qer_id: u32,
    pub gate_open: bool,
    pub mbr_uplink_bps: Option<u64>,
    pub mbr_downlink_bps: Option<u64>,
    pub gbr_uplink_bps: Option<u64>,
    pub gbr_downlink_bps: Option<u64>,
}

impl Qer {
    pub fn from_create(create: &CreateQer) -> Self {
        use pfcp::ie::gate_status::GateStatusValue;
        let gate_open = create
            .gate_status
            .as_ref()
            .map(|g| g.uplink_gate == GateStatusValue::Open && g.downlink_gate == GateStatusValue::Open)
            .unwrap_or(true);
        Qer {
            qer_id: create.qer_id.value,
            gate_open,
            mbr_uplink_bps: create.mbr.as_ref().map(|m| m.uplink),
            mbr_downlink_bps: create.mbr.as_ref().map(|m| m.downlink),
            gbr_uplink_bps: create.gbr.as_ref().map(|g| g.uplink),
            gbr_downlink_bps: create.gbr.as_ref().map(|g| g.downlink),
        }
    }
}

/// A decoded Usage Reporting Rule and its running counters. Volume
/// counters accumulate in `DataPlane::process_packet`; once a threshold is
/// crossed the PFCP server emits a Session Report Request carrying a
/// matching usage report and resets the counter (§4.7, §9 supplemented
/// usage-reporting behaviour).
#[derive(Debug, Clone)]
pub struct Urr {
    pub urr_id: u32,
    pub measures_volume: bool,
    pub volume_threshold_total: Option<u64>,
    pub uplink_bytes: u64,
    pub downlink_bytes: u64,
    pub report_seqn: u32,
}

impl Urr {
    pub fn from_create(create: &CreateUrr) -> Self {
        Urr {
            urr_id: create.urr_id.value,
            measures_volume: create.measurement_method.volume,
            volume_threshold_total: create.volume_threshold.as_ref().and_then(|v| v.total_volume),
            uplink_bytes: 0,
            downlink_bytes: 0,
            report_seqn: 0,
        }
    }

    /// Adds an observed packet to the running totals; returns `true` once
    /// the configured volume threshold (if any) has been crossed.
    pub fn observe(&mut self, uplink: bool, bytes: u64) -> bool {
        if uplink {
            self.uplink_bytes += bytes;
        } else {
            self.downlink_bytes += bytes;
        }
        match self.volume_threshold_total {
            Some(threshold) => self.uplink_bytes + self.downlink_bytes >= threshold,
            None => false,
        }
    }

    pub fn next_seqn(&mut self) -> u32 {
        self.report_seqn += 1;
        self.report_seqn
    }

    pub fn reset(&mut self) {
        self.uplink_bytes = 0;
        self.downlink_bytes = 0;
    }
}

/// All-or-nothing result of validating a batch of create/update IEs before
/// any of them are actually installed (§4.7: "rule installation batches
/// are visible atomically").
pub struct RuleSnapshot {
    pub pdrs: HashMap<u16, Pdr>,
    pub fars: HashMap<u32, Far>,
    pub qers: HashMap<u32, Qer>,
    pub urrs: HashMap<u32, Urr>,
}

impl RuleSnapshot {
    pub fn empty() -> Self {
        RuleSnapshot {
            pdrs: HashMap::new(),
            fars: HashMap::new(),
            qers: HashMap::new(),
            urrs: HashMap::new(),
        }
    }
}

pub struct PfcpSession {
    pub local_seid: u64,
    pub remote_seid: u64,
    pub peer_node_id: NodeId,
    pub peer_addr: SocketAddr,
    pub rules: RuleSnapshot,
    pub created_at: Instant,
    pub last_activity: Instant,
    /// Set when the owning peer's association is lost beyond the grace
    /// period (§4.7: "UPF retains sessions but logs them as orphaned").
    pub orphaned: bool,
}

impl PfcpSession {
    pub fn new(local_seid: u64, remote_seid: u64, peer_node_id: NodeId, peer_addr: SocketAddr) -> Self {
        let now = Instant::now();
        PfcpSession {
            local_seid,
            remote_seid,
            peer_node_id,
            peer_addr,
            rules: RuleSnapshot::empty(),
            created_at: now,
            last_activity: now,
            orphaned: false,
        }
    }

    pub fn touch(&mut self) {
        self.last_activity = Instant::now();
    }

    /// Looks up the FAR a PDR's `far_id` references; a PDR whose FAR is
    /// missing is a data invariant violation, never routed silently.
    pub fn far_for(&self, pdr: &Pdr) -> Option<&Far> {
        self.fars.get(&pdr.far_id)
    }
}

impl std::ops::Deref for PfcpSession {
    type Target = RuleSnapshot;
    fn deref(&self) -> &RuleSnapshot {
        &self.rules
    }
}

impl std::ops::DerefMut for PfcpSession {
    fn deref_mut(&mut self) -> &mut RuleSnapshot {
        &mut self.rules
    }
}

/// Per-peer PFCP association state: heartbeat age drives the
/// orphan-on-loss / resync-on-return behaviour of §4.7.
#[derive(Debug, Clone)]
pub struct PeerAssociation {
    pub node_id: NodeId,
    pub established_at: Instant,
    pub last_heartbeat: Instant,
    pub recovery_time_stamp: std::time::SystemTime,
}

impl PeerAssociation {
    pub fn new(node_id: NodeId, recovery_time_stamp: std::time::SystemTime) -> Self {
        let now = Instant::now();
        PeerAssociation {
            node_id,
            established_at: now,
            last_heartbeat: now,
            recovery_time_stamp,
        }
    }

    pub fn touch(&mut self) {
        self.last_heartbeat = Instant::now();
    }

    pub fn is_stale(&self, grace: std::time::Duration) -> bool {
        self.last_heartbeat.elapsed() > grace
    }
}

/// Maps a local UPF rule-path error onto the PFCP cause that should be
/// returned when `apply_action` references a FAR the session doesn't have.
pub fn far_action_allows_forward(action: FarAction) -> bool {
    matches!(action, FarAction::Forward | FarAction::ForwardAndDuplicate)
}

pub const fn default_cause_on_success() -> CauseValue {
    CauseValue::RequestAccepted
}

//! `Nsmf_PDUSession` procedures (§4.6, §9): session establishment walks
//! UDM subscription check → UPF selection → UE IP allocation → N4 session
//! establishment; modification and release reuse the same UPF binding.

use crate::clients::udm::{SmDataEntry, UdmClient};
use crate::clients::upf_selector;
use crate::error::SmfError;
use crate::ipam::IpamRegistry;
use crate::model::{PduSession, SessionState};
use crate::pfcp_client::PfcpClient;
use crate::store::SessionStore;
use common::ids::{Dnn, PduSessionId, Snssai, Supi};
use common::registry::RegistryClient;
use common::trace::TraceContext;
use pfcp::ie::apply_action::ApplyAction;
use pfcp::ie::cause::{Cause, CauseValue};
use pfcp::ie::create_far::{CreateFarBuilder, FarAction};
use pfcp::ie::create_pdr::CreatePdrBuilder;
use pfcp::ie::create_qer::{CreateQer, CreateQerBuilder};
use pfcp::ie::destination_interface::{DestinationInterface, Interface};
use pfcp::ie::f_teid::Fteid;
use pfcp::ie::far_id::FarId;
use pfcp::ie::forwarding_parameters::ForwardingParameters;
use pfcp::ie::outer_header_creation::OuterHeaderCreation;
use pfcp::ie::pdi::Pdi;
use pfcp::ie::pdr_id::PdrId;
use pfcp::ie::precedence::Precedence;
use pfcp::ie::qer_id::QerId;
use pfcp::ie::ue_ip_address::UeIpAddress;
use pfcp::ie::update_far::UpdateFarBuilder;
use pfcp::ie::update_forwarding_parameters::UpdateForwardingParameters;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

static SEID_COUNTER: AtomicU64 = AtomicU64::new(1);

fn next_smf_seid() -> u64 {
    SEID_COUNTER.fetch_add(1, Ordering::Relaxed)
}

const UPLINK_PDR_ID: u16 = 1;
const DOWNLINK_PDR_ID: u16 = 2;
const UPLINK_FAR_ID: u32 = 1;
const DOWNLINK_FAR_ID: u32 = 2;
const DEFAULT_QER_ID: u32 = 1;
const PFCP_PORT: u16 = 8805;

/// Parses a human AMBR string ("100 Mbps", "50Kbps", "2Gbps") into bps.
/// Subscription data carries these as display strings (§4.6 step 1); bare
/// numbers are assumed to already be bps.
fn parse_ambr_bps(value: &str) -> u64 {
    let trimmed = value.trim();
    let split_at = trimmed
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(trimmed.len());
    let (number, unit) = trimmed.split_at(split_at);
    let magnitude: f64 = number.trim().parse().unwrap_or(0.0);
    let multiplier = match unit.trim().to_ascii_lowercase().as_str() {
        "kbps" => 1_000.0,
        "mbps" => 1_000_000.0,
        "gbps" => 1_000_000_000.0,
        _ => 1.0,
    };
    (magnitude * multiplier) as u64
}

fn matching_sm_data<'a>(entries: &'a [SmDataEntry], dnn: &Dnn) -> Option<&'a SmDataEntry> {
    entries.iter().find(|e| e.dnn == dnn.to_string())
}

pub struct CreateSmContextArgs {
    pub pdu_session_id: PduSessionId,
    pub dnn: Dnn,
    pub snssai: Snssai,
    pub pdu_session_type: String,
    pub gnb_n3_address: Ipv4Addr,
    pub gnb_teid_uplink: u32,
}

pub struct CreateSmContextOutcome {
    pub sm_context_ref: String,
    pub ue_ipv4_address: Ipv4Addr,
    pub upf_n3_address: Ipv4Addr,
    pub upf_teid_downlink: u32,
    pub session_ambr_uplink: String,
    pub session_ambr_downlink: String,
    pub default_5qi: u8,
}

#[allow(clippy::too_many_arguments)]
pub async fn create_sm_context(
    store: &SessionStore,
    udm: &UdmClient,
    registry: &RegistryClient,
    pfcp: &PfcpClient,
    ipam: &IpamRegistry,
    supi: &Supi,
    args: CreateSmContextArgs,
    trace: &TraceContext,
) -> Result<CreateSmContextOutcome, SmfError> {
    if let Some(existing) = store.get(supi, args.pdu_session_id) {
        let ctx = existing.lock().await;
        match ctx.state {
            SessionState::Released => {}
            SessionState::Active => {
                // §8 idempotence law: a replayed create against an ACTIVE
                // session returns the same outcome, not an error.
                return Ok(CreateSmContextOutcome {
                    sm_context_ref: crate::model::sm_context_ref(&ctx.supi, ctx.pdu_session_id),
                    ue_ipv4_address: ctx.ue_ipv4.ok_or(SmfError::InvalidState(args.pdu_session_id.0))?,
                    upf_n3_address: ctx.upf_n3_address,
                    upf_teid_downlink: ctx.upf_teid_downlink,
                    session_ambr_uplink: ctx.session_ambr_uplink.clone(),
                    session_ambr_downlink: ctx.session_ambr_downlink.clone(),
                    default_5qi: ctx.default_5qi,
                });
            }
            _ => return Err(SmfError::InvalidState(args.pdu_session_id.0)),
        }
    }

    let sm_data = udm.get_sm_data(supi, &args.dnn, trace).await?;
    let entry = matching_sm_data(&sm_data, &args.dnn)
        .ok_or_else(|| SmfError::SubscriptionDenied(args.dnn.to_string()))?;
    if !entry
        .allowed_pdu_session_types
        .iter()
        .any(|t| t.eq_ignore_ascii_case(&args.pdu_session_type))
    {
        return Err(SmfError::SubscriptionDenied(format!(
            "pdu session type {} not allowed for dnn {}",
            args.pdu_session_type, args.dnn
        )));
    }

    let pool = ipam
        .pool(&args.dnn)
        .ok_or_else(|| SmfError::IpPoolExhausted(args.dnn.to_string()))?;
    let ue_ipv4 = pool
        .allocate(supi, args.pdu_session_id)
        .ok_or_else(|| SmfError::IpPoolExhausted(args.dnn.to_string()))?;

    let upf = match upf_selector::select_upf(registry, &args.dnn, &args.snssai, trace).await {
        Ok(upf) => upf,
        Err(err) => {
            pool.release(supi, args.pdu_session_id);
            return Err(SmfError::NoUpfAvailable(err.to_string()));
        }
    };
    let upf_n4_address = upf
        .ipv4_addresses
        .first()
        .and_then(|a| a.parse::<Ipv4Addr>().ok())
        .ok_or_else(|| {
            pool.release(supi, args.pdu_session_id);
            SmfError::NoUpfAvailable(format!("upf {} advertises no N4 address", upf.nf_instance_id))
        })?;
    let peer = SocketAddr::new(IpAddr::V4(upf_n4_address), PFCP_PORT);

    let smf_seid = next_smf_seid();

    let uplink_pdr_id = PdrId::new(UPLINK_PDR_ID);
    let downlink_pdr_id = PdrId::new(DOWNLINK_PDR_ID);
    let uplink_far_id = FarId::new(UPLINK_FAR_ID);
    let downlink_far_id = FarId::new(DOWNLINK_FAR_ID);
    let qer_id = QerId::new(DEFAULT_QER_ID);

    let uplink_teid_seed = smf_seid as u32;
    let uplink_pdi = Pdi::uplink_access_with_teid(Fteid::choose_ipv4(uplink_teid_seed));
    let create_pdrs = vec![
        CreatePdrBuilder::new(uplink_pdr_id)
            .precedence(Precedence::new(100))
            .pdi(uplink_pdi)
            .far_id(uplink_far_id)
            .qer_id(qer_id)
            .build()
            .map_err(|e| SmfError::UpfRejected(e.to_string()))?
            .to_ie(),
        CreatePdrBuilder::new(downlink_pdr_id)
            .precedence(Precedence::new(100))
            .pdi(Pdi::downlink_core_with_ue_ip(UeIpAddress::new(
                Some(ue_ipv4),
                None,
            )))
            .far_id(downlink_far_id)
            .qer_id(qer_id)
            .build()
            .map_err(|e| SmfError::UpfRejected(e.to_string()))?
            .to_ie(),
    ];

    let downlink_forwarding = ForwardingParameters::new(DestinationInterface::new(Interface::Access))
        .with_outer_header_creation(OuterHeaderCreation::gtpu_ipv4(
            args.gnb_teid_uplink,
            args.gnb_n3_address,
        ));
    let create_fars = vec![
        CreateFarBuilder::new(uplink_far_id)
            .action(FarAction::Forward)
            .forward_to(Interface::Core)
            .build()
            .map_err(|e| SmfError::UpfRejected(e.to_string()))?
            .to_ie(),
        CreateFarBuilder::new(downlink_far_id)
            .action(FarAction::Forward)
            .forwarding_parameters(downlink_forwarding)
            .build()
            .map_err(|e| SmfError::UpfRejected(e.to_string()))?
            .to_ie(),
    ];

    let create_qers = vec![if entry.session_ambr_uplink.is_empty() {
        CreateQer::open_gate(qer_id).to_ie()
    } else {
        CreateQerBuilder::new(qer_id)
            .rate_limit(
                parse_ambr_bps(&entry.session_ambr_uplink),
                parse_ambr_bps(&entry.session_ambr_downlink),
            )
            .build()
            .map_err(|e| SmfError::UpfRejected(e.to_string()))?
            .to_ie()
    }];

    let establish = pfcp
        .session_establishment(peer, smf_seid, create_pdrs, create_fars, create_qers)
        .await
        .map_err(|e| {
            pool.release(supi, args.pdu_session_id);
            SmfError::UpfUnreachable(e.to_string())
        })?;

    let cause = Cause::unmarshal(&establish.cause_ie().payload)
        .map_err(|e| SmfError::UpfRejected(e.to_string()))?;
    if cause.value != CauseValue::RequestAccepted {
        pool.release(supi, args.pdu_session_id);
        return Err(SmfError::UpfRejected(format!("{:?}", cause.value)));
    }

    let upf_fseid = establish
        .fseid()
        .map_err(|e| SmfError::UpfRejected(e.to_string()))?;
    let mut upf_teid_downlink = 0u32;
    let mut upf_n3_address = upf_n4_address;
    for created in establish.created_pdrs_typed() {
        let created = created.map_err(|e| SmfError::UpfRejected(e.to_string()))?;
        if created.pdr_id == uplink_pdr_id {
            upf_teid_downlink = created.f_teid.teid;
            if let Some(ipv4) = created.f_teid.ipv4_address {
                upf_n3_address = ipv4;
            }
        }
    }

    let session = PduSession {
        supi: supi.clone(),
        pdu_session_id: args.pdu_session_id,
        dnn: args.dnn.clone(),
        snssai: args.snssai,
        pdu_session_type: args.pdu_session_type,
        state: SessionState::Active,
        ue_ipv4: Some(ue_ipv4),
        upf_node_id: upf.nf_instance_id.to_string(),
        upf_n3_address,
        upf_seid: upf_fseid.seid.0,
        smf_seid,
        upf_teid_downlink,
        gnb_n3_address: args.gnb_n3_address,
        gnb_teid_uplink: args.gnb_teid_uplink,
        session_ambr_uplink: entry.session_ambr_uplink.clone(),
        session_ambr_downlink: entry.session_ambr_downlink.clone(),
        default_5qi: entry.default_5qi,
        created_at: Instant::now(),
    };
    let default_5qi = entry.default_5qi;
    let sm_context_ref = crate::model::sm_context_ref(&session.supi, session.pdu_session_id);
    store.insert(session);

    Ok(CreateSmContextOutcome {
        sm_context_ref,
        ue_ipv4_address: ue_ipv4,
        upf_n3_address,
        upf_teid_downlink,
        session_ambr_uplink: entry.session_ambr_uplink.clone(),
        session_ambr_downlink: entry.session_ambr_downlink.clone(),
        default_5qi,
    })
}

/// Re-points the downlink FAR at a new gNB tunnel endpoint, e.g. on N2
/// handover (§4.6 step 6's modification path; §9 names AMF as the only
/// caller today).
pub async fn update_sm_context(
    store: &SessionStore,
    pfcp: &PfcpClient,
    supi: &Supi,
    pdu_session_id: PduSessionId,
    gnb_n3_address: Ipv4Addr,
    gnb_teid_uplink: u32,
) -> Result<(), SmfError> {
    let lock = store
        .get(supi, pdu_session_id)
        .ok_or(SmfError::SessionNotFound(pdu_session_id.0))?;
    let mut session = lock.lock().await;
    if !session.state.can_transition_to(SessionState::Modifying) {
        return Err(SmfError::InvalidState(pdu_session_id.0));
    }
    let previous_state = session.state;
    session.state = SessionState::Modifying;

    let peer = SocketAddr::new(IpAddr::V4(session.upf_n3_address), PFCP_PORT);
    let downlink_far_id = FarId::new(DOWNLINK_FAR_ID);
    let downlink_forwarding = UpdateForwardingParameters::new()
        .with_destination_interface(DestinationInterface::new(Interface::Access))
        .with_outer_header_creation(OuterHeaderCreation::gtpu_ipv4(gnb_teid_uplink, gnb_n3_address));
    let update_fars = vec![UpdateFarBuilder::new(downlink_far_id)
        .apply_action(ApplyAction::FORW)
        .update_forwarding_parameters(downlink_forwarding)
        .build()
        .map_err(|e| SmfError::UpfRejected(e.to_string()))?
        .to_ie()];

    let response = pfcp
        .session_modification(peer, session.upf_seid, update_fars, vec![])
        .await
        .map_err(|e| {
            session.state = previous_state;
            SmfError::UpfUnreachable(e.to_string())
        })?;

    let cause = Cause::unmarshal(&response.cause.payload).map_err(|e| {
        session.state = previous_state;
        SmfError::UpfRejected(e.to_string())
    })?;
    if cause.value != CauseValue::RequestAccepted {
        session.state = previous_state;
        return Err(SmfError::UpfRejected(format!("{:?}", cause.value)));
    }

    session.gnb_n3_address = gnb_n3_address;
    session.gnb_teid_uplink = gnb_teid_uplink;
    session.state = SessionState::Active;
    Ok(())
}

/// Tears down the N4 session and releases the UE IP. Per the UPF
/// non-response handling AMF's own `deregister` establishes (best-effort
/// cleanup, §4.6 step 7): a PFCP timeout still removes the session locally
/// rather than leaving it stranded in `Releasing`.
pub async fn release_sm_context(
    store: &SessionStore,
    pfcp: &PfcpClient,
    ipam: &IpamRegistry,
    supi: &Supi,
    pdu_session_id: PduSessionId,
) -> Result<(), SmfError> {
    let lock = store
        .get(supi, pdu_session_id)
        .ok_or(SmfError::SessionNotFound(pdu_session_id.0))?;
    let dnn = {
        let mut session = lock.lock().await;
        if !session.state.can_transition_to(SessionState::Releasing) {
            return Err(SmfError::InvalidState(pdu_session_id.0));
        }
        session.state = SessionState::Releasing;

        let peer = SocketAddr::new(IpAddr::V4(session.upf_n3_address), PFCP_PORT);
        match pfcp.session_deletion(peer, session.upf_seid).await {
            Ok(_) => {}
            Err(err) => {
                tracing::warn!(
                    supi = %supi,
                    pdu_session_id = pdu_session_id.0,
                    error = %err,
                    "upf did not confirm session deletion, releasing locally"
                );
            }
        }
        session.state = SessionState::Released;
        session.dnn.clone()
    };

    if let Some(pool) = ipam.pool(&dnn) {
        pool.release(supi, pdu_session_id);
    }
    store.remove(supi, pdu_session_id);
    Ok(())
}

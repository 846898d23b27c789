//! `Nudm_SDM` subscriber-data mediation (§4.3): `GetAMData`/`GetSMData`,
//! filling UDR-absent fields with the defaults §4.3 names.

use crate::client::UdrClient;
use crate::error::UdmError;
use crate::model::{AmData, SmDataEntry};
use common::ids::{Dnn, Supi};
use common::trace::TraceContext;

const DEFAULT_5QI: u8 = 9;
const DEFAULT_ARP_PRIORITY: u8 = 8;
const DEFAULT_PDU_TYPES: &[&str] = &["IPV4", "IPV6", "IPV4V6"];

pub async fn get_am_data(udr: &UdrClient, supi: &Supi, trace: &TraceContext) -> Result<AmData, UdmError> {
    let subscriber = udr
        .get_subscriber(supi, trace)
        .await
        .map_err(|_| UdmError::SubscriberNotFound(supi.to_string()))?;
    let _ = subscriber; // subscribed DNNs aren't part of AM data; presence confirms the SUPI exists.
    Ok(AmData {
        session_ambr_uplink: "1 Gbps".to_string(),
        session_ambr_downlink: "2 Gbps".to_string(),
        subscribed_nssai: vec![],
    })
}

pub async fn get_sm_data(
    udr: &UdrClient,
    supi: &Supi,
    dnn: Option<&Dnn>,
    trace: &TraceContext,
) -> Result<Vec<SmDataEntry>, UdmError> {
    let entries = udr
        .get_sm_data(supi, dnn, trace)
        .await
        .map_err(UdmError::UpstreamUnavailable)?;
    Ok(entries
        .into_iter()
        .map(|e| SmDataEntry {
            dnn: e.dnn,
            session_ambr_uplink: e.session_ambr_uplink,
            session_ambr_downlink: e.session_ambr_downlink,
            default_5qi: if e.default_5qi == 0 { DEFAULT_5QI } else { e.default_5qi },
            arp_priority: if e.arp_priority == 0 {
                DEFAULT_ARP_PRIORITY
            } else {
                e.arp_priority
            },
            allowed_pdu_session_types: if e.allowed_pdu_session_types.is_empty() {
                DEFAULT_PDU_TYPES.iter().map(|s| s.to_string()).collect()
            } else {
                e.allowed_pdu_session_types
            },
        })
        .collect())
}

//! `Nudm_UEAuthentication.GenerateAuthData` (§4.3): fetches credentials
//! from UDR, runs MILENAGE, and derives the 5G-AKA vector; also the AUTS
//! resynchronisation supplement (SPEC_FULL.md §3) and `ConfirmAuth` audit.

use crate::client::{UdrAuthCredential, UdrClient, UdrOpVariant};
use crate::error::UdmError;
use crate::model::{AuthEvent, AuthVector, ResyncInfo};
use common::ids::Supi;
use common::trace::TraceContext;
use rand::RngCore;

fn hex_decode_16(s: &str) -> [u8; 16] {
    let bytes = hex_decode(s);
    let mut out = [0u8; 16];
    out.copy_from_slice(&bytes[..16]);
    out
}

fn hex_decode(s: &str) -> Vec<u8> {
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap_or(0))
        .collect()
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

fn derive_opc(credential: &UdrAuthCredential) -> [u8; 16] {
    match &credential.op {
        UdrOpVariant::Opc(hex) => hex_decode_16(hex),
        UdrOpVariant::Op(hex) => {
            let k = hex_decode_16(&credential.k_hex);
            milenage::derive_opc(&k, &hex_decode_16(hex))
        }
    }
}

/// Runs the `GenerateAuthData` procedure of §4.3. `resync` carries the
/// UE-reported `(RAND, AUTS)` pair when the UE rejected a previous AUTN
/// (SPEC_FULL.md §3's AUTS supplement).
pub async fn generate_auth_data(
    udr: &UdrClient,
    supi: &Supi,
    serving_network_name: &str,
    resync: Option<ResyncInfo>,
    trace: &TraceContext,
) -> Result<AuthVector, UdmError> {
    let credential = udr
        .get_auth_subscription(supi, trace)
        .await
        .map_err(UdmError::UpstreamUnavailable)?;
    if credential.algorithm != "milenage" {
        return Err(UdmError::AlgorithmUnsupported(credential.algorithm.clone()));
    }
    let k = hex_decode_16(&credential.k_hex);
    let opc = derive_opc(&credential);

    let rand = match &resync {
        // Re-challenge with the same RAND the UE computed AUTS against,
        // per TS 33.102 §C.3.
        Some(info) => hex_decode_16(&info.rand),
        None => {
            let mut rand = [0u8; 16];
            rand::thread_rng().fill_bytes(&mut rand);
            rand
        }
    };

    if let Some(info) = &resync {
        let auts_bytes = hex_decode(&info.auts);
        let mut auts = [0u8; 14];
        auts.copy_from_slice(&auts_bytes[..14]);
        let ak_star = milenage::derive_ak_star(&k, &opc, &rand);
        let sqn_ms = milenage::recover_sqn_ms(&auts, &ak_star);
        let resync_check = milenage::compute_resync(&k, &opc, &rand, sqn_ms, credential.amf);
        if resync_check.mac_s != milenage::auts_mac_s(&auts) {
            return Err(UdmError::ResyncRequired);
        }
        udr.resync_sqn(supi, sqn_ms, trace)
            .await
            .map_err(UdmError::UpstreamUnavailable)?;
    }

    let sqn = udr
        .increment_sqn(supi, 1, trace)
        .await
        .map_err(UdmError::UpstreamUnavailable)?;

    let vectors = milenage::compute(&k, &opc, &rand, sqn, credential.amf);
    let autn = milenage::build_autn(sqn, &vectors.ak, credential.amf, &vectors.mac_a);

    let xres_star = milenage::kdf::derive_res_star(
        &vectors.ck,
        &vectors.ik,
        serving_network_name,
        &rand,
        &vectors.res,
    );
    let mut sqn_xor_ak = [0u8; 6];
    let sqn_bytes = sqn.to_be_bytes();
    for i in 0..6 {
        sqn_xor_ak[i] = sqn_bytes[2 + i] ^ vectors.ak[i];
    }
    let kausf = milenage::kdf::derive_kausf(&vectors.ck, &vectors.ik, serving_network_name, &sqn_xor_ak);

    Ok(AuthVector {
        auth_type: "5G_AKA".to_string(),
        rand: hex_encode(&rand),
        autn: hex_encode(&autn),
        xres_star: hex_encode(&xres_star),
        kausf: hex_encode(&kausf),
    })
}

/// Records an authentication success/failure for audit (§4.3's
/// `ConfirmAuth`). This reference UDM logs the event; a production
/// deployment would also feed a subscriber-facing audit trail.
pub fn confirm_auth(event: &AuthEvent) {
    if event.success {
        tracing::info!(supi = %event.supi, auth_ctx_id = %event.auth_ctx_id, "authentication succeeded");
    } else {
        tracing::warn!(supi = %event.supi, auth_ctx_id = %event.auth_ctx_id, "authentication failed");
    }
}

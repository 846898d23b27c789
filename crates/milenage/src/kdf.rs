//! The generic 3GPP KDF (HMAC-SHA-256 over an `FC || P0 || L0 || ...`
//! string) and its TS 33.501 Annex A instantiations for 5G-AKA.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

fn push_param(s: &mut Vec<u8>, param: &[u8]) {
    s.extend_from_slice(param);
    s.extend_from_slice(&(param.len() as u16).to_be_bytes());
}

/// Generic KDF per TS 33.220 Annex B: `HMAC-SHA-256(key, FC || P0 || L0 || P1 || L1 || ...)`.
fn kdf(key: &[u8], fc: u8, params: &[&[u8]]) -> [u8; 32] {
    let mut s = vec![fc];
    for p in params {
        push_param(&mut s, p);
    }
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts any key length");
    mac.update(&s);
    let result = mac.finalize().into_bytes();
    let mut out = [0u8; 32];
    out.copy_from_slice(&result);
    out
}

const FC_KAUSF: u8 = 0x6a;
const FC_RES_STAR: u8 = 0x6b;
const FC_KSEAF: u8 = 0x6c;
const FC_KAMF: u8 = 0x6d;

/// TS 33.501 Annex A.4: derives RES*/XRES* (128 bits, the rightmost half of
/// the 256-bit KDF output) from CK||IK, the serving network name, RAND, and
/// the MILENAGE RES.
pub fn derive_res_star(ck: &[u8; 16], ik: &[u8; 16], serving_network_name: &str, rand: &[u8; 16], res: &[u8]) -> [u8; 16] {
    let mut key = Vec::with_capacity(32);
    key.extend_from_slice(ck);
    key.extend_from_slice(ik);
    let out = kdf(
        &key,
        FC_RES_STAR,
        &[serving_network_name.as_bytes(), rand, res],
    );
    let mut xres_star = [0u8; 16];
    xres_star.copy_from_slice(&out[16..32]);
    xres_star
}

/// TS 33.501 Annex A.2: derives KAUSF from CK||IK, the serving network name,
/// and SQN XOR AK.
pub fn derive_kausf(ck: &[u8; 16], ik: &[u8; 16], serving_network_name: &str, sqn_xor_ak: &[u8; 6]) -> [u8; 32] {
    let mut key = Vec::with_capacity(32);
    key.extend_from_slice(ck);
    key.extend_from_slice(ik);
    kdf(&key, FC_KAUSF, &[serving_network_name.as_bytes(), sqn_xor_ak])
}

/// TS 33.501 Annex A.6: derives KSEAF from KAUSF and the serving network name.
pub fn derive_kseaf(kausf: &[u8; 32], serving_network_name: &str) -> [u8; 32] {
    kdf(kausf, FC_KSEAF, &[serving_network_name.as_bytes()])
}

/// TS 33.501 Annex A.7: derives KAMF from KSEAF, the SUPI, and the ABBA
/// parameter (a 2-byte anti-bidding-down indicator; the AMF/AUSF in this
/// core always use the default value `0x0000`, see DESIGN.md).
pub fn derive_kamf(kseaf: &[u8; 32], supi: &str, abba: &[u8]) -> [u8; 32] {
    kdf(kseaf, FC_KAMF, &[supi.as_bytes(), abba])
}

/// TS 33.501 Annex A.5: HXRES* = leftmost 128 bits of SHA-256(RAND || XRES*).
pub fn derive_hxres_star(rand: &[u8; 16], xres_star: &[u8; 16]) -> [u8; 16] {
    use sha2::Digest;
    let mut hasher = Sha256::new();
    hasher.update(rand);
    hasher.update(xres_star);
    let digest = hasher.finalize();
    let mut out = [0u8; 16];
    out.copy_from_slice(&digest[0..16]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kdf_is_deterministic_and_sensitive_to_inputs() {
        let ck = [1u8; 16];
        let ik = [2u8; 16];
        let sqn_xor_ak = [3u8; 6];
        let a = derive_kausf(&ck, &ik, "5G:mnc001.mcc001.3gppnetwork.org", &sqn_xor_ak);
        let b = derive_kausf(&ck, &ik, "5G:mnc001.mcc001.3gppnetwork.org", &sqn_xor_ak);
        assert_eq!(a, b);
        let c = derive_kausf(&ck, &ik, "5G:mnc002.mcc001.3gppnetwork.org", &sqn_xor_ak);
        assert_ne!(a, c);
    }

    #[test]
    fn hxres_star_matches_sha256_truncation() {
        let rand = [0u8; 16];
        let xres_star = [0u8; 16];
        let hxres = derive_hxres_star(&rand, &xres_star);
        assert_eq!(hxres.len(), 16);
    }

    #[test]
    fn derivation_chain_res_to_kseaf_to_kamf() {
        let ck = [7u8; 16];
        let ik = [8u8; 16];
        let sqn_xor_ak = [9u8; 6];
        let sn_name = "5G:mnc001.mcc001.3gppnetwork.org";
        let kausf = derive_kausf(&ck, &ik, sn_name, &sqn_xor_ak);
        let kseaf = derive_kseaf(&kausf, sn_name);
        let kamf = derive_kamf(&kseaf, "imsi-001010000000001", &[0x00, 0x00]);
        assert_ne!(kausf, kseaf);
        assert_ne!(kseaf, kamf);
    }
}

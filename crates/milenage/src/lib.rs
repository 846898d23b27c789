//! MILENAGE (3GPP TS 35.206) authentication and key-generation functions
//! f1..f5/f1*/f5*, OPc derivation, and the TS 33.501 Annex A 5G-AKA key
//! derivation functions (XRES*/HXRES*, KAUSF, KSEAF, KAMF).
//!
//! This crate never exposes K or OPc to callers beyond what they pass in;
//! per SPEC_FULL.md §5 ("Credentials (K/OPc): never leave UDM"), only the
//! UDM crate is expected to hold these values in memory.

mod cipher;
pub mod kdf;
pub mod sqn;

use cipher::{encrypt_block, rotate_left, xor16};

const C1: [u8; 16] = [0u8; 16];
const C2: [u8; 16] = {
    let mut c = [0u8; 16];
    c[15] = 1;
    c
};
const C3: [u8; 16] = {
    let mut c = [0u8; 16];
    c[15] = 2;
    c
};
const C4: [u8; 16] = {
    let mut c = [0u8; 16];
    c[15] = 4;
    c
};
const C5: [u8; 16] = {
    let mut c = [0u8; 16];
    c[15] = 8;
    c
};

const R1: u32 = 64;
const R2: u32 = 0;
const R3: u32 = 32;
const R4: u32 = 64;
const R5: u32 = 96;

/// Derives OPc from the operator variant algorithm configuration value OP
/// and the subscriber key K, per TS 35.206 §4.1: `OPc = E_K(OP) XOR OP`.
pub fn derive_opc(k: &[u8; 16], op: &[u8; 16]) -> [u8; 16] {
    xor16(&encrypt_block(k, op), op)
}

/// Output of the full MILENAGE computation for one (K, OPc, RAND, SQN, AMF).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Milenage {
    /// f1: network authentication code, used to build AUTN.
    pub mac_a: [u8; 8],
    /// f2: the UE's expected response.
    pub res: [u8; 8],
    /// f3: cipher key.
    pub ck: [u8; 16],
    /// f4: integrity key.
    pub ik: [u8; 16],
    /// f5: anonymity key, used to conceal SQN in AUTN.
    pub ak: [u8; 6],
}

fn temp(k: &[u8; 16], opc: &[u8; 16], rand: &[u8; 16]) -> [u8; 16] {
    encrypt_block(k, &xor16(rand, opc))
}

fn sqn_amf_block(sqn: u64, amf: u16) -> [u8; 16] {
    let sqn_bytes = sqn.to_be_bytes();
    let sqn6 = &sqn_bytes[2..8]; // SQN is 48 bits
    let amf_bytes = amf.to_be_bytes();
    let mut block = [0u8; 16];
    block[0..6].copy_from_slice(sqn6);
    block[6..8].copy_from_slice(&amf_bytes);
    block[8..14].copy_from_slice(sqn6);
    block[14..16].copy_from_slice(&amf_bytes);
    block
}

/// Runs f1..f5 for a fresh vector generation (UDM's `GenerateAuthData`).
pub fn compute(k: &[u8; 16], opc: &[u8; 16], rand: &[u8; 16], sqn: u64, amf: u16) -> Milenage {
    let temp = temp(k, opc, rand);

    let in1 = sqn_amf_block(sqn, amf);
    let out1 = xor16(&encrypt_block(k, &xor16(&xor16(&temp, &rotate_left(&in1, R1)), &C1)), opc);
    let mut mac_a = [0u8; 8];
    mac_a.copy_from_slice(&out1[0..8]);

    let out2 = xor16(
        &encrypt_block(k, &xor16(&rotate_left(&xor16(&temp, &C2), R2), opc)),
        opc,
    );
    let mut res = [0u8; 8];
    res.copy_from_slice(&out2[8..16]);
    let mut ak = [0u8; 6];
    ak.copy_from_slice(&out2[0..6]);

    let out3 = xor16(
        &encrypt_block(k, &xor16(&rotate_left(&xor16(&temp, &C3), R3), opc)),
        opc,
    );
    let ck = out3;

    let out4 = xor16(
        &encrypt_block(k, &xor16(&rotate_left(&xor16(&temp, &C4), R4), opc)),
        opc,
    );
    let ik = out4;

    Milenage { mac_a, res, ck, ik, ak }
}

/// f1*/f5*, used to verify the UE's AUTS during resynchronisation
/// (TS 33.102 §C.3; see DESIGN.md for the Open Question decision).
pub struct ResyncMilenage {
    pub mac_s: [u8; 8],
    pub ak_star: [u8; 6],
}

pub fn compute_resync(k: &[u8; 16], opc: &[u8; 16], rand: &[u8; 16], sqn_ms: u64, amf: u16) -> ResyncMilenage {
    let temp = temp(k, opc, rand);
    let in1 = sqn_amf_block(sqn_ms, amf);
    let out1 = xor16(&encrypt_block(k, &xor16(&xor16(&temp, &rotate_left(&in1, R1)), &C1)), opc);
    let mut mac_s = [0u8; 8];
    mac_s.copy_from_slice(&out1[8..16]);

    let out5 = xor16(
        &encrypt_block(k, &xor16(&rotate_left(&xor16(&temp, &C5), R5), opc)),
        opc,
    );
    let mut ak_star = [0u8; 6];
    ak_star.copy_from_slice(&out5[0..6]);

    ResyncMilenage { mac_s, ak_star }
}

/// Builds AUTN = (SQN XOR AK) || AMF || MAC-A.
pub fn build_autn(sqn: u64, ak: &[u8; 6], amf: u16, mac_a: &[u8; 8]) -> [u8; 16] {
    let sqn_bytes = sqn.to_be_bytes();
    let sqn6 = &sqn_bytes[2..8];
    let mut sqn_xor_ak = [0u8; 6];
    for i in 0..6 {
        sqn_xor_ak[i] = sqn6[i] ^ ak[i];
    }
    let mut autn = [0u8; 16];
    autn[0..6].copy_from_slice(&sqn_xor_ak);
    autn[6..8].copy_from_slice(&amf.to_be_bytes());
    autn[8..16].copy_from_slice(mac_a);
    autn
}

/// Recovers SQN from AUTN given AK, the inverse of [`build_autn`]'s first step.
pub fn recover_sqn(autn: &[u8; 16], ak: &[u8; 6]) -> u64 {
    let mut sqn6 = [0u8; 6];
    for i in 0..6 {
        sqn6[i] = autn[i] ^ ak[i];
    }
    let mut buf = [0u8; 8];
    buf[2..8].copy_from_slice(&sqn6);
    u64::from_be_bytes(buf)
}

/// f5*, used standalone to recover AK* for AUTS decoding: independent of
/// SQN, so callers solving for SQN_MS can pass any placeholder SQN.
pub fn derive_ak_star(k: &[u8; 16], opc: &[u8; 16], rand: &[u8; 16]) -> [u8; 6] {
    compute_resync(k, opc, rand, 0, 0).ak_star
}

/// Recovers SQN_MS from a 14-byte AUTS (`SQN_MS XOR AK*` || MAC-S) given
/// AK*, TS 33.102 §C.3.
pub fn recover_sqn_ms(auts: &[u8; 14], ak_star: &[u8; 6]) -> u64 {
    let mut sqn6 = [0u8; 6];
    for i in 0..6 {
        sqn6[i] = auts[i] ^ ak_star[i];
    }
    let mut buf = [0u8; 8];
    buf[2..8].copy_from_slice(&sqn6);
    u64::from_be_bytes(buf)
}

/// Extracts the MAC-S trailer from a 14-byte AUTS.
pub fn auts_mac_s(auts: &[u8; 14]) -> [u8; 8] {
    let mut mac_s = [0u8; 8];
    mac_s.copy_from_slice(&auts[6..14]);
    mac_s
}

#[cfg(test)]
mod tests {
    use super::*;

    // 3GPP TS 35.207 test set 1.
    const K: [u8; 16] = [
        0x46, 0x5b, 0x5c, 0xe8, 0xb1, 0x99, 0xb4, 0x9f, 0xaa, 0x5f, 0x0a, 0x2e, 0xe2, 0x38, 0xa6,
        0xbc,
    ];
    const RAND: [u8; 16] = [
        0x23, 0x55, 0x3c, 0xbe, 0x96, 0x37, 0xa8, 0x9d, 0x21, 0x8a, 0xe6, 0x4d, 0xae, 0x47, 0xbf,
        0x35,
    ];
    const SQN: u64 = 0xff9bb4d0b607;
    const AMF: u16 = 0xb9b9;
    const OP: [u8; 16] = [
        0xcd, 0xc2, 0x02, 0xd5, 0x12, 0x3e, 0x20, 0xf6, 0x2b, 0x6d, 0x67, 0x6a, 0xc7, 0x2c, 0xb3,
        0x18,
    ];

    #[test]
    fn matches_3gpp_test_set_1() {
        let opc = derive_opc(&K, &OP);
        assert_eq!(
            opc,
            [
                0xcd, 0x63, 0xcb, 0x71, 0x95, 0x4a, 0x9f, 0x4e, 0x48, 0xa5, 0x99, 0x4e, 0x37, 0xa0,
                0x2b, 0xaf,
            ]
        );

        let vectors = compute(&K, &opc, &RAND, SQN, AMF);
        assert_eq!(vectors.res, [0xa5, 0x42, 0x11, 0xd5, 0xe3, 0xba, 0x50, 0xbf]);
        assert_eq!(
            vectors.ck,
            [
                0xb4, 0x0b, 0xa9, 0xa3, 0xc5, 0x8b, 0x2a, 0x05, 0xbb, 0xf0, 0xd9, 0x87, 0xb2, 0x1b,
                0xf8, 0xcb
            ]
        );
        assert_eq!(
            vectors.ik,
            [
                0xf7, 0x69, 0xbc, 0xd7, 0x51, 0x04, 0x46, 0x04, 0x12, 0x76, 0x72, 0x71, 0x1c, 0x6d,
                0x34, 0x41
            ]
        );
        assert_eq!(vectors.ak, [0xaa, 0x68, 0x9c, 0x64, 0x83, 0x70]);
        assert_eq!(
            vectors.mac_a,
            [0x4a, 0x9f, 0xfa, 0xc3, 0x54, 0xdf, 0xaf, 0xb3]
        );
    }

    #[test]
    fn autn_round_trips_sqn() {
        let opc = derive_opc(&K, &OP);
        let vectors = compute(&K, &opc, &RAND, SQN, AMF);
        let autn = build_autn(SQN, &vectors.ak, AMF, &vectors.mac_a);
        assert_eq!(recover_sqn(&autn, &vectors.ak), SQN);
    }

    #[test]
    fn auts_round_trips_sqn_ms_and_verifies_mac_s() {
        let opc = derive_opc(&K, &OP);
        let sqn_ms = 0x0000_1234_5678u64;
        let resync = compute_resync(&K, &opc, &RAND, sqn_ms, AMF);
        let ak_star = derive_ak_star(&K, &opc, &RAND);
        assert_eq!(ak_star, resync.ak_star);

        let sqn_bytes = sqn_ms.to_be_bytes();
        let mut auts = [0u8; 14];
        for i in 0..6 {
            auts[i] = sqn_bytes[2 + i] ^ ak_star[i];
        }
        auts[6..14].copy_from_slice(&resync.mac_s);

        let recovered_sqn_ms = recover_sqn_ms(&auts, &ak_star);
        assert_eq!(recovered_sqn_ms, sqn_ms);

        let recomputed = compute_resync(&K, &opc, &RAND, recovered_sqn_ms, AMF);
        assert_eq!(recomputed.mac_s, auts_mac_s(&auts));
    }

    #[test]
    fn deterministic_given_same_inputs() {
        let opc = derive_opc(&K, &OP);
        let v1 = compute(&K, &opc, &RAND, SQN, AMF);
        let v2 = compute(&K, &opc, &RAND, SQN, AMF);
        assert_eq!(v1, v2);
    }
}

use ascon_suite::aead_api::{Aead, AeadInPlace, KeyInit, Payload};
use ascon_suite::digest::{Digest, ExtendableOutput, Mac, Update, XofReader};
use ascon_suite::{
    hash256, xof128, AsconAead128, AsconHash256, AsconMac, AsconPrf, AsconPrfShort, AsconXof128,
};

fn unhex(s: &str) -> Vec<u8> {
    hex::decode(s).expect("valid hex in test vector")
}

fn key() -> [u8; 16] {
    core::array::from_fn(|i| i as u8)
}

fn nonce() -> [u8; 16] {
    core::array::from_fn(|i| 0x10 + i as u8)
}

fn counting(len: usize) -> Vec<u8> {
    (0..len).map(|i| i as u8).collect()
}

struct AeadVector {
    ad: Vec<u8>,
    pt: Vec<u8>,
    ct: &'static str,
}

fn aead_vectors() -> Vec<AeadVector> {
    vec![
        AeadVector {
            ad: vec![],
            pt: vec![],
            ct: "4F9C278211BEC9316BF68F46EE8B2EC6",
        },
        AeadVector {
            ad: vec![0x00],
            pt: vec![],
            ct: "7133E5C79505FD75061DF412C0DEA4B9",
        },
        AeadVector {
            ad: vec![],
            pt: vec![0x00],
            ct: "C84C4BC1957CAD5AA2660F67326C05EEB7",
        },
        AeadVector {
            ad: counting(20),
            pt: counting(33),
            ct: "3786D9940BF709D580EC4F74CF77A2EC4C5623E87E1E616CDDC0D12E645C85E0\
                 CF013C80BFFAD69946CAC92494A7951404",
        },
    ]
}

// -------------------------------------------------------
// Ascon-AEAD128
// -------------------------------------------------------

#[test]
fn aead128_known_answers() {
    let cipher = AsconAead128::new(&key().into());
    let nonce = nonce().into();

    for (i, v) in aead_vectors().iter().enumerate() {
        let expected = unhex(&v.ct.replace(char::is_whitespace, ""));
        let ct = cipher
            .encrypt(&nonce, Payload { msg: &v.pt, aad: &v.ad })
            .expect("encryption never fails");
        assert_eq!(ct, expected, "ciphertext mismatch for vector {i}");

        let pt = cipher
            .decrypt(&nonce, Payload { msg: &ct, aad: &v.ad })
            .expect("known-answer ciphertext must authenticate");
        assert_eq!(pt, v.pt, "plaintext mismatch for vector {i}");
    }
}

#[test]
fn aead128_detached_matches_combined() {
    let cipher = AsconAead128::new(&key().into());
    let nonce = nonce().into();
    let v = &aead_vectors()[3];

    let mut buffer = v.pt.clone();
    let tag = cipher
        .encrypt_in_place_detached(&nonce, &v.ad, &mut buffer)
        .unwrap();
    buffer.extend_from_slice(&tag);

    assert_eq!(buffer, unhex(&v.ct.replace(char::is_whitespace, "")));
}

// -------------------------------------------------------
// Ascon-Hash256 / Ascon-XOF128
// -------------------------------------------------------

#[test]
fn hash256_empty_message() {
    let expected = unhex("0B3BE5850F2F6B98CAF29F8FDEA89B64A1FA70AA249B8F839BD53BAA304D92B2");
    assert_eq!(hash256(b"").as_slice(), expected.as_slice());
    assert_eq!(AsconHash256::digest(b"").as_slice(), expected.as_slice());
}

#[test]
fn hash256_single_zero_byte() {
    let expected = unhex("0728621035AF3ED2BCA03BF6FDE900F9456F5330E4B5EE23E7F6A1E70291BC80");
    assert_eq!(hash256(&[0x00]).as_slice(), expected.as_slice());
}

#[test]
fn hash256_multi_block_message() {
    let expected = unhex("30B780A62AF595CA6D21A67BCF88AE12DAA3E336DBBA52F4112D3716BC0E633C");
    assert_eq!(hash256(&counting(40)).as_slice(), expected.as_slice());
}

#[test]
fn xof128_empty_message() {
    let expected = unhex("473D5E6164F58B39DFD84AACDB8AE42EC2D91FED33388EE0D960D9B3993295C6");
    let mut out = [0u8; 32];
    xof128(b"", &mut out);
    assert_eq!(out.as_slice(), expected.as_slice());
}

#[test]
fn xof128_long_output_read_in_pieces() {
    let expected = unhex(
        "10BFEDC5F6442D3E1D8C324878CE1DDF73B01CAFC365589283AC4CBB98E48DE3\
         CEDA8A41BB0983D539E4D90F6458C5C781724FAD641ED3CDB4779931097440B3\
         B737910AD7A30285103194928E6121CD6B38D4919D91BE56685E02056CED6636\
         93AFE3F1"
            .replace(char::is_whitespace, "")
            .as_str(),
    );

    let mut hasher = AsconXof128::default();
    hasher.update(&counting(16));
    let mut reader = hasher.finalize_xof();

    let mut out = vec![0u8; expected.len()];
    let (a, rest) = out.split_at_mut(5);
    let (b, c) = rest.split_at_mut(41);
    reader.read(a);
    reader.read(b);
    reader.read(c);

    assert_eq!(out, expected);
}

// -------------------------------------------------------
// Ascon-MAC / Ascon-PRF / Ascon-PRFshort
// -------------------------------------------------------

#[test]
fn mac_known_answers() {
    let cases = [
        (0, "EAC9D74BBEDF8BF1EBA2862B26AA6D39"),
        (33, "0163D6C01AA97DB527C2E9CD4343B2CE"),
    ];

    for (len, tag) in cases {
        let mut mac = <AsconMac as KeyInit>::new(&key().into());
        Mac::update(&mut mac, &counting(len));
        assert_eq!(
            mac.finalize().into_bytes().as_slice(),
            unhex(tag).as_slice(),
            "tag mismatch for {len}-byte message"
        );
    }
}

#[test]
fn prf_known_answer() {
    let expected = unhex(
        "F4A8E02AEBFBBE94EECEE73413FD57E8950A5A44ECD9911B52C8A3AEE9402F89\
         5B38CECDC6820B68C776E66F4916A424"
            .replace(char::is_whitespace, "")
            .as_str(),
    );

    let mut prf = <AsconPrf as KeyInit>::new(&key().into());
    prf.update(&counting(16));
    let mut out = vec![0u8; expected.len()];
    prf.finalize_xof().read(&mut out);

    assert_eq!(out, expected);
}

#[test]
fn prf_short_known_answers() {
    let prfs = AsconPrfShort::new(&key().into());

    let empty = prfs.compute(b"").unwrap();
    assert_eq!(empty.as_slice(), unhex("1C9FB3F0EC74B03FD9EA6D5A85A1CC2A").as_slice());

    let full = prfs.compute(&counting(16)).unwrap();
    assert_eq!(full.as_slice(), unhex("E8F9401813561977663D2D9E5E8C9701").as_slice());
}

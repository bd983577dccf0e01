//! Authenticator computation and the reversible password transforms.
//!
//! Both password schemes are the same MD5-stream XOR construction: the value
//! is processed in 16-byte blocks, each block XORed with an MD5 digest keyed
//! on the shared secret and chained on the previous ciphertext block. They
//! differ only in how the first block is keyed (User-Password chains on the
//! request authenticator alone, Tunnel-Password adds a two-byte salt).

use rand::Rng;

/// Generate a random request authenticator per RFC 2865 Section 3.
pub fn generate_request_authenticator() -> [u8; 16] {
    let mut rng = rand::rng();
    let mut authenticator = [0u8; 16];
    rng.fill(&mut authenticator);
    authenticator
}

/// Compute the response authenticator for an encoded packet.
///
/// `wire` must hold the full serialized packet with the *request*
/// authenticator in bytes 4..20, i.e. MD5 runs over
/// code, id, length, request authenticator, and attributes, followed by the
/// shared secret (RFC 2865 Section 3).
pub fn response_authenticator(wire: &[u8], secret: &[u8]) -> [u8; 16] {
    let mut data = Vec::with_capacity(wire.len() + secret.len());
    data.extend_from_slice(wire);
    data.extend_from_slice(secret);
    md5::compute(&data).0
}

/// Obfuscate a User-Password value per RFC 2865 Section 5.2.
///
/// The password is zero-padded to a multiple of 16 bytes (an empty password
/// becomes one all-zero block), then each block is XORed with
/// `MD5(secret || authenticator)` for the first block and
/// `MD5(secret || previous_ciphertext_block)` for the rest.
pub fn encrypt_user_password(password: &[u8], secret: &[u8], authenticator: &[u8; 16]) -> Vec<u8> {
    let mut padded = password.to_vec();
    let pad = (16 - padded.len() % 16) % 16;
    padded.resize(padded.len() + pad, 0);
    if padded.is_empty() {
        padded.resize(16, 0);
    }

    let mut out = Vec::with_capacity(padded.len());
    let mut chain = authenticator.to_vec();
    for block in padded.chunks(16) {
        let key = keyed_digest(secret, &chain);
        let mut enc = [0u8; 16];
        for (i, b) in block.iter().enumerate() {
            enc[i] = b ^ key[i];
        }
        chain = enc.to_vec();
        out.extend_from_slice(&enc);
    }
    out
}

/// De-obfuscate a User-Password value per RFC 2865 Section 5.2.
///
/// Returns `None` when the ciphertext length is not a positive multiple of
/// 16; callers treat that as "leave the attribute as received", not as a
/// packet-level failure. The recovered plaintext is truncated at the first
/// zero byte if one exists, otherwise kept at full length.
pub fn decrypt_user_password(
    ciphertext: &[u8],
    secret: &[u8],
    authenticator: &[u8; 16],
) -> Option<Vec<u8>> {
    if ciphertext.is_empty() || ciphertext.len() % 16 != 0 {
        return None;
    }

    let mut out = Vec::with_capacity(ciphertext.len());
    let mut chain: &[u8] = authenticator;
    for block in ciphertext.chunks(16) {
        let key = keyed_digest(secret, chain);
        for (i, b) in block.iter().enumerate() {
            out.push(b ^ key[i]);
        }
        chain = block;
    }
    truncate_at_nul(&mut out);
    Some(out)
}

/// Obfuscate a Tunnel-Password value per RFC 2868 Section 3.5.
///
/// Returns the salt followed by the ciphertext; the caller prepends the tag
/// byte when building the wire value. The high bit of `salt[0]` must be set
/// per the RFC, which is the caller's responsibility when choosing a salt.
pub fn encrypt_tunnel_password(
    password: &[u8],
    salt: [u8; 2],
    secret: &[u8],
    authenticator: &[u8; 16],
) -> Vec<u8> {
    let mut padded = password.to_vec();
    let pad = (16 - padded.len() % 16) % 16;
    padded.resize(padded.len() + pad, 0);
    if padded.is_empty() {
        padded.resize(16, 0);
    }

    let mut out = Vec::with_capacity(2 + padded.len());
    out.extend_from_slice(&salt);
    let mut chain = Vec::with_capacity(18);
    chain.extend_from_slice(authenticator);
    chain.extend_from_slice(&salt);
    for block in padded.chunks(16) {
        let key = keyed_digest(secret, &chain);
        let mut enc = [0u8; 16];
        for (i, b) in block.iter().enumerate() {
            enc[i] = b ^ key[i];
        }
        chain = enc.to_vec();
        out.extend_from_slice(&enc);
    }
    out
}

/// De-obfuscate a Tunnel-Password value (salt followed by ciphertext).
///
/// Returns `None` when the input is too short to carry a salt or the
/// ciphertext length is not a positive multiple of 16.
pub fn decrypt_tunnel_password(
    data: &[u8],
    secret: &[u8],
    authenticator: &[u8; 16],
) -> Option<Vec<u8>> {
    if data.len() < 2 {
        return None;
    }
    let (salt, ciphertext) = data.split_at(2);
    if ciphertext.is_empty() || ciphertext.len() % 16 != 0 {
        return None;
    }

    let mut out = Vec::with_capacity(ciphertext.len());
    let mut chain = Vec::with_capacity(18);
    chain.extend_from_slice(authenticator);
    chain.extend_from_slice(salt);
    for block in ciphertext.chunks(16) {
        let key = keyed_digest(secret, &chain);
        for (i, b) in block.iter().enumerate() {
            out.push(b ^ key[i]);
        }
        chain = block.to_vec();
    }
    truncate_at_nul(&mut out);
    Some(out)
}

fn keyed_digest(secret: &[u8], chain: &[u8]) -> [u8; 16] {
    let mut data = Vec::with_capacity(secret.len() + chain.len());
    data.extend_from_slice(secret);
    data.extend_from_slice(chain);
    md5::compute(&data).0
}

// RFC padding convention: the plaintext ends at the first zero byte.
fn truncate_at_nul(plaintext: &mut Vec<u8>) {
    if let Some(pos) = plaintext.iter().position(|&b| b == 0) {
        plaintext.truncate(pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_authenticators_differ() {
        let a = generate_request_authenticator();
        let b = generate_request_authenticator();
        assert_ne!(a, b);
    }

    #[test]
    fn response_authenticator_known_answer() {
        // code=2, id=7, length=20, request authenticator 00..0f.
        let mut wire = vec![2u8, 7, 0, 20];
        wire.extend(0u8..16);
        let digest = response_authenticator(&wire, b"testsecret");
        assert_eq!(
            hex::encode(digest),
            "1e5978131c59a2e732297aa931babe63"
        );
    }

    #[test]
    fn user_password_known_answer() {
        let secret = b"xyzzy5461";
        let authenticator: [u8; 16] = hex::decode("0f403f9473978057bd83d5cb98f4227a")
            .unwrap()
            .try_into()
            .unwrap();

        let ciphertext = encrypt_user_password(b"arctangent", secret, &authenticator);
        assert_eq!(hex::encode(&ciphertext), "0dbe708d93d413ce3196e43f782a0aee");

        let plaintext = decrypt_user_password(&ciphertext, secret, &authenticator).unwrap();
        assert_eq!(plaintext, b"arctangent");
    }

    #[test]
    fn user_password_multi_block() {
        let secret = b"xyzzy5461";
        let authenticator: [u8; 16] = hex::decode("0f403f9473978057bd83d5cb98f4227a")
            .unwrap()
            .try_into()
            .unwrap();
        let password = b"averyverylongpassword-exceeding16";

        let ciphertext = encrypt_user_password(password, secret, &authenticator);
        assert_eq!(ciphertext.len(), 48);
        assert_eq!(
            hex::encode(&ciphertext),
            "0dba768b8bcc11d9268e8b511f5a6b9dab45d0da504f45262006289837861ddd\
             9523ff99de1ad829da79c5342bd50f16"
        );

        let plaintext = decrypt_user_password(&ciphertext, secret, &authenticator).unwrap();
        assert_eq!(plaintext, password);
    }

    #[test]
    fn user_password_bad_length_is_skipped() {
        let authenticator = [1u8; 16];
        assert!(decrypt_user_password(&[0u8; 15], b"s", &authenticator).is_none());
        assert!(decrypt_user_password(&[], b"s", &authenticator).is_none());
    }

    #[test]
    fn user_password_empty_pads_to_one_block() {
        let authenticator = [1u8; 16];
        let ciphertext = encrypt_user_password(b"", b"secret", &authenticator);
        assert_eq!(ciphertext.len(), 16);
        let plaintext = decrypt_user_password(&ciphertext, b"secret", &authenticator).unwrap();
        assert!(plaintext.is_empty());
    }

    #[test]
    fn user_password_without_nul_keeps_full_length() {
        // Exactly 16 bytes leaves no padding, so no zero byte to cut at.
        let password = b"sixteen-byte-pwd";
        let authenticator = [7u8; 16];
        let ciphertext = encrypt_user_password(password, b"secret", &authenticator);
        assert_eq!(ciphertext.len(), 16);
        let plaintext = decrypt_user_password(&ciphertext, b"secret", &authenticator).unwrap();
        assert_eq!(plaintext, password);
    }

    #[test]
    fn tunnel_password_round_trip() {
        let secret = b"xyzzy5461";
        let authenticator: [u8; 16] = hex::decode("0f403f9473978057bd83d5cb98f4227a")
            .unwrap()
            .try_into()
            .unwrap();
        let salt = [0x81, 0x65];

        let data = encrypt_tunnel_password(b"tunnelpass", salt, secret, &authenticator);
        assert_eq!(&data[..2], &salt);
        assert_eq!(data.len(), 18);

        let plaintext = decrypt_tunnel_password(&data, secret, &authenticator).unwrap();
        assert_eq!(plaintext, b"tunnelpass");
    }

    #[test]
    fn tunnel_password_rejects_short_input() {
        let authenticator = [0u8; 16];
        assert!(decrypt_tunnel_password(&[0x80], b"s", &authenticator).is_none());
        assert!(decrypt_tunnel_password(&[0x80, 0x01, 0xaa], b"s", &authenticator).is_none());
    }
}

//! Decoded attribute instances.

use std::net::{Ipv4Addr, Ipv6Addr};

use chrono::TimeZone;
use chrono::Utc;

use crate::auth;
use crate::dict::{dictionary, AttrMeta, DataKind, EncKind, ATTR_VSA};
use crate::packet::PacketError;

use super::Value;

/// Largest value a plain attribute can carry: 255 minus the type/len header.
pub const MAX_PLAIN_VALUE: usize = 253;
/// Largest value a vendor sub-attribute can carry: the outer 255-byte TLV
/// minus type/len, vendor id, and vendor type/len headers.
pub const MAX_VSA_VALUE: usize = 247;

/// One RADIUS attribute, either decoded from the wire or built for encoding.
///
/// For Vendor-Specific attributes each vendor sub-TLV becomes its own `Attr`;
/// `wire_len` then accounts for the full outer framing of that single
/// sub-attribute (`vendor_len + 6`).
#[derive(Debug, Clone)]
pub struct Attr {
    type_code: u8,
    wire_len: u8,
    vendor_id: u32,
    vendor_type: u8,
    vendor_len: u8,
    tag: Option<u8>,
    raw_data: Vec<u8>,
    meta: Option<&'static AttrMeta>,
    decrypted: bool,
    evaluated: Option<Value>,
}

impl Attr {
    /// Build an attribute for a dictionary entry from raw value bytes.
    pub fn new(meta: &'static AttrMeta, raw_data: Vec<u8>) -> Result<Self, PacketError> {
        let tag = if meta.tagged {
            raw_data.first().copied()
        } else {
            None
        };
        let mut attr = Attr {
            type_code: meta.type_code,
            wire_len: 0,
            vendor_id: meta.vendor_id,
            vendor_type: meta.vendor_type,
            vendor_len: 0,
            tag,
            raw_data,
            meta: Some(meta),
            decrypted: false,
            evaluated: None,
        };
        attr.update_len()?;
        Ok(attr)
    }

    /// Plain attribute decoded from the wire. Metadata is attached when the
    /// dictionary knows the type; an unknown type is kept as raw bytes.
    pub(crate) fn decoded_plain(type_code: u8, wire_len: u8, raw_data: Vec<u8>) -> Self {
        let meta = dictionary().find_attr(type_code);
        let tag = match meta {
            Some(m) if m.tagged => raw_data.first().copied(),
            _ => None,
        };
        Attr {
            type_code,
            wire_len,
            vendor_id: 0,
            vendor_type: 0,
            vendor_len: 0,
            tag,
            raw_data,
            meta,
            decrypted: false,
            evaluated: None,
        }
    }

    /// Vendor sub-attribute decoded from a VSA payload.
    pub(crate) fn decoded_vsa(
        vendor_id: u32,
        vendor_type: u8,
        vendor_len: u8,
        raw_data: Vec<u8>,
    ) -> Self {
        let meta = dictionary().find_vsa(vendor_id, vendor_type);
        let tag = match meta {
            Some(m) if m.tagged => raw_data.first().copied(),
            _ => None,
        };
        Attr {
            type_code: ATTR_VSA,
            wire_len: vendor_len + 6,
            vendor_id,
            vendor_type,
            vendor_len,
            tag,
            raw_data,
            meta,
            decrypted: false,
            evaluated: None,
        }
    }

    pub fn type_code(&self) -> u8 {
        self.type_code
    }

    /// Wire length including all framing for this attribute.
    pub fn wire_len(&self) -> u8 {
        self.wire_len
    }

    pub fn vendor_id(&self) -> u32 {
        self.vendor_id
    }

    pub fn vendor_type(&self) -> u8 {
        self.vendor_type
    }

    pub fn vendor_len(&self) -> u8 {
        self.vendor_len
    }

    /// RFC 2868 tag byte, present only on tagged attributes.
    pub fn tag(&self) -> Option<u8> {
        self.tag
    }

    pub fn is_vsa(&self) -> bool {
        self.type_code == ATTR_VSA
    }

    /// Value bytes as carried on the wire (including the tag byte for tagged
    /// attributes). After a successful password de-obfuscation this holds
    /// the plaintext instead; see [`Attr::is_decrypted`].
    pub fn raw_data(&self) -> &[u8] {
        &self.raw_data
    }

    pub fn meta(&self) -> Option<&'static AttrMeta> {
        self.meta
    }

    /// Whether password de-obfuscation has already been applied. The MD5
    /// chain must never run twice on the same instance; once this is set,
    /// `raw_data` is plaintext.
    pub fn is_decrypted(&self) -> bool {
        self.decrypted
    }

    /// Interpret the value as UTF-8 text, without evaluating or decrypting.
    pub fn as_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.raw_data).ok()
    }

    /// Interpret the value as a big-endian u32.
    pub fn as_u32(&self) -> Option<u32> {
        let bytes: [u8; 4] = self.raw_data.as_slice().try_into().ok()?;
        Some(u32::from_be_bytes(bytes))
    }

    /// Interpret the value as an IPv4 address.
    pub fn as_ipv4(&self) -> Option<Ipv4Addr> {
        let bytes: [u8; 4] = self.raw_data.as_slice().try_into().ok()?;
        Some(Ipv4Addr::from(bytes))
    }

    /// Recompute wire lengths from the current value bytes.
    pub(crate) fn update_len(&mut self) -> Result<(), PacketError> {
        if self.type_code == ATTR_VSA {
            if self.raw_data.len() > MAX_VSA_VALUE {
                return Err(PacketError::ValueTooLong(self.raw_data.len()));
            }
            self.vendor_len = self.raw_data.len() as u8 + 2;
            self.wire_len = self.vendor_len + 6;
        } else {
            if self.raw_data.len() > MAX_PLAIN_VALUE {
                return Err(PacketError::ValueTooLong(self.raw_data.len()));
            }
            self.vendor_len = 0;
            self.wire_len = self.raw_data.len() as u8 + 2;
        }
        Ok(())
    }

    /// Evaluate the attribute into a typed [`Value`], memoized per instance.
    ///
    /// The first call interprets the raw bytes according to the dictionary
    /// metadata, running password de-obfuscation first for encrypted kinds;
    /// subsequent calls return the cached value without recomputing. A value
    /// whose length does not match its declared kind, or an attribute the
    /// dictionary does not know, evaluates to the raw bytes.
    pub fn evaluate(&mut self, secret: &[u8], authenticator: &[u8; 16]) -> &Value {
        if self.evaluated.is_none() {
            let value = self.compute_value(secret, authenticator);
            self.evaluated = Some(value);
        }
        self.evaluated.as_ref().expect("just memoized")
    }

    fn compute_value(&mut self, secret: &[u8], authenticator: &[u8; 16]) -> Value {
        let Some(meta) = self.meta else {
            return Value::Raw(self.raw_data.clone());
        };

        match meta.enc_kind {
            EncKind::UserPassword if !self.decrypted => {
                // A ciphertext that is not a positive multiple of 16 is left
                // as received rather than failing the packet.
                if let Some(plain) =
                    auth::decrypt_user_password(&self.raw_data, secret, authenticator)
                {
                    self.raw_data = plain;
                    self.decrypted = true;
                    let _ = self.update_len();
                }
            }
            EncKind::TunnelPassword if !self.decrypted => {
                // Wire value is tag, salt, ciphertext.
                if !self.raw_data.is_empty() {
                    if let Some(plain) =
                        auth::decrypt_tunnel_password(&self.raw_data[1..], secret, authenticator)
                    {
                        self.raw_data = plain;
                        self.decrypted = true;
                        let _ = self.update_len();
                    }
                }
            }
            _ => {}
        }

        // Tagged attributes carry the tag byte ahead of the value proper;
        // after decryption the stored bytes are the bare plaintext.
        let payload: &[u8] = if meta.tagged && !self.decrypted && !self.raw_data.is_empty() {
            &self.raw_data[1..]
        } else {
            &self.raw_data
        };

        match meta.data_kind {
            DataKind::Text => match std::str::from_utf8(payload) {
                Ok(s) => Value::Text(s.to_owned()),
                Err(_) => Value::Raw(self.raw_data.clone()),
            },
            DataKind::Byte if payload.len() == 1 => Value::Byte(payload[0]),
            DataKind::UInt16 if payload.len() == 2 => {
                Value::UInt16(u16::from_be_bytes([payload[0], payload[1]]))
            }
            DataKind::UInt32 if payload.len() == 4 => {
                Value::UInt32(u32::from_be_bytes(payload.try_into().expect("4 bytes")))
            }
            DataKind::SignedInt if payload.len() == 4 => {
                Value::SignedInt(i32::from_be_bytes(payload.try_into().expect("4 bytes")))
            }
            DataKind::UInt64 if payload.len() == 8 => {
                Value::UInt64(u64::from_be_bytes(payload.try_into().expect("8 bytes")))
            }
            DataKind::Date if payload.len() == 4 => {
                let secs = u32::from_be_bytes(payload.try_into().expect("4 bytes"));
                match Utc.timestamp_opt(i64::from(secs), 0).single() {
                    Some(ts) => Value::Date(ts),
                    None => Value::Raw(self.raw_data.clone()),
                }
            }
            DataKind::Ipv4 if payload.len() == 4 => {
                let bytes: [u8; 4] = payload.try_into().expect("4 bytes");
                Value::Ipv4(Ipv4Addr::from(bytes))
            }
            DataKind::Ipv6 if payload.len() == 16 => {
                let bytes: [u8; 16] = payload.try_into().expect("16 bytes");
                Value::Ipv6(Ipv6Addr::from(bytes))
            }
            DataKind::Ethernet if payload.len() == 6 => {
                Value::Ethernet(payload.try_into().expect("6 bytes"))
            }
            DataKind::InterfaceId if payload.len() == 8 => {
                Value::InterfaceId(payload.try_into().expect("8 bytes"))
            }
            // Prefix kinds, the VSA container itself, length mismatches, and
            // anything else fall back to the raw bytes.
            _ => Value::Raw(self.raw_data.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_AUTH: [u8; 16] = [0u8; 16];

    #[test]
    fn builds_plain_attr_with_lengths() {
        let meta = dictionary().find_by_name("User-Name").unwrap();
        let attr = Attr::new(meta, b"alice".to_vec()).unwrap();
        assert_eq!(attr.type_code(), 1);
        assert_eq!(attr.wire_len(), 7);
        assert_eq!(attr.vendor_len(), 0);
    }

    #[test]
    fn builds_vsa_attr_with_lengths() {
        let meta = dictionary().find_by_name("Mikrotik-Rate-Limit").unwrap();
        let attr = Attr::new(meta, b"10M/10M".to_vec()).unwrap();
        assert_eq!(attr.type_code(), ATTR_VSA);
        assert_eq!(attr.vendor_id(), 14988);
        assert_eq!(attr.vendor_type(), 8);
        assert_eq!(attr.vendor_len(), 9);
        assert_eq!(attr.wire_len(), 15);
    }

    #[test]
    fn rejects_oversized_value() {
        let meta = dictionary().find_by_name("User-Name").unwrap();
        assert!(Attr::new(meta, vec![0u8; MAX_PLAIN_VALUE + 1]).is_err());
        let vsa = dictionary().find_by_name("Mikrotik-Group").unwrap();
        assert!(Attr::new(vsa, vec![0u8; MAX_VSA_VALUE + 1]).is_err());
    }

    #[test]
    fn evaluates_text_and_u32_and_ipv4() {
        let name = dictionary().find_by_name("User-Name").unwrap();
        let mut attr = Attr::new(name, b"alice".to_vec()).unwrap();
        assert_eq!(
            attr.evaluate(b"", &NO_AUTH),
            &Value::Text("alice".to_owned())
        );

        let port = dictionary().find_by_name("NAS-Port").unwrap();
        let mut attr = Attr::new(port, 42u32.to_be_bytes().to_vec()).unwrap();
        assert_eq!(attr.evaluate(b"", &NO_AUTH), &Value::UInt32(42));

        let ip = dictionary().find_by_name("NAS-IP-Address").unwrap();
        let mut attr = Attr::new(ip, vec![192, 168, 1, 1]).unwrap();
        assert_eq!(
            attr.evaluate(b"", &NO_AUTH),
            &Value::Ipv4(Ipv4Addr::new(192, 168, 1, 1))
        );
    }

    #[test]
    fn length_mismatch_falls_back_to_raw() {
        let port = dictionary().find_by_name("NAS-Port").unwrap();
        let mut attr = Attr::new(port, vec![1, 2, 3]).unwrap();
        assert_eq!(attr.evaluate(b"", &NO_AUTH), &Value::Raw(vec![1, 2, 3]));
    }

    #[test]
    fn unknown_attribute_evaluates_to_raw() {
        let attr = Attr::decoded_plain(250, 5, vec![0xde, 0xad, 0xbe]);
        assert!(attr.meta().is_none());
        let mut attr = attr;
        assert_eq!(
            attr.evaluate(b"", &NO_AUTH),
            &Value::Raw(vec![0xde, 0xad, 0xbe])
        );
    }

    #[test]
    fn evaluation_is_memoized() {
        let name = dictionary().find_by_name("User-Name").unwrap();
        let mut attr = Attr::new(name, b"bob".to_vec()).unwrap();
        let first = attr.evaluate(b"", &NO_AUTH).clone();
        // Mutating the raw bytes must not change the cached value.
        attr.raw_data = b"mallory".to_vec();
        assert_eq!(attr.evaluate(b"", &NO_AUTH), &first);
    }

    #[test]
    fn user_password_decrypts_once() {
        let secret = b"xyzzy5461";
        let authenticator: [u8; 16] = hex::decode("0f403f9473978057bd83d5cb98f4227a")
            .unwrap()
            .try_into()
            .unwrap();
        let ciphertext = auth::encrypt_user_password(b"arctangent", secret, &authenticator);

        let meta = dictionary().find_by_name("User-Password").unwrap();
        let mut attr = Attr::new(meta, ciphertext).unwrap();
        assert!(!attr.is_decrypted());

        let value = attr.evaluate(secret, &authenticator).clone();
        assert_eq!(value, Value::Text("arctangent".to_owned()));
        assert!(attr.is_decrypted());
        assert_eq!(attr.raw_data(), b"arctangent");

        // Second evaluation must not run the MD5 chain again.
        assert_eq!(attr.evaluate(secret, &authenticator), &value);
        assert_eq!(attr.raw_data(), b"arctangent");
    }

    #[test]
    fn user_password_bad_length_left_as_received() {
        let meta = dictionary().find_by_name("User-Password").unwrap();
        let mut attr = Attr::new(meta, vec![0xaa; 15]).unwrap();
        let value = attr.evaluate(b"secret", &NO_AUTH).clone();
        assert_eq!(value, Value::Raw(vec![0xaa; 15]));
        assert!(!attr.is_decrypted());
        assert_eq!(attr.raw_data(), &[0xaa; 15][..]);
    }

    #[test]
    fn tunnel_password_evaluates_to_plaintext() {
        let secret = b"xyzzy5461";
        let authenticator = auth::generate_request_authenticator();
        let salt = [0x81, 0x65];
        let mut wire = vec![0x01]; // tag
        wire.extend(auth::encrypt_tunnel_password(
            b"tunnelpass",
            salt,
            secret,
            &authenticator,
        ));

        let meta = dictionary().find_by_name("Tunnel-Password").unwrap();
        let mut attr = Attr::new(meta, wire).unwrap();
        let value = attr.evaluate(secret, &authenticator).clone();
        assert_eq!(value, Value::Text("tunnelpass".to_owned()));
        assert!(attr.is_decrypted());
    }

    #[test]
    fn tagged_attr_keeps_tag_and_strips_it_from_value() {
        // Tunnel-Client-Endpoint: tag byte then text.
        let meta = dictionary().find_by_name("Tunnel-Client-Endpoint").unwrap();
        let mut attr = Attr::new(meta, b"\x01host.example".to_vec()).unwrap();
        assert_eq!(attr.tag(), Some(1));
        assert_eq!(
            attr.evaluate(b"", &NO_AUTH),
            &Value::Text("host.example".to_owned())
        );
    }

    #[test]
    fn event_timestamp_evaluates_to_date() {
        let meta = dictionary().find_by_name("Event-Timestamp").unwrap();
        let mut attr = Attr::new(meta, 1_700_000_000u32.to_be_bytes().to_vec()).unwrap();
        match attr.evaluate(b"", &NO_AUTH) {
            Value::Date(ts) => assert_eq!(ts.timestamp(), 1_700_000_000),
            other => panic!("expected date, got {other:?}"),
        }
    }
}

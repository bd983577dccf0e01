//! Packet model and wire codec.

use std::any::Any;
use std::fmt;
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, LazyLock};

use rand::rngs::OsRng;
use rand::TryRngCore;
use thiserror::Error;
use tracing::{debug, trace};

use super::Code;
use crate::attributes::{Attr, Value};
use crate::auth;
use crate::buffer_pool::BufferPool;
use crate::dict::{dictionary, ATTR_VSA};

#[derive(Error, Debug)]
pub enum PacketError {
    #[error("packet too short: {0} bytes, minimum is 20")]
    TooShort(usize),
    #[error("invalid declared packet length: {0}")]
    InvalidDeclaredLength(usize),
    #[error("declared length {declared} exceeds received {received} bytes")]
    Truncated { declared: usize, received: usize },
    #[error("invalid packet code: {0}")]
    InvalidCode(u8),
    #[error("attribute length error: declared {declared}, {remaining} value bytes left in packet")]
    AttrLength { declared: usize, remaining: usize },
    #[error("VSA payload too short: {0} bytes, minimum is 6")]
    VsaTooShort(usize),
    #[error("vendor attribute length error: declared {declared}, {remaining} value bytes left")]
    VendorAttrLength { declared: usize, remaining: usize },
    #[error("attribute value too long: {0} bytes")]
    ValueTooLong(usize),
    #[error("no space in encode buffer: used {used}, {left} bytes left")]
    NoBufferSpace { used: usize, left: usize },
    #[error("random source failure: {0}")]
    Random(String),
    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),
}

/// Packet ids for newly originated packets come from a process-wide counter,
/// so concurrent callers do not hand out the same id back to back.
static NEXT_ID: AtomicU32 = AtomicU32::new(0);

/// Scratch buffers for encoding, shared across all packets.
static SCRATCH_POOL: LazyLock<Arc<BufferPool>> =
    LazyLock::new(|| BufferPool::new(Packet::MAX_PACKET_LEN, 32));

/// RADIUS packet: header fields plus the ordered attribute list.
///
/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |     Code      |  Identifier   |            Length             |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                                                               |
/// |                         Authenticator                         |
/// |                                                               |
/// |                                                               |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |  Attributes ...
/// +-+-+-+-+-+-+-+-+-+-+-+-+-
/// ```
pub struct Packet {
    code: Code,
    id: u8,
    /// Length as read from the wire; recomputed on encode.
    length: u16,
    /// Request authenticator as decoded, or fresh random bytes after encoding
    /// a newly originated packet.
    authenticator: [u8; 16],
    attributes: Vec<Attr>,
    secret: Vec<u8>,
    /// Opaque caller context; never interpreted by the codec.
    context: Option<Box<dyn Any + Send>>,
}

impl Packet {
    /// Minimum packet size: code, id, length, authenticator (RFC 2865).
    pub const MIN_PACKET_LEN: usize = 20;
    /// Maximum packet size (RFC 2865).
    pub const MAX_PACKET_LEN: usize = 4096;

    /// Create a new outbound packet with an id from the process-wide counter.
    pub fn new(code: Code) -> Self {
        Self::with_id(code, NEXT_ID.fetch_add(1, Ordering::Relaxed) as u8)
    }

    /// Create a new outbound packet with an explicit id.
    pub fn with_id(code: Code, id: u8) -> Self {
        Packet {
            code,
            id,
            length: 0,
            authenticator: [0u8; 16],
            attributes: Vec::new(),
            secret: Vec::new(),
            context: None,
        }
    }

    /// Decode a received wire buffer into a packet.
    ///
    /// `data` must hold at least the declared packet length; trailing bytes
    /// beyond it are ignored per RFC 2865. Any malformed attribute aborts the
    /// whole decode; a partially parsed packet is never returned.
    pub fn decode(data: &[u8]) -> Result<Self, PacketError> {
        if data.len() < Self::MIN_PACKET_LEN {
            return Err(PacketError::TooShort(data.len()));
        }
        let declared = usize::from(u16::from_be_bytes([data[2], data[3]]));
        if !(Self::MIN_PACKET_LEN..=Self::MAX_PACKET_LEN).contains(&declared) {
            return Err(PacketError::InvalidDeclaredLength(declared));
        }
        if declared > data.len() {
            debug!(declared, received = data.len(), "truncated packet");
            return Err(PacketError::Truncated {
                declared,
                received: data.len(),
            });
        }
        let code = Code::from_u8(data[0]).ok_or(PacketError::InvalidCode(data[0]))?;

        let mut authenticator = [0u8; 16];
        authenticator.copy_from_slice(&data[4..20]);
        let mut packet = Packet {
            code,
            id: data[1],
            length: declared as u16,
            authenticator,
            attributes: Vec::new(),
            secret: Vec::new(),
            context: None,
        };

        let mut rest = &data[Self::MIN_PACKET_LEN..declared];
        while rest.len() >= 2 {
            let attr_type = rest[0];
            let attr_len = usize::from(rest[1]);
            if attr_len < 2 || attr_len > rest.len() {
                return Err(PacketError::AttrLength {
                    declared: attr_len,
                    remaining: rest.len() - 2,
                });
            }
            let value = &rest[2..attr_len];
            if attr_type == ATTR_VSA {
                packet.parse_vsa(value)?;
            } else {
                packet
                    .attributes
                    .push(Attr::decoded_plain(attr_type, rest[1], value.to_vec()));
            }
            rest = &rest[attr_len..];
        }

        trace!(
            code = packet.code.as_u8(),
            id = packet.id,
            len = packet.length,
            attrs = packet.attributes.len(),
            "decoded packet"
        );
        Ok(packet)
    }

    /// Decode the nested vendor TLV region of a type-26 attribute. Each
    /// vendor sub-TLV becomes its own attribute in wire order.
    fn parse_vsa(&mut self, data: &[u8]) -> Result<(), PacketError> {
        if data.len() < 6 {
            return Err(PacketError::VsaTooShort(data.len()));
        }
        let vendor_id = u32::from_be_bytes(data[..4].try_into().expect("4 bytes"));
        let mut rest = &data[4..];
        while rest.len() >= 2 {
            let vendor_type = rest[0];
            let vendor_len = usize::from(rest[1]);
            if vendor_len < 2 || vendor_len > rest.len() {
                return Err(PacketError::VendorAttrLength {
                    declared: vendor_len,
                    remaining: rest.len() - 2,
                });
            }
            self.attributes.push(Attr::decoded_vsa(
                vendor_id,
                vendor_type,
                rest[1],
                rest[2..vendor_len].to_vec(),
            ));
            rest = &rest[vendor_len..];
        }
        Ok(())
    }

    /// Serialize the packet to wire bytes.
    ///
    /// With `new_packet` set, the authenticator field is filled with 16 fresh
    /// random bytes (also stored on the packet, so the caller can run
    /// password obfuscation against it). Otherwise the packet's request
    /// authenticator is serialized and then overwritten in the output with
    /// the computed response authenticator; the stored field keeps the
    /// request authenticator so re-encoding is deterministic.
    pub fn encode(&mut self, new_packet: bool) -> Result<Vec<u8>, PacketError> {
        let mut scratch = SCRATCH_POOL.acquire();
        let buf = scratch.as_mut();
        buf.resize(Self::MAX_PACKET_LEN, 0);

        buf[0] = self.code.as_u8();
        buf[1] = self.id;
        if new_packet {
            let mut authenticator = [0u8; 16];
            OsRng
                .try_fill_bytes(&mut authenticator)
                .map_err(|e| PacketError::Random(e.to_string()))?;
            self.authenticator = authenticator;
        }
        buf[4..20].copy_from_slice(&self.authenticator);

        let mut used = Self::MIN_PACKET_LEN;
        for attr in &self.attributes {
            let mut left = Self::MAX_PACKET_LEN - used;
            if left < 2 {
                return Err(PacketError::NoBufferSpace { used, left });
            }
            buf[used] = attr.type_code();
            buf[used + 1] = attr.wire_len();
            used += 2;
            left -= 2;

            let data_len = if attr.is_vsa() {
                if left < 6 {
                    return Err(PacketError::NoBufferSpace { used, left });
                }
                buf[used..used + 4].copy_from_slice(&attr.vendor_id().to_be_bytes());
                buf[used + 4] = attr.vendor_type();
                buf[used + 5] = attr.vendor_len();
                used += 6;
                left -= 6;
                usize::from(attr.vendor_len()) - 2
            } else {
                usize::from(attr.wire_len()) - 2
            };

            if data_len > 0 {
                if left < data_len {
                    return Err(PacketError::NoBufferSpace { used, left });
                }
                buf[used..used + data_len].copy_from_slice(attr.raw_data());
                used += data_len;
            }
        }

        self.length = used as u16;
        buf[2..4].copy_from_slice(&self.length.to_be_bytes());
        if !new_packet {
            let digest = auth::response_authenticator(&buf[..used], &self.secret);
            buf[4..20].copy_from_slice(&digest);
        }

        trace!(
            code = self.code.as_u8(),
            id = self.id,
            len = used,
            new_packet,
            "encoded packet"
        );
        // Copy out of the scratch buffer so pool contents never alias the
        // returned wire bytes.
        Ok(buf[..used].to_vec())
    }

    /// Derive a reply packet: same id, request authenticator, and secret as
    /// the received packet, so the response authenticator is computed over
    /// the original request authenticator as the RFC requires.
    pub fn reply(&self, code: Code) -> Self {
        Packet {
            code,
            id: self.id,
            length: 0,
            authenticator: self.authenticator,
            attributes: Vec::new(),
            secret: self.secret.clone(),
            context: None,
        }
    }

    pub fn code(&self) -> Code {
        self.code
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    /// Declared length from decode, or the serialized length after encode.
    pub fn length(&self) -> u16 {
        self.length
    }

    pub fn authenticator(&self) -> &[u8; 16] {
        &self.authenticator
    }

    pub fn set_authenticator(&mut self, authenticator: [u8; 16]) {
        self.authenticator = authenticator;
    }

    pub fn secret(&self) -> &[u8] {
        &self.secret
    }

    pub fn set_secret(&mut self, secret: impl Into<Vec<u8>>) {
        self.secret = secret.into();
    }

    pub fn attributes(&self) -> &[Attr] {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut [Attr] {
        &mut self.attributes
    }

    pub fn add_attr(&mut self, attr: Attr) {
        self.attributes.push(attr);
    }

    /// Append an attribute by dictionary name with raw value bytes.
    pub fn add_raw(&mut self, name: &str, value: &[u8]) -> Result<(), PacketError> {
        let meta = dictionary()
            .find_by_name(name)
            .ok_or_else(|| PacketError::UnknownAttribute(name.to_owned()))?;
        self.attributes.push(Attr::new(meta, value.to_vec())?);
        Ok(())
    }

    /// Append a text attribute by dictionary name.
    pub fn add_str(&mut self, name: &str, value: &str) -> Result<(), PacketError> {
        self.add_raw(name, value.as_bytes())
    }

    /// Append a big-endian u32 attribute by dictionary name.
    pub fn add_u32(&mut self, name: &str, value: u32) -> Result<(), PacketError> {
        self.add_raw(name, &value.to_be_bytes())
    }

    /// Append an IPv4 attribute by dictionary name.
    pub fn add_ipv4(&mut self, name: &str, value: Ipv4Addr) -> Result<(), PacketError> {
        self.add_raw(name, &value.octets())
    }

    /// Find the first attribute matching a dictionary name. Returns `None`
    /// both for unknown names and for names absent from the packet.
    pub fn find_attr(&self, name: &str) -> Option<&Attr> {
        let meta = dictionary().find_by_name(name)?;
        self.attributes
            .iter()
            .find(|a| a.meta().is_some_and(|m| std::ptr::eq(m, meta)))
    }

    /// Evaluate the first attribute matching a dictionary name, decrypting
    /// encrypted kinds against this packet's secret and authenticator.
    pub fn value_of(&mut self, name: &str) -> Option<&Value> {
        let meta = dictionary().find_by_name(name)?;
        let Packet {
            attributes,
            secret,
            authenticator,
            ..
        } = self;
        let attr = attributes
            .iter_mut()
            .find(|a| a.meta().is_some_and(|m| std::ptr::eq(m, meta)))?;
        Some(attr.evaluate(secret, authenticator))
    }

    /// Attach opaque caller context. The codec never looks at it.
    pub fn set_context<T: Any + Send>(&mut self, context: T) {
        self.context = Some(Box::new(context));
    }

    pub fn context<T: Any>(&self) -> Option<&T> {
        self.context.as_deref()?.downcast_ref()
    }
}

impl fmt::Debug for Packet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Packet")
            .field("code", &self.code)
            .field("id", &self.id)
            .field("length", &self.length)
            .field("authenticator", &self.authenticator)
            .field("attributes", &self.attributes)
            .finish_non_exhaustive()
    }
}

//! Typed attribute values.

use std::net::{Ipv4Addr, Ipv6Addr};

use chrono::{DateTime, Utc};

/// Evaluated attribute value: one variant per dictionary data kind that has
/// a canonical Rust representation, plus [`Value::Raw`] as the fallback for
/// unknown attributes, prefix kinds, and values whose length does not match
/// their declared kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Raw(Vec<u8>),
    Text(String),
    Byte(u8),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    SignedInt(i32),
    Ipv4(Ipv4Addr),
    Ipv6(Ipv6Addr),
    Date(DateTime<Utc>),
    /// MAC address.
    Ethernet([u8; 6]),
    /// IPv6 interface identifier.
    InterfaceId([u8; 8]),
}

impl Value {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Value::UInt32(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_ipv4(&self) -> Option<Ipv4Addr> {
        match self {
            Value::Ipv4(a) => Some(*a),
            _ => None,
        }
    }

    pub fn as_raw(&self) -> Option<&[u8]> {
        match self {
            Value::Raw(b) => Some(b),
            _ => None,
        }
    }
}

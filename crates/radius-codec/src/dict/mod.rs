//! RADIUS attribute dictionary.
//!
//! The dictionary maps attribute identities (type code, plus vendor id and
//! vendor type for Vendor-Specific attributes) and display names to the
//! metadata needed to decode, evaluate, and re-encode attribute values.
//!
//! The standard dictionary is built once, on first access, from the per-RFC
//! registration tables in this module's submodules. After that it is
//! read-only and safe to consult from any number of threads without locking.

use std::collections::HashMap;
use std::sync::LazyLock;

mod rfc2865;
mod rfc2866;
mod rfc2868;
mod rfc2869;
mod vendors;

pub use vendors::{VENDOR_MIKROTIK, VENDOR_WISPR};

/// Attribute type reserved for Vendor-Specific (RFC 2865 Section 5.26).
pub const ATTR_VSA: u8 = 26;

/// Wire data type of an attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataKind {
    /// Opaque byte string.
    Raw,
    /// UTF-8 text.
    Text,
    /// IPv4 address, 4 bytes.
    Ipv4,
    /// IPv4 prefix, 6 bytes.
    Ipv4Prefix,
    /// Unsigned 32-bit integer, big-endian.
    UInt32,
    /// Unsigned 64-bit integer, big-endian.
    UInt64,
    /// 32-bit unix timestamp.
    Date,
    /// Interface identifier, 8 bytes.
    InterfaceId,
    /// IPv6 address, 16 bytes.
    Ipv6,
    /// IPv6 prefix, up to 18 bytes.
    Ipv6Prefix,
    /// Single byte.
    Byte,
    /// MAC address, 6 bytes.
    Ethernet,
    /// Unsigned 16-bit integer, big-endian.
    UInt16,
    /// Signed 32-bit integer, big-endian.
    SignedInt,
    /// Vendor-Specific container.
    Vsa,
}

/// Reversible encryption applied to an attribute value on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncKind {
    /// Value is carried in the clear.
    None,
    /// RFC 2865 Section 5.2 User-Password obfuscation.
    UserPassword,
    /// RFC 2868 Section 3.5 Tunnel-Password obfuscation (salted).
    TunnelPassword,
    /// Ascend's proprietary scheme; not decoded, values stay raw.
    VendorProprietary,
}

/// Dictionary entry describing one attribute. Immutable after registration.
#[derive(Debug)]
pub struct AttrMeta {
    /// Display name, unique case-insensitively.
    pub name: &'static str,
    /// RADIUS attribute type; `ATTR_VSA` for vendor attributes.
    pub type_code: u8,
    /// Vendor id, 0 for non-VSA attributes.
    pub vendor_id: u32,
    /// Vendor sub-type, 0 for non-VSA attributes.
    pub vendor_type: u8,
    pub data_kind: DataKind,
    /// Whether the value carries a leading tag byte (RFC 2868).
    pub tagged: bool,
    pub enc_kind: EncKind,
}

impl AttrMeta {
    /// Identity key for this entry: `(type_code, vendor_id, vendor_type)`
    /// packed into a u64. For non-VSA attributes the vendor fields are zero
    /// and the key degenerates to the bare type code.
    fn identity_key(&self) -> u64 {
        identity_key(self.type_code, self.vendor_id, self.vendor_type)
    }
}

fn identity_key(type_code: u8, vendor_id: u32, vendor_type: u8) -> u64 {
    if type_code != ATTR_VSA {
        return u64::from(type_code);
    }
    (u64::from(vendor_id) << 16) | (u64::from(vendor_type) << 8) | u64::from(type_code)
}

/// Attribute dictionary: entry storage plus the two lookup indexes.
#[derive(Debug, Default)]
pub struct Dictionary {
    entries: Vec<AttrMeta>,
    by_identity: HashMap<u64, usize>,
    by_name: HashMap<String, usize>,
}

impl Dictionary {
    /// Create an empty dictionary. Most callers want [`dictionary`] instead.
    pub fn new() -> Self {
        Dictionary::default()
    }

    /// Build the standard dictionary from the bundled RFC and vendor tables.
    pub fn standard() -> Self {
        let mut dict = Dictionary::new();
        rfc2865::register(&mut dict);
        rfc2866::register(&mut dict);
        rfc2868::register(&mut dict);
        rfc2869::register(&mut dict);
        vendors::register(&mut dict);
        dict
    }

    /// Register an entry. Only meant to run during dictionary construction.
    ///
    /// # Panics
    ///
    /// Panics if the identity key or the lowercased name collides with an
    /// already registered entry. A colliding table would make decode results
    /// ambiguous, so this fails fast rather than overwriting.
    pub fn register(&mut self, meta: AttrMeta) {
        let bkey = meta.identity_key();
        let skey = meta.name.to_lowercase();
        assert!(
            !self.by_identity.contains_key(&bkey),
            "duplicate attribute identity ({}, {}, {}) registering {}",
            meta.type_code,
            meta.vendor_id,
            meta.vendor_type,
            meta.name,
        );
        assert!(
            !self.by_name.contains_key(&skey),
            "duplicate attribute name {}",
            meta.name,
        );
        let idx = self.entries.len();
        self.entries.push(meta);
        self.by_identity.insert(bkey, idx);
        self.by_name.insert(skey, idx);
    }

    /// Look up an entry by wire identity. For plain attributes pass zero
    /// vendor fields.
    pub fn find_by_identity(
        &self,
        type_code: u8,
        vendor_id: u32,
        vendor_type: u8,
    ) -> Option<&AttrMeta> {
        let idx = self
            .by_identity
            .get(&identity_key(type_code, vendor_id, vendor_type))?;
        Some(&self.entries[*idx])
    }

    /// Look up a plain attribute by type code.
    pub fn find_attr(&self, type_code: u8) -> Option<&AttrMeta> {
        self.find_by_identity(type_code, 0, 0)
    }

    /// Look up a vendor attribute by vendor id and vendor sub-type.
    pub fn find_vsa(&self, vendor_id: u32, vendor_type: u8) -> Option<&AttrMeta> {
        self.find_by_identity(ATTR_VSA, vendor_id, vendor_type)
    }

    /// Look up any entry by display name, case-insensitively.
    pub fn find_by_name(&self, name: &str) -> Option<&AttrMeta> {
        let idx = self.by_name.get(&name.to_lowercase())?;
        Some(&self.entries[*idx])
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Registration shorthands used by the per-RFC tables.

fn add_attr(dict: &mut Dictionary, type_code: u8, name: &'static str, data_kind: DataKind) {
    add_attr_ext(dict, type_code, name, data_kind, false, EncKind::None);
}

fn add_attr_ext(
    dict: &mut Dictionary,
    type_code: u8,
    name: &'static str,
    data_kind: DataKind,
    tagged: bool,
    enc_kind: EncKind,
) {
    dict.register(AttrMeta {
        name,
        type_code,
        vendor_id: 0,
        vendor_type: 0,
        data_kind,
        tagged,
        enc_kind,
    });
}

fn add_vsa(
    dict: &mut Dictionary,
    vendor_id: u32,
    vendor_type: u8,
    name: &'static str,
    data_kind: DataKind,
) {
    dict.register(AttrMeta {
        name,
        type_code: ATTR_VSA,
        vendor_id,
        vendor_type,
        data_kind,
        tagged: false,
        enc_kind: EncKind::None,
    });
}

static DICTIONARY: LazyLock<Dictionary> = LazyLock::new(Dictionary::standard);

/// The process-wide standard dictionary, built on first access.
pub fn dictionary() -> &'static Dictionary {
    &DICTIONARY
}

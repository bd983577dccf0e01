//! RADIUS wire codec and data model.
//!
//! This crate implements the RADIUS binary packet format from RFC 2865,
//! 2866, 2868, and 2869:
//!
//! - Packet and attribute encoding/decoding, including nested
//!   Vendor-Specific attribute (VSA) sub-TLVs
//! - A static attribute dictionary mapping wire identities and names to
//!   typed metadata
//! - Lazy typed evaluation of attribute values
//! - MD5-based User-Password and Tunnel-Password obfuscation and
//!   request/response authenticator calculation
//!
//! Socket I/O is out of scope: decoding consumes a byte buffer already read
//! from the network and encoding produces the byte buffer to send.
//!
//! # Example
//!
//! ```rust
//! use radius_codec::{Code, Packet, Value};
//! use radius_codec::auth::{encrypt_user_password, generate_request_authenticator};
//!
//! let req_auth = generate_request_authenticator();
//! let mut request = Packet::new(Code::AccessRequest);
//! request.set_authenticator(req_auth);
//! request.set_secret("secret");
//!
//! request.add_str("User-Name", "alice").unwrap();
//! let encrypted = encrypt_user_password(b"password", b"secret", &req_auth);
//! request.add_raw("User-Password", &encrypted).unwrap();
//!
//! let wire = request.encode(false).unwrap();
//! let mut decoded = Packet::decode(&wire).unwrap();
//! decoded.set_secret("secret");
//! assert_eq!(
//!     decoded.value_of("User-Name"),
//!     Some(&Value::Text("alice".into()))
//! );
//!
//! // Lazy evaluation decrypts against the packet's secret and authenticator.
//! assert_eq!(
//!     request.value_of("User-Password"),
//!     Some(&Value::Text("password".into()))
//! );
//! ```

pub mod attributes;
pub mod auth;
pub mod buffer_pool;
pub mod dict;
pub mod packet;

pub use attributes::{Attr, Value};
pub use auth::{
    decrypt_tunnel_password, decrypt_user_password, encrypt_tunnel_password,
    encrypt_user_password, generate_request_authenticator, response_authenticator,
};
pub use buffer_pool::{BufferPool, PooledBuffer};
pub use dict::{dictionary, AttrMeta, DataKind, Dictionary, EncKind, ATTR_VSA};
pub use packet::{Code, Packet, PacketError};

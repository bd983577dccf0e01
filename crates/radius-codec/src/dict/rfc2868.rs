//! Tunnel attributes from RFC 2868. All of these carry a leading tag byte.

use super::{add_attr_ext, DataKind, Dictionary, EncKind};

pub(super) fn register(dict: &mut Dictionary) {
    add_attr_ext(dict, 64, "Tunnel-Type", DataKind::UInt32, true, EncKind::None);
    add_attr_ext(
        dict,
        65,
        "Tunnel-Medium-Type",
        DataKind::UInt32,
        true,
        EncKind::None,
    );
    add_attr_ext(
        dict,
        66,
        "Tunnel-Client-Endpoint",
        DataKind::Text,
        true,
        EncKind::None,
    );
    add_attr_ext(
        dict,
        67,
        "Tunnel-Server-Endpoint",
        DataKind::Text,
        true,
        EncKind::None,
    );

    add_attr_ext(
        dict,
        69,
        "Tunnel-Password",
        DataKind::Text,
        true,
        EncKind::TunnelPassword,
    );

    add_attr_ext(
        dict,
        81,
        "Tunnel-Private-Group-Id",
        DataKind::Text,
        true,
        EncKind::None,
    );
    add_attr_ext(
        dict,
        82,
        "Tunnel-Assignment-Id",
        DataKind::Text,
        true,
        EncKind::None,
    );
    add_attr_ext(
        dict,
        83,
        "Tunnel-Preference",
        DataKind::UInt32,
        true,
        EncKind::None,
    );

    add_attr_ext(
        dict,
        90,
        "Tunnel-Client-Auth-Id",
        DataKind::Text,
        true,
        EncKind::None,
    );
    add_attr_ext(
        dict,
        91,
        "Tunnel-Server-Auth-Id",
        DataKind::Text,
        true,
        EncKind::None,
    );
}

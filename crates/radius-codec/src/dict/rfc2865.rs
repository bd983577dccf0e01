//! Base attribute table from RFC 2865.

use super::{add_attr, add_attr_ext, DataKind, Dictionary, EncKind};

pub(super) fn register(dict: &mut Dictionary) {
    add_attr(dict, 1, "User-Name", DataKind::Text);
    add_attr_ext(
        dict,
        2,
        "User-Password",
        DataKind::Text,
        false,
        EncKind::UserPassword,
    );
    add_attr(dict, 3, "CHAP-Password", DataKind::Raw);
    add_attr(dict, 4, "NAS-IP-Address", DataKind::Ipv4);
    add_attr(dict, 5, "NAS-Port", DataKind::UInt32);
    add_attr(dict, 6, "Service-Type", DataKind::UInt32);
    add_attr(dict, 7, "Framed-Protocol", DataKind::UInt32);
    add_attr(dict, 8, "Framed-IP-Address", DataKind::Ipv4);
    add_attr(dict, 9, "Framed-IP-Netmask", DataKind::Ipv4);
    add_attr(dict, 10, "Framed-Routing", DataKind::UInt32);
    add_attr(dict, 11, "Filter-Id", DataKind::Text);
    add_attr(dict, 12, "Framed-MTU", DataKind::UInt32);
    add_attr(dict, 13, "Framed-Compression", DataKind::UInt32);
    add_attr(dict, 14, "Login-IP-Host", DataKind::Ipv4);
    add_attr(dict, 15, "Login-Service", DataKind::UInt32);
    add_attr(dict, 16, "Login-TCP-Port", DataKind::UInt32);
    add_attr(dict, 18, "Reply-Message", DataKind::Text);
    add_attr(dict, 19, "Callback-Number", DataKind::Text);
    add_attr(dict, 20, "Callback-Id", DataKind::Text);
    add_attr(dict, 22, "Framed-Route", DataKind::Text);
    add_attr(dict, 23, "Framed-IPX-Network", DataKind::UInt32);
    add_attr(dict, 24, "State", DataKind::Raw);
    add_attr(dict, 25, "Class", DataKind::Raw);
    // 26 is the Vendor-Specific container; vendor tables register their
    // entries under (26, vendor_id, vendor_type).
    add_attr(dict, 27, "Session-Timeout", DataKind::UInt32);
    add_attr(dict, 28, "Idle-Timeout", DataKind::UInt32);
    add_attr(dict, 29, "Termination-Action", DataKind::UInt32);
    add_attr(dict, 30, "Called-Station-Id", DataKind::Text);
    add_attr(dict, 31, "Calling-Station-Id", DataKind::Text);
    add_attr(dict, 32, "NAS-Identifier", DataKind::Text);
    add_attr(dict, 33, "Proxy-State", DataKind::Raw);
    add_attr(dict, 34, "Login-LAT-Service", DataKind::Text);
    add_attr(dict, 35, "Login-LAT-Node", DataKind::Text);
    add_attr(dict, 36, "Login-LAT-Group", DataKind::Raw);
    add_attr(dict, 37, "Framed-AppleTalk-Link", DataKind::UInt32);
    add_attr(dict, 38, "Framed-AppleTalk-Network", DataKind::UInt32);
    add_attr(dict, 39, "Framed-AppleTalk-Zone", DataKind::Text);
    add_attr(dict, 60, "CHAP-Challenge", DataKind::Raw);
    add_attr(dict, 61, "NAS-Port-Type", DataKind::UInt32);
    add_attr(dict, 62, "Port-Limit", DataKind::UInt32);
    add_attr(dict, 63, "Login-LAT-Port", DataKind::Text);
}

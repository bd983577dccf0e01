//! Vendor-specific attribute tables.

use super::{add_vsa, DataKind, Dictionary};

/// Vendor id assigned to Mikrotik.
pub const VENDOR_MIKROTIK: u32 = 14988;

/// Vendor id assigned to the Wi-Fi Alliance WISPr profile.
pub const VENDOR_WISPR: u32 = 14122;

pub(super) fn register(dict: &mut Dictionary) {
    register_mikrotik(dict);
    register_wispr(dict);
}

fn register_mikrotik(dict: &mut Dictionary) {
    add_vsa(dict, VENDOR_MIKROTIK, 1, "Mikrotik-Recv-Limit", DataKind::UInt32);
    add_vsa(dict, VENDOR_MIKROTIK, 2, "Mikrotik-Xmit-Limit", DataKind::UInt32);
    add_vsa(dict, VENDOR_MIKROTIK, 3, "Mikrotik-Group", DataKind::Text);
    add_vsa(dict, VENDOR_MIKROTIK, 4, "Mikrotik-Wireless-Forward", DataKind::UInt32);
    add_vsa(dict, VENDOR_MIKROTIK, 5, "Mikrotik-Wireless-Skip-Dot1x", DataKind::UInt32);
    add_vsa(dict, VENDOR_MIKROTIK, 6, "Mikrotik-Wireless-Enc-Algo", DataKind::UInt32);
    add_vsa(dict, VENDOR_MIKROTIK, 7, "Mikrotik-Wireless-Enc-Key", DataKind::Text);
    add_vsa(dict, VENDOR_MIKROTIK, 8, "Mikrotik-Rate-Limit", DataKind::Text);
    add_vsa(dict, VENDOR_MIKROTIK, 9, "Mikrotik-Realm", DataKind::Text);
    add_vsa(dict, VENDOR_MIKROTIK, 10, "Mikrotik-Host-IP", DataKind::Ipv4);
    add_vsa(dict, VENDOR_MIKROTIK, 11, "Mikrotik-Mark-Id", DataKind::Text);
    add_vsa(dict, VENDOR_MIKROTIK, 12, "Mikrotik-Advertise-URL", DataKind::Text);
    add_vsa(dict, VENDOR_MIKROTIK, 13, "Mikrotik-Advertise-Interval", DataKind::UInt32);
    add_vsa(dict, VENDOR_MIKROTIK, 14, "Mikrotik-Recv-Limit-Gigawords", DataKind::UInt32);
    add_vsa(dict, VENDOR_MIKROTIK, 15, "Mikrotik-Xmit-Limit-Gigawords", DataKind::UInt32);
    add_vsa(dict, VENDOR_MIKROTIK, 16, "Mikrotik-Wireless-PSK", DataKind::Text);
    add_vsa(dict, VENDOR_MIKROTIK, 17, "Mikrotik-Total-Limit", DataKind::UInt32);
    add_vsa(dict, VENDOR_MIKROTIK, 18, "Mikrotik-Total-Limit-Gigawords", DataKind::UInt32);
    add_vsa(dict, VENDOR_MIKROTIK, 19, "Mikrotik-Address-List", DataKind::Text);
    add_vsa(dict, VENDOR_MIKROTIK, 20, "Mikrotik-Wireless-MPKey", DataKind::Text);
    add_vsa(dict, VENDOR_MIKROTIK, 21, "Mikrotik-Wireless-Comment", DataKind::Text);
    add_vsa(dict, VENDOR_MIKROTIK, 22, "Mikrotik-Delegated-IPv6-Pool", DataKind::Text);
    add_vsa(dict, VENDOR_MIKROTIK, 23, "Mikrotik-DHCP-Option-Set", DataKind::Text);
    add_vsa(dict, VENDOR_MIKROTIK, 24, "Mikrotik-DHCP-Option-Param-STR1", DataKind::Text);
    add_vsa(dict, VENDOR_MIKROTIK, 25, "Mikrotik-DHCP-Option-Param-STR2", DataKind::Text);
    add_vsa(dict, VENDOR_MIKROTIK, 26, "Mikrotik-Wireless-VLANID", DataKind::UInt32);
    add_vsa(dict, VENDOR_MIKROTIK, 27, "Mikrotik-Wireless-VLANID-Type", DataKind::UInt32);
    add_vsa(dict, VENDOR_MIKROTIK, 28, "Mikrotik-Wireless-Minsignal", DataKind::Text);
    add_vsa(dict, VENDOR_MIKROTIK, 29, "Mikrotik-Wireless-Maxsignal", DataKind::Text);
}

fn register_wispr(dict: &mut Dictionary) {
    add_vsa(dict, VENDOR_WISPR, 1, "WISPr-Location-ID", DataKind::Text);
    add_vsa(dict, VENDOR_WISPR, 2, "WISPr-Location-Name", DataKind::Text);
    add_vsa(dict, VENDOR_WISPR, 3, "WISPr-Logoff-URL", DataKind::Text);
    add_vsa(dict, VENDOR_WISPR, 4, "WISPr-Redirection-URL", DataKind::Text);
    add_vsa(dict, VENDOR_WISPR, 5, "WISPr-Bandwidth-Min-Up", DataKind::UInt32);
    add_vsa(dict, VENDOR_WISPR, 6, "WISPr-Bandwidth-Min-Down", DataKind::UInt32);
    add_vsa(dict, VENDOR_WISPR, 7, "WISPr-Bandwidth-Max-Up", DataKind::UInt32);
    add_vsa(dict, VENDOR_WISPR, 8, "WISPr-Bandwidth-Max-Down", DataKind::UInt32);
    add_vsa(dict, VENDOR_WISPR, 9, "WISPr-Session-Terminate-Time", DataKind::Text);
    add_vsa(dict, VENDOR_WISPR, 10, "WISPr-Session-Terminate-End-Of-Day", DataKind::Text);
    add_vsa(dict, VENDOR_WISPR, 11, "WISPr-Billing-Class-Of-Service", DataKind::Text);
}

//! Accounting attributes from RFC 2866.

use super::{add_attr, DataKind, Dictionary};

pub(super) fn register(dict: &mut Dictionary) {
    add_attr(dict, 40, "Acct-Status-Type", DataKind::UInt32);
    add_attr(dict, 41, "Acct-Delay-Time", DataKind::UInt32);
    add_attr(dict, 42, "Acct-Input-Octets", DataKind::UInt32);
    add_attr(dict, 43, "Acct-Output-Octets", DataKind::UInt32);
    add_attr(dict, 44, "Acct-Session-Id", DataKind::Text);
    add_attr(dict, 45, "Acct-Authentic", DataKind::UInt32);
    add_attr(dict, 46, "Acct-Session-Time", DataKind::UInt32);
    add_attr(dict, 47, "Acct-Input-Packets", DataKind::UInt32);
    add_attr(dict, 48, "Acct-Output-Packets", DataKind::UInt32);
    add_attr(dict, 49, "Acct-Terminate-Cause", DataKind::UInt32);
    add_attr(dict, 50, "Acct-Multi-Session-Id", DataKind::Text);
    add_attr(dict, 51, "Acct-Link-Count", DataKind::UInt32);
}

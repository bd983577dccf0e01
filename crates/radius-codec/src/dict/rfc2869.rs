//! Extension attributes from RFC 2869.

use super::{add_attr, DataKind, Dictionary};

pub(super) fn register(dict: &mut Dictionary) {
    add_attr(dict, 52, "Acct-Input-Gigawords", DataKind::UInt32);
    add_attr(dict, 53, "Acct-Output-Gigawords", DataKind::UInt32);

    add_attr(dict, 55, "Event-Timestamp", DataKind::Date);

    add_attr(dict, 70, "ARAP-Password", DataKind::Raw);
    add_attr(dict, 71, "ARAP-Features", DataKind::Raw);
    add_attr(dict, 72, "ARAP-Zone-Access", DataKind::UInt32);
    add_attr(dict, 73, "ARAP-Security", DataKind::UInt32);
    add_attr(dict, 74, "ARAP-Security-Data", DataKind::Text);
    add_attr(dict, 75, "Password-Retry", DataKind::UInt32);
    add_attr(dict, 76, "Prompt", DataKind::UInt32);
    add_attr(dict, 77, "Connect-Info", DataKind::Text);
    add_attr(dict, 78, "Configuration-Token", DataKind::Text);
    add_attr(dict, 79, "EAP-Message", DataKind::Raw);
    add_attr(dict, 80, "Message-Authenticator", DataKind::Raw);

    add_attr(dict, 84, "ARAP-Challenge-Response", DataKind::Raw);
    add_attr(dict, 85, "Acct-Interim-Interval", DataKind::UInt32);

    add_attr(dict, 87, "NAS-Port-Id", DataKind::Text);
    add_attr(dict, 88, "Framed-Pool", DataKind::Text);
}

use std::sync::LazyLock;

use medic_core::models::protocol::Protocol;

use crate::builder::ProtocolBuilder;
use crate::Category;

/// L: Complaints that fit no single body region.
pub struct Miscellaneous;

impl Category for Miscellaneous {
    fn code(&self) -> &str {
        "L"
    }

    fn title(&self) -> &str {
        "Miscellaneous"
    }

    fn protocols(&self) -> &[Protocol] {
        static PROTOCOLS: LazyLock<Vec<Protocol>> = LazyLock::new(|| {
            vec![
                ProtocolBuilder::new("L-1", "Swollen Lymph Nodes")
                    .red_flag(
                        "Hard fixed node, or node with night sweats and weight loss",
                        &["Refer to the AEM/PA the same day."],
                    )
                    .disposition(
                        "dp1",
                        "Node larger than 1 inch or present longer than 2 weeks",
                        &["Refer to the AEM/PA for a routine appointment."],
                    )
                    .instructions(&[
                        "Usually a reaction to a nearby infection.",
                        "Return if the node keeps growing or lasts past 2 weeks.",
                    ])
                    .build(),
                ProtocolBuilder::new("L-2", "Dental Pain")
                    .red_flag(
                        "Facial swelling spreading to the eye or neck, or difficulty swallowing",
                        &["Refer to the supervising provider NOW."],
                    )
                    .disposition(
                        "dp1",
                        "Broken tooth or lost filling",
                        &["Refer to dental sick call."],
                    )
                    .instructions(&[
                        "Minor-care protocol: ibuprofen and warm salt water rinses.",
                        "Refer to dental sick call at the next opportunity.",
                    ])
                    .build(),
            ]
        });
        &PROTOCOLS
    }
}

use std::sync::LazyLock;

use medic_core::models::protocol::Protocol;

use crate::builder::ProtocolBuilder;
use crate::Category;

/// B: Back, neck and joint complaints.
pub struct Musculoskeletal;

impl Category for Musculoskeletal {
    fn code(&self) -> &str {
        "B"
    }

    fn title(&self) -> &str {
        "Musculoskeletal"
    }

    fn protocols(&self) -> &[Protocol] {
        static PROTOCOLS: LazyLock<Vec<Protocol>> = LazyLock::new(|| {
            vec![
                ProtocolBuilder::new("B-1", "Back Pain")
                    .red_flag(
                        "Loss of bowel or bladder control, numbness in the groin, or progressive leg weakness",
                        &[
                            "Possible cauda equina syndrome.",
                            "Refer to the supervising provider NOW.",
                        ],
                    )
                    .disposition(
                        "dp1",
                        "Pain after a fall or direct blow to the spine",
                        &["Immobilize if tender over the spine. Refer to the AEM/PA the same day."],
                    )
                    .disposition(
                        "dp2",
                        "Numbness or tingling radiating below the knee",
                        &["Refer to the AEM/PA the same day."],
                    )
                    .disposition(
                        "dp3",
                        "Pain present for more than 6 weeks",
                        &["Refer to the AEM/PA for a routine appointment."],
                    )
                    .instructions(&[
                        "Minor-care protocol: ibuprofen, heat or ice, and gentle stretching.",
                        "Limited duty for up to 3 days: no lifting over 20 lb.",
                        "Return if numbness, weakness, or no improvement in 1 week.",
                    ])
                    .build(),
                ProtocolBuilder::new("B-2", "Knee Pain")
                    .red_flag(
                        "Obvious deformity, unable to bear weight, or hot swollen joint with fever",
                        &["Splint in position found. Refer to the supervising provider NOW."],
                    )
                    .disposition(
                        "dp1",
                        "Knee locks, catches, or gives way",
                        &["Possible meniscus or ligament injury. Refer to the AEM/PA the same day."],
                    )
                    .disposition(
                        "dp2",
                        "Swelling within 2 hours of an injury",
                        &["Refer to the AEM/PA the same day."],
                    )
                    .retest(
                        "Pain with running only, normal exam",
                        &["Rest from running. Re-examine in 72 hours."],
                    )
                    .instructions(&[
                        "Minor-care protocol: rest, ice, compression, elevation.",
                        "Ibuprofen for pain.",
                        "Return if swelling, locking, or no improvement in 1 week.",
                    ])
                    .build(),
            ]
        });
        &PROTOCOLS
    }
}

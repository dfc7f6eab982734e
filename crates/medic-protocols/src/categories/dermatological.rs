use std::sync::LazyLock;

use medic_core::models::protocol::Protocol;

use crate::builder::ProtocolBuilder;
use crate::Category;

/// J: Skin complaints.
pub struct Dermatological;

impl Category for Dermatological {
    fn code(&self) -> &str {
        "J"
    }

    fn title(&self) -> &str {
        "Dermatological"
    }

    fn protocols(&self) -> &[Protocol] {
        static PROTOCOLS: LazyLock<Vec<Protocol>> = LazyLock::new(|| {
            vec![
                ProtocolBuilder::new("J-1", "Rash/Itching")
                    .red_flag(
                        "Lip or tongue swelling, difficulty breathing, or peeling skin with fever",
                        &[
                            "Possible anaphylaxis or severe drug reaction.",
                            "Epinephrine per protocol if authorized. Refer to the supervising provider NOW.",
                        ],
                    )
                    .disposition(
                        "dp1",
                        "Spreading redness, warmth, or red streaks",
                        &["Possible cellulitis. Mark the border. Refer to the AEM/PA the same day."],
                    )
                    .disposition(
                        "dp2",
                        "Rash with new medication",
                        &["Hold the medication. Refer to the AEM/PA the same day."],
                    )
                    .instructions(&[
                        "Minor-care protocol: cool compresses, oral antihistamine, hydrocortisone cream.",
                        "Return if the rash spreads or fever develops.",
                    ])
                    .build(),
                ProtocolBuilder::new("J-2", "Burns")
                    .red_flag(
                        "Burns to face, hands, feet, genitals, or any full-thickness burn",
                        &["Cover with a clean dry dressing. Refer to the supervising provider NOW."],
                    )
                    .disposition(
                        "dp1",
                        "Blisters larger than 2 inches",
                        &["Do not break blisters. Refer to the AEM/PA the same day."],
                    )
                    .instructions(&[
                        "Minor-care protocol: cool running water for 10 minutes, then a non-stick dressing.",
                        "Return if redness spreads, pus forms, or fever develops.",
                    ])
                    .build(),
            ]
        });
        &PROTOCOLS
    }
}

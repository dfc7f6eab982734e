use std::sync::LazyLock;

use medic_core::models::protocol::Protocol;

use crate::builder::ProtocolBuilder;
use crate::Category;

/// G: Whole-body complaints.
pub struct Constitutional;

impl Category for Constitutional {
    fn code(&self) -> &str {
        "G"
    }

    fn title(&self) -> &str {
        "Constitutional"
    }

    fn protocols(&self) -> &[Protocol] {
        static PROTOCOLS: LazyLock<Vec<Protocol>> = LazyLock::new(|| {
            vec![
                ProtocolBuilder::new("G-1", "Fatigue")
                    .red_flag(
                        "Thoughts of self-harm, fainting, or shortness of breath at rest",
                        &["Do not leave the patient alone. Refer to the supervising provider NOW."],
                    )
                    .disposition(
                        "dp1",
                        "Unintended weight loss or night sweats",
                        &["Refer to the AEM/PA for a routine appointment."],
                    )
                    .disposition(
                        "dp2",
                        "Fatigue longer than 2 weeks",
                        &["Refer to the AEM/PA for a routine appointment."],
                    )
                    .instructions(&[
                        "Review sleep, diet, and work schedule.",
                        "Return if fatigue persists past 2 weeks or new symptoms develop.",
                    ])
                    .build(),
                ProtocolBuilder::new("G-2", "Fever/Chills")
                    .red_flag(
                        "Temperature over 104F, rash that does not blanch, stiff neck, or confusion",
                        &["Begin cooling measures. Refer to the supervising provider NOW."],
                    )
                    .disposition(
                        "dp1",
                        "Recent travel to a malaria area",
                        &["Refer to the AEM/PA the same day for malaria testing."],
                    )
                    .disposition(
                        "dp2",
                        "Fever over 100.4F for more than 48 hours",
                        &["Refer to the AEM/PA the same day."],
                    )
                    .instructions(&[
                        "Minor-care protocol: acetaminophen, fluids, and rest.",
                        "Return if fever lasts past 48 hours or new symptoms develop.",
                    ])
                    .screening()
                    .build(),
            ]
        });
        &PROTOCOLS
    }
}

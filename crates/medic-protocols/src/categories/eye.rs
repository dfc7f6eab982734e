use std::sync::LazyLock;

use medic_core::models::protocol::Protocol;

use crate::builder::ProtocolBuilder;
use crate::Category;

/// H: Eye complaints.
pub struct Eye;

impl Category for Eye {
    fn code(&self) -> &str {
        "H"
    }

    fn title(&self) -> &str {
        "Eye"
    }

    fn protocols(&self) -> &[Protocol] {
        static PROTOCOLS: LazyLock<Vec<Protocol>> = LazyLock::new(|| {
            vec![
                ProtocolBuilder::new("H-1", "Eye Pain/Redness/Discharge")
                    .red_flag(
                        "Chemical exposure, penetrating injury, or sudden loss of vision",
                        &[
                            "Chemical exposure: irrigate with at least 1 liter of water now.",
                            "Penetrating injury: shield the eye without pressure.",
                            "Refer to the supervising provider NOW.",
                        ],
                    )
                    .disposition(
                        "dp1",
                        "Contact lens wearer with pain",
                        &["Remove lenses. Refer to the AEM/PA the same day."],
                    )
                    .disposition(
                        "dp2",
                        "Foreign body sensation",
                        &["Refer to the AEM/PA the same day for fluorescein exam."],
                    )
                    .disposition(
                        "dp3",
                        "Thick yellow or green discharge",
                        &["Possible bacterial conjunctivitis. Refer to the AEM/PA the same day."],
                    )
                    .instructions(&[
                        "Minor-care protocol: cool compresses and artificial tears.",
                        "Wash hands often. Do not share towels.",
                        "Return if pain, vision change, or no improvement in 2 days.",
                    ])
                    .build(),
                ProtocolBuilder::new("H-2", "Decreased Vision")
                    .red_flag(
                        "Sudden vision loss, flashes with a curtain over vision, or new double vision",
                        &["Refer to the supervising provider NOW."],
                    )
                    .disposition(
                        "dp1",
                        "Gradual blurring over weeks",
                        &["Refer to optometry for a routine appointment."],
                    )
                    .instructions(&["Return if vision changes suddenly."])
                    .build(),
            ]
        });
        &PROTOCOLS
    }
}

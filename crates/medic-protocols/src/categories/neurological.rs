use std::sync::LazyLock;

use medic_core::models::protocol::Protocol;

use crate::builder::ProtocolBuilder;
use crate::Category;

/// F: Neurological complaints.
pub struct Neurological;

impl Category for Neurological {
    fn code(&self) -> &str {
        "F"
    }

    fn title(&self) -> &str {
        "Neurological"
    }

    fn protocols(&self) -> &[Protocol] {
        static PROTOCOLS: LazyLock<Vec<Protocol>> = LazyLock::new(|| {
            vec![
                ProtocolBuilder::new("F-1", "Dizziness/Fainting")
                    .red_flag(
                        "Fainting during exertion, chest pain, irregular pulse, or new weakness of one side",
                        &["Lay the patient flat. Refer to the supervising provider NOW."],
                    )
                    .disposition(
                        "dp1",
                        "Room spinning with nausea",
                        &["Refer to the AEM/PA the same day."],
                    )
                    .retest(
                        "Dizzy on standing only",
                        &[
                            "Oral fluids 1 liter.",
                            "Repeat orthostatic vital signs in 30 minutes.",
                        ],
                    )
                    .instructions(&[
                        "Minor-care protocol: fluids, regular meals, rise slowly from lying or sitting.",
                        "Return if fainting, chest pain, or symptoms persist past 24 hours.",
                    ])
                    .screening()
                    .build(),
                ProtocolBuilder::new("F-2", "Headache")
                    .red_flag(
                        "Worst headache of life, stiff neck with fever, confusion, or headache after head trauma",
                        &["Refer to the supervising provider NOW."],
                    )
                    .disposition(
                        "dp1",
                        "Changes in vision or numbness",
                        &["Refer to the AEM/PA the same day."],
                    )
                    .disposition(
                        "dp2",
                        "Headaches more than 2 days a week",
                        &["Refer to the AEM/PA for a routine appointment."],
                    )
                    .instructions(&[
                        "Minor-care protocol: acetaminophen or ibuprofen, fluids, rest in a dark room.",
                        "Return if the headache worsens, fever develops, or it lasts past 24 hours.",
                    ])
                    .build(),
            ]
        });
        &PROTOCOLS
    }
}

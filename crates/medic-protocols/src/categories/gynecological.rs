use std::sync::LazyLock;

use medic_core::models::protocol::Protocol;

use crate::builder::ProtocolBuilder;
use crate::Category;

/// I: Gynecological complaints.
pub struct Gynecological;

impl Category for Gynecological {
    fn code(&self) -> &str {
        "I"
    }

    fn title(&self) -> &str {
        "Gynecological"
    }

    fn protocols(&self) -> &[Protocol] {
        static PROTOCOLS: LazyLock<Vec<Protocol>> = LazyLock::new(|| {
            vec![
                ProtocolBuilder::new("I-1", "Vaginal Discharge/Itching")
                    .red_flag(
                        "Lower abdominal pain with fever, or possible pregnancy with pain or bleeding",
                        &["Refer to the supervising provider NOW."],
                    )
                    .disposition(
                        "dp1",
                        "New sexual partner or partner with symptoms",
                        &["Refer to the AEM/PA the same day for STI testing."],
                    )
                    .disposition(
                        "dp2",
                        "Symptoms recurring more than 3 times a year",
                        &["Refer to the AEM/PA for a routine appointment."],
                    )
                    .instructions(&[
                        "Cotton underwear, avoid douching and scented products.",
                        "Refer to the AEM/PA for evaluation within 72 hours.",
                    ])
                    .build(),
                ProtocolBuilder::new("I-2", "Menstrual Problems")
                    .red_flag(
                        "Soaking a pad every hour, fainting, or possible pregnancy with pain",
                        &["Refer to the supervising provider NOW."],
                    )
                    .disposition(
                        "dp1",
                        "Missed period",
                        &["Perform a pregnancy test. Refer to the AEM/PA the same day."],
                    )
                    .instructions(&[
                        "Minor-care protocol: ibuprofen and heat for cramps.",
                        "Return if bleeding becomes heavy or pain is severe.",
                    ])
                    .build(),
            ]
        });
        &PROTOCOLS
    }
}

use std::sync::LazyLock;

use medic_core::models::protocol::Protocol;

use crate::builder::ProtocolBuilder;
use crate::Category;

/// C: Abdominal and digestive complaints.
pub struct Gastrointestinal;

impl Category for Gastrointestinal {
    fn code(&self) -> &str {
        "C"
    }

    fn title(&self) -> &str {
        "Gastrointestinal"
    }

    fn protocols(&self) -> &[Protocol] {
        static PROTOCOLS: LazyLock<Vec<Protocol>> = LazyLock::new(|| {
            vec![
                ProtocolBuilder::new("C-1", "Nausea/Vomiting/Diarrhea")
                    .red_flag(
                        "Blood in vomit or stool, rigid abdomen, or signs of severe dehydration",
                        &[
                            "Start IV access if trained and authorized.",
                            "Refer to the supervising provider NOW.",
                        ],
                    )
                    .disposition(
                        "dp1",
                        "Unable to keep fluids down for more than 24 hours",
                        &["Refer to the AEM/PA the same day."],
                    )
                    .disposition(
                        "dp2",
                        "Diarrhea for more than 3 days or fever over 100.4F",
                        &["Refer to the AEM/PA the same day."],
                    )
                    .retest(
                        "Dizzy when standing",
                        &[
                            "Oral rehydration 1 liter over 1 hour.",
                            "Re-check orthostatic vital signs after rehydration.",
                        ],
                    )
                    .instructions(&[
                        "Minor-care protocol: small frequent sips of oral rehydration solution.",
                        "Bland diet as tolerated. Hand hygiene to prevent spread.",
                        "Return if blood in stool, unable to keep fluids down, or symptoms past 3 days.",
                    ])
                    .screening()
                    .build(),
                ProtocolBuilder::new("C-2", "Abdominal Pain")
                    .red_flag(
                        "Rigid abdomen, pain moving to the lower right, or possible pregnancy",
                        &["Nothing by mouth. Refer to the supervising provider NOW."],
                    )
                    .disposition(
                        "dp1",
                        "Pain lasting more than 6 hours",
                        &["Refer to the AEM/PA the same day."],
                    )
                    .disposition(
                        "dp2",
                        "Burning upper abdominal pain related to meals",
                        &["Refer to the AEM/PA for a routine appointment."],
                    )
                    .instructions(&[
                        "Minor-care protocol: antacid per the minor-care formulary.",
                        "Avoid alcohol, tobacco, and NSAIDs.",
                        "Return if pain worsens, fever develops, or vomiting begins.",
                    ])
                    .screening()
                    .build(),
            ]
        });
        &PROTOCOLS
    }
}

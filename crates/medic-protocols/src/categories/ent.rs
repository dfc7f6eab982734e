use std::sync::LazyLock;

use medic_core::models::protocol::Protocol;

use crate::builder::{threshold_trigger, ProtocolBuilder};
use crate::Category;

/// A: Ear, nose and throat complaints.
///
/// A-1 carries the Centor criteria counter: three or more of the four
/// criteria reveal the rapid strep question, and "none of the above"
/// resets the count.
pub struct Ent;

pub const CENTOR_MEMBERS: [&str; 4] = ["cent1", "cent2", "cent3", "cent4"];
pub const CENTOR_RESET: &str = "cent5";

impl Category for Ent {
    fn code(&self) -> &str {
        "A"
    }

    fn title(&self) -> &str {
        "Ear, Nose, Throat"
    }

    fn protocols(&self) -> &[Protocol] {
        static PROTOCOLS: LazyLock<Vec<Protocol>> = LazyLock::new(|| {
            vec![
                ProtocolBuilder::new("A-1", "Sore Throat/Hoarseness")
                    .red_flag(
                        "Unable to swallow saliva, drooling, muffled voice, stridor, or trismus",
                        &[
                            "Possible airway compromise or deep space infection.",
                            "Keep the patient upright and calm. Do not examine the throat with a tongue blade.",
                            "Refer to the supervising provider NOW.",
                        ],
                    )
                    .disposition_on(
                        "dp1",
                        "strep-positive",
                        "Rapid strep test positive",
                        &[
                            "Group A strep pharyngitis.",
                            "Refer to the AEM/PA the same day for antibiotic therapy.",
                        ],
                    )
                    .disposition(
                        "dp2",
                        "Symptoms longer than 14 days or hoarseness longer than 3 weeks",
                        &["Refer to the AEM/PA for a routine appointment."],
                    )
                    .subquestion(
                        "strep-test",
                        "Three or more Centor criteria: perform a rapid strep test",
                        threshold_trigger(&CENTOR_MEMBERS, 3, Some(CENTOR_RESET)),
                    )
                    .label("cent1", "History of fever over 100.4F")
                    .label("cent2", "Tonsillar swelling or exudate")
                    .label("cent3", "Tender swollen anterior neck nodes")
                    .label("cent4", "Absence of cough")
                    .label(CENTOR_RESET, "None of the above")
                    .label("strep-positive", "Rapid strep test positive")
                    .instructions(&[
                        "Minor-care protocol: warm salt water gargles every 2-4 hours.",
                        "Throat lozenges and acetaminophen or ibuprofen for pain.",
                        "Return if unable to swallow, fever develops, or no improvement in 3 days.",
                    ])
                    .screening()
                    .build(),
                ProtocolBuilder::new("A-2", "Ear Pain/Drainage/Trauma")
                    .red_flag(
                        "Mastoid tenderness, facial weakness, or vertigo with sudden hearing loss",
                        &[
                            "Possible mastoiditis or inner ear injury.",
                            "Refer to the supervising provider NOW.",
                        ],
                    )
                    .disposition(
                        "dp1",
                        "Drainage from the ear or visible perforation",
                        &[
                            "Keep the ear dry. Do not irrigate.",
                            "Refer to the AEM/PA the same day.",
                        ],
                    )
                    .disposition(
                        "dp2",
                        "Ear pain with fever over 100.4F",
                        &["Possible otitis media. Refer to the AEM/PA the same day."],
                    )
                    .disposition(
                        "dp3",
                        "Pain worse when the outer ear is pulled",
                        &[
                            "Probable otitis externa.",
                            "Refer to the AEM/PA for antibiotic ear drops.",
                        ],
                    )
                    .instructions(&[
                        "Minor-care protocol: acetaminophen or ibuprofen for pain.",
                        "Keep objects out of the ear canal.",
                        "Return if drainage, fever, or hearing loss develops.",
                    ])
                    .build(),
                ProtocolBuilder::new("A-3", "Cold Symptoms/Allergies/Cough")
                    .red_flag(
                        "Shortness of breath, wheezing, or coughing up blood",
                        &["Refer to the supervising provider NOW."],
                    )
                    .disposition(
                        "dp1",
                        "Symptoms longer than 10 days or worsening after initial improvement",
                        &[
                            "Possible bacterial sinusitis.",
                            "Refer to the AEM/PA for a routine appointment.",
                        ],
                    )
                    .disposition(
                        "dp2",
                        "Fever over 100.4F",
                        &["Refer to the AEM/PA the same day."],
                    )
                    .instructions(&[
                        "Minor-care protocol: fluids, rest, saline nasal spray.",
                        "Decongestant or antihistamine per the minor-care formulary.",
                        "Return if fever, shortness of breath, or no improvement in 7 days.",
                    ])
                    .build(),
                ProtocolBuilder::new("A-4", "Nosebleed")
                    .red_flag(
                        "Bleeding that does not stop after 20 minutes of direct pressure, or after head trauma",
                        &["Continue pressure. Refer to the supervising provider NOW."],
                    )
                    .disposition(
                        "dp1",
                        "Taking blood thinners or recurrent nosebleeds",
                        &["Refer to the AEM/PA the same day."],
                    )
                    .instructions(&[
                        "Minor-care protocol: lean forward and pinch the soft part of the nose for 10-15 minutes.",
                        "Avoid blowing the nose for 24 hours.",
                        "Return if bleeding recurs and does not stop with pressure.",
                    ])
                    .build(),
            ]
        });
        &PROTOCOLS
    }
}

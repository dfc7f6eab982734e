use std::sync::LazyLock;

use medic_core::models::protocol::Protocol;

use crate::builder::ProtocolBuilder;
use crate::Category;

/// E: Urinary and genital complaints.
pub struct Genitourinary;

impl Category for Genitourinary {
    fn code(&self) -> &str {
        "E"
    }

    fn title(&self) -> &str {
        "Genitourinary"
    }

    fn protocols(&self) -> &[Protocol] {
        static PROTOCOLS: LazyLock<Vec<Protocol>> = LazyLock::new(|| {
            vec![
                ProtocolBuilder::new("E-1", "Painful Urination")
                    .red_flag(
                        "Flank pain with fever, or unable to urinate",
                        &["Possible kidney infection or obstruction. Refer to the supervising provider NOW."],
                    )
                    .disposition(
                        "dp1",
                        "Discharge from the penis or vagina",
                        &["Possible sexually transmitted infection. Refer to the AEM/PA the same day."],
                    )
                    .disposition(
                        "dp2",
                        "Visible blood in the urine",
                        &["Refer to the AEM/PA the same day."],
                    )
                    .instructions(&[
                        "Increase water intake. Avoid caffeine and alcohol.",
                        "Refer to the AEM/PA for urinalysis within 24 hours.",
                    ])
                    .fallback_label("Burning with urination only")
                    .build(),
                ProtocolBuilder::new("E-2", "Testicular Pain")
                    .red_flag(
                        "Sudden severe pain, or testicle riding high in the scrotum",
                        &["Possible testicular torsion. Refer to the supervising provider NOW."],
                    )
                    .disposition(
                        "dp1",
                        "Swelling or redness of the scrotum",
                        &["Refer to the AEM/PA the same day."],
                    )
                    .disposition(
                        "dp2",
                        "Painless lump",
                        &["Refer to the AEM/PA for a routine appointment."],
                    )
                    .instructions(&[
                        "Minor-care protocol: supportive underwear, ice, and ibuprofen.",
                        "Return immediately if pain becomes sudden or severe.",
                    ])
                    .build(),
            ]
        });
        &PROTOCOLS
    }
}

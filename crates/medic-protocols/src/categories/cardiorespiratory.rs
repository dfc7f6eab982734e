use std::sync::LazyLock;

use medic_core::models::protocol::Protocol;

use crate::builder::ProtocolBuilder;
use crate::Category;

/// D: Heart and lung complaints.
pub struct Cardiorespiratory;

impl Category for Cardiorespiratory {
    fn code(&self) -> &str {
        "D"
    }

    fn title(&self) -> &str {
        "Cardiorespiratory"
    }

    fn protocols(&self) -> &[Protocol] {
        static PROTOCOLS: LazyLock<Vec<Protocol>> = LazyLock::new(|| {
            vec![
                ProtocolBuilder::new("D-1", "Shortness of Breath")
                    .red_flag(
                        "Unable to speak full sentences, blue lips, or oxygen saturation below 92%",
                        &[
                            "Oxygen if available. Keep the patient sitting upright.",
                            "Refer to the supervising provider NOW.",
                        ],
                    )
                    .disposition(
                        "dp1",
                        "Wheezing or known asthma",
                        &["Refer to the AEM/PA the same day."],
                    )
                    .disposition(
                        "dp2",
                        "Fever with productive cough",
                        &["Possible pneumonia. Refer to the AEM/PA the same day."],
                    )
                    .retest(
                        "Symptoms only with exertion, normal vital signs",
                        &["Rest for 30 minutes and repeat vital signs."],
                    )
                    .instructions(&[
                        "Minor-care protocol: rest and fluids.",
                        "Return immediately if breathing becomes more difficult.",
                    ])
                    .screening()
                    .build(),
                ProtocolBuilder::new("D-2", "Chest Pain")
                    .red_flag(
                        "Pressure-like pain, pain spreading to the arm or jaw, sweating, or abnormal pulse",
                        &[
                            "Possible cardiac emergency.",
                            "Aspirin if no allergy and authorized. Refer to the supervising provider NOW.",
                        ],
                    )
                    .disposition(
                        "dp1",
                        "Pain worse with a deep breath",
                        &["Refer to the AEM/PA the same day."],
                    )
                    .disposition(
                        "dp2",
                        "Pain reproduced by pressing on the chest wall",
                        &["Probable chest wall strain. Refer to the AEM/PA for a routine appointment."],
                    )
                    .instructions(&[
                        "Minor-care protocol: ibuprofen and rest from strenuous activity.",
                        "Return immediately if pain changes character or spreads.",
                    ])
                    .screening()
                    .build(),
            ]
        });
        &PROTOCOLS
    }
}

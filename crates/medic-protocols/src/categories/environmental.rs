use std::sync::LazyLock;

use medic_core::models::protocol::Protocol;

use crate::builder::ProtocolBuilder;
use crate::Category;

/// K: Heat and cold injuries.
pub struct Environmental;

pub const HEAT_EXHAUSTION_SIGNS: [&str; 4] = ["heat1", "heat2", "heat3", "heat4"];
pub const HEAT_EXHAUSTION_RESET: &str = "heat5";

impl Category for Environmental {
    fn code(&self) -> &str {
        "K"
    }

    fn title(&self) -> &str {
        "Environmental"
    }

    fn protocols(&self) -> &[Protocol] {
        static PROTOCOLS: LazyLock<Vec<Protocol>> = LazyLock::new(|| {
            vec![
                ProtocolBuilder::new("K-1", "Heat Injury")
                    .red_flag(
                        "Confusion, collapse, seizure, or core temperature over 104F",
                        &[
                            "Heat stroke until proven otherwise.",
                            "Begin immediate cooling: ice sheets or cold water immersion.",
                            "Refer to the supervising provider NOW.",
                        ],
                    )
                    .threshold(
                        "dp1",
                        "Two or more heat exhaustion signs",
                        &HEAT_EXHAUSTION_SIGNS,
                        2,
                        Some(HEAT_EXHAUSTION_RESET),
                        &[
                            "Heat exhaustion. Move to shade, remove excess clothing.",
                            "Oral fluids if alert. Refer to the AEM/PA the same day.",
                        ],
                    )
                    .label("heat1", "Heavy sweating with pale, cool skin")
                    .label("heat2", "Headache or dizziness")
                    .label("heat3", "Nausea or vomiting")
                    .label("heat4", "Pulse over 100 after 10 minutes of rest")
                    .label(HEAT_EXHAUSTION_RESET, "None of the above")
                    .retest(
                        "Muscle cramps only",
                        &["Rest in shade with oral electrolyte fluids. Re-examine in 1 hour."],
                    )
                    .instructions(&[
                        "Rest in shade and drink 1 quart of water per hour, no more than 1.5 quarts.",
                        "Return immediately if confusion, vomiting, or fainting occurs.",
                    ])
                    .screening()
                    .build(),
                ProtocolBuilder::new("K-2", "Cold Injury")
                    .red_flag(
                        "Core temperature below 95F, confusion, or hard white skin",
                        &[
                            "Possible hypothermia or deep frostbite.",
                            "Prevent further heat loss. Do not rub the skin. Refer to the supervising provider NOW.",
                        ],
                    )
                    .disposition(
                        "dp1",
                        "Blisters or numbness that persists after rewarming",
                        &["Refer to the AEM/PA the same day."],
                    )
                    .instructions(&[
                        "Rewarm gradually. Keep feet dry and change socks often.",
                        "Return if numbness, blisters, or skin color change develops.",
                    ])
                    .build(),
            ]
        });
        &PROTOCOLS
    }
}

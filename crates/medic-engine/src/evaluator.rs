use medic_core::models::controls::ControlState;
use medic_core::models::evaluation::EvaluationResult;
use medic_core::models::protocol::{Protocol, Trigger, DEFAULT_FALLBACK_KEY};

/// Pick the active decision point of `protocol` for the current control
/// state.
///
/// Decision points are scanned in priority order and the first whose
/// trigger is met wins; with nothing met the protocol's fallback is
/// active. The subquestion rule is evaluated on its own, independent of
/// which decision point wins. Pure: the same state always yields the same
/// result.
pub fn evaluate(protocol: &Protocol, controls: &ControlState) -> EvaluationResult {
    let fallback = if protocol.fallback.is_empty() {
        DEFAULT_FALLBACK_KEY
    } else {
        protocol.fallback.as_str()
    };

    let active = protocol
        .ranked()
        .find(|dp| trigger_met(&dp.trigger, &dp.key, controls))
        .map_or(fallback, |dp| dp.key.as_str())
        .to_string();

    let subquestion_visible = protocol
        .subquestion
        .as_ref()
        .is_some_and(|rule| trigger_met(&rule.trigger, &rule.region, controls));

    let threshold_count = displayed_count(protocol, controls);

    let unregistered = unregistered_members(protocol, controls);
    if !unregistered.is_empty() {
        tracing::warn!(
            protocol = %protocol.code,
            controls = ?unregistered,
            "threshold members not registered, group not met"
        );
    }

    tracing::debug!(
        protocol = %protocol.code,
        %active,
        subquestion_visible,
        ?threshold_count,
        "evaluated protocol"
    );

    EvaluationResult {
        active,
        subquestion_visible,
        threshold_count,
    }
}

/// First key in `keys` whose control is checked, or `fallback`.
pub fn first_checked<'a>(
    keys: impl IntoIterator<Item = &'a str>,
    controls: &ControlState,
    fallback: &'a str,
) -> &'a str {
    keys.into_iter()
        .find(|key| controls.is_checked(key))
        .unwrap_or(fallback)
}

/// Whether `trigger` is met. `own_key` is the control a
/// [`Trigger::Checkbox`] reads.
pub fn trigger_met(trigger: &Trigger, own_key: &str, controls: &ControlState) -> bool {
    match trigger {
        Trigger::Checkbox => controls.is_checked(own_key),
        Trigger::Control { id } => controls.is_checked(id),
        Trigger::Threshold {
            members,
            minimum,
            reset,
        } => threshold_count(members, reset.as_deref(), controls)
            .is_some_and(|count| count >= *minimum),
    }
}

/// Number of checked `members`, forced to zero when `reset` is checked.
///
/// `None` when any member is not registered: an incomplete group never
/// meets its threshold.
pub fn threshold_count(
    members: &[String],
    reset: Option<&str>,
    controls: &ControlState,
) -> Option<usize> {
    if members.iter().any(|m| !controls.is_registered(m)) {
        return None;
    }
    if reset.is_some_and(|id| controls.is_checked(id)) {
        return Some(0);
    }
    Some(members.iter().filter(|m| controls.is_checked(m)).count())
}

/// Counter shown next to the protocol's threshold group: the subquestion
/// rule's group if it has one, otherwise the first threshold decision
/// point's.
fn displayed_count(protocol: &Protocol, controls: &ControlState) -> Option<usize> {
    let subquestion = protocol.subquestion.iter().map(|rule| &rule.trigger);
    let points = protocol.ranked().map(|dp| &dp.trigger);

    subquestion.chain(points).find_map(|trigger| match trigger {
        Trigger::Threshold { members, reset, .. } => {
            Some(threshold_count(members, reset.as_deref(), controls).unwrap_or(0))
        }
        _ => None,
    })
}

fn unregistered_members<'a>(protocol: &'a Protocol, controls: &ControlState) -> Vec<&'a str> {
    let subquestion = protocol.subquestion.iter().map(|rule| &rule.trigger);
    let points = protocol.ranked().map(|dp| &dp.trigger);

    let mut missing: Vec<&str> = subquestion
        .chain(points)
        .filter_map(|trigger| match trigger {
            Trigger::Threshold { members, .. } => Some(members),
            _ => None,
        })
        .flatten()
        .map(String::as_str)
        .filter(|id| !controls.is_registered(id))
        .collect();
    missing.sort_unstable();
    missing.dedup();
    missing
}

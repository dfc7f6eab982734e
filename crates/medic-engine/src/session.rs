use uuid::Uuid;

use medic_core::models::controls::ControlState;
use medic_core::models::evaluation::EvaluationResult;
use medic_core::models::protocol::Protocol;

use crate::evaluator::evaluate;
use crate::presenter::{PanelRegistry, PanelState, Presenter, Surface};

/// Panel id used for `key` of the protocol `code`.
pub fn panel_id(code: &str, key: &str) -> String {
    format!("{code}/{key}")
}

/// One open protocol sheet: its controls, the screening gate, and the last
/// evaluate/present cycle.
///
/// Every event runs exactly one synchronous cycle, so the surface never
/// shows a torn state between events.
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    protocol: Protocol,
    controls: ControlState,
    screening_acknowledged: bool,
    presenter: Presenter<String>,
    result: EvaluationResult,
    state: PanelState,
}

impl Session {
    /// Handle a "protocol selected" event: register every control the
    /// protocol reads as unchecked and present the initial state.
    pub fn open<S>(protocol: &Protocol, surface: &mut S) -> Self
    where
        S: Surface<Handle = String>,
    {
        let controls = ControlState::with_registered(protocol.control_ids());
        let panels = PanelRegistry::for_protocol(protocol, |key| panel_id(&protocol.code, key));
        let id = Uuid::new_v4();

        tracing::info!(session = %id, protocol = %protocol.code, "protocol opened");

        let mut session = Self {
            id,
            protocol: protocol.clone(),
            controls,
            screening_acknowledged: false,
            presenter: Presenter::new(panels),
            result: EvaluationResult::fallback(protocol.fallback.clone()),
            state: PanelState::AwaitingScreening,
        };
        session.cycle(surface);
        session
    }

    /// Handle a control change. Ids the protocol does not read are logged
    /// and ignored.
    pub fn set_control<S>(&mut self, id: &str, checked: bool, surface: &mut S) -> &PanelState
    where
        S: Surface<Handle = String>,
    {
        if !self.controls.is_registered(id) {
            tracing::warn!(
                session = %self.id,
                protocol = %self.protocol.code,
                control = %id,
                "ignoring unknown control"
            );
            return &self.state;
        }

        self.controls.set(id, checked);
        tracing::debug!(session = %self.id, control = %id, checked, "control changed");
        self.cycle(surface)
    }

    /// The green "screening complete" confirmation.
    pub fn acknowledge_screening<S>(&mut self, surface: &mut S) -> &PanelState
    where
        S: Surface<Handle = String>,
    {
        self.screening_acknowledged = true;
        tracing::debug!(session = %self.id, "screening acknowledged");
        self.cycle(surface)
    }

    /// Uncheck every control and close the screening gate.
    pub fn reset<S>(&mut self, surface: &mut S) -> &PanelState
    where
        S: Surface<Handle = String>,
    {
        self.controls.clear();
        self.screening_acknowledged = false;
        self.cycle(surface)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn protocol(&self) -> &Protocol {
        &self.protocol
    }

    pub fn controls(&self) -> &ControlState {
        &self.controls
    }

    pub fn result(&self) -> &EvaluationResult {
        &self.result
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn screening_acknowledged(&self) -> bool {
        self.screening_acknowledged
    }

    /// Whether the fallback disposition may be shown.
    pub fn gate_open(&self) -> bool {
        !self.protocol.requires_screening || self.screening_acknowledged
    }

    fn cycle<S>(&mut self, surface: &mut S) -> &PanelState
    where
        S: Surface<Handle = String>,
    {
        self.result = evaluate(&self.protocol, &self.controls);
        self.state = self.presenter.present(
            &self.protocol,
            &self.result,
            &self.controls,
            self.gate_open(),
            surface,
        );
        &self.state
    }
}

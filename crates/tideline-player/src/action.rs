//! Avatar action labels and the transition notification list.

use std::fmt;

/// Discrete locomotion/animation state of the avatar.
///
/// Locomotion only drives `Idle`, `Walking` and `Running`; the others exist
/// for systems such as swimming or seating to assign.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    #[default]
    Idle,
    Walking,
    Running,
    Sitting,
    StandingUp,
    Swimming,
    TreadingWater,
}

impl PlayerAction {
    /// Animation clip name for this action.
    pub fn as_str(self) -> &'static str {
        match self {
            PlayerAction::Idle => "idle",
            PlayerAction::Walking => "walking",
            PlayerAction::Running => "running",
            PlayerAction::Sitting => "sitting",
            PlayerAction::StandingUp => "standing up",
            PlayerAction::Swimming => "swimming",
            PlayerAction::TreadingWater => "treading water",
        }
    }
}

impl fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One action transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionChange {
    pub before: PlayerAction,
    pub current: PlayerAction,
}

/// Handle returned by [`ActionEvents::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&ActionChange)>;

/// Ordered list of action-change listeners.
///
/// Listeners run synchronously in registration order. Nothing is queued:
/// a change emitted with no listeners is simply dropped.
#[derive(Default)]
pub struct ActionEvents {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl ActionEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&ActionChange) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn emit(&mut self, change: &ActionChange) {
        tracing::debug!(before = %change.before, current = %change.current, "player action");
        for (_, listener) in &mut self.listeners {
            listener(change);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl fmt::Debug for ActionEvents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionEvents")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

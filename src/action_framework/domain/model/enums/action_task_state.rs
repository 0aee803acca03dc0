use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ActionTaskState {
    Created,
    AwaitingService,
    Completed,
}

impl ActionTaskState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::AwaitingService => "awaiting_service",
            Self::Completed => "completed",
        }
    }

    pub fn can_transition_to(&self, next: ActionTaskState) -> bool {
        matches!(
            (self, next),
            (Self::Created, Self::AwaitingService)
                | (Self::Created, Self::Completed)
                | (Self::AwaitingService, Self::Completed)
        )
    }
}

impl fmt::Display for ActionTaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Shared error types and utilities for the rollcall project.
pub use color_eyre::Report;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("Failed to install color_eyre")]
    ColorEyre(#[from] color_eyre::Report),
    #[error("Failed to install tracing-subscriber")]
    TracingSubscriber(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Errors raised while reading or mutating an activity roster.
///
/// `ActivityNotFound` and `ParticipantNotRegistered` are the only errors the
/// default [`RosterPolicy`](crate::data::RosterPolicy) can produce. The other two
/// only appear when the matching policy check is switched on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("Activity {0} not found")]
    ActivityNotFound(String),
    #[error("Participant {email} not found in {activity}")]
    ParticipantNotRegistered { activity: String, email: String },
    #[error("{email} is already signed up for {activity}")]
    AlreadySignedUp { activity: String, email: String },
    #[error("Activity {0} is full")]
    ActivityFull(String),
}

impl RosterError {
    /// True for the errors that mean "no such thing", as opposed to a rejected request.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ActivityNotFound(_) | Self::ParticipantNotRegistered { .. }
        )
    }
}

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplicatePredictionStatus {
    Starting,
    Processing,
    Succeeded,
    Failed,
    Canceled,
    #[serde(other)]
    Unknown,
}

impl ReplicatePredictionStatus {
    pub fn value(&self) -> &'static str {
        match *self {
            Self::Starting => "starting",
            Self::Processing => "processing",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
            Self::Canceled => "canceled",
            Self::Unknown => "unknown",
        }
    }

    /// Statuses we do not recognise count as terminal so polling cannot spin forever.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Starting | Self::Processing)
    }
}

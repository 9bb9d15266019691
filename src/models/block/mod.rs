// Block state module
// Visual state axes carried by a scheduled block

/// How firmly a block is committed on the calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Commitment {
    #[default]
    Confirmed,
    AiDraft,
    Tentative,
    Changed,
    InProgress,
    Completed,
    Canceled,
}

/// Deadline risk attached to a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Risk {
    #[default]
    None,
    Watch,
    Breach,
}

/// Whether other people can book over this block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Defense {
    #[default]
    Bookable,
    Defended,
}

/// Sync status against the backing calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Persistence {
    #[default]
    Synced,
    SyncPending,
    SyncError,
}

/// Where a block came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    Ai,
    Email,
    Slack,
    User,
    Imported,
}

impl Provenance {
    pub fn label(&self) -> &'static str {
        match self {
            Provenance::Ai => "AI",
            Provenance::Email => "Email",
            Provenance::Slack => "Slack",
            Provenance::User => "User",
            Provenance::Imported => "Imported",
        }
    }
}

/// Combined visual state of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlockState {
    pub commitment: Commitment,
    pub risk: Risk,
    pub defense: Defense,
    pub persistence: Persistence,
    pub provenance: Option<Provenance>,
}

impl BlockState {
    pub fn with_commitment(commitment: Commitment) -> Self {
        Self {
            commitment,
            ..Self::default()
        }
    }
}

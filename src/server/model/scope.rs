/// Fleets a request may read or modify.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FleetScope {
    /// Every fleet, used when the application runs without login.
    All,
    /// A single fleet, taken from the logged-in user's session.
    Fleet(i32),
}

impl FleetScope {
    /// The fleet to filter by, `None` meaning no filter.
    pub fn fleet_id(&self) -> Option<i32> {
        match self {
            Self::All => None,
            Self::Fleet(id) => Some(*id),
        }
    }

    /// Whether rows of `fleet_id` are visible in this scope.
    pub fn permits(&self, fleet_id: i32) -> bool {
        match self {
            Self::All => true,
            Self::Fleet(id) => *id == fleet_id,
        }
    }
}

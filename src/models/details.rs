use serde::Serialize;

use super::{ActivityRow, CamperRow};

/// Camper as returned by `GET /campers/:id`: the camper's own fields with the
/// activities reached through its signups, one entry per signup.
#[derive(Debug, Clone, Serialize)]
pub struct CamperDetail {
    #[serde(flatten)]
    pub camper: CamperRow,
    pub activities: Vec<ActivityRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActivityDetail {
    #[serde(flatten)]
    pub activity: ActivityRow,
    pub campers: Vec<CamperRow>,
}

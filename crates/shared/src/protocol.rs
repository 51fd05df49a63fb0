use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::FormFields;

pub const CONTACT_API_ROUTE: &str = "/api/contact";

/// Returned by the contact API once a submission passes validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactAck {
    pub lead_id: Uuid,
    pub received_at: DateTime<Utc>,
}

/// An accepted submission as handed to downstream delivery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    pub lead_id: Uuid,
    pub received_at: DateTime<Utc>,
    pub fields: FormFields,
}

impl Lead {
    pub fn accept(fields: FormFields) -> Self {
        Self {
            lead_id: Uuid::new_v4(),
            received_at: Utc::now(),
            fields,
        }
    }

    pub fn ack(&self) -> ContactAck {
        ContactAck {
            lead_id: self.lead_id,
            received_at: self.received_at,
        }
    }
}

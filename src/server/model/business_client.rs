use chrono::{DateTime, Utc};

use crate::{model::business::BusinessClientDto, server::model::user::User};

/// Client who has booked at a business at least once.
#[derive(Debug, Clone, PartialEq)]
pub struct BusinessClient {
    pub client: User,
    /// When the client first booked at the business.
    pub client_since: DateTime<Utc>,
}

impl BusinessClient {
    pub fn into_dto(self) -> BusinessClientDto {
        BusinessClientDto {
            id: self.client.id,
            name: self.client.name,
            email: self.client.email,
            phone: self.client.phone,
            client_since: self.client_since,
        }
    }
}

//! Wire and storage types for clients and signin.

use serde::{Deserialize, Serialize};

/// A client of the company. JSON keys keep the API's `ClientID`-style casing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Client {
    #[serde(rename = "ClientID")]
    pub client_id: String,
    #[serde(rename = "ClientName")]
    pub client_name: String,
    #[serde(rename = "ContactName", default, skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(rename = "ContactEmail", default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(rename = "ContactMobile", default, skip_serializing_if = "Option::is_none")]
    pub contact_mobile: Option<i64>,
}

/// Body of `POST /client/:ClientID`. The id itself comes from the path.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AddClientBody {
    #[serde(rename = "ClientName", default)]
    pub client_name: String,
    #[serde(rename = "ContactName", default)]
    pub contact_name: Option<String>,
    #[serde(rename = "ContactEmail", default)]
    pub contact_email: Option<String>,
    #[serde(rename = "ContactMobile", default)]
    pub contact_mobile: Option<i64>,
}

impl AddClientBody {
    pub fn into_client(self, client_id: String) -> Client {
        Client {
            client_id,
            client_name: self.client_name,
            contact_name: self.contact_name,
            contact_email: self.contact_email,
            contact_mobile: self.contact_mobile,
        }
    }
}

/// Signin result.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Creds {
    pub jwt: String,
}

//! # Lead Data Transfer Objects
//!
//! Request and response types for lead management and conversion endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to create a new lead
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct CreateLeadRequest {
    /// Contact name
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name:        String,
    /// Contact email
    #[validate(email(message = "Invalid email format"))]
    pub email:       Option<String>,
    /// Contact phone
    pub phone:       Option<String>,
    /// Company name
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 255,
        message = "Company must be between 1 and 255 characters"
    ))]
    pub company:     String,
    /// Postal address
    pub address:     Option<String>,
    /// Pipeline stage: cold, warm, or hot; defaults to cold
    pub status:      Option<String>,
    /// Acquisition channel
    pub source:      Option<String>,
    /// Employee ID of the assignee, if any
    pub assigned_to: Option<String>,
    /// Free-form notes
    #[validate(length(max = 2000, message = "Notes must not exceed 2000 characters"))]
    pub notes:       Option<String>,
}

/// Request to update an existing lead; absent fields stay unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
pub struct UpdateLeadRequest {
    /// Updated contact name
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name:        Option<String>,
    /// Updated contact email
    #[validate(email(message = "Invalid email format"))]
    pub email:       Option<String>,
    /// Updated contact phone
    pub phone:       Option<String>,
    /// Updated company name
    #[validate(length(
        min = 1,
        max = 255,
        message = "Company must be between 1 and 255 characters"
    ))]
    pub company:     Option<String>,
    /// Updated postal address
    pub address:     Option<String>,
    /// Updated pipeline stage
    pub status:      Option<String>,
    /// Updated acquisition channel
    pub source:      Option<String>,
    /// Updated assignee employee ID; an empty string unassigns
    pub assigned_to: Option<String>,
    /// Updated notes
    #[validate(length(max = 2000, message = "Notes must not exceed 2000 characters"))]
    pub notes:       Option<String>,
}

/// Lead payload embedded in responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadDetail {
    /// Lead's unique identifier
    pub id:          String,
    /// Contact name
    pub name:        String,
    /// Contact email
    pub email:       Option<String>,
    /// Contact phone
    pub phone:       Option<String>,
    /// Company name
    pub company:     String,
    /// Postal address
    pub address:     Option<String>,
    /// Pipeline stage name
    pub status:      String,
    /// Acquisition channel
    pub source:      Option<String>,
    /// Assignee employee ID, if any
    pub assigned_to: Option<String>,
    /// Free-form notes
    pub notes:       Option<String>,
    /// Creation timestamp
    pub created_at:  String,
    /// Last update timestamp
    pub updated_at:  String,
}

/// Response for a single lead
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// The lead record
    pub lead:    LeadDetail,
}

/// Response for the lead list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadListResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Leads visible to the actor
    pub leads:   Vec<LeadDetail>,
}

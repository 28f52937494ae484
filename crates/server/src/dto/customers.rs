//! # Customer Data Transfer Objects
//!
//! Request and response types for customer management endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to create a new customer
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct CreateCustomerRequest {
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
    /// Relationship state: active or inactive; defaults to active
    pub status:      Option<String>,
    /// Lifetime revenue; defaults to zero
    #[validate(range(min = 0.0, message = "Total value cannot be negative"))]
    pub total_value: Option<f64>,
}

/// Request to update an existing customer; absent fields stay unchanged
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
pub struct UpdateCustomerRequest {
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
    /// Updated relationship state
    pub status:      Option<String>,
    /// Updated lifetime revenue
    #[validate(range(min = 0.0, message = "Total value cannot be negative"))]
    pub total_value: Option<f64>,
}

/// Customer payload embedded in responses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerDetail {
    /// Customer's unique identifier
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
    /// Relationship state name
    pub status:      String,
    /// Lifetime revenue
    pub total_value: f64,
    /// Creation timestamp
    pub created_at:  String,
    /// Last update timestamp
    pub updated_at:  String,
}

/// Response for a single customer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerResponse {
    /// Whether the operation was successful
    pub success:  bool,
    /// The customer record
    pub customer: CustomerDetail,
}

/// Response for the customer list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerListResponse {
    /// Whether the operation was successful
    pub success:   bool,
    /// All customers
    pub customers: Vec<CustomerDetail>,
}

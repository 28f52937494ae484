//! # Employee Data Transfer Objects
//!
//! Request and response types for employee management endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to create a new employee
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct CreateEmployeeRequest {
    /// Full name
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name:        String,
    /// Mobile number, unique across employees
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 20,
        message = "Mobile number must be between 1 and 20 characters"
    ))]
    pub mobile:      String,
    /// Role name: CEO, Director, or Employee
    #[serde(default)]
    #[validate(length(min = 1, message = "Role is required"))]
    pub role:        String,
    /// Department name
    #[serde(default)]
    #[validate(length(min = 1, message = "Department is required"))]
    pub department:  String,
    /// Job title
    #[serde(default)]
    #[validate(length(min = 1, message = "Designation is required"))]
    pub designation: String,
    /// Badge number, unique across employees
    #[serde(default)]
    #[validate(length(min = 1, message = "Member ID is required"))]
    pub member_id:   String,
}

/// Request to update an existing employee; absent fields stay unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
pub struct UpdateEmployeeRequest {
    /// Updated full name
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name:        Option<String>,
    /// Updated mobile number
    #[validate(length(
        min = 1,
        max = 20,
        message = "Mobile number must be between 1 and 20 characters"
    ))]
    pub mobile:      Option<String>,
    /// Updated role name
    pub role:        Option<String>,
    /// Updated department
    #[validate(length(min = 1, message = "Department cannot be empty"))]
    pub department:  Option<String>,
    /// Updated job title
    #[validate(length(min = 1, message = "Designation cannot be empty"))]
    pub designation: Option<String>,
    /// Updated badge number
    #[validate(length(min = 1, message = "Member ID cannot be empty"))]
    pub member_id:   Option<String>,
}

/// Employee payload embedded in responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeDetail {
    /// Employee's unique identifier
    pub id:          String,
    /// Full name
    pub name:        String,
    /// Mobile number
    pub mobile:      String,
    /// Role name
    pub role:        String,
    /// Department name
    pub department:  String,
    /// Job title
    pub designation: String,
    /// Badge number
    pub member_id:   String,
    /// Creation timestamp
    pub created_at:  String,
    /// Last update timestamp
    pub updated_at:  String,
}

/// Response for a single employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeResponse {
    /// Whether the operation was successful
    pub success:  bool,
    /// The employee record
    pub employee: EmployeeDetail,
}

/// Response for the employee list, ordered by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeListResponse {
    /// Whether the operation was successful
    pub success:   bool,
    /// All employees
    pub employees: Vec<EmployeeDetail>,
}

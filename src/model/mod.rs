//! Roster data model
//!
//! Plain records for employees, managers and departments. Relationships are
//! stored as arena handles ([`EmployeeId`], [`DepartmentId`]) rather than
//! references; the registry owns every record.

pub mod department;
pub mod employee;
pub mod role;
pub mod types;

pub use department::{Department, DepartmentCategory, DepartmentKind};
pub use employee::{Employee, Management, NewEmployee};
pub use role::{BudgetDecision, ManagerRole, RoleScope};
pub use types::{DepartmentId, EmployeeId};

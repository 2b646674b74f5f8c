//! In-memory roster registry
//!
//! Arena storage for employees and departments. All relationship writes go
//! through this type so both sides of every link change together:
//! - department staff set <-> employee department reference
//! - manager subordinate set <-> employee manager reference

use super::ids::{IdGenerator, SequentialIds};
use crate::algo::KeyOrder;
use crate::model::{
    BudgetDecision, Department, DepartmentId, DepartmentKind, Employee, EmployeeId, Management,
    ManagerRole, NewEmployee,
};
use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during registry operations
#[derive(Error, Debug, PartialEq)]
pub enum RosterError {
    #[error("Employee {0} not found")]
    EmployeeNotFound(EmployeeId),

    #[error("Department {0} not found")]
    DepartmentNotFound(DepartmentId),

    #[error("Employee {0} is not a manager")]
    NotAManager(EmployeeId),

    #[error("Employee {0} cannot be their own manager")]
    SelfManagement(EmployeeId),

    #[error("Records are not ordered by {0}")]
    NotSorted(KeyOrder),
}

pub type RosterResult<T> = Result<T, RosterError>;

/// Registry of every employee, manager and department in a session
///
/// Records are never removed; handles stay valid for the life of the store.
#[derive(Debug)]
pub struct RosterStore {
    /// Employee arena, indexed by `EmployeeId`
    employees: Vec<Employee>,

    /// Department arena, indexed by `DepartmentId`
    departments: Vec<Department>,

    /// Managers in registration order
    managers: Vec<EmployeeId>,

    /// Lower-cased department name -> department
    department_names: FxHashMap<String, DepartmentId>,

    /// Display code source
    ids: Box<dyn IdGenerator>,
}

impl RosterStore {
    /// Create an empty store using sequential display codes
    pub fn new() -> Self {
        Self::with_id_generator(SequentialIds::new())
    }

    /// Create an empty store with an injected code generator
    pub fn with_id_generator(ids: impl IdGenerator + 'static) -> Self {
        RosterStore {
            employees: Vec::new(),
            departments: Vec::new(),
            managers: Vec::new(),
            department_names: FxHashMap::default(),
            ids: Box::new(ids),
        }
    }

    /// Add a plain employee record
    pub fn add_employee(&mut self, record: NewEmployee) -> EmployeeId {
        let id = EmployeeId::new(self.employees.len() as u64);
        let code = self.ids.employee_code(&record.first_name, &record.last_name);
        debug!("Added employee {} ({})", id, code);
        self.employees.push(Employee::new(id, code, record));
        id
    }

    /// Add a manager record with the given role
    pub fn add_manager(&mut self, record: NewEmployee, role: ManagerRole) -> EmployeeId {
        let id = self.add_employee(record);
        let employee = &mut self.employees[id.index()];
        employee.management = Some(Management::new(role, &employee.code));
        self.managers.push(id);
        debug!("Registered {} as {}", id, role);
        id
    }

    /// Add a department unless one with the same name (ignoring case) exists.
    ///
    /// Returns the department and whether it was newly created.
    pub fn add_department(&mut self, name: &str, kind: DepartmentKind) -> (DepartmentId, bool) {
        let name = name.trim();
        if let Some(existing) = self.find_department_by_name(name) {
            return (existing, false);
        }

        let id = DepartmentId::new(self.departments.len() as u64);
        let code = self.ids.department_code(name);
        debug!("Added department {} '{}' ({})", id, name, code);
        self.departments.push(Department::new(id, code, name, kind));
        self.department_names.insert(name.to_lowercase(), id);
        (id, true)
    }

    pub fn get_employee(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.get(id.index())
    }

    pub fn get_department(&self, id: DepartmentId) -> Option<&Department> {
        self.departments.get(id.index())
    }

    /// Case-insensitive department lookup
    pub fn find_department_by_name(&self, name: &str) -> Option<DepartmentId> {
        self.department_names.get(&name.trim().to_lowercase()).copied()
    }

    /// Case-insensitive email lookup
    pub fn find_by_email(&self, email: &str) -> Option<EmployeeId> {
        let email = fold_case(email);
        if email.is_empty() {
            return None;
        }
        self.employees
            .iter()
            .find(|e| fold_case(&e.email) == email)
            .map(|e| e.id)
    }

    /// Case-insensitive lookup on both name parts
    pub fn find_by_name(&self, first_name: &str, last_name: &str) -> Option<EmployeeId> {
        let first = fold_case(first_name);
        let last = fold_case(last_name);
        self.employees
            .iter()
            .find(|e| fold_case(&e.first_name) == first && fold_case(&e.last_name) == last)
            .map(|e| e.id)
    }

    /// All employees, managers included, in registration order
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    /// Managers in registration order
    pub fn managers(&self) -> impl Iterator<Item = &Employee> + '_ {
        self.managers.iter().map(move |id| &self.employees[id.index()])
    }

    pub fn manager_ids(&self) -> &[EmployeeId] {
        &self.managers
    }

    /// First registered manager holding `role`
    pub fn find_manager_by_role(&self, role: ManagerRole) -> Option<EmployeeId> {
        self.managers().find(|m| m.has_role(role)).map(|m| m.id)
    }

    pub fn employee_count(&self) -> usize {
        self.employees.len()
    }

    pub fn department_count(&self) -> usize {
        self.departments.len()
    }

    pub fn manager_count(&self) -> usize {
        self.managers.len()
    }

    /// Name of the department an employee belongs to
    pub fn department_name_of(&self, id: EmployeeId) -> Option<&str> {
        let dept = self.get_employee(id)?.department()?;
        self.get_department(dept).map(|d| d.name.as_str())
    }

    /// Put an employee in a department, updating both sides.
    ///
    /// An employee already in another department is moved out of that
    /// department's staff set. Returns `Ok(false)` when the employee is already
    /// on this department's staff.
    pub fn assign_department(&mut self, employee: EmployeeId, department: DepartmentId) -> RosterResult<bool> {
        self.check_employee(employee)?;
        self.check_department(department)?;

        let previous = self.employees[employee.index()].department;
        if previous == Some(department) {
            return Ok(false);
        }

        if let Some(old) = previous {
            self.departments[old.index()].staff.shift_remove(&employee);
        }
        self.departments[department.index()].staff.insert(employee);
        self.employees[employee.index()].department = Some(department);

        debug!("Assigned {} to {}", employee, department);
        Ok(true)
    }

    /// Make `manager` the manager of `employee`, updating both sides.
    ///
    /// An employee reporting elsewhere is released from the previous manager
    /// first. Returns `Ok(false)` when the link already exists.
    pub fn assign_manager(&mut self, manager: EmployeeId, employee: EmployeeId) -> RosterResult<bool> {
        if manager == employee {
            return Err(RosterError::SelfManagement(employee));
        }
        self.check_employee(employee)?;
        self.check_manager(manager)?;

        let previous = self.employees[employee.index()].manager;
        if previous == Some(manager) {
            return Ok(false);
        }

        if let Some(old) = previous {
            if let Some(management) = self.employees[old.index()].management.as_mut() {
                management.subordinates.shift_remove(&employee);
            }
        }
        if let Some(management) = self.employees[manager.index()].management.as_mut() {
            management.subordinates.insert(employee);
        }
        self.employees[employee.index()].manager = Some(manager);

        debug!("{} now reports to {}", employee, manager);
        Ok(true)
    }

    /// Detach `employee` from `manager`. Returns `Ok(false)` if they were not linked.
    pub fn release_subordinate(&mut self, manager: EmployeeId, employee: EmployeeId) -> RosterResult<bool> {
        self.check_employee(employee)?;
        self.check_manager(manager)?;

        if self.employees[employee.index()].manager != Some(manager) {
            return Ok(false);
        }

        if let Some(management) = self.employees[manager.index()].management.as_mut() {
            management.subordinates.shift_remove(&employee);
        }
        self.employees[employee.index()].manager = None;
        Ok(true)
    }

    /// Record `manager` as the head of `department`
    pub fn set_department_head(&mut self, department: DepartmentId, manager: EmployeeId) -> RosterResult<()> {
        self.check_department(department)?;
        self.check_manager(manager)?;
        self.departments[department.index()].head = Some(manager);
        Ok(())
    }

    /// Replace a manager's remaining budget
    pub fn set_budget(&mut self, manager: EmployeeId, budget: f64) -> RosterResult<()> {
        self.check_manager(manager)?;
        if let Some(management) = self.employees[manager.index()].management.as_mut() {
            management.budget = budget;
        }
        Ok(())
    }

    /// Spend from a manager's budget if their role allows it and funds suffice
    pub fn approve_budget(&mut self, manager: EmployeeId, amount: f64) -> RosterResult<BudgetDecision> {
        self.check_manager(manager)?;
        let management = match self.employees[manager.index()].management.as_mut() {
            Some(m) => m,
            None => return Err(RosterError::NotAManager(manager)),
        };

        if !management.role.can_approve_budget() || amount <= 0.0 || amount.is_nan() {
            return Ok(BudgetDecision::Invalid);
        }

        if amount <= management.budget {
            management.budget -= amount;
            Ok(BudgetDecision::Approved {
                remaining: management.budget,
            })
        } else {
            Ok(BudgetDecision::Denied {
                requested: amount,
                available: management.budget,
            })
        }
    }

    fn check_employee(&self, id: EmployeeId) -> RosterResult<()> {
        if id.index() < self.employees.len() {
            Ok(())
        } else {
            Err(RosterError::EmployeeNotFound(id))
        }
    }

    fn check_department(&self, id: DepartmentId) -> RosterResult<()> {
        if id.index() < self.departments.len() {
            Ok(())
        } else {
            Err(RosterError::DepartmentNotFound(id))
        }
    }

    fn check_manager(&self, id: EmployeeId) -> RosterResult<()> {
        self.check_employee(id)?;
        if self.employees[id.index()].is_manager() {
            Ok(())
        } else {
            Err(RosterError::NotAManager(id))
        }
    }
}

/// Trimmed and lower-cased with full Unicode case mapping
fn fold_case(text: &str) -> String {
    text.trim().to_lowercase()
}

impl Default for RosterStore {
    fn default() -> Self {
        Self::new()
    }
}

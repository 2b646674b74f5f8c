//! Find-or-create resolver over a [`RosterStore`]

use super::{PersonName, ResolverConfig};
use crate::model::{DepartmentId, DepartmentKind, EmployeeId, ManagerRole, NewEmployee, RoleScope};
use crate::registry::{RosterError, RosterResult, RosterStore};
use tracing::{debug, info, warn};

/// Borrows the registry for one batch of resolution calls
///
/// Every method is idempotent: resolving the same department or role twice
/// returns the same handle and leaves the registry unchanged.
pub struct OrgResolver<'s, 'c> {
    store: &'s mut RosterStore,
    config: &'c ResolverConfig,
    next_name: usize,
}

impl<'s, 'c> OrgResolver<'s, 'c> {
    pub fn new(store: &'s mut RosterStore, config: &'c ResolverConfig) -> Self {
        OrgResolver {
            store,
            config,
            next_name: 0,
        }
    }

    pub fn store(&self) -> &RosterStore {
        self.store
    }

    /// Find a department by name (case-insensitive) or create it.
    ///
    /// Blank names resolve to the catch-all department. Unknown names get the
    /// configured default kind.
    pub fn resolve_department(&mut self, name: &str) -> DepartmentId {
        let name = match name.trim() {
            "" => self.config.catch_all_department.trim(),
            trimmed => trimmed,
        };

        let kind = DepartmentKind::from_display_name(name).unwrap_or(self.config.default_kind);
        let (id, created) = self.store.add_department(name, kind);
        if created {
            info!("Created department '{}' as {}", name, kind);
        }
        id
    }

    pub fn catch_all_department(&mut self) -> DepartmentId {
        let config = self.config;
        self.resolve_department(&config.catch_all_department)
    }

    /// Find the manager holding `role` or create one.
    ///
    /// School-wide roles are unique across the registry; per-department roles
    /// are unique within `department`. Without a department the catch-all
    /// department is used.
    pub fn resolve_manager(&mut self, role: ManagerRole, department: Option<DepartmentId>) -> RosterResult<EmployeeId> {
        let department = match department {
            Some(id) => {
                self.store.get_department(id).ok_or(RosterError::DepartmentNotFound(id))?;
                id
            }
            None => self.catch_all_department(),
        };

        if let Some(existing) = self.existing_manager(role, department) {
            debug!("Resolved {} to existing {}", role, existing);
            return Ok(existing);
        }

        let department_name = self
            .store
            .get_department(department)
            .map(|d| d.name.clone())
            .unwrap_or_default();
        let name = self.next_free_name();
        let record = NewEmployee {
            email: self.email_for(&name),
            salary: role.default_salary(),
            position: "senior".to_string(),
            job_title: role.default_job_title(&department_name),
            employer: self.config.employer.clone(),
            generated: true,
            ..NewEmployee::new(name.first_name, name.last_name)
        };

        let id = self.store.add_manager(record, role);
        self.store.assign_department(id, department)?;
        if role == ManagerRole::DepartmentHead {
            self.store.set_department_head(department, id)?;
        }

        info!("Created {} {} in '{}'", role, id, department_name);
        Ok(id)
    }

    /// Create each configured core role that does not exist yet
    pub fn ensure_core_management(&mut self) -> RosterResult<Vec<EmployeeId>> {
        let config = self.config;
        config
            .core_roles
            .iter()
            .map(|&role| self.resolve_manager(role, None))
            .collect()
    }

    /// Give every department except the catch-all a head. Returns how many were created.
    pub fn create_department_heads(&mut self) -> RosterResult<usize> {
        let catch_all = self.store.find_department_by_name(&self.config.catch_all_department);
        let departments: Vec<DepartmentId> = self
            .store
            .departments()
            .iter()
            .map(|d| d.id)
            .filter(|id| Some(*id) != catch_all)
            .collect();

        let mut created = 0;
        for department in departments {
            let before = self.store.manager_count();
            self.resolve_manager(ManagerRole::DepartmentHead, Some(department))?;
            if self.store.manager_count() > before {
                created += 1;
            }
        }

        info!("Created {} department heads", created);
        Ok(created)
    }

    /// Manager an employee should default to: the first manager in the same
    /// department, otherwise the first registered manager.
    pub fn find_manager_for(&self, employee: EmployeeId) -> RosterResult<Option<EmployeeId>> {
        let record = self
            .store
            .get_employee(employee)
            .ok_or(RosterError::EmployeeNotFound(employee))?;
        let candidates = || self.store.managers().filter(move |m| m.id != employee);

        let same_department = record
            .department()
            .and_then(|dept| candidates().find(|m| m.department() == Some(dept)));

        Ok(same_department.or_else(|| candidates().next()).map(|m| m.id))
    }

    /// Give each unmanaged non-manager in `employees` a default manager.
    ///
    /// Returns the number of links made. Records stay unmanaged when the
    /// registry has no managers.
    pub fn assign_default_managers<I>(&mut self, employees: I) -> RosterResult<usize>
    where
        I: IntoIterator<Item = EmployeeId>,
    {
        let mut assigned = 0;
        let mut unmanaged = 0;

        for id in employees {
            let record = self.store.get_employee(id).ok_or(RosterError::EmployeeNotFound(id))?;
            if record.is_manager() || record.manager().is_some() {
                continue;
            }

            match self.find_manager_for(id)? {
                Some(manager) => {
                    if self.store.assign_manager(manager, id)? {
                        assigned += 1;
                    }
                }
                None => unmanaged += 1,
            }
        }

        if unmanaged > 0 {
            warn!("{} records left without a manager: no managers registered", unmanaged);
        }
        debug!("Assigned {} default managers", assigned);
        Ok(assigned)
    }

    pub fn assign_all_default_managers(&mut self) -> RosterResult<usize> {
        let ids: Vec<EmployeeId> = self.store.employees().iter().map(|e| e.id).collect();
        self.assign_default_managers(ids)
    }

    /// Add a record, place it in `department_name` and give it a default manager
    pub fn onboard(&mut self, record: NewEmployee, department_name: &str) -> RosterResult<EmployeeId> {
        let id = self.store.add_employee(record);
        let department = self.resolve_department(department_name);
        self.store.assign_department(id, department)?;
        self.assign_default_managers([id])?;
        Ok(id)
    }

    fn existing_manager(&self, role: ManagerRole, department: DepartmentId) -> Option<EmployeeId> {
        match role.scope() {
            RoleScope::SchoolWide => self.store.find_manager_by_role(role),
            RoleScope::PerDepartment => self
                .store
                .managers()
                .find(|m| m.has_role(role) && m.department() == Some(department))
                .map(|m| m.id),
        }
    }

    fn email_for(&self, name: &PersonName) -> String {
        format!(
            "{}.{}@{}",
            name.first_name.to_lowercase(),
            name.last_name.to_lowercase(),
            self.config.email_domain
        )
    }

    /// Next pool name not already used by an email or name in the registry.
    ///
    /// Once the pool is exhausted, names repeat with a numeric suffix on the
    /// last name.
    fn next_free_name(&mut self) -> PersonName {
        let config = self.config;
        let pool = &config.manager_names;
        if pool.is_empty() {
            return PersonName::new("Acting", format!("Manager{}", self.store.manager_count() + 1));
        }

        loop {
            let round = self.next_name / pool.len();
            let base = &pool[self.next_name % pool.len()];
            self.next_name += 1;

            let candidate = match round {
                0 => base.clone(),
                n => PersonName::new(base.first_name.clone(), format!("{}{}", base.last_name, n + 1)),
            };

            let taken = self.store.find_by_email(&self.email_for(&candidate)).is_some()
                || self
                    .store
                    .find_by_name(&candidate.first_name, &candidate.last_name)
                    .is_some();
            if !taken {
                return candidate;
            }
            debug!("Skipping taken name {} {}", candidate.first_name, candidate.last_name);
        }
    }
}

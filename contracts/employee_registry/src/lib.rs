#![no_std]

mod events;
mod types;
mod validation;


use soroban_sdk::{contract, contractimpl, contractmeta, Address, Env, String, Vec};

pub use types::{EmployeeRecord, Error};
use types::DataKey;

contractmeta!(
    key = "Description",
    val = "Employee badge registry - owner-administered roster with numbered badges"
);

#[contract]
pub struct EmployeeRegistryContract;

#[contractimpl]
impl EmployeeRegistryContract {
    /// One-time setup. The owner address authorizes its own appointment.
    pub fn initialize(env: Env, owner: Address) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Owner) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();

        env.storage().instance().set(&DataKey::Owner, &owner);
        env.storage().instance().set(&DataKey::BadgeCounter, &0u64);
        env.storage().instance().set(&DataKey::Paused, &false);
        env.storage()
            .persistent()
            .set(&DataKey::Badges, &Vec::<u64>::new(&env));

        Ok(())
    }

    /// Current owner address.
    pub fn owner(env: Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(Error::NotInitialized)
    }

    /// Hand the registry to a new owner. Owner only.
    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;

        env.storage().instance().set(&DataKey::Owner, &new_owner);
        events::ownership_transferred(&env, caller, new_owner);
        Ok(())
    }

    /// Hire an employee and mint their badge. Owner only.
    ///
    /// The badge id is the counter value before the mint; the counter
    /// moves up by one on success and not at all on any failure.
    pub fn add_employee(
        env: Env,
        caller: Address,
        name: String,
        email: String,
        employee_id: u32,
        grade: u32,
        department: String,
        years_experience: u32,
        leave_balance: u32,
        rating: u32,
        designation: String,
    ) -> Result<u64, Error> {
        Self::require_owner(&env, &caller)?;
        Self::check_paused(&env)?;

        validation::validate_name(&name)?;
        validation::validate_email(&email)?;
        validation::validate_employee_id(employee_id)?;
        validation::validate_grade(grade)?;
        validation::validate_rating(rating)?;
        validation::validate_department(&department)?;
        validation::validate_designation(&designation)?;

        // Employee numbers stay reserved even after deactivation
        if env
            .storage()
            .persistent()
            .has(&DataKey::EmployeeId(employee_id))
        {
            return Err(Error::DuplicateEmployeeId);
        }

        let badge_id: u64 = env
            .storage()
            .instance()
            .get(&DataKey::BadgeCounter)
            .unwrap_or(0);
        env.storage()
            .instance()
            .set(&DataKey::BadgeCounter, &(badge_id + 1));

        let now = env.ledger().timestamp();
        let record = EmployeeRecord {
            badge_id,
            name: name.clone(),
            email,
            employee_id,
            grade,
            department,
            years_experience,
            leave_balance,
            rating,
            designation,
            active: true,
            hired_at: now,
            updated_at: now,
        };

        env.storage()
            .persistent()
            .set(&DataKey::Employee(badge_id), &record);
        env.storage()
            .persistent()
            .set(&DataKey::EmployeeId(employee_id), &badge_id);

        let mut badges: Vec<u64> = env
            .storage()
            .persistent()
            .get(&DataKey::Badges)
            .unwrap_or(Vec::new(&env));
        badges.push_back(badge_id);
        env.storage().persistent().set(&DataKey::Badges, &badges);

        events::employee_added(&env, badge_id, employee_id, name);

        Ok(badge_id)
    }

    /// Rewrite the mutable fields of an active record. Owner only.
    /// The name and employee number are fixed at hire.
    pub fn update_employee(
        env: Env,
        caller: Address,
        badge_id: u64,
        email: String,
        grade: u32,
        department: String,
        years_experience: u32,
        leave_balance: u32,
        rating: u32,
        designation: String,
    ) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;
        Self::check_paused(&env)?;

        validation::validate_email(&email)?;
        validation::validate_grade(grade)?;
        validation::validate_rating(rating)?;
        validation::validate_department(&department)?;
        validation::validate_designation(&designation)?;

        let mut record: EmployeeRecord = env
            .storage()
            .persistent()
            .get(&DataKey::Employee(badge_id))
            .ok_or(Error::EmployeeNotFound)?;

        if !record.active {
            return Err(Error::EmployeeInactive);
        }

        record.email = email;
        record.grade = grade;
        record.department = department;
        record.years_experience = years_experience;
        record.leave_balance = leave_balance;
        record.rating = rating;
        record.designation = designation;
        record.updated_at = env.ledger().timestamp();

        env.storage()
            .persistent()
            .set(&DataKey::Employee(badge_id), &record);
        events::employee_updated(&env, badge_id, record.employee_id);
        Ok(())
    }

    /// Mark a record inactive. The badge is never burned and the
    /// counter never decreases. Owner only.
    pub fn deactivate_employee(env: Env, caller: Address, badge_id: u64) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;
        Self::check_paused(&env)?;

        let mut record: EmployeeRecord = env
            .storage()
            .persistent()
            .get(&DataKey::Employee(badge_id))
            .ok_or(Error::EmployeeNotFound)?;

        if !record.active {
            return Err(Error::EmployeeInactive);
        }

        record.active = false;
        record.updated_at = env.ledger().timestamp();
        env.storage()
            .persistent()
            .set(&DataKey::Employee(badge_id), &record);

        events::employee_deactivated(&env, badge_id);
        Ok(())
    }

    /// Bring a deactivated record back. Owner only.
    pub fn reactivate_employee(env: Env, caller: Address, badge_id: u64) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;
        Self::check_paused(&env)?;

        let mut record: EmployeeRecord = env
            .storage()
            .persistent()
            .get(&DataKey::Employee(badge_id))
            .ok_or(Error::EmployeeNotFound)?;

        if record.active {
            return Err(Error::EmployeeActive);
        }

        record.active = true;
        record.updated_at = env.ledger().timestamp();
        env.storage()
            .persistent()
            .set(&DataKey::Employee(badge_id), &record);

        events::employee_reactivated(&env, badge_id);
        Ok(())
    }

    /// Fetch a record by badge id.
    pub fn get_employee(env: Env, badge_id: u64) -> Result<EmployeeRecord, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Employee(badge_id))
            .ok_or(Error::EmployeeNotFound)
    }

    /// Badge id lookup by employee number.
    pub fn find_by_employee_id(env: Env, employee_id: u32) -> Result<u64, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::EmployeeId(employee_id))
            .ok_or(Error::EmployeeNotFound)
    }

    pub fn is_active(env: Env, badge_id: u64) -> Result<bool, Error> {
        let record: EmployeeRecord = env
            .storage()
            .persistent()
            .get(&DataKey::Employee(badge_id))
            .ok_or(Error::EmployeeNotFound)?;
        Ok(record.active)
    }

    /// Number of badges minted so far; also the next badge id.
    pub fn badge_count(env: Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::BadgeCounter)
            .unwrap_or(0)
    }

    /// Badge ids in mint order.
    pub fn list_badges(env: Env) -> Vec<u64> {
        env.storage()
            .persistent()
            .get(&DataKey::Badges)
            .unwrap_or(Vec::new(&env))
    }

    /// Halt roster writes. Owner only.
    pub fn pause(env: Env, caller: Address) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;
        env.storage().instance().set(&DataKey::Paused, &true);
        events::registry_paused(&env, caller);
        Ok(())
    }

    /// Resume roster writes. Owner only.
    pub fn unpause(env: Env, caller: Address) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;
        env.storage().instance().set(&DataKey::Paused, &false);
        events::registry_unpaused(&env, caller);
        Ok(())
    }

    pub fn is_paused(env: Env) -> bool {
        env.storage()
            .instance()
            .get(&DataKey::Paused)
            .unwrap_or(false)
    }

    // Callers authorize before the owner comparison runs.
    fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
        caller.require_auth();
        let owner: Address = env
            .storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(Error::NotInitialized)?;
        if *caller != owner {
            return Err(Error::NotOwner);
        }
        Ok(())
    }

    fn check_paused(env: &Env) -> Result<(), Error> {
        let paused: bool = env
            .storage()
            .instance()
            .get(&DataKey::Paused)
            .unwrap_or(false);
        if paused {
            return Err(Error::ContractPaused);
        }
        Ok(())
    }
}

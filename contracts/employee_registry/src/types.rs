use soroban_sdk::{contracterror, contracttype, String};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotOwner = 3,
    ContractPaused = 4,
    EmployeeNotFound = 5,
    DuplicateEmployeeId = 6,
    EmployeeInactive = 7,
    EmployeeActive = 8,
    InvalidName = 9,
    InvalidEmail = 10,
    InvalidEmployeeId = 11,
    InvalidGrade = 12,
    InvalidRating = 13,
    InvalidDepartment = 14,
    InvalidDesignation = 15,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmployeeRecord {
    pub badge_id: u64,
    pub name: String,
    pub email: String,
    pub employee_id: u32,
    pub grade: u32,
    pub department: String,
    pub years_experience: u32,
    pub leave_balance: u32,
    pub rating: u32,
    pub designation: String,
    pub active: bool,
    pub hired_at: u64,
    pub updated_at: u64,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,
    Paused,
    BadgeCounter,
    Employee(u64),
    EmployeeId(u32), // employee number -> badge id index
    Badges,          // Vector of badge ids in mint order
}

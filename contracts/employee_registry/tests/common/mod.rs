use employee_registry::{EmployeeRegistryContract, EmployeeRegistryContractClient};
use soroban_sdk::{testutils::Address as _, Address, Env, String};

pub struct RegistryTest<'a> {
    pub client: EmployeeRegistryContractClient<'a>,
    pub owner: Address,
    pub intruder: Address,
}

pub fn setup_registry<'a>(env: &'a Env) -> RegistryTest<'a> {
    env.mock_all_auths();

    let owner = Address::generate(env);
    let intruder = Address::generate(env);

    let contract_id = env.register_contract(None, EmployeeRegistryContract);
    let client = EmployeeRegistryContractClient::new(env, &contract_id);
    client.initialize(&owner);

    RegistryTest {
        client,
        owner,
        intruder,
    }
}

#[allow(dead_code)]
pub fn hire(t: &RegistryTest, env: &Env, caller: &Address, employee_id: u32, name: &str) -> u64 {
    t.client.add_employee(
        caller,
        &String::from_str(env, name),
        &String::from_str(env, "pathak.anurag@tftus.com"),
        &employee_id,
        &3,
        &String::from_str(env, "Engineering"),
        &12,
        &15,
        &5,
        &String::from_str(env, "SmartContract_Dev"),
    )
}

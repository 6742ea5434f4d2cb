use soroban_sdk::{symbol_short, Address, Env, String};

pub fn employee_added(env: &Env, badge_id: u64, employee_id: u32, name: String) {
    env.events().publish(
        (symbol_short!("employee"), symbol_short!("added")),
        (badge_id, employee_id, name),
    );
}

pub fn employee_updated(env: &Env, badge_id: u64, employee_id: u32) {
    env.events().publish(
        (symbol_short!("employee"), symbol_short!("updated")),
        (badge_id, employee_id),
    );
}

pub fn employee_deactivated(env: &Env, badge_id: u64) {
    env.events().publish(
        (symbol_short!("employee"), symbol_short!("disabled")),
        badge_id,
    );
}

pub fn employee_reactivated(env: &Env, badge_id: u64) {
    env.events().publish(
        (symbol_short!("employee"), symbol_short!("enabled")),
        badge_id,
    );
}

pub fn ownership_transferred(env: &Env, previous_owner: Address, new_owner: Address) {
    env.events().publish(
        (symbol_short!("ownership"), symbol_short!("handover")),
        (previous_owner, new_owner),
    );
}

pub fn registry_paused(env: &Env, owner: Address) {
    env.events()
        .publish((symbol_short!("registry"), symbol_short!("paused")), owner);
}

pub fn registry_unpaused(env: &Env, owner: Address) {
    env.events()
        .publish((symbol_short!("registry"), symbol_short!("unpaused")), owner);
}

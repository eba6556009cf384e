use crate::storage::{get_admins, get_state, set_admins, set_state};
use pool_types::{AdminStatus, Ratio};
use soroban_sdk::{Address, Env};

/// Authenticate `who` and require confirmed administrator status.
pub fn require_admin(env: &Env, who: &Address) {
    who.require_auth();
    match get_admins(env).get(who.clone()) {
        Some(AdminStatus::Confirmed) => {}
        _ => panic!("Not an admin"),
    }
}

/// Stage a new administrator. The candidate holds no authority until they
/// accept.
pub fn propose_admin(env: &Env, admin: Address, candidate: Address) {
    require_admin(env, &admin);
    let mut admins = get_admins(env);
    if admins.get(candidate.clone()) == Some(AdminStatus::Confirmed) {
        panic!("Already an admin");
    }
    admins.set(candidate, AdminStatus::Proposed);
    set_admins(env, &admins);
}

/// Confirm a previously proposed administrator. Must be called by the
/// candidate themselves.
pub fn accept_admin(env: &Env, candidate: Address) {
    candidate.require_auth();
    let mut admins = get_admins(env);
    match admins.get(candidate.clone()) {
        Some(AdminStatus::Proposed) => {
            admins.set(candidate, AdminStatus::Confirmed);
            set_admins(env, &admins);
        }
        _ => panic!("Admin not proposed"),
    }
}

/// Drop an administrator or a pending proposal. The last confirmed
/// administrator cannot be removed.
pub fn remove_admin(env: &Env, admin: Address, target: Address) {
    require_admin(env, &admin);
    let mut admins = get_admins(env);
    let status = match admins.get(target.clone()) {
        Some(status) => status,
        None => panic!("Unknown admin"),
    };
    if status == AdminStatus::Confirmed && confirmed_count(env) == 1 {
        panic!("Cannot remove last admin");
    }
    admins.remove(target);
    set_admins(env, &admins);
}

fn confirmed_count(env: &Env) -> u32 {
    let mut count = 0;
    for (_, status) in get_admins(env).iter() {
        if status == AdminStatus::Confirmed {
            count += 1;
        }
    }
    count
}

pub fn set_swap_fee(env: &Env, admin: Address, fee: Ratio) {
    require_admin(env, &admin);
    if !fee.is_fraction() {
        panic!("Invalid ratio");
    }
    let mut state = get_state(env);
    state.swap_fee = fee;
    set_state(env, &state);
}

pub fn set_amplitude(env: &Env, admin: Address, amplitude: u128) {
    require_admin(env, &admin);
    if amplitude == 0 {
        panic!("Amplitude must be non-zero");
    }
    let mut state = get_state(env);
    state.amplitude = amplitude;
    set_state(env, &state);
}

pub fn set_price_oracle(env: &Env, admin: Address, oracle: Address) {
    require_admin(env, &admin);
    let mut state = get_state(env);
    state.price_oracle = oracle;
    set_state(env, &state);
}

pub fn set_enabled(env: &Env, admin: Address, enabled: bool) {
    require_admin(env, &admin);
    let mut state = get_state(env);
    state.enabled = enabled;
    set_state(env, &state);
}

use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MintEvent {
    pub authority: Address,
    pub to: Address,
    pub amount: i128,
    pub total_supply: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransferEvent {
    pub from: Address,
    pub to: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuthorityChangedEvent {
    pub old_authority: Address,
    pub new_authority: Address,
}

pub fn publish_minted(
    env: &Env,
    authority: Address,
    to: Address,
    amount: i128,
    total_supply: i128,
) {
    let event = MintEvent {
        authority,
        to: to.clone(),
        amount,
        total_supply,
    };
    env.events().publish((symbol_short!("mint"), to), event);
}

pub fn publish_transferred(env: &Env, from: Address, to: Address, amount: i128) {
    let event = TransferEvent {
        from: from.clone(),
        to: to.clone(),
        amount,
    };
    env.events().publish((symbol_short!("transfer"), from, to), event);
}

pub fn publish_authority_changed(env: &Env, old_authority: Address, new_authority: Address) {
    let event = AuthorityChangedEvent {
        old_authority,
        new_authority,
    };
    env.events().publish((symbol_short!("set_auth"),), event);
}

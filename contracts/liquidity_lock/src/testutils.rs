//! Test-only doubles for the two external collaborators, plus the shared
//! fixture used by the scenario tests.

extern crate std;

use soroban_sdk::{
    contract, contractimpl, symbol_short, testutils::Address as _, token, Address, Env,
};

use crate::{LiquidityLock, LiquidityLockClient, LockConfig, Schedule, StakingConfig};

// ── MockBonusPool ────────────────────────────────────────────────────
//
// Stands in for the upstream pool holding the bonus allocation: ownable,
// owner-gated withdrawals, balance query. Tests mint the bonus supply
// directly to the pool's contract address.

// Each mock lives in its own module because `#[contractimpl]` generates
// module-level items named after the functions, and both mocks have `init`.
mod mock_bonus_pool {
    use super::*;

    #[contract]
    pub struct MockBonusPool;

    #[contractimpl]
    impl MockBonusPool {
        pub fn init(env: Env, owner: Address, token: Address) {
            env.storage().instance().set(&symbol_short!("owner"), &owner);
            env.storage().instance().set(&symbol_short!("token"), &token);
        }

        pub fn owner(env: Env) -> Address {
            env.storage()
                .instance()
                .get(&symbol_short!("owner"))
                .unwrap()
        }

        pub fn transfer_ownership(env: Env, new_owner: Address) {
            Self::owner(env.clone()).require_auth();
            env.storage()
                .instance()
                .set(&symbol_short!("owner"), &new_owner);
        }

        pub fn withdraw(env: Env, to: Address, amount: i128) {
            Self::owner(env.clone()).require_auth();
            let token: Address = env
                .storage()
                .instance()
                .get(&symbol_short!("token"))
                .unwrap();
            token::Client::new(&env, &token).transfer(
                &env.current_contract_address(),
                &to,
                &amount,
            );
        }

        pub fn available(env: Env) -> i128 {
            let token: Address = env
                .storage()
                .instance()
                .get(&symbol_short!("token"))
                .unwrap();
            token::Client::new(&env, &token).balance(&env.current_contract_address())
        }
    }
}

pub use mock_bonus_pool::{MockBonusPool, MockBonusPoolClient};

// ── MockMarket ───────────────────────────────────────────────────────
//
// Stands in for the external liquidity market: keeps whatever assets were
// transferred to it and mints one LP token per deposit unit supplied.

mod mock_market {
    use super::*;

    #[contract]
    pub struct MockMarket;

    #[contractimpl]
    impl MockMarket {
        pub fn init(env: Env, lp_token: Address) {
            env.storage()
                .instance()
                .set(&symbol_short!("lp"), &lp_token);
        }

        pub fn lp_token(env: Env) -> Address {
            env.storage().instance().get(&symbol_short!("lp")).unwrap()
        }

        pub fn add_liquidity(
            env: Env,
            deposit_amount: i128,
            _bonus_amount: i128,
            to: Address,
        ) -> i128 {
            let lp = Self::lp_token(env.clone());
            token::StellarAssetClient::new(&env, &lp).mint(&to, &deposit_amount);
            deposit_amount
        }
    }
}

pub use mock_market::{MockMarket, MockMarketClient};

// ── Shared fixture ───────────────────────────────────────────────────

pub const ONE: i128 = 1_000_000_000_000_000_000;
pub const DAY: u64 = 86_400;

pub struct Fixture {
    pub env: Env,
    pub client: LiquidityLockClient<'static>,
    pub owner: Address,
    pub recipient: Address,
    pub deposit_token: token::Client<'static>,
    pub deposit_sac: token::StellarAssetClient<'static>,
    pub bonus_token: token::Client<'static>,
    pub bonus_sac: token::StellarAssetClient<'static>,
    pub pool: Address,
    pub market: Address,
}

pub fn create_token<'a>(
    env: &Env,
    admin: &Address,
) -> (token::Client<'a>, token::StellarAssetClient<'a>) {
    let addr = env.register_stellar_asset_contract_v2(admin.clone());
    (
        token::Client::new(env, &addr.address()),
        token::StellarAssetClient::new(env, &addr.address()),
    )
}

/// The reference parameters: min 1, max 100, ratio 1000, soft limit 1500,
/// hard limit 1e6 (all in whole deposit units / bonus-equivalent units),
/// 30-day cliff, 335-day duration, 1-day interval, linear 2-year staking.
pub fn default_config(fx: &Fixture) -> LockConfig {
    LockConfig {
        deposit_token: fx.deposit_token.address.clone(),
        bonus_token: fx.bonus_token.address.clone(),
        bonus_pool: fx.pool.clone(),
        market: fx.market.clone(),
        recipient: fx.recipient.clone(),
        min_deposit: ONE,
        max_deposit: 100 * ONE,
        soft_limit: 1_500 * ONE,
        hard_limit: 1_000_000 * ONE,
        ratio: 1000,
        due_date: 0,
        schedule: Schedule {
            is_valid: true,
            cliff: 30 * DAY,
            duration: 335 * DAY,
            interval: DAY,
        },
        staking: StakingConfig {
            duration: 730 * DAY,
            is_linear: true,
            total_reward: 100 * ONE,
        },
    }
}

/// Register the lock and every collaborator, without calling `init`.
pub fn fixture() -> Fixture {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let recipient = Address::generate(&env);
    let token_admin = Address::generate(&env);

    let (deposit_token, deposit_sac) = create_token(&env, &token_admin);
    let (bonus_token, bonus_sac) = create_token(&env, &token_admin);

    let contract_id = env.register(LiquidityLock, ());
    let client = LiquidityLockClient::new(&env, &contract_id);

    let pool = env.register(MockBonusPool, ());
    MockBonusPoolClient::new(&env, &pool).init(&owner, &bonus_token.address);

    let market = env.register(MockMarket, ());
    // The market mints LP tokens, so it administers the LP asset.
    let lp = env.register_stellar_asset_contract_v2(market.clone());
    MockMarketClient::new(&env, &market).init(&lp.address());

    Fixture {
        env,
        client,
        owner,
        recipient,
        deposit_token,
        deposit_sac,
        bonus_token,
        bonus_sac,
        pool,
        market,
    }
}

/// Fixture with `init` already run under the default config.
pub fn initialized() -> Fixture {
    let fx = fixture();
    fx.client.init(&fx.owner, &default_config(&fx));
    fx
}

/// Mint `amount` deposit tokens to a fresh depositor address.
pub fn depositor_with(fx: &Fixture, amount: i128) -> Address {
    let depositor = Address::generate(&fx.env);
    fx.deposit_sac.mint(&depositor, &amount);
    depositor
}

/// Hand the bonus pool to the lock and stock it with `supply` bonus tokens.
pub fn arm_pool(fx: &Fixture, supply: i128) {
    fx.bonus_sac.mint(&fx.pool, &supply);
    MockBonusPoolClient::new(&fx.env, &fx.pool)
        .transfer_ownership(&fx.client.address);
}

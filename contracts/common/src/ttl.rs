use soroban_sdk::{Env, IntoVal, Val};

// ── TTL policy ───────────────────────────────────────────────────────────────

/// Bump once the remaining TTL drops below ~30 days of ledgers.
pub const TTL_THRESHOLD: u32 = 518_400;
/// Extend to ~60 days of ledgers.
pub const TTL_EXTEND_TO: u32 = 1_036_800;

/// Extends the TTL of the contract instance (and every instance key with it).
pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Extends the TTL of a single persistent entry.
pub fn extend_persistent<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

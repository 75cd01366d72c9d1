/// Rule constants shared by scoring and eligibility.
///
/// All values are fixed by the game's rules; nothing here is tunable at
/// runtime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RulesConfig;

impl RulesConfig {
    // ===== level bounds =====
    pub const MIN_LEVEL: u8 = 1;
    pub const MAX_LEVEL: u8 = 3;

    // ===== damage =====
    /// Flat damage every Standard move starts with.
    pub const STANDARD_BASE_DAMAGE: i32 = 1;
    /// Damage a Standard move gains per level.
    pub const STANDARD_DAMAGE_PER_LEVEL: i32 = 2;
    /// Extra damage a Combo move gets on top of its level.
    pub const COMBO_DAMAGE_BONUS: i32 = 1;

    // ===== experience =====
    pub const XP_PER_LEVEL: i32 = 2;
    /// Experience charged per Damage tag on a Standard move.
    pub const XP_PER_DAMAGE_TAG: i32 = 2;
    pub const FINISHING_BASE_XP: i32 = 6;
    pub const COMBO_BASE_XP: i32 = 8;

    // ===== tag thresholds (Standard moves) =====
    /// Damage tags stop being offered once cooldown exceeds this.
    pub const DAMAGE_TAG_MAX_COOLDOWN: i32 = 3;
    /// Cooldown Reduction needs at least this much cooldown to reduce.
    pub const COOLDOWN_REDUCTION_MIN_COOLDOWN: i32 = 1;
    /// Cooldown Reduction also costs a point of damage.
    pub const COOLDOWN_REDUCTION_MIN_DAMAGE: i32 = 1;

    // ===== tag thresholds (Finishing / Combo moves) =====
    /// Finishing and Combo moves take tags only while damage stays at or
    /// above this.
    pub const SPECIAL_MOVE_MIN_DAMAGE: i32 = 2;
}

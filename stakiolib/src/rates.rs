//! Тарифная сетка: диапазоны суммы -> годовая ставка (APY, %).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Диапазон суммы [min, max] с фиксированной ставкой. Границы включительно.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateSlab {
    pub min: Decimal,
    pub max: Decimal,
    pub apy: Decimal,
}

/// Сетка непрерывна и не пересекается; суммы ниже 15 ставки не имеют.
pub const INTEREST_SLABS: [RateSlab; 9] = [
    RateSlab { min: dec!(15), max: dec!(19), apy: dec!(15) },
    RateSlab { min: dec!(20), max: dec!(29), apy: dec!(16) },
    RateSlab { min: dec!(30), max: dec!(39), apy: dec!(17) },
    RateSlab { min: dec!(40), max: dec!(49), apy: dec!(18) },
    RateSlab { min: dec!(50), max: dec!(59), apy: dec!(19) },
    RateSlab { min: dec!(60), max: dec!(69), apy: dec!(20) },
    RateSlab { min: dec!(70), max: dec!(79), apy: dec!(21) },
    RateSlab { min: dec!(80), max: dec!(89), apy: dec!(22) },
    RateSlab { min: dec!(90), max: dec!(100), apy: dec!(23) },
];

/// Ставка по сумме. Ниже 15 — 0 (не участвует в стейкинге);
/// выше последнего диапазона — ставка последнего (clamp вверх).
pub fn resolve_apy(amount: Decimal) -> Decimal {
    if amount < dec!(15) {
        return Decimal::ZERO;
    }
    INTEREST_SLABS
        .iter()
        .find(|slab| amount >= slab.min && amount <= slab.max)
        .map(|slab| slab.apy)
        .unwrap_or(INTEREST_SLABS[INTEREST_SLABS.len() - 1].apy)
}

/// Название тарифа для отображения (как в калькуляторе дашборда).
pub fn tier_name(amount: Decimal) -> &'static str {
    if amount < dec!(15) {
        "Below Minimum"
    } else if amount <= dec!(19) {
        "Basic Tier"
    } else if amount <= dec!(29) {
        "Silver Tier"
    } else if amount <= dec!(39) {
        "Gold Tier"
    } else if amount <= dec!(49) {
        "Platinum Tier"
    } else if amount <= dec!(59) {
        "Diamond Tier"
    } else if amount <= dec!(69) {
        "Elite Tier"
    } else if amount <= dec!(79) {
        "Premium Tier"
    } else if amount <= dec!(89) {
        "Executive Tier"
    } else {
        "VIP Tier"
    }
}

//! Леджер-движок: расчёт доходности и переходы состояния счёта.
//!
//! Каждая операция принимает текущий `AccountState` и возвращает новый
//! снимок; при отказе предусловия вход не меняется (атомарность по
//! построению). Часы передаёт вызывающая сторона.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::{
    error::{Result, StakioError},
    model::{AccountState, Blockchain, Returns, StakingHistoryEntry, Transaction, TxStatus, TxType},
    rates::resolve_apy,
};

pub const MIN_STAKE: Decimal = dec!(15);
pub const MIN_WITHDRAWAL: Decimal = dec!(10);
pub const DAILY_WITHDRAWAL_LIMIT: Decimal = dec!(1000);
/// Комиссия вывода: применяется к выплате в сети, не к балансу (см. DESIGN.md).
pub const WITHDRAWAL_FEE: Decimal = dec!(1);

/// 365 дней * 100 (ставка в процентах): общий знаменатель формул дохода.
const YEAR_BASIS: Decimal = dec!(36500);
const DAYS_PER_MONTH: Decimal = dec!(30);

/// Дневной, месячный (условные 30 дней) и суммарный доход за срок.
///
/// Умножение до деления, чтобы «круглые» случаи сетки оставались точными
/// в Decimal: 50 * 19 * 365 / 36500 = 9.5 ровно.
pub fn compute_returns(amount: Decimal, apy_percent: Decimal, days: u32) -> Returns {
    let per_year = amount * apy_percent;
    Returns {
        daily: per_year / YEAR_BASIS,
        monthly: per_year * DAYS_PER_MONTH / YEAR_BASIS,
        total: per_year * Decimal::from(days) / YEAR_BASIS,
    }
}

/// Стейкинг: списывает сумму с баланса, фиксирует контракт, добавляет
/// транзакцию и запись истории. Проценты на этом шаге не начисляются.
pub fn apply_stake(
    state: &AccountState,
    amount: Decimal,
    days: u32,
    now: DateTime<Utc>,
) -> Result<(AccountState, StakingHistoryEntry)> {
    validate_amount(amount)?;
    if days == 0 {
        return Err(StakioError::InvalidInput("days must be at least 1".into()));
    }
    if amount < MIN_STAKE {
        return Err(StakioError::BelowMinimum { min: MIN_STAKE });
    }
    if amount > state.wallet_balance {
        return Err(StakioError::InsufficientBalance);
    }
    let apy = resolve_apy(amount);
    // ниже минимума уже отсечено, но проверки обязаны оставаться согласованными
    if apy.is_zero() {
        return Err(StakioError::IneligibleRate);
    }

    let mut next = state.clone();
    next.wallet_balance -= amount;
    next.total_invested += amount;
    next.active_contracts += 1;
    let ts = next_timestamp(state, now);
    prepend_tx(&mut next, TxType::Deposit, amount, None, ts);

    let entry = StakingHistoryEntry {
        date: ts,
        amount,
        days,
        interest_rate: apy,
    };
    Ok((next, entry))
}

/// Пополнение кошелька из выбранной сети. Минимум проверяет вызывающий.
pub fn apply_recharge(
    state: &AccountState,
    amount: Decimal,
    blockchain: Blockchain,
    now: DateTime<Utc>,
) -> Result<AccountState> {
    validate_amount(amount)?;

    let mut next = state.clone();
    next.wallet_balance += amount;
    let ts = next_timestamp(state, now);
    prepend_tx(&mut next, TxType::Deposit, amount, Some(blockchain), ts);
    Ok(next)
}

/// Вывод средств: минимум 10, в пределах баланса, не более 1000 за
/// календарные сутки (UTC) суммарно.
pub fn apply_withdrawal(
    state: &AccountState,
    amount: Decimal,
    blockchain: Blockchain,
    now: DateTime<Utc>,
) -> Result<AccountState> {
    validate_amount(amount)?;
    if amount < MIN_WITHDRAWAL {
        return Err(StakioError::BelowMinimum { min: MIN_WITHDRAWAL });
    }
    if amount > state.wallet_balance {
        return Err(StakioError::InsufficientBalance);
    }

    let ts = next_timestamp(state, now);
    let today = ts.date_naive();
    let already_out = if state.withdrawn_on == Some(today) {
        state.withdrawn_today
    } else {
        Decimal::ZERO
    };
    if already_out + amount > DAILY_WITHDRAWAL_LIMIT {
        return Err(StakioError::DailyLimitExceeded {
            limit: DAILY_WITHDRAWAL_LIMIT,
        });
    }

    let mut next = state.clone();
    next.wallet_balance -= amount;
    next.withdrawn_today = already_out + amount;
    next.withdrawn_on = Some(today);
    prepend_tx(&mut next, TxType::Withdrawal, amount, Some(blockchain), ts);
    Ok(next)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Amount,
    Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

/// Копия списка транзакций, отсортированная по полю. Сортировка стабильная:
/// равные ключи сохраняют исходный порядок.
pub fn sorted_transactions(
    transactions: &[Transaction],
    field: SortField,
    dir: SortDir,
) -> Vec<Transaction> {
    let mut out = transactions.to_vec();
    out.sort_by(|a, b| {
        let ord = match field {
            SortField::Amount => a.amount.cmp(&b.amount),
            SortField::Timestamp => a.timestamp.cmp(&b.timestamp),
        };
        match dir {
            SortDir::Asc => ord,
            SortDir::Desc => ord.reverse(),
        }
    });
    out
}

fn validate_amount(amount: Decimal) -> Result<()> {
    if amount <= Decimal::ZERO {
        return Err(StakioError::InvalidInput(format!(
            "amount must be positive, got {amount}"
        )));
    }
    Ok(())
}

/// Метки времени строго возрастают: если часы не ушли вперёд от последней
/// транзакции, берём её метку + 1 мс. Заодно уникален id (от миллисекунд).
fn next_timestamp(state: &AccountState, now: DateTime<Utc>) -> DateTime<Utc> {
    match state.transactions.first() {
        Some(latest) if now <= latest.timestamp => latest.timestamp + Duration::milliseconds(1),
        _ => now,
    }
}

fn prepend_tx(
    state: &mut AccountState,
    tx_type: TxType,
    amount: Decimal,
    blockchain: Option<Blockchain>,
    ts: DateTime<Utc>,
) {
    state.transactions.insert(
        0,
        Transaction {
            id: format!("tx-{}", ts.timestamp_millis()),
            tx_type,
            amount,
            timestamp: ts,
            blockchain,
            status: TxStatus::Completed,
        },
    );
}

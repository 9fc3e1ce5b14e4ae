use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use stakiolib::{
    engine::{apply_recharge, apply_stake, apply_withdrawal},
    error::StakioError,
    model::{AccountState, Blockchain, TxStatus, TxType},
};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

#[test]
fn stake_moves_principal_and_records_both_entries() {
    let state = AccountState::sample();
    let (next, entry) = apply_stake(&state, dec!(50), 365, now()).expect("stake");

    assert_eq!(next.wallet_balance, dec!(950.25));
    assert_eq!(next.total_invested, dec!(550.00));
    assert_eq!(next.active_contracts, state.active_contracts + 1);
    assert_eq!(next.transactions.len(), state.transactions.len() + 1);

    // транзакция — движение принципала, без сети и без процентов
    let tx = &next.transactions[0];
    assert_eq!(tx.tx_type, TxType::Deposit);
    assert_eq!(tx.amount, dec!(50));
    assert_eq!(tx.blockchain, None);
    assert_eq!(tx.status, TxStatus::Completed);

    assert_eq!(entry.amount, dec!(50));
    assert_eq!(entry.days, 365);
    assert_eq!(entry.interest_rate, dec!(19));
    assert_eq!(entry.date, tx.timestamp);

    // проценты при стейке не начисляются
    assert_eq!(next.total_earnings, state.total_earnings);
}

#[test]
fn stake_below_minimum_is_rejected_atomically() {
    let state = AccountState::sample();
    let before = state.clone();
    let err = apply_stake(&state, dec!(10), 30, now()).unwrap_err();
    assert!(matches!(err, StakioError::BelowMinimum { min } if min == dec!(15)));
    assert_eq!(state, before);
}

#[test]
fn stake_over_balance_is_rejected() {
    let mut state = AccountState::new("0xdemo");
    state.wallet_balance = dec!(40);
    let err = apply_stake(&state, dec!(50), 30, now()).unwrap_err();
    assert!(matches!(err, StakioError::InsufficientBalance));
    assert_eq!(state.transactions.len(), 0);
    assert_eq!(state.active_contracts, 0);
}

#[test]
fn stake_rejects_nonsense_input() {
    let state = AccountState::sample();
    assert!(matches!(
        apply_stake(&state, dec!(-5), 30, now()).unwrap_err(),
        StakioError::InvalidInput(_)
    ));
    assert!(matches!(
        apply_stake(&state, dec!(50), 0, now()).unwrap_err(),
        StakioError::InvalidInput(_)
    ));
}

#[test]
fn recharge_credits_balance_and_tags_network() {
    let state = AccountState::new("0xdemo");
    let next = apply_recharge(&state, dec!(200), Blockchain::Trc20, now()).expect("recharge");
    assert_eq!(next.wallet_balance, dec!(200));
    let tx = &next.transactions[0];
    assert_eq!(tx.tx_type, TxType::Deposit);
    assert_eq!(tx.blockchain, Some(Blockchain::Trc20));
    assert_eq!(tx.status, TxStatus::Completed);
    // пополнение не трогает инвестиции и контракты
    assert_eq!(next.total_invested, state.total_invested);
    assert_eq!(next.active_contracts, state.active_contracts);
}

#[test]
fn withdrawal_respects_floor_and_balance() {
    let state = AccountState::sample();
    assert!(matches!(
        apply_withdrawal(&state, dec!(5), Blockchain::Bep20, now()).unwrap_err(),
        StakioError::BelowMinimum { .. }
    ));
    assert!(matches!(
        apply_withdrawal(&state, dec!(2000), Blockchain::Bep20, now()).unwrap_err(),
        StakioError::InsufficientBalance
    ));

    let next = apply_withdrawal(&state, dec!(100), Blockchain::Ethereum, now()).expect("withdraw");
    assert_eq!(next.wallet_balance, dec!(900.25));
    assert_eq!(next.transactions[0].tx_type, TxType::Withdrawal);
    assert_eq!(next.transactions[0].blockchain, Some(Blockchain::Ethereum));
}

#[test]
fn withdrawal_daily_cap_accumulates_per_calendar_day() {
    let mut state = AccountState::new("0xdemo");
    state.wallet_balance = dec!(5000);

    let state = apply_withdrawal(&state, dec!(600), Blockchain::Bep20, now()).expect("first");
    assert_eq!(state.withdrawn_today, dec!(600));

    // 600 + 500 > 1000 в те же сутки
    let later = Utc.with_ymd_and_hms(2025, 6, 1, 18, 0, 0).unwrap();
    let err = apply_withdrawal(&state, dec!(500), Blockchain::Bep20, later).unwrap_err();
    assert!(matches!(err, StakioError::DailyLimitExceeded { limit } if limit == dec!(1000)));

    // в пределах остатка лимита — проходит
    let ok = apply_withdrawal(&state, dec!(400), Blockchain::Bep20, later).expect("second");
    assert_eq!(ok.withdrawn_today, dec!(1000));

    // следующие календарные сутки: накопитель сброшен
    let next_day = Utc.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).unwrap();
    let fresh = apply_withdrawal(&ok, dec!(900), Blockchain::Bep20, next_day).expect("next day");
    assert_eq!(fresh.withdrawn_today, dec!(900));
    assert_eq!(fresh.withdrawn_on, Some(next_day.date_naive()));
}

#[test]
fn timestamps_are_strictly_monotonic_even_with_frozen_clock() {
    let state = AccountState::new("0xdemo");
    let frozen = now();
    let s1 = apply_recharge(&state, dec!(100), Blockchain::Bep20, frozen).expect("r1");
    let s2 = apply_recharge(&s1, dec!(100), Blockchain::Bep20, frozen).expect("r2");
    let (s3, _) = apply_stake(&s2, dec!(50), 30, frozen).expect("stake");

    let t: Vec<_> = s3.transactions.iter().map(|tx| tx.timestamp).collect();
    // список хранится от новых к старым
    assert!(t[0] > t[1] && t[1] > t[2]);

    let ids: Vec<_> = s3.transactions.iter().map(|tx| tx.id.clone()).collect();
    assert_eq!(
        ids.len(),
        ids.iter().collect::<std::collections::HashSet<_>>().len()
    );
}

#[test]
fn wallet_balance_never_goes_negative() {
    let mut state = AccountState::new("0xdemo");
    state.wallet_balance = dec!(20);
    let (after_stake, _) = apply_stake(&state, dec!(20), 30, now()).expect("stake all");
    assert_eq!(after_stake.wallet_balance, Decimal::ZERO);
    assert!(matches!(
        apply_withdrawal(&after_stake, dec!(10), Blockchain::Bep20, now()).unwrap_err(),
        StakioError::InsufficientBalance
    ));
}

//! Доменные модели: состояние счёта, транзакции, история стейкинга.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Blockchain {
    #[serde(rename = "BEP20")]
    Bep20,
    #[serde(rename = "TRC20")]
    Trc20,
    Ethereum,
}

impl Blockchain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Blockchain::Bep20 => "BEP20",
            Blockchain::Trc20 => "TRC20",
            Blockchain::Ethereum => "Ethereum",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TxType {
    Deposit,
    Withdrawal,
    Interest,
}

impl TxType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxType::Deposit => "deposit",
            TxType::Withdrawal => "withdrawal",
            TxType::Interest => "interest",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TxStatus {
    Completed,
    Pending,
    Failed,
}

impl TxStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxStatus::Completed => "completed",
            TxStatus::Pending => "pending",
            TxStatus::Failed => "failed",
        }
    }
}

/// Запись леджера. После создания не изменяется.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub tx_type: TxType,
    pub amount: Decimal,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub blockchain: Option<Blockchain>,
    pub status: TxStatus,
}

/// Запись истории стейкинга: создаётся один раз на успешный stake.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StakingHistoryEntry {
    pub date: DateTime<Utc>,
    pub amount: Decimal,
    pub days: u32,
    #[serde(rename = "interest")]
    pub interest_rate: Decimal,
}

/// Производные метрики доходности для отображения.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Returns {
    pub daily: Decimal,
    pub monthly: Decimal,
    pub total: Decimal,
}

/// Единственный изменяемый корень состояния. Инвариант: wallet_balance >= 0.
///
/// withdrawn_today/withdrawn_on — накопитель дневного лимита вывода,
/// сбрасывается при смене календарной даты (UTC).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountState {
    pub wallet_address: String,
    pub wallet_balance: Decimal,
    pub total_invested: Decimal,
    pub total_earnings: Decimal,
    pub active_contracts: u32,
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub withdrawn_today: Decimal,
    #[serde(default)]
    pub withdrawn_on: Option<NaiveDate>,
}

impl AccountState {
    pub fn new(wallet_address: impl Into<String>) -> Self {
        AccountState {
            wallet_address: wallet_address.into(),
            wallet_balance: Decimal::ZERO,
            total_invested: Decimal::ZERO,
            total_earnings: Decimal::ZERO,
            active_contracts: 0,
            transactions: Vec::new(),
            withdrawn_today: Decimal::ZERO,
            withdrawn_on: None,
        }
    }

    /// Демонстрационный снимок счёта (сид для первого запуска CLI).
    pub fn sample() -> Self {
        let ts = |s: &str| {
            DateTime::parse_from_rfc3339(s)
                .expect("sample timestamp")
                .with_timezone(&Utc)
        };
        AccountState {
            wallet_address: "0x7F5aB23C3d79164F367857DF58a5B5d4aa54d9".to_string(),
            wallet_balance: dec!(1000.25),
            total_invested: dec!(500.00),
            total_earnings: dec!(125.75),
            active_contracts: 3,
            transactions: vec![
                Transaction {
                    id: "tx5".into(),
                    tx_type: TxType::Withdrawal,
                    amount: dec!(30.00),
                    timestamp: ts("2025-05-17T11:20:00Z"),
                    blockchain: Some(Blockchain::Bep20),
                    status: TxStatus::Completed,
                },
                Transaction {
                    id: "tx4".into(),
                    tx_type: TxType::Interest,
                    amount: dec!(5.25),
                    timestamp: ts("2025-05-17T00:00:00Z"),
                    blockchain: None,
                    status: TxStatus::Completed,
                },
                Transaction {
                    id: "tx3".into(),
                    tx_type: TxType::Deposit,
                    amount: dec!(250.00),
                    timestamp: ts("2025-05-16T14:45:00Z"),
                    blockchain: Some(Blockchain::Trc20),
                    status: TxStatus::Completed,
                },
                Transaction {
                    id: "tx2".into(),
                    tx_type: TxType::Interest,
                    amount: dec!(2.50),
                    timestamp: ts("2025-05-16T00:00:00Z"),
                    blockchain: None,
                    status: TxStatus::Completed,
                },
                Transaction {
                    id: "tx1".into(),
                    tx_type: TxType::Deposit,
                    amount: dec!(100.00),
                    timestamp: ts("2025-05-15T10:30:00Z"),
                    blockchain: Some(Blockchain::Bep20),
                    status: TxStatus::Completed,
                },
            ],
            withdrawn_today: Decimal::ZERO,
            withdrawn_on: None,
        }
    }
}

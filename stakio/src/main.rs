use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use stakiolib::{
    engine::{
        apply_recharge, apply_stake, apply_withdrawal, compute_returns, sorted_transactions,
        SortDir, SortField, WITHDRAWAL_FEE,
    },
    error::{Result, StakioError},
    model::{AccountState, Blockchain},
    rates::{resolve_apy, tier_name},
    report::{write_history_csv, write_transactions_csv},
    store::{HistoryStore, StateStore},
};
use std::fs::File;
use std::io::{self, BufWriter, Write};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Net {
    Bep20,
    Trc20,
    Ethereum,
}

impl From<Net> for Blockchain {
    fn from(n: Net) -> Self {
        match n {
            Net::Bep20 => Blockchain::Bep20,
            Net::Trc20 => Blockchain::Trc20,
            Net::Ethereum => Blockchain::Ethereum,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum SortKey {
    Amount,
    Timestamp,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Order {
    Asc,
    Desc,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Report {
    Transactions,
    History,
}

#[derive(Parser, Debug)]
#[command(name = "stakio", version, about = "Стейкинг-леджер (демо, без реальных транзакций)")]
struct Cli {
    /// Файл снимка счёта
    #[arg(long = "state", default_value = "stakio-state.json")]
    state: String,

    /// Файл истории стейкинга
    #[arg(long = "history", default_value = "staking-history.json")]
    history: String,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Калькулятор доходности (без изменения состояния)
    Calc {
        #[arg(long)]
        amount: Decimal,
        #[arg(long, default_value_t = 30)]
        days: u32,
    },
    /// Застейкать сумму на срок
    Stake {
        #[arg(long)]
        amount: Decimal,
        #[arg(long)]
        days: u32,
    },
    /// Пополнить кошелёк
    Recharge {
        #[arg(long)]
        amount: Decimal,
        #[arg(long, value_enum)]
        network: Net,
    },
    /// Вывести средства
    Withdraw {
        #[arg(long)]
        amount: Decimal,
        #[arg(long, value_enum)]
        network: Net,
        #[arg(long)]
        address: String,
    },
    /// Показать транзакции
    Transactions {
        #[arg(long = "sort-by", value_enum, default_value = "timestamp")]
        sort_by: SortKey,
        #[arg(long, value_enum, default_value = "desc")]
        order: Order,
    },
    /// Показать историю стейкинга
    History,
    /// Выгрузить CSV (stdout по умолчанию)
    Export {
        #[arg(long, value_enum)]
        what: Report,
        #[arg(short = 'o', long = "output")]
        output: Option<String>,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let states = StateStore::new(&cli.state);
    let histories = HistoryStore::new(&cli.history);
    let state = states.load_or(AccountState::sample)?;

    match cli.cmd {
        Cmd::Calc { amount, days } => {
            let apy = resolve_apy(amount);
            let ret = compute_returns(amount, apy, days);
            println!("APY Rate: {:.2}%", apy);
            println!("Daily Income: ${:.4}", ret.daily);
            println!("Monthly Income: ${:.2}", ret.monthly);
            println!("Total Return ({days} days): ${:.2}", ret.total);
            println!("Current tier: {}", tier_name(amount));
        }
        Cmd::Stake { amount, days } => {
            let (next, entry) = apply_stake(&state, amount, days, Utc::now())?;
            let ret = compute_returns(amount, entry.interest_rate, days);
            let mut history = histories.load()?;
            history.insert(0, entry);
            states.save(&next)?;
            histories.save(&history)?;
            println!(
                "Successfully staked {amount} USDT for {days} days. Estimated return: ${:.2}",
                ret.total
            );
            println!("Wallet balance: {} USDT", next.wallet_balance);
        }
        Cmd::Recharge { amount, network } => {
            // минимум пополнения: правило формы, движок проверяет только > 0
            if amount < dec!(10) {
                return Err(StakioError::BelowMinimum { min: dec!(10) });
            }
            let next = apply_recharge(&state, amount, network.into(), Utc::now())?;
            states.save(&next)?;
            println!("Successfully recharged {amount} USDT");
            println!("Wallet balance: {} USDT", next.wallet_balance);
        }
        Cmd::Withdraw {
            amount,
            network,
            address,
        } => {
            let net: Blockchain = network.into();
            let next = apply_withdrawal(&state, amount, net, Utc::now())?;
            states.save(&next)?;
            println!("Withdrawal request submitted successfully");
            println!(
                "Payout after {WITHDRAWAL_FEE} USDT fee: {} USDT to {address} via {}",
                amount - WITHDRAWAL_FEE,
                net.as_str()
            );
            println!("Wallet balance: {} USDT", next.wallet_balance);
        }
        Cmd::Transactions { sort_by, order } => {
            let field = match sort_by {
                SortKey::Amount => SortField::Amount,
                SortKey::Timestamp => SortField::Timestamp,
            };
            let dir = match order {
                Order::Asc => SortDir::Asc,
                Order::Desc => SortDir::Desc,
            };
            let txs = sorted_transactions(&state.transactions, field, dir);
            if txs.is_empty() {
                println!("No transactions found");
            }
            for tx in txs {
                println!(
                    "{}  {:<10}  {:>12} USDT  {:<8}  {}",
                    tx.timestamp.format("%Y-%m-%d %H:%M"),
                    tx.tx_type.as_str(),
                    format!("{:.2}", tx.amount),
                    tx.blockchain.map(|b| b.as_str()).unwrap_or("-"),
                    tx.status.as_str()
                );
            }
        }
        Cmd::History => {
            let history = histories.load()?;
            if history.is_empty() {
                println!("No staking history yet");
            }
            for e in history {
                println!(
                    "{}  ${:.2}  {} days  {}%",
                    e.date.format("%Y-%m-%d"),
                    e.amount,
                    e.days,
                    e.interest_rate
                );
            }
        }
        Cmd::Export { what, output } => {
            let mut w: Box<dyn Write> = match output {
                Some(path) => Box::new(BufWriter::new(File::create(path)?)),
                None => Box::new(io::stdout()),
            };
            match what {
                Report::Transactions => write_transactions_csv(&mut w, &state.transactions)?,
                Report::History => write_history_csv(&mut w, &histories.load()?)?,
            }
            w.flush()?;
        }
    }
    Ok(())
}

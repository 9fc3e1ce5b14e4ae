//! CSV-выгрузка леджера и истории стейкинга (текстовая замена таблиц UI).
//!
//! Заголовки транзакций: id,type,amount,blockchain,timestamp,status
//! Заголовки истории:    date,amount,days,interest_rate

use csv::WriterBuilder;
use std::io::Write;

use crate::{
    error::Result,
    model::{StakingHistoryEntry, Transaction},
};

#[derive(serde::Serialize)]
struct TxRow<'a> {
    id: &'a str,
    #[serde(rename = "type")]
    tx_type: &'a str,
    amount: String,
    blockchain: Option<&'a str>,
    timestamp: String,
    status: &'a str,
}

#[derive(serde::Serialize)]
struct HistoryRow {
    date: String,
    amount: String,
    days: u32,
    interest_rate: String,
}

pub fn write_transactions_csv<W: Write>(mut w: W, transactions: &[Transaction]) -> Result<()> {
    let mut wrt = WriterBuilder::new().from_writer(&mut w);
    for tx in transactions {
        wrt.serialize(TxRow {
            id: &tx.id,
            tx_type: tx.tx_type.as_str(),
            amount: tx.amount.to_string(),
            blockchain: tx.blockchain.map(|b| b.as_str()),
            timestamp: tx.timestamp.to_rfc3339(),
            status: tx.status.as_str(),
        })?;
    }
    wrt.flush()?;
    Ok(())
}

pub fn write_history_csv<W: Write>(mut w: W, entries: &[StakingHistoryEntry]) -> Result<()> {
    let mut wrt = WriterBuilder::new().from_writer(&mut w);
    for e in entries {
        wrt.serialize(HistoryRow {
            date: e.date.to_rfc3339(),
            amount: e.amount.to_string(),
            days: e.days,
            interest_rate: e.interest_rate.to_string(),
        })?;
    }
    wrt.flush()?;
    Ok(())
}

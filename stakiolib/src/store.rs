//! Сохранение истории и снимка счёта: JSON-файлы в духе localStorage.
//!
//! История стейкинга лежит отдельным списком под фиксированным ключом
//! `stakingHistory`; запись перезаписывает файл целиком (last-write-wins),
//! повторная запись того же снимка безопасна.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::{
    error::Result,
    model::{AccountState, StakingHistoryEntry},
};

pub const HISTORY_KEY: &str = "stakingHistory";

#[derive(Serialize, Deserialize)]
struct HistoryDoc {
    #[serde(rename = "stakingHistory")]
    entries: Vec<StakingHistoryEntry>,
}

/// Чтение списка истории из потока.
pub fn read_history<R: Read>(r: R) -> Result<Vec<StakingHistoryEntry>> {
    let doc: HistoryDoc = serde_json::from_reader(r)?;
    Ok(doc.entries)
}

/// Запись списка истории в поток.
pub fn write_history<W: Write>(w: W, entries: &[StakingHistoryEntry]) -> Result<()> {
    let doc = HistoryDoc {
        entries: entries.to_vec(),
    };
    serde_json::to_writer_pretty(w, &doc)?;
    Ok(())
}

/// Файловое хранилище истории стейкинга.
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        HistoryStore { path: path.into() }
    }

    /// Нет файла — нет истории (пустой список, не ошибка).
    pub fn load(&self) -> Result<Vec<StakingHistoryEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        read_history(BufReader::new(File::open(&self.path)?))
    }

    pub fn save(&self, entries: &[StakingHistoryEntry]) -> Result<()> {
        let mut w = BufWriter::new(File::create(&self.path)?);
        write_history(&mut w, entries)?;
        w.flush()?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Чтение снимка счёта из потока.
pub fn read_state<R: Read>(r: R) -> Result<AccountState> {
    Ok(serde_json::from_reader(r)?)
}

/// Запись снимка счёта в поток.
pub fn write_state<W: Write>(w: W, state: &AccountState) -> Result<()> {
    serde_json::to_writer_pretty(w, state)?;
    Ok(())
}

/// Файловое хранилище снимка счёта (им владеет вызывающая сторона, не движок).
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        StateStore { path: path.into() }
    }

    /// Снимок из файла либо значение по умолчанию, если файла ещё нет.
    pub fn load_or(&self, default: impl FnOnce() -> AccountState) -> Result<AccountState> {
        if !self.path.exists() {
            return Ok(default());
        }
        read_state(BufReader::new(File::open(&self.path)?))
    }

    pub fn save(&self, state: &AccountState) -> Result<()> {
        let mut w = BufWriter::new(File::create(&self.path)?);
        write_state(&mut w, state)?;
        w.flush()?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

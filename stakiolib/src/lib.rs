//! stakiolib — ядро стейкинг-дашборда: тарифная сетка APY, расчёт доходности,
//! леджер операций (stake / recharge / withdraw) и сохранение истории.

pub mod error;
pub mod model;
pub mod rates;
pub mod engine;
pub mod store;
pub mod report;

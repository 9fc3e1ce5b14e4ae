use rust_decimal_macros::dec;
use stakiolib::{engine::compute_returns, rates::resolve_apy};

fn main() {
    // Пример: доходность для 100 USDT на 30 дней
    let amount = dec!(100);
    let days = 30;
    let apy = resolve_apy(amount);
    let r = compute_returns(amount, apy, days);
    println!("APY: {apy}%  daily: {:.4}  monthly: {:.2}  total({days}d): {:.2}", r.daily, r.monthly, r.total);
}

pub mod fund_flow;
pub mod units;

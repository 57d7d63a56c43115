pub mod allow_list;
pub mod metrics;
pub mod topup;

pub use allow_list::AllowList;
pub use metrics::{get_metrics, init_metrics};
pub use topup::TopupService;
